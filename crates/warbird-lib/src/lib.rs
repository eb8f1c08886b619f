#![deny(warnings)]

//! Core library for the warbird design-study calculator.
//!
//! The crate splits into three layers:
//!
//! - [`atmosphere`] - the standard-atmosphere model every other model
//!   samples air properties from
//! - [`craft`] - component catalogs, design selection and resolution, and
//!   the frozen design profile the numeric core consumes
//! - [`perf`] - the numeric core: equilibrium-speed solver, climb and
//!   ceiling models, turn estimate, and report assembly
//!
//! Data flows one way: a [`DesignSelection`] resolves against the catalogs
//! into an [`AircraftDesign`], freezes into a [`DesignProfile`], and
//! [`evaluate`] turns that into a [`PerformanceReport`]. Every step is a
//! pure function over value types, so reports are deterministic and safe
//! to recompute on every edit.

pub mod atmosphere;
pub mod craft;
pub mod error;
pub mod perf;

pub use atmosphere::{air_properties_at, AirProperties};
pub use craft::{build_profile, AircraftDesign, DesignProfile, DesignSelection, DesignTotals};
pub use error::{Error, Result};
pub use perf::{
    evaluate, evaluate_profile, performance_at, sweep_envelope, EnvelopeRow, PerformancePoint,
    PerformanceReport, TurnPerformance,
};
