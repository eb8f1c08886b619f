//! Aircraft design data: component catalogs, selections, and aggregation.
//!
//! This module is organized into focused submodules:
//!
//! - [`components`] - Typed catalog records and the shared modifier block
//! - [`catalog`] - Compiled-in component tables and name lookup
//! - [`design`] - Design selections, resolution, and validation
//! - [`profile`] - Aggregation of a resolved design into numeric profiles
//!
//! # Example
//!
//! ```no_run
//! use warbird_lib::craft::{build_profile, DesignSelection};
//!
//! // Load a design selection and aggregate it
//! let selection = DesignSelection::from_path(std::path::Path::new("design.json")).unwrap();
//! let design = selection.resolve().unwrap();
//! let profile = build_profile(&design);
//!
//! println!("combat weight: {:.0} kg", profile.totals.combat_weight_kg);
//! ```

pub mod catalog;
pub mod components;
pub mod design;
pub mod profile;

pub use components::{
    Armament, Cooling, CrewSystem, Doctrine, Engine, Feature, FuelSystem, LandingGear, Modifiers,
    Propeller, Structure, Supercharger, Wing,
};
pub use design::{
    AircraftDesign, ArmamentMount, DesignSelection, MountedArmament, MAX_ENGINE_COUNT,
};
pub use profile::{
    build_profile, AerodynamicProfile, DesignProfile, DesignTotals, PropulsionProfile,
    SuperchargerRating, CREW_AND_EQUIPMENT_KG,
};
