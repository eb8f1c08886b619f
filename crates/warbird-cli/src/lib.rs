//! Warbird CLI library.
//!
//! This crate provides the terminal front end for the warbird design-study
//! calculator: catalog listings, performance reports and flight-envelope
//! sweeps rendered over `warbird-lib`.

pub mod commands;
pub mod output;
