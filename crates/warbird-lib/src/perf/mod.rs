//! Performance evaluation for resolved aircraft designs.
//!
//! The models in this module turn a frozen [`DesignProfile`] into the
//! figures a designer actually compares:
//!
//! - [`performance_at`] solves the thrust/drag balance for level top speed
//! - [`climb_rate_at`] and [`find_service_ceiling`] cover the vertical axis
//! - [`turn_performance`] estimates the sustained turn
//! - [`evaluate`] folds all of the above into a [`PerformanceReport`]
//! - [`sweep_envelope`] tabulates the core models across altitude
//!
//! # Examples
//!
//! ```
//! use warbird_lib::craft::DesignSelection;
//! use warbird_lib::perf::evaluate;
//!
//! let raw = r#"{
//!     "doctrine": "general-purpose",
//!     "structure": "mixed-construction",
//!     "wing": "tapered",
//!     "landing_gear": "fixed",
//!     "engine": "radial-750",
//!     "propeller": "two-position",
//!     "cooling": "air-cooled",
//!     "fuel_system": "standard-tankage",
//!     "supercharger": "none"
//! }"#;
//! let selection: DesignSelection = serde_json::from_str(raw).unwrap();
//! let report = evaluate(&selection.resolve().unwrap());
//!
//! assert!(report.max_speed_sea_level_kmh > 200.0);
//! assert!(report.totals.combat_weight_kg > 0.0);
//! ```

pub mod climb;
pub mod constants;
pub mod power;
pub mod solver;
pub mod turn;

pub use climb::{climb_rate_at, find_service_ceiling};
pub use power::power_at_altitude;
pub use solver::{drag_force_newtons, performance_at, PerformancePoint};
pub use turn::{turn_performance, TurnPerformance};

use serde::Serialize;
use tracing::debug;

use crate::atmosphere::air_properties_at;
use crate::craft::design::AircraftDesign;
use crate::craft::profile::{build_profile, DesignProfile, DesignTotals};
use crate::perf::constants::{CEILING_CAP_NO_OXYGEN_M, CEILING_CAP_NO_PRESSURIZED_M};

/// Complete performance picture for one design.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    /// Name carried over from the design selection, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Weight, cost and reliability totals
    pub totals: DesignTotals,
    /// Altitude the rated-altitude figures are solved at (m)
    pub rated_altitude_m: f64,
    /// Raw force balance at sea level
    pub sea_level: PerformancePoint,
    /// Raw force balance at the rated altitude
    pub rated_altitude: PerformancePoint,
    /// Sea-level top speed including the speed modifier (km/h)
    pub max_speed_sea_level_kmh: f64,
    /// Rated-altitude top speed including the speed modifier (km/h)
    pub max_speed_rated_kmh: f64,
    /// Sea-level rate of climb (m/s)
    pub climb_rate_ms: f64,
    /// Service ceiling after modifiers and crew caps (m)
    pub service_ceiling_m: f64,
    /// Still-air range including the range modifier (km)
    pub range_km: f64,
    /// Sustained-turn figures
    pub turn: TurnPerformance,
}

/// One altitude row of a flight-envelope sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvelopeRow {
    /// Altitude of this row (m)
    pub altitude_m: f64,
    /// Air density at the row altitude (kg/m³)
    pub density_kg_m3: f64,
    /// Delivered power including the power modifier (hp)
    pub power_hp: f64,
    /// Equilibrium speed including the speed modifier (km/h)
    pub speed_kmh: f64,
    /// Rate of climb (m/s)
    pub climb_rate_ms: f64,
}

/// Evaluate a resolved design end to end.
///
/// Freezes the design into a [`DesignProfile`] and hands it to
/// [`evaluate_profile`], carrying the design's name onto the report.
pub fn evaluate(design: &AircraftDesign) -> PerformanceReport {
    let profile = build_profile(design);
    let mut report = evaluate_profile(&profile);
    report.name = design.name.clone();
    report
}

/// Assemble the performance report for a frozen profile.
///
/// Solves the force balance at sea level and at the supercharger's rated
/// altitude (sea level when unblown), then layers the presentation
/// modifiers on top: reported speeds carry `speed_mod`, the ceiling is
/// scaled by `ceiling_mod` and clamped by the crew-system caps, and range
/// scales `base_range_km` by `range_mod`. The turn estimate runs off the
/// rated-altitude point.
pub fn evaluate_profile(profile: &DesignProfile) -> PerformanceReport {
    let totals = profile.totals;
    let aero = profile.aero;
    let propulsion = profile.propulsion;
    let supercharger = propulsion.supercharger.as_ref();

    let rated_altitude_m = propulsion
        .supercharger
        .map_or(0.0, |rating| rating.rated_altitude_m);

    let sea_level = performance_at(
        0.0,
        totals.combat_weight_kg,
        propulsion.total_power_hp,
        propulsion.propeller_efficiency,
        &aero,
        supercharger,
    );
    let rated_altitude = performance_at(
        rated_altitude_m,
        totals.combat_weight_kg,
        propulsion.total_power_hp,
        propulsion.propeller_efficiency,
        &aero,
        supercharger,
    );

    let climb_rate_ms = climb_rate_at(
        0.0,
        totals.combat_weight_kg,
        propulsion.total_power_hp,
        propulsion.propeller_efficiency,
        &aero,
        supercharger,
    );

    let raw_ceiling_m = find_service_ceiling(
        totals.combat_weight_kg,
        propulsion.total_power_hp,
        propulsion.propeller_efficiency,
        &aero,
        supercharger,
    ) * aero.ceiling_mod;
    let service_ceiling_m = apply_crew_caps(
        raw_ceiling_m,
        profile.has_pressurized_cabin,
        profile.has_oxygen_system,
    );

    let range_km = profile.base_range_km * aero.range_mod;
    let turn = turn_performance(totals.combat_weight_kg, &aero, &rated_altitude);

    debug!(
        combat_weight_kg = totals.combat_weight_kg,
        max_speed_rated_kmh = rated_altitude.speed_kmh * aero.speed_mod,
        service_ceiling_m,
        "performance report assembled"
    );

    PerformanceReport {
        name: None,
        totals,
        rated_altitude_m,
        sea_level,
        rated_altitude,
        max_speed_sea_level_kmh: sea_level.speed_kmh * aero.speed_mod,
        max_speed_rated_kmh: rated_altitude.speed_kmh * aero.speed_mod,
        climb_rate_ms,
        service_ceiling_m,
        range_km,
        turn,
    }
}

/// Tabulate speed, power and climb across altitude.
///
/// Rows run from sea level to `max_altitude_m` in `step_m` increments
/// (floored at 1 m). Reported speed and power carry the same modifiers the
/// report applies.
pub fn sweep_envelope(
    profile: &DesignProfile,
    max_altitude_m: f64,
    step_m: f64,
) -> Vec<EnvelopeRow> {
    let step = step_m.max(1.0);
    let propulsion = profile.propulsion;
    let supercharger = propulsion.supercharger.as_ref();
    let aero = profile.aero;
    let weight = profile.totals.combat_weight_kg;

    let steps = (max_altitude_m / step) as usize;
    let mut rows = Vec::with_capacity(steps + 1);
    for index in 0..=steps {
        let altitude_m = index as f64 * step;
        let air = air_properties_at(altitude_m);
        let power_hp = power_at_altitude(propulsion.total_power_hp, altitude_m, supercharger)
            * aero.power_mod;
        let point = performance_at(
            altitude_m,
            weight,
            propulsion.total_power_hp,
            propulsion.propeller_efficiency,
            &aero,
            supercharger,
        );
        let climb_rate_ms = climb_rate_at(
            altitude_m,
            weight,
            propulsion.total_power_hp,
            propulsion.propeller_efficiency,
            &aero,
            supercharger,
        );

        rows.push(EnvelopeRow {
            altitude_m,
            density_kg_m3: air.density_kg_m3,
            power_hp,
            speed_kmh: point.speed_kmh * aero.speed_mod,
            climb_rate_ms,
        });
    }

    rows
}

fn apply_crew_caps(ceiling_m: f64, has_pressurized_cabin: bool, has_oxygen_system: bool) -> f64 {
    let mut capped = ceiling_m;
    if !has_pressurized_cabin {
        capped = capped.min(CEILING_CAP_NO_PRESSURIZED_M);
    }
    if !has_oxygen_system {
        capped = capped.min(CEILING_CAP_NO_OXYGEN_M);
    }
    capped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::craft::profile::{AerodynamicProfile, PropulsionProfile, SuperchargerRating};
    use crate::craft::DesignSelection;

    fn base_profile() -> DesignProfile {
        DesignProfile {
            totals: DesignTotals {
                combat_weight_kg: 2500.0,
                cost: 40.0,
                reliability: 0.9,
            },
            aero: AerodynamicProfile {
                wing_area_m2: 18.0,
                cl_max: 1.4,
                cd_0: 0.025,
                aspect_ratio: 6.0,
                oswald_efficiency: 0.8,
                drag_mod: 1.0,
                power_mod: 1.0,
                speed_mod: 1.0,
                range_mod: 1.0,
                ceiling_mod: 1.0,
                maneuverability_mod: 1.0,
            },
            propulsion: PropulsionProfile {
                total_power_hp: 1200.0,
                propeller_efficiency: 0.88,
                supercharger: None,
            },
            base_range_km: 800.0,
            has_oxygen_system: true,
            has_pressurized_cabin: true,
        }
    }

    #[test]
    fn reported_speeds_carry_the_speed_modifier() {
        let mut profile = base_profile();
        profile.aero.speed_mod = 1.1;
        let report = evaluate_profile(&profile);

        let expected = report.sea_level.speed_kmh * 1.1;
        assert!((report.max_speed_sea_level_kmh - expected).abs() < 1e-9);
        // The underlying point keeps the raw solver speed
        assert!(report.sea_level.speed_kmh < report.max_speed_sea_level_kmh);
    }

    #[test]
    fn unblown_designs_rate_at_sea_level() {
        let report = evaluate_profile(&base_profile());

        assert_eq!(report.rated_altitude_m, 0.0);
        assert_eq!(report.sea_level, report.rated_altitude);
    }

    #[test]
    fn supercharged_designs_rate_at_the_blower_altitude() {
        let mut profile = base_profile();
        profile.propulsion.supercharger = Some(SuperchargerRating {
            rated_altitude_m: 5500.0,
        });
        let report = evaluate_profile(&profile);

        assert_eq!(report.rated_altitude_m, 5500.0);
        assert_eq!(report.rated_altitude.altitude_m, 5500.0);
        assert!(report.max_speed_rated_kmh > report.max_speed_sea_level_kmh);
    }

    #[test]
    fn ceiling_caps_follow_crew_systems() {
        // The 1200 hp reference design climbs through the whole sweep, so
        // the raw ceiling is 15000 m and only the caps differentiate
        let mut profile = base_profile();

        profile.has_oxygen_system = false;
        profile.has_pressurized_cabin = false;
        assert_eq!(evaluate_profile(&profile).service_ceiling_m, 5000.0);

        profile.has_oxygen_system = true;
        assert_eq!(evaluate_profile(&profile).service_ceiling_m, 10000.0);

        profile.has_pressurized_cabin = true;
        assert_eq!(evaluate_profile(&profile).service_ceiling_m, 15000.0);

        // A cabin without oxygen still hits the oxygen cap
        profile.has_oxygen_system = false;
        assert_eq!(evaluate_profile(&profile).service_ceiling_m, 5000.0);
    }

    #[test]
    fn ceiling_modifier_applies_before_the_caps() {
        let mut profile = base_profile();
        profile.aero.ceiling_mod = 1.05;
        let uncapped = evaluate_profile(&profile);
        assert!((uncapped.service_ceiling_m - 15750.0).abs() < 1e-6);

        profile.has_pressurized_cabin = false;
        let capped = evaluate_profile(&profile);
        assert_eq!(capped.service_ceiling_m, 10000.0);
    }

    #[test]
    fn range_scales_with_the_range_modifier() {
        let mut profile = base_profile();
        profile.aero.range_mod = 0.92;
        let report = evaluate_profile(&profile);

        assert!((report.range_km - 736.0).abs() < 1e-9);
    }

    #[test]
    fn turn_runs_off_the_rated_altitude_point() {
        let mut profile = base_profile();
        profile.propulsion.supercharger = Some(SuperchargerRating {
            rated_altitude_m: 5500.0,
        });
        let report = evaluate_profile(&profile);

        let expected = report.rated_altitude.v_ms * 0.8;
        assert!((report.turn.turn_speed_ms - expected).abs() < 1e-12);
    }

    #[test]
    fn evaluate_carries_the_design_name() {
        let raw = r#"{
            "name": "Sparrow",
            "doctrine": "general-purpose",
            "structure": "mixed-construction",
            "wing": "tapered",
            "landing_gear": "fixed",
            "engine": "radial-750",
            "propeller": "two-position",
            "cooling": "air-cooled",
            "fuel_system": "standard-tankage",
            "supercharger": "none"
        }"#;
        let selection: DesignSelection = serde_json::from_str(raw).unwrap();
        let report = evaluate(&selection.resolve().unwrap());

        assert_eq!(report.name.as_deref(), Some("Sparrow"));
        assert_eq!(report.totals.combat_weight_kg, 1940.0);
    }

    #[test]
    fn envelope_rows_step_through_the_requested_band() {
        let rows = sweep_envelope(&base_profile(), 2000.0, 500.0);

        let altitudes: Vec<f64> = rows.iter().map(|row| row.altitude_m).collect();
        assert_eq!(altitudes, vec![0.0, 500.0, 1000.0, 1500.0, 2000.0]);

        for pair in rows.windows(2) {
            assert!(pair[1].density_kg_m3 < pair[0].density_kg_m3);
            assert!(pair[1].power_hp < pair[0].power_hp);
            assert!(pair[1].climb_rate_ms < pair[0].climb_rate_ms);
        }
    }

    #[test]
    fn envelope_sea_level_row_matches_the_report() {
        let mut profile = base_profile();
        profile.aero.speed_mod = 1.05;
        let report = evaluate_profile(&profile);
        let rows = sweep_envelope(&profile, 1000.0, 1000.0);

        assert_eq!(rows.len(), 2);
        assert!((rows[0].speed_kmh - report.max_speed_sea_level_kmh).abs() < 1e-9);
        assert!((rows[0].climb_rate_ms - report.climb_rate_ms).abs() < 1e-12);
    }

    #[test]
    fn envelope_step_is_floored() {
        let rows = sweep_envelope(&base_profile(), 3.0, 0.0);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].altitude_m, 3.0);
    }
}
