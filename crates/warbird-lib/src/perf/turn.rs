//! Sustained-turn estimate at a fixed reference altitude.

use std::f64::consts::PI;

use serde::Serialize;

use crate::atmosphere::air_properties_at;
use crate::atmosphere::constants::STANDARD_GRAVITY;
use crate::craft::profile::AerodynamicProfile;
use crate::perf::constants::{
    STRUCTURAL_LOAD_FACTOR_LIMIT, TURN_LOAD_MARGIN_FLOOR, TURN_REFERENCE_ALTITUDE_M,
    TURN_SPEED_FRACTION, TURN_TIME_MAX_S, TURN_TIME_MIN_S,
};
use crate::perf::solver::PerformancePoint;

/// Sustained-turn figures for a design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TurnPerformance {
    /// Reference turning speed (m/s)
    pub turn_speed_ms: f64,
    /// Sustainable load factor (g)
    pub load_factor: f64,
    /// Turn radius at the sustainable load factor (m)
    pub turn_radius_m: f64,
    /// Time for a full circle, adjusted for maneuverability (s)
    pub turn_time_s: f64,
}

/// Estimate sustained-turn performance.
///
/// The turn is flown at 80% of the rated-altitude equilibrium speed, in
/// 2000 m air. The sustainable load factor is the lesser of the structural
/// limit and what the wing can lift:
///
/// ```text
/// n      = min(4.5, 0.5 * rho(2000) * v_turn² * cl_max / (W*g/S))
/// radius = v_turn² / (g * sqrt(max(0.01, n² - 1)))
/// time   = clamp(2π * radius / v_turn / maneuverability_mod, 12, 60)
/// ```
///
/// The margin floor keeps the radius real when the wing cannot even hold a
/// level turn (n ≤ 1); the time clamp bounds the reported figure to a
/// plausible sustained-turn band.
pub fn turn_performance(
    combat_weight_kg: f64,
    aero: &AerodynamicProfile,
    rated_point: &PerformancePoint,
) -> TurnPerformance {
    let turn_speed_ms = rated_point.v_ms * TURN_SPEED_FRACTION;
    let density = air_properties_at(TURN_REFERENCE_ALTITUDE_M).density_kg_m3;
    let wing_loading_n_m2 = combat_weight_kg * STANDARD_GRAVITY / aero.wing_area_m2;

    let lift_limited_factor =
        0.5 * density * turn_speed_ms * turn_speed_ms * aero.cl_max / wing_loading_n_m2;
    let load_factor = lift_limited_factor.min(STRUCTURAL_LOAD_FACTOR_LIMIT);

    let load_margin = (load_factor * load_factor - 1.0).max(TURN_LOAD_MARGIN_FLOOR);
    let turn_radius_m =
        turn_speed_ms * turn_speed_ms / (STANDARD_GRAVITY * load_margin.sqrt());

    let raw_time_s = 2.0 * PI * turn_radius_m / turn_speed_ms;
    let turn_time_s =
        (raw_time_s / aero.maneuverability_mod).clamp(TURN_TIME_MIN_S, TURN_TIME_MAX_S);

    TurnPerformance {
        turn_speed_ms,
        load_factor,
        turn_radius_m,
        turn_time_s,
    }
}
