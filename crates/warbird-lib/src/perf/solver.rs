//! Equilibrium flight-speed solver.
//!
//! Thrust and drag are coupled, nonlinear functions of speed: drag through
//! the induced-drag dependence on the lift coefficient, thrust through the
//! power/speed relation, plus a quadratic compressibility penalty above
//! 400 km/h. No closed-form inverse exists, so the solver scans a fixed
//! speed grid and keeps the speed where the two forces come closest. The
//! grid is the accuracy floor: results are quantized to 1 m/s.

use std::f64::consts::PI;

use serde::Serialize;
use tracing::debug;

use crate::atmosphere::air_properties_at;
use crate::atmosphere::constants::STANDARD_GRAVITY;
use crate::craft::profile::{AerodynamicProfile, SuperchargerRating};
use crate::perf::constants::{
    COMPRESSIBILITY_ONSET_KMH, COMPRESSIBILITY_PENALTY_CD, COMPRESSIBILITY_SCALE_KMH, KMH_PER_MS,
    REPORT_SPEED_FLOOR_MS, SPEED_SEARCH_MAX_MS, SPEED_SEARCH_MIN_MS, THRUST_SPEED_FLOOR_MS,
    WATTS_PER_HORSEPOWER,
};
use crate::perf::power::power_at_altitude;

/// Solved force balance for one (design, altitude) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformancePoint {
    /// Altitude the point was solved at (m)
    pub altitude_m: f64,
    /// Equilibrium speed (km/h)
    pub speed_kmh: f64,
    /// Equilibrium speed (m/s)
    pub v_ms: f64,
    /// Drag force at the equilibrium speed (N)
    pub drag_n: f64,
    /// Thrust force at the equilibrium speed (N)
    pub thrust_n: f64,
}

/// Aerodynamic drag force on the airframe at the given speed.
///
/// ```text
/// q    = 0.5 * rho * v²
/// CL   = W*g / (q*S)
/// CDi  = CL² / (π * AR * e)
/// CDc  = 0.005 * (max(0, v_kmh - 400) / 200)²
/// CD   = cd_0*drag_mod + CDi + CDc
/// drag = q * S * CD
/// ```
///
/// The lift coefficient assumes level flight (lift equals weight), which
/// couples induced drag to speed; the compressibility term is zero below
/// 400 km/h and grows quadratically above it.
pub fn drag_force_newtons(
    speed_ms: f64,
    air_density_kg_m3: f64,
    combat_weight_kg: f64,
    aero: &AerodynamicProfile,
) -> f64 {
    let dynamic_pressure = 0.5 * air_density_kg_m3 * speed_ms * speed_ms;
    let lift_coefficient =
        combat_weight_kg * STANDARD_GRAVITY / (dynamic_pressure * aero.wing_area_m2);
    let induced_cd =
        lift_coefficient * lift_coefficient / (PI * aero.aspect_ratio * aero.oswald_efficiency);

    let speed_kmh = speed_ms * KMH_PER_MS;
    let overspeed = (speed_kmh - COMPRESSIBILITY_ONSET_KMH).max(0.0) / COMPRESSIBILITY_SCALE_KMH;
    let compressibility_cd = COMPRESSIBILITY_PENALTY_CD * overspeed * overspeed;

    let total_cd = aero.cd_0 * aero.drag_mod + induced_cd + compressibility_cd;
    dynamic_pressure * aero.wing_area_m2 * total_cd
}

/// Find the equilibrium flight speed at the given altitude.
///
/// Scans candidate speeds from 50 to 350 m/s in 1 m/s steps and keeps the
/// one minimizing `|thrust - drag|`, then recomputes the force pair at the
/// winning speed for the returned point. The scan always produces a result:
/// a design with no true equilibrium in range pins to the nearest grid
/// edge.
///
/// # Arguments
///
/// * `altitude_m` - Altitude to solve at, in meters
/// * `combat_weight_kg` - All-up combat weight, in kilograms
/// * `total_power_hp` - Combined sea-level shaft power, in horsepower
/// * `prop_efficiency` - Propulsive efficiency in (0, 1]
/// * `aero` - Frozen aerodynamic profile of the design
/// * `supercharger` - Supercharger rating, if fitted
///
/// # Examples
///
/// ```
/// use warbird_lib::craft::AerodynamicProfile;
/// use warbird_lib::perf::performance_at;
///
/// let aero = AerodynamicProfile {
///     wing_area_m2: 18.0,
///     cl_max: 1.4,
///     cd_0: 0.025,
///     aspect_ratio: 6.0,
///     oswald_efficiency: 0.8,
///     drag_mod: 1.0,
///     power_mod: 1.0,
///     speed_mod: 1.0,
///     range_mod: 1.0,
///     ceiling_mod: 1.0,
///     maneuverability_mod: 1.0,
/// };
/// let point = performance_at(0.0, 2500.0, 1200.0, 0.88, &aero, None);
/// assert!(point.v_ms >= 50.0 && point.v_ms <= 350.0);
/// ```
pub fn performance_at(
    altitude_m: f64,
    combat_weight_kg: f64,
    total_power_hp: f64,
    prop_efficiency: f64,
    aero: &AerodynamicProfile,
    supercharger: Option<&SuperchargerRating>,
) -> PerformancePoint {
    let density = air_properties_at(altitude_m).density_kg_m3;
    let power_watts = power_at_altitude(total_power_hp, altitude_m, supercharger)
        * aero.power_mod
        * WATTS_PER_HORSEPOWER;

    let mut best_speed_ms = f64::from(SPEED_SEARCH_MIN_MS);
    let mut best_gap_n = f64::INFINITY;
    for speed in SPEED_SEARCH_MIN_MS..=SPEED_SEARCH_MAX_MS {
        let v = f64::from(speed);
        let drag = drag_force_newtons(v, density, combat_weight_kg, aero);
        let thrust = power_watts * prop_efficiency / v.max(THRUST_SPEED_FLOOR_MS);
        let gap = (thrust - drag).abs();
        if gap < best_gap_n {
            best_gap_n = gap;
            best_speed_ms = v;
        }
    }

    let drag_n = drag_force_newtons(best_speed_ms, density, combat_weight_kg, aero);
    let thrust_n = power_watts * prop_efficiency / best_speed_ms.max(REPORT_SPEED_FLOOR_MS);

    debug!(
        altitude_m,
        speed_ms = best_speed_ms,
        force_gap_n = best_gap_n,
        "equilibrium speed selected"
    );

    PerformancePoint {
        altitude_m,
        speed_kmh: best_speed_ms * KMH_PER_MS,
        v_ms: best_speed_ms,
        drag_n,
        thrust_n,
    }
}
