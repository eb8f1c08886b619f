//! Climb-rate model and service-ceiling search.

use tracing::debug;

use crate::atmosphere::air_properties_at;
use crate::atmosphere::constants::STANDARD_GRAVITY;
use crate::craft::profile::{AerodynamicProfile, SuperchargerRating};
use crate::perf::constants::{
    CEILING_SWEEP_MAX_M, CEILING_SWEEP_STEP_M, CLIMB_REFERENCE_SPEED_MS,
    SERVICE_CEILING_CLIMB_MS, WATTS_PER_HORSEPOWER,
};
use crate::perf::power::power_at_altitude;
use crate::perf::solver::drag_force_newtons;

/// Rate of climb at the given altitude, in m/s.
///
/// Evaluated at a fixed reference climb speed rather than the solved
/// equilibrium speed:
///
/// ```text
/// thrust = P(h) * eff / 80
/// excess = (thrust - drag(80)) * 80
/// climb  = max(0, excess / (W*g))
/// ```
///
/// A configuration without excess power reports 0, never a descent rate.
pub fn climb_rate_at(
    altitude_m: f64,
    combat_weight_kg: f64,
    total_power_hp: f64,
    prop_efficiency: f64,
    aero: &AerodynamicProfile,
    supercharger: Option<&SuperchargerRating>,
) -> f64 {
    let density = air_properties_at(altitude_m).density_kg_m3;
    let power_watts = power_at_altitude(total_power_hp, altitude_m, supercharger)
        * aero.power_mod
        * WATTS_PER_HORSEPOWER;

    let thrust = power_watts * prop_efficiency / CLIMB_REFERENCE_SPEED_MS;
    let drag = drag_force_newtons(CLIMB_REFERENCE_SPEED_MS, density, combat_weight_kg, aero);
    let excess_power_watts = (thrust - drag) * CLIMB_REFERENCE_SPEED_MS;

    (excess_power_watts / (combat_weight_kg * STANDARD_GRAVITY)).max(0.0)
}

/// Locate the service ceiling by sweeping the climb model over altitude.
///
/// Walks 0 to 15000 m in 250 m steps and returns the first altitude at
/// which the climb rate falls below 0.5 m/s. A design that still climbs at
/// the top of the sweep reports the sweep limit itself. The caller applies
/// ceiling modifiers and crew-system caps on top of this raw figure.
pub fn find_service_ceiling(
    combat_weight_kg: f64,
    total_power_hp: f64,
    prop_efficiency: f64,
    aero: &AerodynamicProfile,
    supercharger: Option<&SuperchargerRating>,
) -> f64 {
    for altitude in (0..=CEILING_SWEEP_MAX_M).step_by(CEILING_SWEEP_STEP_M as usize) {
        let altitude_m = f64::from(altitude);
        let climb = climb_rate_at(
            altitude_m,
            combat_weight_kg,
            total_power_hp,
            prop_efficiency,
            aero,
            supercharger,
        );
        if climb < SERVICE_CEILING_CLIMB_MS {
            debug!(altitude_m, climb_rate_ms = climb, "service ceiling reached");
            return altitude_m;
        }
    }

    debug!(
        altitude_m = f64::from(CEILING_SWEEP_MAX_M),
        "climb rate holds through the whole sweep"
    );
    f64::from(CEILING_SWEEP_MAX_M)
}
