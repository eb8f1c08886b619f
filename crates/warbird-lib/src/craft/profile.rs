//! Aggregation of a resolved design into the profiles the numeric core
//! consumes.
//!
//! Building a profile is a pure fold: weights and costs add, reliability
//! factors multiply, and every component's modifier block multiplies into a
//! fresh [`AerodynamicProfile`]. Nothing here mutates shared state; each
//! evaluation reconstructs its profiles from scratch.

use serde::Serialize;
use tracing::debug;

use crate::craft::components::{CrewSystem, Modifiers};
use crate::craft::design::AircraftDesign;

/// Flat allowance for crew and operational equipment (kg).
pub const CREW_AND_EQUIPMENT_KG: f64 = 160.0;

/// Frozen aerodynamic description of a design.
///
/// The four wing fields and `cd_0` come straight from the wing and
/// structure catalog entries; the `*_mod` fields start neutral at `1.0` and
/// accumulate every selected component's modifier block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AerodynamicProfile {
    /// Reference wing area (m²)
    pub wing_area_m2: f64,
    /// Maximum lift coefficient
    pub cl_max: f64,
    /// Base parasite drag coefficient
    pub cd_0: f64,
    /// Wing aspect ratio
    pub aspect_ratio: f64,
    /// Oswald span-efficiency factor
    pub oswald_efficiency: f64,
    /// Multiplier on `cd_0`
    pub drag_mod: f64,
    /// Multiplier on delivered engine power
    pub power_mod: f64,
    /// Multiplier on reported speeds
    pub speed_mod: f64,
    /// Multiplier on range
    pub range_mod: f64,
    /// Multiplier on the service ceiling
    pub ceiling_mod: f64,
    /// Divisor on sustained-turn time
    pub maneuverability_mod: f64,
}

/// Supercharger rating consumed by the power-altitude model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperchargerRating {
    /// Altitude up to which sea-level power is held (m)
    pub rated_altitude_m: f64,
}

/// Engine installation as the performance core sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionProfile {
    /// Combined sea-level shaft power of all engines (hp)
    pub total_power_hp: f64,
    /// Propulsive efficiency in (0, 1]
    pub propeller_efficiency: f64,
    /// Supercharger rating, absent for an unsupercharged installation
    pub supercharger: Option<SuperchargerRating>,
}

/// Summed weight, cost, and combined reliability of a design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignTotals {
    /// All-up combat weight including the crew allowance (kg)
    pub combat_weight_kg: f64,
    /// Relative production cost
    pub cost: f64,
    /// Product of component serviceability factors, in (0, 1]
    pub reliability: f64,
}

/// Everything the performance core needs, derived from a resolved design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignProfile {
    pub totals: DesignTotals,
    pub aero: AerodynamicProfile,
    pub propulsion: PropulsionProfile,
    /// Still-air range before the range modifier (km)
    pub base_range_km: f64,
    pub has_oxygen_system: bool,
    pub has_pressurized_cabin: bool,
}

/// Aggregate a resolved design into its totals and profiles.
///
/// Modifier blocks are folded in a fixed order: doctrine, structure, wing,
/// landing gear, cooling, fuel system, then features and armament mounts in
/// selection order. Slots without modifier blocks (engine, propeller,
/// supercharger) contribute through [`PropulsionProfile`] instead. All
/// modifier applications are independent multiplications, so the order is a
/// reproducibility convention rather than a semantic one.
///
/// Weights and costs add (engines and armaments scale with their counts);
/// reliability factors multiply, with the engine factor applied once per
/// mounted engine.
pub fn build_profile(design: &AircraftDesign) -> DesignProfile {
    let engine_count = f64::from(design.engine_count);

    let feature_weight: f64 = design.features.iter().map(|f| f.weight_kg).sum();
    let armament_weight: f64 = design
        .armament
        .iter()
        .map(|mount| mount.armament.weight_kg * f64::from(mount.count))
        .sum();
    let combat_weight_kg = CREW_AND_EQUIPMENT_KG
        + design.structure.weight_kg
        + design.wing.weight_kg
        + design.landing_gear.weight_kg
        + design.engine.weight_kg * engine_count
        + design.propeller.weight_kg
        + design.cooling.weight_kg
        + design.fuel_system.weight_kg
        + design.supercharger.weight_kg
        + feature_weight
        + armament_weight;

    let feature_cost: f64 = design.features.iter().map(|f| f.cost).sum();
    let armament_cost: f64 = design
        .armament
        .iter()
        .map(|mount| mount.armament.cost * f64::from(mount.count))
        .sum();
    let cost = design.structure.cost
        + design.wing.cost
        + design.landing_gear.cost
        + design.engine.cost * engine_count
        + design.propeller.cost
        + design.cooling.cost
        + design.fuel_system.cost
        + design.supercharger.cost
        + feature_cost
        + armament_cost;

    let feature_reliability: f64 = design.features.iter().map(|f| f.reliability).product();
    let reliability = design.structure.reliability
        * design.landing_gear.reliability
        * design.engine.reliability.powi(design.engine_count as i32)
        * design.cooling.reliability
        * design.supercharger.reliability
        * feature_reliability;

    let base = AerodynamicProfile {
        wing_area_m2: design.wing.wing_area_m2,
        cl_max: design.wing.cl_max,
        cd_0: design.structure.cd_0,
        aspect_ratio: design.wing.aspect_ratio,
        oswald_efficiency: design.wing.oswald_efficiency,
        drag_mod: 1.0,
        power_mod: 1.0,
        speed_mod: 1.0,
        range_mod: 1.0,
        ceiling_mod: 1.0,
        maneuverability_mod: 1.0,
    };
    let aero = modifier_blocks(design)
        .into_iter()
        .fold(base, apply_modifiers);

    let propulsion = PropulsionProfile {
        total_power_hp: design.engine.power_hp * engine_count,
        propeller_efficiency: design.propeller.efficiency,
        supercharger: design
            .supercharger
            .rated_altitude_m
            .map(|rated_altitude_m| SuperchargerRating { rated_altitude_m }),
    };

    let profile = DesignProfile {
        totals: DesignTotals {
            combat_weight_kg,
            cost,
            reliability,
        },
        aero,
        propulsion,
        base_range_km: design.fuel_system.base_range_km,
        has_oxygen_system: design.has_crew_system(CrewSystem::OxygenSystem),
        has_pressurized_cabin: design.has_crew_system(CrewSystem::PressurizedCabin),
    };

    debug!(
        combat_weight_kg = profile.totals.combat_weight_kg,
        total_power_hp = profile.propulsion.total_power_hp,
        drag_mod = profile.aero.drag_mod,
        "design profile built"
    );

    profile
}

/// Modifier blocks of a design in fold order.
fn modifier_blocks(design: &AircraftDesign) -> Vec<&'static Modifiers> {
    let mut blocks = vec![
        &design.doctrine.modifiers,
        &design.structure.modifiers,
        &design.wing.modifiers,
        &design.landing_gear.modifiers,
        &design.cooling.modifiers,
        &design.fuel_system.modifiers,
    ];
    blocks.extend(design.features.iter().map(|f| &f.modifiers));
    blocks.extend(design.armament.iter().map(|mount| &mount.armament.modifiers));
    blocks
}

fn apply_modifiers(profile: AerodynamicProfile, modifiers: &Modifiers) -> AerodynamicProfile {
    AerodynamicProfile {
        drag_mod: profile.drag_mod * modifiers.drag,
        power_mod: profile.power_mod * modifiers.power,
        speed_mod: profile.speed_mod * modifiers.speed,
        range_mod: profile.range_mod * modifiers.range,
        ceiling_mod: profile.ceiling_mod * modifiers.ceiling,
        maneuverability_mod: profile.maneuverability_mod * modifiers.maneuverability,
        ..profile
    }
}
