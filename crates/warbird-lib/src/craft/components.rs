//! Typed component records backing the design catalogs.
//!
//! Every selectable part of an aircraft is one of these records. They are
//! plain data: the aggregation layer folds their modifier blocks into an
//! aerodynamic profile and sums their weights and costs, and the numeric
//! core never sees them directly.

/// Multiplicative performance adjustments contributed by a component.
///
/// Every field is a ratio applied to the matching profile figure; `1.0`
/// leaves it unchanged. Components that only add weight and cost carry an
/// all-neutral block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifiers {
    /// Scales the base drag coefficient
    pub drag: f64,
    /// Scales delivered engine power
    pub power: f64,
    /// Scales reported speeds
    pub speed: f64,
    /// Scales range
    pub range: f64,
    /// Scales the service ceiling
    pub ceiling: f64,
    /// Scales sustained-turn time (values above 1.0 turn tighter)
    pub maneuverability: f64,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            drag: 1.0,
            power: 1.0,
            speed: 1.0,
            range: 1.0,
            ceiling: 1.0,
            maneuverability: 1.0,
        }
    }
}

/// Crew-support systems consulted by the service-ceiling cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewSystem {
    /// Breathing oxygen; without it the report caps the ceiling at 5000 m.
    OxygenSystem,
    /// Pressurized compartment; without it the report caps the ceiling at
    /// 10000 m.
    PressurizedCabin,
}

/// Design doctrine shaping the whole airframe.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctrine {
    /// Catalog name (lowercase, hyphenated)
    pub name: &'static str,
    pub modifiers: Modifiers,
}

/// Fuselage structure and skin construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub name: &'static str,
    /// Structure weight (kg)
    pub weight_kg: f64,
    /// Relative production cost
    pub cost: f64,
    /// Base parasite drag coefficient of the finished airframe
    pub cd_0: f64,
    /// Serviceability factor in (0, 1]
    pub reliability: f64,
    pub modifiers: Modifiers,
}

/// Wing planform and construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Wing {
    pub name: &'static str,
    /// Wing weight (kg)
    pub weight_kg: f64,
    /// Relative production cost
    pub cost: f64,
    /// Reference wing area (m²)
    pub wing_area_m2: f64,
    /// Maximum lift coefficient
    pub cl_max: f64,
    /// Aspect ratio of the planform
    pub aspect_ratio: f64,
    /// Oswald span-efficiency factor
    pub oswald_efficiency: f64,
    pub modifiers: Modifiers,
}

/// Undercarriage arrangement.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingGear {
    pub name: &'static str,
    /// Gear weight (kg)
    pub weight_kg: f64,
    /// Relative production cost
    pub cost: f64,
    /// Serviceability factor in (0, 1]
    pub reliability: f64,
    pub modifiers: Modifiers,
}

/// Engine model; a design mounts one to four of the same engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub name: &'static str,
    /// Dry weight per engine (kg)
    pub weight_kg: f64,
    /// Relative production cost per engine
    pub cost: f64,
    /// Rated shaft power per engine at sea level (hp)
    pub power_hp: f64,
    /// Serviceability factor in (0, 1], applied once per mounted engine
    pub reliability: f64,
}

/// Propeller type shared by every mounted engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Propeller {
    pub name: &'static str,
    /// Installation weight (kg)
    pub weight_kg: f64,
    /// Relative production cost
    pub cost: f64,
    /// Propulsive efficiency in (0, 1]
    pub efficiency: f64,
}

/// Engine cooling arrangement.
#[derive(Debug, Clone, PartialEq)]
pub struct Cooling {
    pub name: &'static str,
    /// Installation weight (kg)
    pub weight_kg: f64,
    /// Relative production cost
    pub cost: f64,
    /// Serviceability factor in (0, 1]
    pub reliability: f64,
    pub modifiers: Modifiers,
}

/// Internal tankage and fuel plumbing.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelSystem {
    pub name: &'static str,
    /// Tankage weight including plumbing (kg)
    pub weight_kg: f64,
    /// Relative production cost
    pub cost: f64,
    /// Still-air range on full tanks before modifiers (km)
    pub base_range_km: f64,
    pub modifiers: Modifiers,
}

/// Supercharger stage shared by every mounted engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Supercharger {
    pub name: &'static str,
    /// Installation weight (kg)
    pub weight_kg: f64,
    /// Relative production cost
    pub cost: f64,
    /// Altitude up to which sea-level power is held (m); `None` for the
    /// unsupercharged entry
    pub rated_altitude_m: Option<f64>,
    /// Serviceability factor in (0, 1]
    pub reliability: f64,
}

/// Optional airframe equipment selected as a set.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: &'static str,
    /// Installation weight (kg)
    pub weight_kg: f64,
    /// Relative production cost
    pub cost: f64,
    /// Crew-support role, if any
    pub crew_system: Option<CrewSystem>,
    /// Serviceability factor in (0, 1]
    pub reliability: f64,
    pub modifiers: Modifiers,
}

/// Gun, rack, or rail installation selected with a count.
#[derive(Debug, Clone, PartialEq)]
pub struct Armament {
    pub name: &'static str,
    /// Installed weight per unit, ammunition included (kg)
    pub weight_kg: f64,
    /// Relative production cost per unit
    pub cost: f64,
    /// Applied once per mount entry regardless of count
    pub modifiers: Modifiers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_modifiers_are_neutral() {
        let modifiers = Modifiers::default();

        assert_eq!(modifiers.drag, 1.0);
        assert_eq!(modifiers.power, 1.0);
        assert_eq!(modifiers.speed, 1.0);
        assert_eq!(modifiers.range, 1.0);
        assert_eq!(modifiers.ceiling, 1.0);
        assert_eq!(modifiers.maneuverability, 1.0);
    }
}
