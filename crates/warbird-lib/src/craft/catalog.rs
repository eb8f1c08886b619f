//! Compiled-in component catalogs and name lookup.
//!
//! The catalogs are process-lifetime constants: built on first access,
//! never mutated, and shared by every design evaluation. Lookups are
//! case-insensitive; a miss returns an error carrying up to three
//! similarly-spelled catalog names.

use once_cell::sync::Lazy;

use crate::craft::components::{
    Armament, Cooling, CrewSystem, Doctrine, Engine, Feature, FuelSystem, LandingGear, Modifiers,
    Propeller, Structure, Supercharger, Wing,
};
use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Maximum number of suggestions attached to an unknown-name error.
const SUGGESTION_LIMIT: usize = 3;

static DOCTRINES: Lazy<Vec<Doctrine>> = Lazy::new(|| {
    vec![
        Doctrine {
            name: "general-purpose",
            modifiers: Modifiers::default(),
        },
        Doctrine {
            name: "interceptor",
            modifiers: Modifiers {
                power: 1.03,
                ceiling: 1.05,
                range: 0.92,
                maneuverability: 0.97,
                ..Modifiers::default()
            },
        },
        Doctrine {
            name: "dogfighter",
            modifiers: Modifiers {
                maneuverability: 1.10,
                range: 0.95,
                ..Modifiers::default()
            },
        },
        Doctrine {
            name: "escort",
            modifiers: Modifiers {
                range: 1.15,
                maneuverability: 0.95,
                ..Modifiers::default()
            },
        },
    ]
});

static STRUCTURES: Lazy<Vec<Structure>> = Lazy::new(|| {
    vec![
        Structure {
            name: "wood-frame",
            weight_kg: 620.0,
            cost: 5.0,
            cd_0: 0.030,
            reliability: 0.96,
            modifiers: Modifiers::default(),
        },
        Structure {
            name: "mixed-construction",
            weight_kg: 680.0,
            cost: 7.0,
            cd_0: 0.027,
            reliability: 0.97,
            modifiers: Modifiers::default(),
        },
        Structure {
            name: "duralumin-monocoque",
            weight_kg: 720.0,
            cost: 10.0,
            cd_0: 0.025,
            reliability: 0.98,
            modifiers: Modifiers::default(),
        },
        Structure {
            name: "flush-riveted",
            weight_kg: 750.0,
            cost: 14.0,
            cd_0: 0.023,
            reliability: 0.98,
            modifiers: Modifiers::default(),
        },
    ]
});

static WINGS: Lazy<Vec<Wing>> = Lazy::new(|| {
    vec![
        Wing {
            name: "rectangular",
            weight_kg: 280.0,
            cost: 4.0,
            wing_area_m2: 16.0,
            cl_max: 1.35,
            aspect_ratio: 5.8,
            oswald_efficiency: 0.78,
            modifiers: Modifiers::default(),
        },
        Wing {
            name: "tapered",
            weight_kg: 300.0,
            cost: 6.0,
            wing_area_m2: 17.0,
            cl_max: 1.40,
            aspect_ratio: 6.4,
            oswald_efficiency: 0.84,
            modifiers: Modifiers {
                drag: 0.98,
                ..Modifiers::default()
            },
        },
        Wing {
            name: "elliptical",
            weight_kg: 320.0,
            cost: 9.0,
            wing_area_m2: 17.5,
            cl_max: 1.42,
            aspect_ratio: 6.8,
            oswald_efficiency: 0.90,
            modifiers: Modifiers {
                drag: 0.96,
                maneuverability: 1.05,
                ..Modifiers::default()
            },
        },
        Wing {
            name: "gull",
            weight_kg: 330.0,
            cost: 7.0,
            wing_area_m2: 18.5,
            cl_max: 1.38,
            aspect_ratio: 6.0,
            oswald_efficiency: 0.80,
            modifiers: Modifiers {
                drag: 1.01,
                maneuverability: 0.98,
                ..Modifiers::default()
            },
        },
        Wing {
            name: "biplane",
            weight_kg: 340.0,
            cost: 5.0,
            wing_area_m2: 24.0,
            cl_max: 1.55,
            aspect_ratio: 4.2,
            oswald_efficiency: 0.70,
            modifiers: Modifiers {
                drag: 1.12,
                ceiling: 0.95,
                maneuverability: 1.18,
                ..Modifiers::default()
            },
        },
    ]
});

static LANDING_GEAR: Lazy<Vec<LandingGear>> = Lazy::new(|| {
    vec![
        LandingGear {
            name: "fixed",
            weight_kg: 90.0,
            cost: 2.0,
            reliability: 0.99,
            modifiers: Modifiers {
                drag: 1.08,
                ..Modifiers::default()
            },
        },
        LandingGear {
            name: "fixed-spatted",
            weight_kg: 100.0,
            cost: 3.0,
            reliability: 0.99,
            modifiers: Modifiers {
                drag: 1.04,
                ..Modifiers::default()
            },
        },
        LandingGear {
            name: "retractable",
            weight_kg: 140.0,
            cost: 6.0,
            reliability: 0.95,
            modifiers: Modifiers::default(),
        },
    ]
});

static ENGINES: Lazy<Vec<Engine>> = Lazy::new(|| {
    vec![
        Engine {
            name: "radial-750",
            weight_kg: 480.0,
            cost: 9.0,
            power_hp: 750.0,
            reliability: 0.97,
        },
        Engine {
            name: "v12-1100",
            weight_kg: 620.0,
            cost: 14.0,
            power_hp: 1100.0,
            reliability: 0.94,
        },
        Engine {
            name: "v12-1450",
            weight_kg: 720.0,
            cost: 18.0,
            power_hp: 1450.0,
            reliability: 0.93,
        },
        Engine {
            name: "radial-1600",
            weight_kg: 900.0,
            cost: 20.0,
            power_hp: 1600.0,
            reliability: 0.95,
        },
        Engine {
            name: "radial-2000",
            weight_kg: 1070.0,
            cost: 26.0,
            power_hp: 2000.0,
            reliability: 0.92,
        },
    ]
});

static PROPELLERS: Lazy<Vec<Propeller>> = Lazy::new(|| {
    vec![
        Propeller {
            name: "fixed-pitch-wood",
            weight_kg: 40.0,
            cost: 1.0,
            efficiency: 0.72,
        },
        Propeller {
            name: "fixed-pitch-metal",
            weight_kg: 55.0,
            cost: 2.0,
            efficiency: 0.76,
        },
        Propeller {
            name: "two-position",
            weight_kg: 80.0,
            cost: 4.0,
            efficiency: 0.81,
        },
        Propeller {
            name: "constant-speed",
            weight_kg: 105.0,
            cost: 7.0,
            efficiency: 0.85,
        },
        Propeller {
            name: "wide-blade",
            weight_kg: 125.0,
            cost: 9.0,
            efficiency: 0.88,
        },
    ]
});

static COOLING: Lazy<Vec<Cooling>> = Lazy::new(|| {
    vec![
        Cooling {
            name: "air-cooled",
            weight_kg: 40.0,
            cost: 1.0,
            reliability: 0.99,
            modifiers: Modifiers {
                drag: 1.05,
                ..Modifiers::default()
            },
        },
        Cooling {
            name: "liquid-cooled",
            weight_kg: 90.0,
            cost: 3.0,
            reliability: 0.94,
            modifiers: Modifiers::default(),
        },
        Cooling {
            name: "evaporative",
            weight_kg: 110.0,
            cost: 6.0,
            reliability: 0.88,
            modifiers: Modifiers {
                drag: 0.96,
                ..Modifiers::default()
            },
        },
    ]
});

static FUEL_SYSTEMS: Lazy<Vec<FuelSystem>> = Lazy::new(|| {
    vec![
        FuelSystem {
            name: "minimal-tankage",
            weight_kg: 60.0,
            cost: 1.0,
            base_range_km: 550.0,
            modifiers: Modifiers::default(),
        },
        FuelSystem {
            name: "standard-tankage",
            weight_kg: 110.0,
            cost: 2.0,
            base_range_km: 800.0,
            modifiers: Modifiers::default(),
        },
        FuelSystem {
            name: "extended-tankage",
            weight_kg: 190.0,
            cost: 4.0,
            base_range_km: 1200.0,
            modifiers: Modifiers {
                maneuverability: 0.97,
                ..Modifiers::default()
            },
        },
        FuelSystem {
            name: "drop-tanks",
            weight_kg: 230.0,
            cost: 5.0,
            base_range_km: 1600.0,
            modifiers: Modifiers {
                drag: 1.03,
                maneuverability: 0.95,
                ..Modifiers::default()
            },
        },
    ]
});

static SUPERCHARGERS: Lazy<Vec<Supercharger>> = Lazy::new(|| {
    vec![
        Supercharger {
            name: "none",
            weight_kg: 0.0,
            cost: 0.0,
            rated_altitude_m: None,
            reliability: 1.0,
        },
        Supercharger {
            name: "single-stage",
            weight_kg: 35.0,
            cost: 3.0,
            rated_altitude_m: Some(3000.0),
            reliability: 0.98,
        },
        Supercharger {
            name: "single-stage-high",
            weight_kg: 45.0,
            cost: 5.0,
            rated_altitude_m: Some(5500.0),
            reliability: 0.97,
        },
        Supercharger {
            name: "two-stage",
            weight_kg: 80.0,
            cost: 9.0,
            rated_altitude_m: Some(7000.0),
            reliability: 0.95,
        },
        Supercharger {
            name: "two-stage-intercooled",
            weight_kg: 110.0,
            cost: 13.0,
            rated_altitude_m: Some(8500.0),
            reliability: 0.94,
        },
        Supercharger {
            name: "turbo-supercharger",
            weight_kg: 160.0,
            cost: 18.0,
            rated_altitude_m: Some(10_500.0),
            reliability: 0.90,
        },
    ]
});

static FEATURES: Lazy<Vec<Feature>> = Lazy::new(|| {
    vec![
        Feature {
            name: "oxygen-system",
            weight_kg: 25.0,
            cost: 1.0,
            crew_system: Some(CrewSystem::OxygenSystem),
            reliability: 1.0,
            modifiers: Modifiers::default(),
        },
        Feature {
            name: "pressurized-cabin",
            weight_kg: 90.0,
            cost: 8.0,
            crew_system: Some(CrewSystem::PressurizedCabin),
            reliability: 0.95,
            modifiers: Modifiers::default(),
        },
        Feature {
            name: "self-sealing-tanks",
            weight_kg: 70.0,
            cost: 3.0,
            crew_system: None,
            reliability: 1.0,
            modifiers: Modifiers {
                range: 0.97,
                ..Modifiers::default()
            },
        },
        Feature {
            name: "armored-cockpit",
            weight_kg: 55.0,
            cost: 3.0,
            crew_system: None,
            reliability: 1.0,
            modifiers: Modifiers {
                maneuverability: 0.97,
                ..Modifiers::default()
            },
        },
        Feature {
            name: "radio-set",
            weight_kg: 30.0,
            cost: 2.0,
            crew_system: None,
            reliability: 1.0,
            modifiers: Modifiers::default(),
        },
        Feature {
            name: "dive-brakes",
            weight_kg: 35.0,
            cost: 2.0,
            crew_system: None,
            reliability: 0.98,
            modifiers: Modifiers {
                drag: 1.01,
                maneuverability: 1.02,
                ..Modifiers::default()
            },
        },
    ]
});

static ARMAMENTS: Lazy<Vec<Armament>> = Lazy::new(|| {
    vec![
        Armament {
            name: "rifle-mg",
            weight_kg: 12.0,
            cost: 1.0,
            modifiers: Modifiers::default(),
        },
        Armament {
            name: "heavy-mg",
            weight_kg: 29.0,
            cost: 2.0,
            modifiers: Modifiers {
                drag: 1.01,
                ..Modifiers::default()
            },
        },
        Armament {
            name: "cannon-20mm",
            weight_kg: 48.0,
            cost: 4.0,
            modifiers: Modifiers {
                drag: 1.01,
                ..Modifiers::default()
            },
        },
        Armament {
            name: "cannon-30mm",
            weight_kg: 95.0,
            cost: 7.0,
            modifiers: Modifiers {
                drag: 1.02,
                maneuverability: 0.98,
                ..Modifiers::default()
            },
        },
        Armament {
            name: "bomb-rack-100kg",
            weight_kg: 130.0,
            cost: 2.0,
            modifiers: Modifiers {
                drag: 1.05,
                speed: 0.97,
                maneuverability: 0.95,
                ..Modifiers::default()
            },
        },
        Armament {
            name: "rocket-rails",
            weight_kg: 45.0,
            cost: 2.0,
            modifiers: Modifiers {
                drag: 1.04,
                ..Modifiers::default()
            },
        },
    ]
});

/// All design doctrines, in catalog order.
pub fn doctrines() -> &'static [Doctrine] {
    &DOCTRINES
}

/// All fuselage structures, in catalog order.
pub fn structures() -> &'static [Structure] {
    &STRUCTURES
}

/// All wing planforms, in catalog order.
pub fn wings() -> &'static [Wing] {
    &WINGS
}

/// All undercarriage arrangements, in catalog order.
pub fn landing_gears() -> &'static [LandingGear] {
    &LANDING_GEAR
}

/// All engine models, in catalog order.
pub fn engines() -> &'static [Engine] {
    &ENGINES
}

/// All propellers, in catalog order.
pub fn propellers() -> &'static [Propeller] {
    &PROPELLERS
}

/// All cooling arrangements, in catalog order.
pub fn cooling_systems() -> &'static [Cooling] {
    &COOLING
}

/// All fuel systems, in catalog order.
pub fn fuel_systems() -> &'static [FuelSystem] {
    &FUEL_SYSTEMS
}

/// All supercharger stages, in catalog order.
pub fn superchargers() -> &'static [Supercharger] {
    &SUPERCHARGERS
}

/// All optional features, in catalog order.
pub fn features() -> &'static [Feature] {
    &FEATURES
}

/// All armament installations, in catalog order.
pub fn armaments() -> &'static [Armament] {
    &ARMAMENTS
}

/// Look up a doctrine by name (case-insensitive).
pub fn doctrine(name: &str) -> Result<&'static Doctrine> {
    find(doctrines(), "doctrine", name, |d| d.name)
}

/// Look up a fuselage structure by name (case-insensitive).
pub fn structure(name: &str) -> Result<&'static Structure> {
    find(structures(), "structure", name, |s| s.name)
}

/// Look up a wing planform by name (case-insensitive).
pub fn wing(name: &str) -> Result<&'static Wing> {
    find(wings(), "wing", name, |w| w.name)
}

/// Look up an undercarriage arrangement by name (case-insensitive).
pub fn landing_gear(name: &str) -> Result<&'static LandingGear> {
    find(landing_gears(), "landing gear", name, |g| g.name)
}

/// Look up an engine model by name (case-insensitive).
///
/// # Examples
///
/// ```
/// use warbird_lib::craft::catalog;
///
/// let engine = catalog::engine("V12-1450").unwrap();
/// assert_eq!(engine.power_hp, 1450.0);
/// ```
pub fn engine(name: &str) -> Result<&'static Engine> {
    find(engines(), "engine", name, |e| e.name)
}

/// Look up a propeller by name (case-insensitive).
pub fn propeller(name: &str) -> Result<&'static Propeller> {
    find(propellers(), "propeller", name, |p| p.name)
}

/// Look up a cooling arrangement by name (case-insensitive).
pub fn cooling(name: &str) -> Result<&'static Cooling> {
    find(cooling_systems(), "cooling system", name, |c| c.name)
}

/// Look up a fuel system by name (case-insensitive).
pub fn fuel_system(name: &str) -> Result<&'static FuelSystem> {
    find(fuel_systems(), "fuel system", name, |f| f.name)
}

/// Look up a supercharger stage by name (case-insensitive).
pub fn supercharger(name: &str) -> Result<&'static Supercharger> {
    find(superchargers(), "supercharger", name, |s| s.name)
}

/// Look up an optional feature by name (case-insensitive).
pub fn feature(name: &str) -> Result<&'static Feature> {
    find(features(), "feature", name, |f| f.name)
}

/// Look up an armament installation by name (case-insensitive).
pub fn armament(name: &str) -> Result<&'static Armament> {
    find(armaments(), "armament", name, |a| a.name)
}

/// Normalize a component name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn find<'a, T>(
    table: &'a [T],
    kind: &str,
    requested: &str,
    name_of: fn(&T) -> &'static str,
) -> Result<&'a T> {
    let wanted = normalize_name(requested);
    table
        .iter()
        .find(|entry| name_of(entry) == wanted)
        .ok_or_else(|| Error::UnknownComponent {
            kind: kind.to_string(),
            name: requested.trim().to_string(),
            suggestions: fuzzy_matches(&wanted, table.iter().map(name_of)),
        })
}

/// Rank catalog names by Jaro-Winkler similarity to the requested name.
fn fuzzy_matches<'a>(wanted: &str, names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = names
        .map(|name| (strsim::jaro_winkler(wanted, name), name))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(SUGGESTION_LIMIT)
        .map(|(_, name)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_catalog_names_are_normalized(names: &[&str]) {
        assert!(!names.is_empty(), "catalog table is empty");
        for name in names {
            assert_eq!(*name, normalize_name(name), "catalog name not normalized");
        }
        let mut unique: Vec<&str> = names.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len(), "duplicate catalog name");
    }

    #[test]
    fn every_catalog_is_populated_with_unique_normalized_names() {
        assert_catalog_names_are_normalized(
            &doctrines().iter().map(|d| d.name).collect::<Vec<_>>(),
        );
        assert_catalog_names_are_normalized(
            &structures().iter().map(|s| s.name).collect::<Vec<_>>(),
        );
        assert_catalog_names_are_normalized(&wings().iter().map(|w| w.name).collect::<Vec<_>>());
        assert_catalog_names_are_normalized(
            &landing_gears().iter().map(|g| g.name).collect::<Vec<_>>(),
        );
        assert_catalog_names_are_normalized(&engines().iter().map(|e| e.name).collect::<Vec<_>>());
        assert_catalog_names_are_normalized(
            &propellers().iter().map(|p| p.name).collect::<Vec<_>>(),
        );
        assert_catalog_names_are_normalized(
            &cooling_systems().iter().map(|c| c.name).collect::<Vec<_>>(),
        );
        assert_catalog_names_are_normalized(
            &fuel_systems().iter().map(|f| f.name).collect::<Vec<_>>(),
        );
        assert_catalog_names_are_normalized(
            &superchargers().iter().map(|s| s.name).collect::<Vec<_>>(),
        );
        assert_catalog_names_are_normalized(&features().iter().map(|f| f.name).collect::<Vec<_>>());
        assert_catalog_names_are_normalized(
            &armaments().iter().map(|a| a.name).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn engine_figures_are_finite_and_positive() {
        for engine in engines() {
            assert!(engine.power_hp.is_finite() && engine.power_hp > 0.0);
            assert!(engine.weight_kg.is_finite() && engine.weight_kg > 0.0);
            assert!(engine.cost.is_finite() && engine.cost > 0.0);
            assert!(engine.reliability > 0.0 && engine.reliability <= 1.0);
        }
    }

    #[test]
    fn propeller_efficiencies_are_physical() {
        for propeller in propellers() {
            assert!(propeller.efficiency > 0.0 && propeller.efficiency <= 1.0);
        }
    }

    #[test]
    fn wing_geometry_is_positive() {
        for wing in wings() {
            assert!(wing.wing_area_m2 > 0.0);
            assert!(wing.cl_max > 0.0);
            assert!(wing.aspect_ratio > 0.0);
            assert!(wing.oswald_efficiency > 0.0 && wing.oswald_efficiency <= 1.0);
        }
    }

    #[test]
    fn structure_drag_coefficients_are_plausible() {
        for structure in structures() {
            assert!(structure.cd_0 > 0.0 && structure.cd_0 < 0.1);
            assert!(structure.reliability > 0.0 && structure.reliability <= 1.0);
        }
    }

    #[test]
    fn reliability_factors_never_exceed_one() {
        for gear in landing_gears() {
            assert!(gear.reliability > 0.0 && gear.reliability <= 1.0);
        }
        for cooling in cooling_systems() {
            assert!(cooling.reliability > 0.0 && cooling.reliability <= 1.0);
        }
        for supercharger in superchargers() {
            assert!(supercharger.reliability > 0.0 && supercharger.reliability <= 1.0);
        }
        for feature in features() {
            assert!(feature.reliability > 0.0 && feature.reliability <= 1.0);
        }
    }

    #[test]
    fn fuel_system_ranges_are_positive() {
        for fuel in fuel_systems() {
            assert!(fuel.base_range_km > 0.0);
        }
    }

    #[test]
    fn supercharger_ratings_are_positive_when_present() {
        for supercharger in superchargers() {
            if let Some(rated) = supercharger.rated_altitude_m {
                assert!(rated > 0.0);
            }
        }
        // Exactly one unsupercharged entry
        let unrated = superchargers()
            .iter()
            .filter(|s| s.rated_altitude_m.is_none())
            .count();
        assert_eq!(unrated, 1);
    }

    #[test]
    fn crew_systems_cover_both_roles() {
        let oxygen = features()
            .iter()
            .any(|f| f.crew_system == Some(CrewSystem::OxygenSystem));
        let cabin = features()
            .iter()
            .any(|f| f.crew_system == Some(CrewSystem::PressurizedCabin));
        assert!(oxygen && cabin);
    }

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        let engine = engine("  V12-1450 ").expect("engine resolves");
        assert_eq!(engine.name, "v12-1450");

        let wing = wing("ELLIPTICAL").expect("wing resolves");
        assert_eq!(wing.name, "elliptical");
    }

    #[test]
    fn unknown_name_suggests_close_matches() {
        let err = wing("eliptical").expect_err("unknown wing");
        match err {
            Error::UnknownComponent {
                kind, suggestions, ..
            } => {
                assert_eq!(kind, "wing");
                assert!(suggestions.contains(&"elliptical".to_string()));
                assert!(suggestions.len() <= SUGGESTION_LIMIT);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn gibberish_name_yields_no_suggestions() {
        let err = engine("zzzzqq").expect_err("unknown engine");
        match err {
            Error::UnknownComponent { suggestions, .. } => {
                assert!(suggestions.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn transposed_digits_still_suggest_the_engine() {
        let err = engine("v12-1540").expect_err("unknown engine");
        let rendered = format!("{}", err);
        assert!(rendered.contains("Did you mean"));
        assert!(rendered.contains("v12-1450"));
    }
}
