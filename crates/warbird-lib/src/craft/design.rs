//! Design selections and their resolution against the catalogs.
//!
//! A [`DesignSelection`] is the user-facing document: component names per
//! slot, an engine count, armament mounts, and a feature set. Resolution
//! turns it into an [`AircraftDesign`] holding catalog references, and
//! performs every validation the numeric core relies on having already
//! happened.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::craft::catalog;
use crate::craft::components::{
    Armament, Cooling, CrewSystem, Doctrine, Engine, Feature, FuelSystem, LandingGear, Propeller,
    Structure, Supercharger, Wing,
};
use crate::error::{Error, Result};

/// Most engines a single design can mount.
pub const MAX_ENGINE_COUNT: u32 = 4;

/// One armament selection with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmamentMount {
    pub name: String,
    pub count: u32,
}

/// Selected component names for one aircraft design.
///
/// This is the serialized design-file format: every slot names a catalog
/// entry, `engine_count` defaults to one, and `features`/`armament` default
/// to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSelection {
    /// Display name for the design.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub doctrine: String,
    pub structure: String,
    pub wing: String,
    pub landing_gear: String,
    pub engine: String,
    #[serde(default = "default_engine_count")]
    pub engine_count: u32,
    pub propeller: String,
    pub cooling: String,
    pub fuel_system: String,
    pub supercharger: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub armament: Vec<ArmamentMount>,
}

fn default_engine_count() -> u32 {
    1
}

impl DesignSelection {
    /// Load a design selection from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a design selection from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let selection: Self = serde_json::from_reader(reader)?;
        Ok(selection)
    }

    /// Resolve every named component against the catalogs.
    ///
    /// Validates the selection as a whole: unknown names fail with
    /// suggestions, the engine count must be within `1..=MAX_ENGINE_COUNT`,
    /// every armament mount needs a positive count, and a feature may be
    /// selected at most once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownComponent`], [`Error::DesignValidation`], or
    /// [`Error::DuplicateFeature`] accordingly.
    pub fn resolve(&self) -> Result<AircraftDesign> {
        if self.engine_count < 1 || self.engine_count > MAX_ENGINE_COUNT {
            return Err(Error::DesignValidation {
                message: format!(
                    "engine_count must be between 1 and {MAX_ENGINE_COUNT}, got {}",
                    self.engine_count
                ),
            });
        }

        let mut features: Vec<&'static Feature> = Vec::with_capacity(self.features.len());
        for name in &self.features {
            let feature = catalog::feature(name)?;
            if features.iter().any(|f| f.name == feature.name) {
                return Err(Error::DuplicateFeature {
                    name: feature.name.to_string(),
                });
            }
            features.push(feature);
        }

        let mut armament: Vec<MountedArmament> = Vec::with_capacity(self.armament.len());
        for mount in &self.armament {
            if mount.count < 1 {
                return Err(Error::DesignValidation {
                    message: format!("armament '{}' must have a count of at least 1", mount.name),
                });
            }
            armament.push(MountedArmament {
                armament: catalog::armament(&mount.name)?,
                count: mount.count,
            });
        }

        let design = AircraftDesign {
            name: self.name.clone(),
            doctrine: catalog::doctrine(&self.doctrine)?,
            structure: catalog::structure(&self.structure)?,
            wing: catalog::wing(&self.wing)?,
            landing_gear: catalog::landing_gear(&self.landing_gear)?,
            engine: catalog::engine(&self.engine)?,
            engine_count: self.engine_count,
            propeller: catalog::propeller(&self.propeller)?,
            cooling: catalog::cooling(&self.cooling)?,
            fuel_system: catalog::fuel_system(&self.fuel_system)?,
            supercharger: catalog::supercharger(&self.supercharger)?,
            features,
            armament,
        };

        debug!(
            engine = design.engine.name,
            engine_count = design.engine_count,
            wing = design.wing.name,
            "design resolved"
        );

        Ok(design)
    }
}

/// An armament catalog entry together with how many are mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedArmament {
    pub armament: &'static Armament,
    pub count: u32,
}

/// A fully resolved design: every slot points at its catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftDesign {
    pub name: Option<String>,
    pub doctrine: &'static Doctrine,
    pub structure: &'static Structure,
    pub wing: &'static Wing,
    pub landing_gear: &'static LandingGear,
    pub engine: &'static Engine,
    pub engine_count: u32,
    pub propeller: &'static Propeller,
    pub cooling: &'static Cooling,
    pub fuel_system: &'static FuelSystem,
    pub supercharger: &'static Supercharger,
    pub features: Vec<&'static Feature>,
    pub armament: Vec<MountedArmament>,
}

impl AircraftDesign {
    /// Whether any selected feature provides the given crew system.
    pub fn has_crew_system(&self, system: CrewSystem) -> bool {
        self.features.iter().any(|f| f.crew_system == Some(system))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fighter_json() -> &'static str {
        r#"{
            "name": "Sparrowhawk",
            "doctrine": "dogfighter",
            "structure": "duralumin-monocoque",
            "wing": "elliptical",
            "landing_gear": "retractable",
            "engine": "v12-1450",
            "engine_count": 1,
            "propeller": "constant-speed",
            "cooling": "liquid-cooled",
            "fuel_system": "standard-tankage",
            "supercharger": "single-stage-high",
            "features": ["oxygen-system", "armored-cockpit"],
            "armament": [
                {"name": "heavy-mg", "count": 4},
                {"name": "cannon-20mm", "count": 2}
            ]
        }"#
    }

    #[test]
    fn full_selection_resolves() {
        let selection =
            DesignSelection::from_reader(Cursor::new(fighter_json())).expect("selection parses");
        let design = selection.resolve().expect("selection resolves");

        assert_eq!(design.name.as_deref(), Some("Sparrowhawk"));
        assert_eq!(design.engine.power_hp, 1450.0);
        assert_eq!(design.engine_count, 1);
        assert_eq!(design.supercharger.rated_altitude_m, Some(5500.0));
        assert_eq!(design.features.len(), 2);
        assert_eq!(design.armament.len(), 2);
        assert!(design.has_crew_system(CrewSystem::OxygenSystem));
        assert!(!design.has_crew_system(CrewSystem::PressurizedCabin));
    }

    #[test]
    fn engine_count_defaults_to_one() {
        let json = r#"{
            "doctrine": "general-purpose",
            "structure": "wood-frame",
            "wing": "rectangular",
            "landing_gear": "fixed",
            "engine": "radial-750",
            "propeller": "fixed-pitch-wood",
            "cooling": "air-cooled",
            "fuel_system": "minimal-tankage",
            "supercharger": "none"
        }"#;
        let selection = DesignSelection::from_reader(Cursor::new(json)).expect("parses");

        assert_eq!(selection.engine_count, 1);
        assert!(selection.features.is_empty());
        assert!(selection.armament.is_empty());
        assert!(selection.resolve().is_ok());
    }

    #[test]
    fn unknown_engine_fails_with_suggestion() {
        let mut selection =
            DesignSelection::from_reader(Cursor::new(fighter_json())).expect("parses");
        selection.engine = "v12-1540".to_string();

        let err = selection.resolve().expect_err("unknown engine");
        let rendered = format!("{}", err);
        assert!(rendered.contains("unknown engine"));
        assert!(rendered.contains("v12-1450"));
    }

    #[test]
    fn zero_engines_is_rejected() {
        let mut selection =
            DesignSelection::from_reader(Cursor::new(fighter_json())).expect("parses");
        selection.engine_count = 0;

        let err = selection.resolve().expect_err("zero engines");
        assert!(matches!(err, Error::DesignValidation { .. }));
    }

    #[test]
    fn five_engines_is_rejected() {
        let mut selection =
            DesignSelection::from_reader(Cursor::new(fighter_json())).expect("parses");
        selection.engine_count = 5;

        let err = selection.resolve().expect_err("five engines");
        assert!(matches!(err, Error::DesignValidation { .. }));
    }

    #[test]
    fn zero_count_mount_is_rejected() {
        let mut selection =
            DesignSelection::from_reader(Cursor::new(fighter_json())).expect("parses");
        selection.armament.push(ArmamentMount {
            name: "rifle-mg".to_string(),
            count: 0,
        });

        let err = selection.resolve().expect_err("zero-count mount");
        assert!(matches!(err, Error::DesignValidation { .. }));
    }

    #[test]
    fn duplicate_feature_is_rejected_case_insensitively() {
        let mut selection =
            DesignSelection::from_reader(Cursor::new(fighter_json())).expect("parses");
        selection.features.push("Armored-Cockpit".to_string());

        let err = selection.resolve().expect_err("duplicate feature");
        match err {
            Error::DuplicateFeature { name } => assert_eq!(name, "armored-cockpit"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn repeated_armament_mounts_are_allowed() {
        let mut selection =
            DesignSelection::from_reader(Cursor::new(fighter_json())).expect("parses");
        selection.armament.push(ArmamentMount {
            name: "heavy-mg".to_string(),
            count: 2,
        });

        let design = selection.resolve().expect("repeat mounts resolve");
        assert_eq!(design.armament.len(), 3);
    }

    #[test]
    fn malformed_json_surfaces_as_json_error() {
        let err = DesignSelection::from_reader(Cursor::new("{not json"))
            .expect_err("malformed document");
        assert!(matches!(err, Error::Json(_)));
    }
}
