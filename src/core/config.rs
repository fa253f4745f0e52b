//! Policy configuration with documented constants
//!
//! The dungeon layout and every threshold the decision policy compares
//! against live here. Defaults reproduce the tuned values of the live game
//! (4 floors of 4 rooms, 25% / 60% health gates, 1-hit / 2-hit danger).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{PolicyError, Result};

/// Shape of a dungeon run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    /// Number of floors in a run
    pub floors: u32,
    /// Number of rooms (enemies) on each floor
    ///
    /// The last room of the last floor is the final encounter.
    pub rooms_per_floor: u32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            floors: 4,
            rooms_per_floor: 4,
        }
    }
}

impl EncounterConfig {
    /// Total encounters in a run
    ///
    /// Saturates for structures `PolicyConfig::validate` would reject.
    pub fn total_encounters(&self) -> u32 {
        self.floors.saturating_mul(self.rooms_per_floor)
    }
}

/// Thresholds for the staged decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Hits of max enemy damage that count as an absolute emergency
    ///
    /// At 1, the player uses a heal whenever the next hit can kill.
    pub emergency_hits: u32,

    /// Hits of max enemy damage that count as dangerous
    ///
    /// Gates early-run usage (together with `early_health_ratio`) and
    /// triggers usage outright on the final encounter.
    pub danger_hits: u32,

    /// Health ratio below which an early encounter may spend a heal
    ///
    /// Only effective while also in danger. Kept low so heals are saved
    /// for the final encounter.
    pub early_health_ratio: f64,

    /// Health ratio below which the final encounter spends a heal
    pub final_health_ratio: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            emergency_hits: 1,
            danger_hits: 2,
            early_health_ratio: 0.25,
            final_health_ratio: 0.6,
        }
    }
}

/// Complete policy configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub encounters: EncounterConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

impl PolicyConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: PolicyConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.encounters.floors == 0 || self.encounters.rooms_per_floor == 0 {
            return Err(PolicyError::InvalidConfig(format!(
                "encounter structure must be non-empty (floors = {}, rooms_per_floor = {})",
                self.encounters.floors, self.encounters.rooms_per_floor
            )));
        }
        if self
            .encounters
            .floors
            .checked_mul(self.encounters.rooms_per_floor)
            .is_none()
        {
            return Err(PolicyError::InvalidConfig(format!(
                "encounter structure too large (floors = {}, rooms_per_floor = {})",
                self.encounters.floors, self.encounters.rooms_per_floor
            )));
        }

        let t = &self.thresholds;
        if t.emergency_hits == 0 {
            return Err(PolicyError::InvalidConfig(
                "emergency_hits must be at least 1".into(),
            ));
        }
        if t.danger_hits < t.emergency_hits {
            return Err(PolicyError::InvalidConfig(format!(
                "danger_hits ({}) should be >= emergency_hits ({})",
                t.danger_hits, t.emergency_hits
            )));
        }

        for (name, ratio) in [
            ("early_health_ratio", t.early_health_ratio),
            ("final_health_ratio", t.final_health_ratio),
        ] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(PolicyError::InvalidConfig(format!(
                    "{} ({}) must be in (0, 1]",
                    name, ratio
                )));
            }
        }

        Ok(())
    }
}

/// Load and validate a policy config from a TOML file
pub fn load_policy_config(path: &Path) -> Result<PolicyConfig> {
    let contents = fs::read_to_string(path)?;
    let config = PolicyConfig::from_toml_str(&contents)?;
    tracing::debug!("Loaded policy config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = PolicyConfig::default();
        assert_eq!(config.encounters.total_encounters(), 16);
        assert_eq!(config.thresholds.emergency_hits, 1);
        assert_eq!(config.thresholds.danger_hits, 2);
        assert_eq!(config.thresholds.early_health_ratio, 0.25);
        assert_eq!(config.thresholds.final_health_ratio, 0.6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PolicyConfig::from_toml_str("[encounters]\nfloors = 5\n").unwrap();
        assert_eq!(config.encounters.floors, 5);
        assert_eq!(config.encounters.rooms_per_floor, 4);
        assert_eq!(config.thresholds, ThresholdConfig::default());
    }

    #[test]
    fn test_rejects_zero_rooms() {
        let err = PolicyConfig::from_toml_str("[encounters]\nrooms_per_floor = 0\n").unwrap_err();
        assert!(matches!(err, PolicyError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_overflowing_structure() {
        let toml = "[encounters]\nfloors = 70000\nrooms_per_floor = 70000\n";
        let err = PolicyConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, PolicyError::InvalidConfig(_)));
    }

    #[test]
    fn test_largest_structure_accepted() {
        let mut config = PolicyConfig::default();
        config.encounters.floors = 65536;
        config.encounters.rooms_per_floor = 65535;
        assert!(config.validate().is_ok());
        assert_eq!(config.encounters.total_encounters(), 4_294_901_760);
    }

    #[test]
    fn test_rejects_unordered_hits() {
        let mut config = PolicyConfig::default();
        config.thresholds.danger_hits = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_ratio_out_of_range() {
        let mut config = PolicyConfig::default();
        config.thresholds.final_health_ratio = 1.5;
        assert!(config.validate().is_err());

        config.thresholds.final_health_ratio = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = PolicyConfig::from_toml_str("[thresholds\n").unwrap_err();
        assert!(matches!(err, PolicyError::TomlError(_)));
    }
}
