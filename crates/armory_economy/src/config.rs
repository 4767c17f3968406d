//! # Generator Configuration
//!
//! Balance knobs for container openings, loaded once at startup from
//! external TOML. Probabilities are basis points (10000 = 100%), so
//! the hot path stays in integer math.

use std::collections::BTreeMap;
use std::path::Path;

use armory_items::EconRarity;
use serde::{Deserialize, Serialize};

use crate::error::{EconomyError, EconomyResult};

/// Basis point scale: 10000 = 100%.
pub const BP_SCALE: u32 = 10_000;

/// Balance configuration for the item generator.
///
/// Deserializable from TOML; missing fields fall back to the
/// documented defaults, so a config file only has to name the knobs it
/// overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Aggregate draw weight per rarity tier.
    ///
    /// Tiers absent from the map get weight 0 and are never drawn.
    pub tier_weights: BTreeMap<EconRarity, u32>,
    /// Chance of hitting the rare special pool, in basis points.
    pub rare_special_chance_bp: u32,
    /// Chance of a generated finish being StatTrak, in basis points.
    pub stat_trak_chance_bp: u32,
}

impl Default for GeneratorConfig {
    /// Baseline tuned to the community-measured container odds:
    /// Blue 800 / Purple 160 / Pink 32 / Red 6 (steps of ~5x),
    /// rare special 0.26%, StatTrak 10%.
    fn default() -> Self {
        let mut tier_weights = BTreeMap::new();
        tier_weights.insert(EconRarity::Blue, 800);
        tier_weights.insert(EconRarity::Purple, 160);
        tier_weights.insert(EconRarity::Pink, 32);
        tier_weights.insert(EconRarity::Red, 6);
        Self {
            tier_weights,
            rare_special_chance_bp: 26,
            stat_trak_chance_bp: 1000,
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidConfig` on parse failure or
    /// out-of-range values.
    pub fn from_toml_str(text: &str) -> EconomyResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| EconomyError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidConfig` if the file cannot be
    /// read or parsed.
    pub fn from_path(path: &Path) -> EconomyResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| EconomyError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Checks that probability knobs stay inside the basis point scale.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidConfig` naming the offending knob.
    pub fn validate(&self) -> EconomyResult<()> {
        if self.rare_special_chance_bp > BP_SCALE {
            return Err(EconomyError::InvalidConfig(format!(
                "rare_special_chance_bp {} above {BP_SCALE}",
                self.rare_special_chance_bp
            )));
        }
        if self.stat_trak_chance_bp > BP_SCALE {
            return Err(EconomyError::InvalidConfig(format!(
                "stat_trak_chance_bp {} above {BP_SCALE}",
                self.stat_trak_chance_bp
            )));
        }
        Ok(())
    }

    /// Draw weight for a tier, 0 when unlisted.
    #[inline]
    #[must_use]
    pub fn tier_weight(&self, rarity: EconRarity) -> u32 {
        self.tier_weights.get(&rarity).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ladder_steps_down() {
        let config = GeneratorConfig::default();
        assert_eq!(config.tier_weight(EconRarity::Blue), 800);
        assert_eq!(config.tier_weight(EconRarity::Purple), 160);
        assert_eq!(config.tier_weight(EconRarity::Pink), 32);
        assert_eq!(config.tier_weight(EconRarity::Red), 6);
        assert_eq!(config.tier_weight(EconRarity::Gold), 0);
        assert_eq!(config.rare_special_chance_bp, 26);
        assert_eq!(config.stat_trak_chance_bp, 1000);
    }

    #[test]
    fn test_full_toml_reproduces_the_default() {
        let text = "\
rare_special_chance_bp = 26
stat_trak_chance_bp = 1000

[tier_weights]
Blue = 800
Purple = 160
Pink = 32
Red = 6
";
        let parsed = GeneratorConfig::from_toml_str(text).unwrap();
        assert_eq!(parsed, GeneratorConfig::default());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let parsed = GeneratorConfig::from_toml_str("stat_trak_chance_bp = 2500\n").unwrap();
        assert_eq!(parsed.stat_trak_chance_bp, 2500);
        assert_eq!(parsed.rare_special_chance_bp, 26);
        assert_eq!(parsed.tier_weight(EconRarity::Blue), 800);
    }

    #[test]
    fn test_out_of_scale_chance_is_rejected() {
        let result = GeneratorConfig::from_toml_str("rare_special_chance_bp = 10001\n");
        assert!(matches!(result, Err(EconomyError::InvalidConfig(_))));
    }
}
