//! Engine configuration: static, loaded once, no runtime reconfiguration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tuning knobs for the trail effect. `Default` carries the reference
/// values; any subset can be overridden from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lifetime of a star glyph, in milliseconds.
    pub star_lifetime_ms: u64,
    /// Minimum quiet time before a star may spawn again (strictly exceeded).
    pub min_time_between_stars_ms: u64,
    /// Minimum pointer travel before a star may spawn again (inclusive).
    pub min_distance_between_stars: f32,
    /// Lifetime of a glow point, in milliseconds.
    pub glow_lifetime_ms: u64,
    /// Maximum gap between interpolated glow points along a segment.
    pub max_glow_point_spacing: f32,
    /// Star tints as RGB triple strings, e.g. `"249 146 253"`.
    pub colors: Vec<String>,
    /// Star sizes, in whatever unit the render adapter understands.
    pub sizes: Vec<String>,
    /// Names of the fall animations the render adapter can drive.
    pub animations: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            star_lifetime_ms: 1500,
            min_time_between_stars_ms: 250,
            min_distance_between_stars: 75.0,
            glow_lifetime_ms: 75,
            max_glow_point_spacing: 10.0,
            colors: vec!["249 146 253".into(), "252 254 255".into()],
            sizes: vec!["1.4rem".into(), "1rem".into(), "0.6rem".into()],
            animations: vec!["fall-1".into(), "fall-2".into(), "fall-3".into()],
        }
    }
}

impl EngineConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.is_empty() || self.sizes.is_empty() || self.animations.is_empty() {
            return Err(ConfigError::Invalid(
                "colors, sizes and animations palettes must be non-empty".into(),
            ));
        }
        if self.max_glow_point_spacing <= 0.0 {
            return Err(ConfigError::Invalid(
                "max_glow_point_spacing must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let config = EngineConfig::default();
        assert_eq!(config.star_lifetime_ms, 1500);
        assert_eq!(config.min_time_between_stars_ms, 250);
        assert_eq!(config.min_distance_between_stars, 75.0);
        assert_eq!(config.glow_lifetime_ms, 75);
        assert_eq!(config.max_glow_point_spacing, 10.0);
        assert_eq!(config.colors.len(), 2);
        assert_eq!(config.sizes.len(), 3);
        assert_eq!(config.animations.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_keep_defaults() {
        let config: EngineConfig =
            toml::from_str("glow_lifetime_ms = 120\ncolors = [\"255 255 255\"]").unwrap();
        assert_eq!(config.glow_lifetime_ms, 120);
        assert_eq!(config.colors, vec!["255 255 255".to_string()]);
        assert_eq!(config.star_lifetime_ms, 1500);
    }

    #[test]
    fn empty_palette_is_rejected() {
        let mut config = EngineConfig::default();
        config.sizes.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn non_positive_spacing_is_rejected() {
        let mut config = EngineConfig::default();
        config.max_glow_point_spacing = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
