//! Generator configuration.
//!
//! Every tunable constant of the generators lives here with its default.
//! Configurations can be loaded from TOML (kebab-case keys, all optional)
//! and are validated before any sampling happens.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::generation::types::{ChannelPolicy, EnvironmentType, ObstacleKind};

/// Error type for configuration failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    FileRead(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileRead(msg) => write!(f, "Failed to read file: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Failed to parse TOML: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Closed sampling range `[min, max]` in meters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{} range [{}, {}] must be finite with a positive minimum",
                name, self.min, self.max
            )));
        }
        if self.max < self.min {
            return Err(ConfigError::Invalid(format!("{} range has max {} below min {}", name, self.max, self.min)));
        }
        Ok(())
    }
}

fn validate_fraction(name: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be within (0, 1], got {}", name, value)))
    }
}

fn validate_separation(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)))
    }
}

/// Side-length bounds and enabled types for sampled environments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EnvironmentConfig {
    /// Smallest side length (m).
    pub side_min: f64,
    /// Largest side length (m).
    pub side_max: f64,
    /// Environment types drawn from uniformly.
    pub types: Vec<EnvironmentType>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            side_min: 20.0,
            side_max: 80.0,
            types: EnvironmentType::ALL.to_vec(),
        }
    }
}

impl EnvironmentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        SizeRange::new(self.side_min, self.side_max).validate("Environment side")?;
        if self.types.is_empty() {
            return Err(ConfigError::Invalid("At least one environment type must be enabled".to_string()));
        }
        Ok(())
    }
}

/// Device density limits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DeviceConfig {
    /// Share of the area all devices together may occupy.
    pub occupancy_fraction: f64,
    /// Minimum spacing between any two devices (m).
    pub min_separation: f64,
    /// Share of the area antennas may occupy.
    pub antenna_occupancy_fraction: f64,
    /// Minimum spacing between two antennas (m).
    pub antenna_min_separation: f64,
    /// Whether one device per scenario may be flagged as the target.
    pub target_selection: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            occupancy_fraction: 0.15,
            min_separation: 2.0,
            antenna_occupancy_fraction: 0.05,
            antenna_min_separation: 10.0,
            target_selection: true,
        }
    }
}

impl DeviceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_fraction("Device occupancy fraction", self.occupancy_fraction)?;
        validate_separation("Device minimum separation", self.min_separation)?;
        validate_fraction("Antenna occupancy fraction", self.antenna_occupancy_fraction)?;
        validate_separation("Antenna minimum separation", self.antenna_min_separation)
    }
}

/// Obstacle density limits and per-kind size ranges.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ObstacleConfig {
    /// Share of the area obstacles may occupy.
    pub occupancy_fraction: f64,
    /// Minimum spacing between two obstacles (m).
    pub min_separation: f64,
    /// Obstacle kinds drawn from uniformly.
    pub kinds: Vec<ObstacleKind>,
    pub human_radius: SizeRange,
    pub stairs_width: SizeRange,
    pub stairs_length: SizeRange,
    pub wall_width: SizeRange,
    pub wall_length_min: f64,
    /// Upper wall length as a share of the environment's shorter side.
    pub wall_length_fraction: f64,
    pub furniture_width: SizeRange,
    pub furniture_height: SizeRange,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            occupancy_fraction: 0.2,
            min_separation: 5.0,
            kinds: ObstacleKind::DEFAULT_ENABLED.to_vec(),
            human_radius: SizeRange::new(0.05, 1.5),
            stairs_width: SizeRange::new(1.0, 3.0),
            stairs_length: SizeRange::new(2.0, 4.0),
            wall_width: SizeRange::new(0.25, 0.4),
            wall_length_min: 2.0,
            wall_length_fraction: 0.4,
            furniture_width: SizeRange::new(0.5, 2.0),
            furniture_height: SizeRange::new(0.5, 2.0),
        }
    }
}

impl ObstacleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_fraction("Obstacle occupancy fraction", self.occupancy_fraction)?;
        validate_separation("Obstacle minimum separation", self.min_separation)?;
        if self.kinds.is_empty() {
            return Err(ConfigError::Invalid("At least one obstacle kind must be enabled".to_string()));
        }
        self.human_radius.validate("Human radius")?;
        self.stairs_width.validate("Stairs width")?;
        self.stairs_length.validate("Stairs length")?;
        self.wall_width.validate("Wall width")?;
        validate_separation("Wall minimum length", self.wall_length_min)?;
        validate_fraction("Wall length fraction", self.wall_length_fraction)?;
        self.furniture_width.validate("Furniture width")?;
        self.furniture_height.validate("Furniture height")
    }

    /// Longest wall allowed in an environment whose shorter side is `shorter_side`.
    pub fn wall_length_max(&self, shorter_side: f64) -> f64 {
        shorter_side * self.wall_length_fraction
    }
}

/// Complete generator configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    pub environment: EnvironmentConfig,
    pub devices: DeviceConfig,
    pub obstacles: ObstacleConfig,
    pub channel_policy: ChannelPolicy,
}

impl GeneratorConfig {
    /// Load and validate a configuration from a TOML file.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to the TOML file
    ///
    /// # Returns
    ///
    /// The validated configuration, or a `ConfigError` describing the failure.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))
            .map_err(|e| ConfigError::FileRead(format!("{:#}", e)))?;

        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded generator configuration: {:?}", path);
        Ok(config)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = toml::from_str(content)
            .context("Invalid TOML format")
            .map_err(|e| ConfigError::Parse(format!("{:#}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section, plus the cross-section wall length constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.environment.validate()?;
        self.devices.validate()?;
        self.obstacles.validate()?;

        if self.obstacles.kinds.contains(&ObstacleKind::Wall) {
            let smallest_bound = self.obstacles.wall_length_max(self.environment.side_min);
            if smallest_bound < self.obstacles.wall_length_min {
                return Err(ConfigError::Invalid(format!(
                    "Wall length bound {} at the smallest environment is below the minimum wall length {}",
                    smallest_bound, self.obstacles.wall_length_min
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        assert_eq!(GeneratorConfig::from_toml_str("").unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn partial_toml_overrides_selected_fields() {
        let text = r#"
            channel-policy = "target-centric"

            [environment]
            side-min = 30.0
            types = ["outdoor"]

            [devices]
            occupancy-fraction = 0.10
            target-selection = false

            [obstacles]
            kinds = ["human", "furniture"]
            human-radius = { min = 0.2, max = 0.6 }
        "#;
        let config = GeneratorConfig::from_toml_str(text).unwrap();
        assert_eq!(config.channel_policy, ChannelPolicy::TargetCentric);
        assert_eq!(config.environment.side_min, 30.0);
        assert_eq!(config.environment.side_max, 80.0);
        assert_eq!(config.environment.types, vec![EnvironmentType::Outdoor]);
        assert_eq!(config.devices.occupancy_fraction, 0.10);
        assert!(!config.devices.target_selection);
        assert_eq!(config.devices.antenna_min_separation, 10.0);
        assert_eq!(config.obstacles.kinds, vec![ObstacleKind::Human, ObstacleKind::Furniture]);
        assert_eq!(config.obstacles.human_radius, SizeRange::new(0.2, 0.6));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let text = r#"
            [obstacles]
            stairs-width = { min = 3.0, max = 1.0 }
        "#;
        assert!(matches!(GeneratorConfig::from_toml_str(text), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(GeneratorConfig::from_toml_str("[devices"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            GeneratorConfig::from_toml_str("[environment]\ntypes = [\"underwater\"]"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = GeneratorConfig::default();
        config.devices.occupancy_fraction = 0.0;
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.devices.antenna_min_separation = -1.0;
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.environment.types.clear();
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.obstacles.kinds.clear();
        assert!(config.validate().is_err());

        let mut config = GeneratorConfig::default();
        config.environment.side_min = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn wall_bound_must_reach_minimum_wall_length() {
        let mut config = GeneratorConfig::default();
        config.environment.side_min = 4.0;
        // 4.0 * 0.4 = 1.6 < 2.0
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        // Without walls the constraint does not apply
        config.obstacles.kinds = vec![ObstacleKind::Human];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_reads_file_and_reports_missing_files() {
        let path = std::env::temp_dir().join(format!("scenario-gen-config-{}.toml", std::process::id()));
        fs::write(&path, "[environment]\nside-max = 60.0\n").unwrap();
        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.environment.side_max, 60.0);
        fs::remove_file(&path).unwrap();

        assert!(matches!(GeneratorConfig::load(&path), Err(ConfigError::FileRead(_))));
    }
}
