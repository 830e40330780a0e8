//! Environment sampling.
//!
//! An environment is the bounded rectangle every other object is placed in.
//! Width and height are drawn independently within the configured side-length
//! bounds and the rectangle is centered at the origin.

use serde::Serialize;

use super::sampler::UniformSampler;
use super::types::{AxisBounds, EnvironmentType, Point};
use crate::config::{ConfigError, EnvironmentConfig};

/// Bounded region and coarse classification of one scenario.
///
/// Immutable once built; construct through [`generate_environment`] or
/// [`Environment::from_dimensions`].
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Environment {
    x_bounds: AxisBounds,
    y_bounds: AxisBounds,
    env_type: EnvironmentType,
    /// Area in m², always `width * height`.
    area: f64,
}

impl Environment {
    /// Build an environment of explicit size, centered at the origin.
    pub fn from_dimensions(width: f64, height: f64, env_type: EnvironmentType) -> Result<Self, ConfigError> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "Environment dimensions must be positive, got {} x {}",
                width, height
            )));
        }
        Ok(Self {
            x_bounds: AxisBounds::centered(width),
            y_bounds: AxisBounds::centered(height),
            env_type,
            area: width * height,
        })
    }

    pub fn x_bounds(&self) -> AxisBounds {
        self.x_bounds
    }

    pub fn y_bounds(&self) -> AxisBounds {
        self.y_bounds
    }

    pub fn width(&self) -> f64 {
        self.x_bounds.extent()
    }

    pub fn height(&self) -> f64 {
        self.y_bounds.extent()
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn env_type(&self) -> EnvironmentType {
        self.env_type
    }

    /// Inclusive bounds test.
    pub fn contains(&self, p: &Point) -> bool {
        self.x_bounds.contains(p.x) && self.y_bounds.contains(p.y)
    }
}

/// Sample a new environment.
///
/// Draw order: width, height, then the environment type from the enabled set.
/// The configuration is validated before any draw is made.
pub fn generate_environment<S: UniformSampler>(config: &EnvironmentConfig, sampler: &mut S) -> Result<Environment, ConfigError> {
    config.validate()?;

    let width = sampler.uniform(config.side_min, config.side_max);
    let height = sampler.uniform(config.side_min, config.side_max);
    let env_type = *sampler.choose(&config.types);

    let environment = Environment::from_dimensions(width, height, env_type)?;
    log::debug!(
        "Generated {:?} environment {:.2} x {:.2} (area {:.2} m²)",
        env_type,
        width,
        height,
        environment.area()
    );
    Ok(environment)
}
