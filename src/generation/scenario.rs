//! Scenario assembly and one-shot generation.

use serde::Serialize;

use super::capacity::{CapacityClass, CapacityExceeded};
use super::channels::build_channels;
use super::devices::DeviceFactory;
use super::environment::{Environment, generate_environment};
use super::obstacles::ObstacleFactory;
use super::sampler::UniformSampler;
use super::types::{Channel, Device, Obstacle};
use crate::config::{ConfigError, GeneratorConfig};

/// Consecutive sub-ceiling rejections (antennas) tolerated before a class
/// loop gives up. Bounds the loop for samplers that only ever draw antennas.
pub const MAX_CONSECUTIVE_SKIPS: usize = 32;

/// Root structure representing one generated scenario.
///
/// Owns all of its entities; channels refer to devices by id only.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NetworkScenario {
    pub label: String,
    pub environment: Environment,
    /// True if one of `devices` carries the target flag.
    pub target_selected: bool,
    /// Devices in creation order.
    pub devices: Vec<Device>,
    /// Obstacles in creation order.
    pub obstacles: Vec<Obstacle>,
    pub channels: Vec<Channel>,
}

impl NetworkScenario {
    /// Package already generated parts into a scenario. No validation beyond
    /// deriving `target_selected` from the devices.
    pub fn assemble(label: impl Into<String>, environment: Environment, devices: Vec<Device>, obstacles: Vec<Obstacle>, channels: Vec<Channel>) -> Self {
        let target_selected = devices.iter().any(|d| d.is_target);
        Self {
            label: label.into(),
            environment,
            target_selected,
            devices,
            obstacles,
            channels,
        }
    }

    pub fn target(&self) -> Option<&Device> {
        self.devices.iter().find(|d| d.is_target)
    }
}

/// How many objects of each class to request.
///
/// Requests beyond a factory ceiling are cut short once that class's
/// ceiling is reached. An antenna rejection only skips the draw; the device
/// loop continues with further draws until the device ceiling is hit or
/// `MAX_CONSECUTIVE_SKIPS` antenna rejections occur in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioRequest {
    pub devices: usize,
    pub obstacles: usize,
}

impl ScenarioRequest {
    /// Request objects until the device and obstacle ceilings are reached.
    pub const SATURATED: ScenarioRequest = ScenarioRequest {
        devices: usize::MAX,
        obstacles: usize::MAX,
    };
}

/// Generate a complete scenario.
///
/// Samples the environment, drives the device factory and then the obstacle
/// factory, derives channels under `config.channel_policy` and assembles the
/// result. Identical sampler sequences produce identical scenarios.
///
/// # Returns
///
/// The scenario, or `ConfigError` if the configuration is invalid. Capacity
/// rejections are not errors here; a class ceiling ends generation for that
/// class and antenna rejections are skipped.
pub fn generate_scenario<S: UniformSampler>(
    label: impl Into<String>,
    config: &GeneratorConfig,
    request: ScenarioRequest,
    sampler: &mut S,
) -> Result<NetworkScenario, ConfigError> {
    config.validate()?;
    let label = label.into();

    let environment = generate_environment(&config.environment, sampler)?;
    let mut device_factory = DeviceFactory::new(&environment, &config.devices)?;
    let mut obstacle_factory = ObstacleFactory::new(&environment, &config.obstacles)?;

    let devices = drain(request.devices, CapacityClass::Device, || device_factory.create_device(sampler));
    let obstacles = drain(request.obstacles, CapacityClass::Obstacle, || obstacle_factory.create_obstacle(sampler));
    let channels = build_channels(&devices, config.channel_policy);

    let scenario = NetworkScenario::assemble(label, environment, devices, obstacles, channels);
    log::info!(
        "Assembled scenario {}: {} devices, {} obstacles, {} channels, target selected: {}",
        scenario.label,
        scenario.devices.len(),
        scenario.obstacles.len(),
        scenario.channels.len(),
        scenario.target_selected
    );
    Ok(scenario)
}

/// Collect up to `count` items from `create`.
///
/// Stops at the first rejection of `class` itself. Rejections of any other
/// class are skipped, up to `MAX_CONSECUTIVE_SKIPS` in a row.
fn drain<T>(count: usize, class: CapacityClass, mut create: impl FnMut() -> Result<T, CapacityExceeded>) -> Vec<T> {
    let mut items = Vec::new();
    let mut skips = 0;
    while items.len() < count {
        match create() {
            Ok(item) => {
                items.push(item);
                skips = 0;
            }
            Err(e) if e.class != class && skips + 1 < MAX_CONSECUTIVE_SKIPS => skips += 1,
            Err(e) => {
                log::debug!("Stopped after {} items: {}", items.len(), e);
                break;
            }
        }
    }
    items
}
