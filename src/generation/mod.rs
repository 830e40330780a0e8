//! Scenario generation core.
//!
//! This module turns a uniform sampling source into randomized wireless
//! network scenarios. It integrates:
//! - Environment sampling (bounded rectangle and coarse type)
//! - Capacity ceilings derived from area and minimum separation
//! - Stateful device and obstacle factories
//! - Channel derivation between placed devices
//!
//! ## Module Organization
//!
//! - `types`: Core data structures (devices, obstacles, channels)
//! - `sampler`: Uniform sampling abstraction and its implementations
//! - `capacity`: Density ceilings and the capacity error
//! - `environment`: Environment value and its sampler
//! - `devices` / `obstacles`: Bounded per-scenario factories
//! - `geometry`: Distance helpers
//! - `channels`: Channel derivation policies
//! - `scenario`: Scenario aggregate and one-shot generation
//!
//! Factories are scoped to one scenario. Independent scenarios can be
//! generated in parallel as long as each worker owns its own sampler.

pub mod capacity;
pub mod channels;
pub mod devices;
pub mod environment;
pub mod geometry;
pub mod obstacles;
pub mod sampler;
pub mod scenario;
pub mod types;

// Re-export commonly used types
pub use capacity::{CapacityClass, CapacityExceeded, capacity};
pub use channels::build_channels;
pub use devices::DeviceFactory;
pub use environment::{Environment, generate_environment};
pub use obstacles::ObstacleFactory;
pub use sampler::{RandSampler, ScriptedSampler, UniformSampler};
pub use scenario::{NetworkScenario, ScenarioRequest, generate_scenario};
pub use types::{AxisBounds, Channel, ChannelPolicy, Device, DeviceType, EnvironmentType, Obstacle, ObstacleKind, ObstacleShape, Point};
