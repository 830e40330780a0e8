//! Randomized wireless network scenario synthesis.
//!
//! Generates bounded 2D environments populated with devices (antennas,
//! endpoints) and obstacles (walls, stairs, humans, furniture), plus the
//! pairwise device distances implied by their placement. Object counts are
//! capped by per-class density ceilings derived from the environment area.
//!
//! ```no_run
//! use wireless_scenario_gen::{GeneratorConfig, RandSampler, ScenarioRequest, generate_scenario};
//!
//! let config = GeneratorConfig::default();
//! let mut sampler = RandSampler::seeded(7);
//! let request = ScenarioRequest { devices: 25, obstacles: 10 };
//! let scenario = generate_scenario("scenario_1", &config, request, &mut sampler)?;
//! println!("{} devices, {} channels", scenario.devices.len(), scenario.channels.len());
//! # Ok::<(), wireless_scenario_gen::ConfigError>(())
//! ```

pub mod config;
pub mod generation;

pub use config::{ConfigError, DeviceConfig, EnvironmentConfig, GeneratorConfig, ObstacleConfig, SizeRange};
pub use generation::*;
