//! Device factory.
//!
//! A `DeviceFactory` is bound to one environment and hands out devices one
//! at a time until its device or antenna ceiling is reached. Ceilings are
//! computed once, at construction, from the environment area.

use super::capacity::{CapacityClass, CapacityExceeded, capacity};
use super::environment::Environment;
use super::sampler::UniformSampler;
use super::types::{Device, DeviceType};
use crate::config::{ConfigError, DeviceConfig};

/// Stateful device generator for a single scenario.
///
/// Must not be reused across scenarios: counters and the target flag are
/// scoped to the environment it was built for.
#[derive(Debug, Clone)]
pub struct DeviceFactory {
    environment: Environment,
    device_max: usize,
    antenna_max: usize,
    target_selection: bool,
    device_counter: usize,
    antenna_counter: usize,
    target_assigned: bool,
}

impl DeviceFactory {
    pub fn new(environment: &Environment, config: &DeviceConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let device_max = capacity(environment.area(), config.occupancy_fraction, config.min_separation);
        let antenna_max = capacity(environment.area(), config.antenna_occupancy_fraction, config.antenna_min_separation);
        log::debug!(
            "Device factory ceilings for area {:.2} m²: {} devices, {} antennas",
            environment.area(),
            device_max,
            antenna_max
        );

        Ok(Self {
            environment: environment.clone(),
            device_max,
            antenna_max,
            target_selection: config.target_selection,
            device_counter: 0,
            antenna_counter: 0,
            target_assigned: false,
        })
    }

    /// Create the next device.
    ///
    /// Draw order: device type, then (if target selection is enabled) the
    /// target coin, then the position (x before y). A request rejected by the
    /// antenna ceiling consumes only the type draw and changes no counter.
    ///
    /// # Returns
    ///
    /// The new device, or `CapacityExceeded` when the device ceiling (checked
    /// first) or the antenna ceiling has been reached.
    pub fn create_device<S: UniformSampler>(&mut self, sampler: &mut S) -> Result<Device, CapacityExceeded> {
        if self.device_counter >= self.device_max {
            log::debug!("Device request rejected: ceiling of {} reached", self.device_max);
            return Err(CapacityExceeded {
                class: CapacityClass::Device,
                limit: self.device_max,
            });
        }

        let device_type = *sampler.choose(&DeviceType::ALL);
        if device_type == DeviceType::Antenna {
            if self.antenna_counter >= self.antenna_max {
                log::debug!("Antenna request rejected: ceiling of {} reached", self.antenna_max);
                return Err(CapacityExceeded {
                    class: CapacityClass::Antenna,
                    limit: self.antenna_max,
                });
            }
            self.antenna_counter += 1;
        }

        let mut is_target = false;
        if self.target_selection && sampler.coin() && !self.target_assigned {
            self.target_assigned = true;
            is_target = true;
        }

        self.device_counter += 1;
        let position = sampler.point_within(&self.environment);

        Ok(Device {
            device_id: self.device_counter as u64,
            device_type,
            position,
            is_target,
        })
    }

    pub fn device_max(&self) -> usize {
        self.device_max
    }

    pub fn antenna_max(&self) -> usize {
        self.antenna_max
    }

    pub fn devices_created(&self) -> usize {
        self.device_counter
    }

    pub fn antennas_created(&self) -> usize {
        self.antenna_counter
    }

    pub fn target_assigned(&self) -> bool {
        self.target_assigned
    }
}
