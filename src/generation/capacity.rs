//! Density ceilings for placed objects.
//!
//! Every object class is modeled as a disk whose diameter is the class's
//! minimum separation. The ceiling is how many such disks fit, by area alone,
//! into the usable share of the environment. This bounds how many objects may
//! be requested; it does not prevent overlap.

use std::f64::consts::PI;

/// Object classes with a capacity ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityClass {
    Device,
    Antenna,
    Obstacle,
}

impl std::fmt::Display for CapacityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityClass::Device => write!(f, "device"),
            CapacityClass::Antenna => write!(f, "antenna"),
            CapacityClass::Obstacle => write!(f, "obstacle"),
        }
    }
}

/// A factory was asked for more objects of a class than its ceiling allows.
///
/// Recoverable: the caller should stop requesting this class for the
/// current scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    pub class: CapacityClass,
    pub limit: usize,
}

impl std::fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Exceeded maximum {} count of {}", self.class, self.limit)
    }
}

impl std::error::Error for CapacityExceeded {}

/// Maximum object count for an area.
///
/// # Formula
///
/// ```text
/// footprint = π · (min_separation / 2)²
/// capacity  = max(1, floor(area · occupancy_fraction / footprint))
/// ```
///
/// # Parameters
///
/// * `area` - Environment area in m²
/// * `occupancy_fraction` - Share of the area the class may occupy, in (0, 1]
/// * `min_separation` - Minimum spacing between two objects of the class in m
///
/// # Returns
///
/// The ceiling, never below 1 so that even a tiny environment holds one object.
pub fn capacity(area: f64, occupancy_fraction: f64, min_separation: f64) -> usize {
    let footprint = PI * (min_separation / 2.0).powi(2);
    let usable_area = area * occupancy_fraction;
    let fitted = (usable_area / footprint).floor();
    if fitted.is_finite() && fitted >= 1.0 { fitted as usize } else { 1 }
}
