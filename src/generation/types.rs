//! Type definitions for scenario generation.
//!
//! Contains all data structures produced by the generators:
//! - Environment classification and axis bounds
//! - Devices (antennas, endpoints) and their placement
//! - Obstacles with their type-dependent geometry
//! - Channels derived between devices
//! - The `NetworkScenario` aggregate

use serde::{Deserialize, Serialize};

/// Simple 2D point in environment coordinates (meters, origin at the center).
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed interval on one axis.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Bounds of the given extent centered at the origin.
    pub fn centered(extent: f64) -> Self {
        Self {
            min: -extent / 2.0,
            max: extent / 2.0,
        }
    }

    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Coarse classification of an environment.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvironmentType {
    #[serde(rename = "indoor_LOS")]
    IndoorLos,
    #[serde(rename = "indoor_NLOS")]
    IndoorNlos,
    #[serde(rename = "outdoor")]
    Outdoor,
}

impl EnvironmentType {
    pub const ALL: [EnvironmentType; 3] = [EnvironmentType::IndoorLos, EnvironmentType::IndoorNlos, EnvironmentType::Outdoor];
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Antenna,
    /// Mobile handset or any other non-antenna endpoint.
    Endpoint,
}

impl DeviceType {
    pub const ALL: [DeviceType; 2] = [DeviceType::Antenna, DeviceType::Endpoint];
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Wall,
    Stairs,
    Human,
    Furniture,
}

impl ObstacleKind {
    /// Kinds sampled when the configuration does not say otherwise.
    pub const DEFAULT_ENABLED: [ObstacleKind; 3] = [ObstacleKind::Wall, ObstacleKind::Stairs, ObstacleKind::Human];
}

/// A device placed inside an environment.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Device {
    /// Sequential identifier, unique within one scenario (starts at 1).
    pub device_id: u64,
    pub device_type: DeviceType,
    pub position: Point,
    /// Set on at most one device per scenario.
    pub is_target: bool,
}

/// Geometry of an obstacle, tagged by shape.
///
/// Humans are circles. Walls, stairs and furniture are axis-aligned
/// rectangles spanning from the obstacle position to `far_corner`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "shape")]
pub enum ObstacleShape {
    #[serde(rename = "circle")]
    Circle { radius: f64 },
    #[serde(rename = "rectangle")]
    Rectangle { width: f64, length: f64, far_corner: Point },
}

impl ObstacleShape {
    pub fn area(&self) -> f64 {
        match self {
            ObstacleShape::Circle { radius } => std::f64::consts::PI * radius * radius,
            ObstacleShape::Rectangle { width, length, .. } => width * length,
        }
    }
}

/// An obstacle placed inside an environment.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Obstacle {
    /// Sequential identifier, unique within one scenario (starts at 1).
    pub obstacle_id: u64,
    pub kind: ObstacleKind,
    pub position: Point,
    pub shape: ObstacleShape,
    /// Footprint in m², derived from `shape`.
    pub area: f64,
}

impl Obstacle {
    pub fn radius(&self) -> Option<f64> {
        match self.shape {
            ObstacleShape::Circle { radius } => Some(radius),
            ObstacleShape::Rectangle { .. } => None,
        }
    }

    pub fn far_corner(&self) -> Option<Point> {
        match self.shape {
            ObstacleShape::Circle { .. } => None,
            ObstacleShape::Rectangle { far_corner, .. } => Some(far_corner),
        }
    }
}

/// Distance relation between two devices, referenced by id.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Channel {
    pub device_a_id: u64,
    pub device_a_position: Point,
    pub device_b_id: u64,
    pub device_b_position: Point,
    pub distance: f64,
}

impl Channel {
    /// True if this channel links `a` and `b`, in either order.
    pub fn connects(&self, a: u64, b: u64) -> bool {
        (self.device_a_id == a && self.device_b_id == b) || (self.device_a_id == b && self.device_b_id == a)
    }
}

/// Which device pairs receive a channel.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelPolicy {
    /// Every unordered pair of distinct devices.
    #[default]
    AllPairs,
    /// The target paired with every other device.
    TargetCentric,
}
