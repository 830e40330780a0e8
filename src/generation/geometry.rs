//! Distance helpers.
//!
//! Distance is plain Euclidean distance between positions; no obstacle
//! geometry is taken into account.

use super::types::Point;

/// Squared Euclidean distance (dx² + dy²).
///
/// Cheaper than [`distance`] when only comparing distances.
pub fn distance2(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    distance2(a, b).sqrt()
}
