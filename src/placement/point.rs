//! Point type for positions inside the placement cube.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the 3D placement volume
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The center of the cube, also used as the fallback position
    pub fn origin() -> Self {
        Self::default()
    }

    /// Euclidean distance between two points
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Clamp every coordinate independently into `[-bound, bound]`
    pub fn clamped(&self, bound: f64) -> Self {
        let clamp = |v: f64| (-bound).max(bound.min(v));
        Self {
            x: clamp(self.x),
            y: clamp(self.y),
            z: clamp(self.z),
        }
    }

    /// Returns true if every coordinate lies in `[-bound, bound]`
    pub fn within(&self, bound: f64) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|v| (-bound..=bound).contains(v))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
