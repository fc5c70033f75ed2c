//! Placement pipeline: validate, map, resolve.

use serde::{Deserialize, Serialize};

use super::address::{validate_ipv4, AddressError};
use super::collision::resolve_collisions;
use super::mapper::map_address;
use super::point::Point;

/// Minimum distance the resolver tries to keep between nodes
pub const DEFAULT_MIN_DISTANCE: f64 = 1.0;

/// Half the edge length of the placement cube
pub const DEFAULT_BOUND: f64 = 5.0;

/// Geometry of the placement volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    /// Neighbors closer than this push a new node away
    pub min_distance: f64,
    /// Coordinates are kept within `[-bound, bound]`
    pub bound: f64,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            bound: DEFAULT_BOUND,
        }
    }
}

/// Result of placing one address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    /// Canonical dotted-quad address
    pub address: String,
    /// Final, resolved position
    pub point: Point,
}

/// Stateless placement engine.
///
/// Holds only its geometry; the set of already placed points is supplied
/// on every call, so a single engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementEngine {
    params: PlacementParams,
}

impl PlacementEngine {
    pub fn new(params: PlacementParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PlacementParams {
        &self.params
    }

    /// Place `raw` against the existing points, in the order given.
    ///
    /// # Examples
    /// ```
    /// use ipspace::placement::{PlacementEngine, Point};
    ///
    /// let engine = PlacementEngine::default();
    /// let placement = engine.place("8.8.8.8", &Vec::<Point>::new())?;
    /// assert_eq!(placement.address, "8.8.8.8");
    /// assert!((placement.point.x + 4.686).abs() < 0.001);
    /// # Ok::<(), ipspace::placement::AddressError>(())
    /// ```
    pub fn place<'a, I>(&self, raw: &str, existing: I) -> Result<Placement, AddressError>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let ip = validate_ipv4(raw)?;
        let raw_point = map_address(ip.into(), self.params.bound);
        let point = resolve_collisions(raw_point, existing, self.params.min_distance, self.params.bound);

        Ok(Placement {
            address: ip.to_string(),
            point,
        })
    }
}
