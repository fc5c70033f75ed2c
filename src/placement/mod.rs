//! Node placement engine.
//!
//! Turns a raw address string into a position inside a fixed cube:
//!
//! 1. `address`: validate and canonicalize the IPv4 address
//! 2. `mapper`: map the first three octets onto x, y, z
//! 3. `collision`: push the point away from close neighbors in one ordered
//!    pass, then clamp it into the cube
//!
//! `engine::PlacementEngine` runs the three steps. Everything here is pure:
//! no I/O, no logging, no shared state. Callers that persist placements are
//! responsible for serializing concurrent "read nodes, place, store" runs.

pub mod address;
pub mod mapper;
pub mod collision;
pub mod engine;
mod point;

pub use address::{validate_address, AddressError};
pub use collision::resolve_collisions;
pub use engine::{Placement, PlacementEngine, PlacementParams};
pub use mapper::map_address;
pub use point::Point;
