//! # Node Registry Module
//!
//! Owns the node records that the placement engine only reads: identifier
//! generation, name and address uniqueness, and persistence to a JSON file.
//!
//! ## File Format
//!
//! The registry file is a JSON array, rewritten in full after every
//! successful creation:
//!
//! ```json
//! [
//!   {
//!     "id": "q3ZkT0aB",
//!     "name": "Node-16",
//!     "ip": "8.8.8.8",
//!     "position": { "x": -4.686, "y": -4.686, "z": -4.686 },
//!     "created_at": "2024-05-01T12:00:00Z"
//!   }
//! ]
//! ```
//!
//! ## Concurrency
//!
//! Placement reads every existing position, so two creations racing on the
//! same snapshot could land on top of each other. `NodeRegistry` serializes
//! creations behind one lock to rule that out within a process.

pub mod node;
pub mod store;

pub use node::Node;
pub use store::{NodeRegistry, RegistryError};
