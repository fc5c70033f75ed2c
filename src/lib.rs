//! # ipspace - Deterministic 3D placement of network nodes
//!
//! This library records network participants ("nodes") and gives each one a
//! position inside a bounded cube, derived from its IPv4 address, while
//! nudging new nodes away from the ones already placed.
//!
//! ## Overview
//!
//! Placement runs in three pure steps:
//!
//! - **Validate**: strip a `:port` suffix, accept only private, loopback or
//!   global unicast IPv4 addresses
//! - **Map**: the first three octets become x, y, z in `[-5, 5]`
//! - **Resolve**: one ordered pass pushes the point away from neighbors
//!   closer than `1.0`, then the point is clamped back into the cube
//!
//! The same address always maps to the same raw position. The final
//! position also depends on the existing nodes and the order they are
//! given in.
//!
//! ## Architecture
//!
//! - `placement`: address validation, mapping, collision resolution and the
//!   `PlacementEngine` pipeline (no I/O)
//! - `registry`: node records, uniqueness checks and the JSON-file-backed
//!   `NodeRegistry`
//! - `config` / `config_loader`: YAML configuration with environment and
//!   CLI overrides
//! - `utils`: client address resolution behind proxies, id generation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ipspace::placement::PlacementEngine;
//! use ipspace::registry::NodeRegistry;
//!
//! let registry = NodeRegistry::open("nodes.json", PlacementEngine::default(), 8)?;
//! let node = registry.create_node("Node-1", "8.8.8.8")?;
//! println!("{} placed at {}", node.ip, node.position);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Library errors are typed (`AddressError`, `RegistryError`, `ConfigError`).
//! The binaries and the configuration loader report through `color_eyre`.

pub mod config;
pub mod config_loader;
pub mod placement;
pub mod registry;
pub mod utils;
