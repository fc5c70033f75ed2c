//! Shared utilities: client address resolution and identifier generation.

pub mod id;
pub mod ip_utils;

pub use id::{generate_node_id, DEFAULT_ID_LENGTH};
pub use ip_utils::{client_address, resolve_client_ip};
