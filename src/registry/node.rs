//! Node record stored in the registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::placement::Point;

/// A placed network participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Random alphanumeric identifier
    pub id: String,
    /// Display name, unique within a registry
    pub name: String,
    /// Canonical IPv4 address, unique within a registry
    pub ip: String,
    /// Position assigned at creation time
    pub position: Point,
    pub created_at: DateTime<Utc>,
}

impl Node {
    pub fn new(id: String, name: &str, ip: String, position: Point) -> Self {
        Self {
            id,
            name: name.to_string(),
            ip,
            position,
            created_at: Utc::now(),
        }
    }
}
