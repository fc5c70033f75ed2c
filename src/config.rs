use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::placement::PlacementParams;
use crate::utils::id::DEFAULT_ID_LENGTH;

/// Top-level service configuration that mirrors the YAML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Node registry settings
    pub registry: RegistryConfig,
    /// Geometry of the placement volume
    pub placement: PlacementParams,
    /// Default log filter (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Node registry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Path of the JSON registry file
    pub path: PathBuf,
    /// Length of generated node identifiers
    pub id_length: usize,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid placement configuration: {0}")]
    InvalidPlacement(String),
    #[error("Invalid registry configuration: {0}")]
    InvalidRegistry(String),
    #[error("Invalid id length: {0}")]
    InvalidIdLength(usize),
}

impl ServiceConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let PlacementParams { min_distance, bound } = self.placement;

        if !min_distance.is_finite() || min_distance <= 0.0 {
            return Err(ConfigError::InvalidPlacement(format!(
                "min_distance must be a positive number, got {}",
                min_distance
            )));
        }

        if !(2.0 * bound).is_finite() || bound <= 0.0 {
            return Err(ConfigError::InvalidPlacement(format!(
                "bound must be a positive number, got {}",
                bound
            )));
        }

        if self.registry.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidRegistry(
                "path cannot be empty".to_string(),
            ));
        }

        if self.registry.id_length == 0 {
            return Err(ConfigError::InvalidIdLength(self.registry.id_length));
        }

        Ok(())
    }
}

/// Default implementations
impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            placement: PlacementParams::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("nodes.json"),
            id_length: DEFAULT_ID_LENGTH,
        }
    }
}
