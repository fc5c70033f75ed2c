use crate::config::ServiceConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{debug, info};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Environment variable overriding the registry file path
pub const ENV_REGISTRY: &str = "IPSPACE_REGISTRY";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "IPSPACE_LOG_LEVEL";

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<ServiceConfig> {
    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration file '{}'", config_path.display()))?;

    let config: ServiceConfig = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration file '{}'", config_path.display()))?;

    config.validate()?;

    Ok(config)
}

/// CLI arguments that can override file and environment settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub registry: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Effective configuration and where its values came from
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: ServiceConfig,
    /// Configuration file, if one was given
    pub source: Option<PathBuf>,
    /// Environment variables that overrode a value
    pub env_overrides: Vec<&'static str>,
}

impl ResolvedConfig {
    /// Log the configuration origin. Call once the logger is initialized.
    pub fn log_origin(&self) {
        match &self.source {
            Some(path) => info!("Loaded configuration from: {}", path.display()),
            None => info!("No configuration file given, using defaults"),
        }
        for var in &self.env_overrides {
            debug!("{} overrides configuration", var);
        }
        debug!(
            "Registry {} (id length {}), min distance {}, bound {}",
            self.config.registry.path.display(),
            self.config.registry.id_length,
            self.config.placement.min_distance,
            self.config.placement.bound
        );
    }
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Returns the names of the variables that were applied.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied = Vec::new();

    if let Some(path) = lookup(ENV_REGISTRY).filter(|v| !v.is_empty()) {
        config.registry.path = PathBuf::from(path);
        applied.push(ENV_REGISTRY);
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
        config.log_level = level;
        applied.push(ENV_LOG_LEVEL);
    }

    applied
}

/// Apply CLI overrides to a configuration
pub fn apply_cli_overrides(config: &mut ServiceConfig, overrides: &CliOverrides) -> Result<()> {
    if let Some(path) = &overrides.registry {
        config.registry.path = path.clone();
    }

    if let Some(level) = &overrides.log_level {
        config.log_level = level.clone();
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}

/// Resolve the effective configuration: file (or defaults), then
/// environment, then CLI flags
pub fn resolve_config(config_path: Option<&Path>, overrides: &CliOverrides) -> Result<ResolvedConfig> {
    resolve_config_with(config_path, overrides, |key| std::env::var(key).ok())
}

/// [`resolve_config`] with an explicit environment lookup
pub fn resolve_config_with<F>(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    lookup: F,
) -> Result<ResolvedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    let env_overrides = apply_env_overrides(&mut config, lookup);
    apply_cli_overrides(&mut config, overrides)?;

    Ok(ResolvedConfig {
        config,
        source: config_path.map(Path::to_path_buf),
        env_overrides,
    })
}
