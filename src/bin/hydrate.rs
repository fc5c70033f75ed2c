//! Registry seeding tool.
//!
//! Places a fixed set of well-known public addresses (cloud provider ranges
//! and public DNS resolvers) as `Node-1` ... `Node-N`, for demos and manual
//! testing.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use rayon::prelude::*;

use ipspace::config_loader::{self, CliOverrides};
use ipspace::placement::{validate_address, AddressError, PlacementEngine};
use ipspace::registry::{NodeRegistry, RegistryError};

/// Seed addresses, grouped by owner
const SEED_ADDRESSES: &[&str] = &[
    // AWS US East
    "3.5.140.0",
    "3.5.141.0",
    "3.5.142.0",
    // AWS US West
    "13.56.0.0",
    "13.57.0.0",
    "13.58.0.0",
    // Google Cloud
    "34.95.0.0",
    "34.96.0.0",
    "34.97.0.0",
    // Azure
    "20.0.0.0",
    "20.1.0.0",
    "20.2.0.0",
    // Digital Ocean
    "143.198.0.0",
    "143.198.1.0",
    "143.198.2.0",
    // Public DNS
    "8.8.8.8",
    "1.1.1.1",
    "9.9.9.9",
    "208.67.222.222",
];

#[derive(Parser, Debug)]
#[command(name = "ipspace-hydrate")]
#[command(about = "Seed a node registry with well-known public addresses")]
#[command(version)]
struct Cli {
    /// Path to the service configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the node registry file (overrides configuration)
    #[arg(short, long)]
    registry: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

/// Outcome of a seeding run
#[derive(Debug, Default, PartialEq)]
struct HydrateSummary {
    created: usize,
    skipped: usize,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let overrides = CliOverrides {
        registry: cli.registry,
        log_level: cli.log_level,
    };
    let resolved = config_loader::resolve_config(cli.config.as_deref(), &overrides)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(resolved.config.log_level.as_str()))
        .init();
    resolved.log_origin();
    let config = resolved.config;

    let registry = NodeRegistry::open(
        &config.registry.path,
        PlacementEngine::new(config.placement),
        config.registry.id_length,
    )
    .with_context(|| format!("Failed to open registry '{}'", config.registry.path.display()))?;

    let summary = hydrate(&registry, SEED_ADDRESSES)?;
    log::info!(
        "Hydration completed: {} created, {} skipped, registry now holds {} nodes",
        summary.created,
        summary.skipped,
        registry.len()?
    );

    Ok(())
}

/// Validate all seeds up front, then place them one at a time in list order
fn hydrate(registry: &NodeRegistry, seeds: &[&str]) -> Result<HydrateSummary> {
    let validated: Vec<Result<String, AddressError>> =
        seeds.par_iter().map(|seed| validate_address(seed)).collect();

    let mut summary = HydrateSummary::default();
    for (i, result) in validated.into_iter().enumerate() {
        let name = format!("Node-{}", i + 1);

        let ip = match result {
            Ok(ip) => ip,
            Err(e) => {
                log::warn!("Skipping seed {}: {}", seeds[i], e);
                summary.skipped += 1;
                continue;
            }
        };

        match registry.create_node(&name, &ip) {
            Ok(node) => {
                log::info!(
                    "Successfully created node: {} with IP: {} at position: {}",
                    node.name,
                    node.ip,
                    node.position
                );
                summary.created += 1;
            }
            Err(e @ (RegistryError::NameTaken(_) | RegistryError::AddressTaken(_))) => {
                log::warn!("Skipping {} ({}): {}", name, ip, e);
                summary.skipped += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to create node {} for IP {}", name, ip));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> NodeRegistry {
        NodeRegistry::open(dir.path().join("nodes.json"), PlacementEngine::default(), 8).unwrap()
    }

    #[test]
    fn test_all_seeds_are_valid() {
        for seed in SEED_ADDRESSES {
            assert!(validate_address(seed).is_ok(), "seed {} should validate", seed);
        }
    }

    #[test]
    fn test_hydrate_then_rerun_skips_everything() {
        let dir = TempDir::new().unwrap();
        let registry = open(&dir);

        let first = hydrate(&registry, SEED_ADDRESSES).unwrap();
        assert_eq!(first, HydrateSummary { created: SEED_ADDRESSES.len(), skipped: 0 });

        let nodes = registry.nodes().unwrap();
        assert_eq!(nodes[0].name, "Node-1");
        assert_eq!(nodes[15].ip, "8.8.8.8");
        assert!(nodes.iter().all(|node| node.position.within(5.0)));

        let second = hydrate(&open(&dir), SEED_ADDRESSES).unwrap();
        assert_eq!(second, HydrateSummary { created: 0, skipped: SEED_ADDRESSES.len() });
    }

    #[test]
    fn test_invalid_seed_is_skipped() {
        let dir = TempDir::new().unwrap();
        let registry = open(&dir);

        let summary = hydrate(&registry, &["8.8.8.8", "224.0.0.1", "1.1.1.1"]).unwrap();
        assert_eq!(summary, HydrateSummary { created: 2, skipped: 1 });
        assert!(registry.find_by_name("Node-2").unwrap().is_none());
        assert!(registry.find_by_name("Node-3").unwrap().is_some());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["ipspace-hydrate", "--registry", "seed.json"]);
        assert_eq!(cli.registry, Some(PathBuf::from("seed.json")));
        assert!(cli.config.is_none());
    }
}
