use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use ipspace::config_loader::{self, CliOverrides};
use ipspace::placement::PlacementEngine;
use ipspace::registry::NodeRegistry;
use ipspace::utils::resolve_client_ip;

/// Place network nodes in a 3D cube derived from their IPv4 addresses
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to the service configuration YAML file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the node registry file (overrides configuration)
    #[arg(short, long, global = true)]
    registry: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate an address, place a new node and store it
    Place {
        /// Display name of the node
        #[arg(short, long)]
        name: String,

        /// IPv4 address of the node, optionally with a port
        #[arg(short, long)]
        ip: String,
    },

    /// Print all stored nodes as JSON
    List,

    /// Resolve the caller address from proxy headers or the socket address
    Ip {
        /// Value of the X-Real-IP header
        #[arg(long)]
        real_ip: Option<String>,

        /// Value of the X-Forwarded-For header
        #[arg(long)]
        forwarded_for: Option<String>,

        /// Remote socket address of the connection
        #[arg(long)]
        remote_addr: String,
    },

    /// Validate an address and show its raw position
    Validate {
        /// Address to validate
        address: String,
    },
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    let overrides = CliOverrides {
        registry: args.registry.clone(),
        log_level: args.log_level.clone(),
    };
    let resolved = config_loader::resolve_config(args.config.as_deref(), &overrides)?;

    env_logger::Builder::from_env(Env::default().default_filter_or(resolved.config.log_level.as_str())).init();
    resolved.log_origin();
    let config = resolved.config;

    let engine = PlacementEngine::new(config.placement);

    match args.command {
        Command::Place { name, ip } => {
            let registry = NodeRegistry::open(&config.registry.path, engine, config.registry.id_length)
                .wrap_err_with(|| format!("Failed to open registry '{}'", config.registry.path.display()))?;
            let node = registry
                .create_node(&name, &ip)
                .wrap_err_with(|| format!("Failed to create node '{}'", name))?;
            println!("{}", serde_json::to_string_pretty(&node)?);
        }
        Command::List => {
            let registry = NodeRegistry::open(&config.registry.path, engine, config.registry.id_length)
                .wrap_err_with(|| format!("Failed to open registry '{}'", config.registry.path.display()))?;
            let nodes = registry.nodes()?;
            info!("Registry {} holds {} nodes", registry.path().display(), nodes.len());
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
        Command::Ip { real_ip, forwarded_for, remote_addr } => {
            let ip = resolve_client_ip(real_ip.as_deref(), forwarded_for.as_deref(), &remote_addr)?;
            println!("{}", serde_json::json!({ "ip": ip }));
        }
        Command::Validate { address } => {
            let placement = engine.place(&address, std::iter::empty())?;
            println!("{}", serde_json::to_string_pretty(&placement)?);
        }
    }

    Ok(())
}
