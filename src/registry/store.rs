//! JSON-file-backed node registry.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};
use rand::Rng;

use super::node::Node;
use crate::placement::{AddressError, PlacementEngine};
use crate::utils::id::generate_node_id;

/// Identifier draws before giving up on finding an unused one
const MAX_ID_ATTEMPTS: usize = 16;

/// Errors raised while creating or storing nodes
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid IP address: {0}")]
    Address(#[from] AddressError),

    #[error("Node name already taken: {0}")]
    NameTaken(String),

    #[error("IP node already exists: {0}")]
    AddressTaken(String),

    #[error("Could not generate an unused node id after {0} attempts")]
    IdSpaceExhausted(usize),

    #[error("Registry lock poisoned")]
    LockPoisoned,

    #[error("Registry I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Registry serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Registry of placed nodes, persisted as a JSON array.
///
/// `create_node` holds the registry lock across reading the current nodes,
/// placing the new one and writing the file, so concurrent creations through
/// the same registry always see each other. Separate processes sharing one
/// file are not coordinated.
#[derive(Debug)]
pub struct NodeRegistry {
    path: PathBuf,
    engine: PlacementEngine,
    id_length: usize,
    nodes: Mutex<Vec<Node>>,
}

impl NodeRegistry {
    /// Open the registry at `path`, starting empty if the file does not exist
    pub fn open(
        path: impl Into<PathBuf>,
        engine: PlacementEngine,
        id_length: usize,
    ) -> Result<Self, RegistryError> {
        let path = path.into();
        let nodes = load_nodes(&path)?;
        info!("Loaded {} nodes from registry {}", nodes.len(), path.display());

        Ok(Self {
            path,
            engine,
            id_length,
            nodes: Mutex::new(nodes),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    /// Validate, place and persist a new node
    pub fn create_node(&self, name: &str, raw_ip: &str) -> Result<Node, RegistryError> {
        self.create_node_with_rng(name, raw_ip, &mut rand::thread_rng())
    }

    /// Same as [`create_node`](Self::create_node) with an explicit id source
    pub fn create_node_with_rng<R: Rng + ?Sized>(
        &self,
        name: &str,
        raw_ip: &str,
        rng: &mut R,
    ) -> Result<Node, RegistryError> {
        let mut nodes = self.lock()?;

        let placement = self
            .engine
            .place(raw_ip, nodes.iter().map(|node| &node.position))
            .map_err(|e| {
                warn!("Invalid IP address: {} - {}", raw_ip, e);
                e
            })?;

        if nodes.iter().any(|node| node.name == name) {
            warn!("Node name already taken: {}", name);
            return Err(RegistryError::NameTaken(name.to_string()));
        }

        if nodes.iter().any(|node| node.ip == placement.address) {
            warn!("Node already exists for IP: {}", placement.address);
            return Err(RegistryError::AddressTaken(placement.address));
        }

        let id = self.unused_id(&nodes, rng)?;
        let node = Node::new(id, name, placement.address, placement.point);

        nodes.push(node.clone());
        if let Err(e) = save_nodes(&self.path, &nodes) {
            nodes.pop();
            return Err(e);
        }

        info!(
            "Successfully created node: {} for IP: {} at position: {}",
            node.id, node.ip, node.position
        );
        Ok(node)
    }

    /// Snapshot of all nodes in insertion order
    pub fn nodes(&self) -> Result<Vec<Node>, RegistryError> {
        Ok(self.lock()?.clone())
    }

    pub fn find_by_name(&self, name: &str) -> Result<Option<Node>, RegistryError> {
        Ok(self.lock()?.iter().find(|node| node.name == name).cloned())
    }

    pub fn find_by_ip(&self, ip: &str) -> Result<Option<Node>, RegistryError> {
        Ok(self.lock()?.iter().find(|node| node.ip == ip).cloned())
    }

    pub fn len(&self) -> Result<usize, RegistryError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Node>>, RegistryError> {
        self.nodes.lock().map_err(|_| RegistryError::LockPoisoned)
    }

    fn unused_id<R: Rng + ?Sized>(&self, nodes: &[Node], rng: &mut R) -> Result<String, RegistryError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = generate_node_id(rng, self.id_length);
            if !nodes.iter().any(|node| node.id == id) {
                return Ok(id);
            }
            debug!("Generated id {} already in use (attempt {})", id, attempt);
        }
        Err(RegistryError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
    }
}

fn load_nodes(path: &Path) -> Result<Vec<Node>, RegistryError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&content)?)
}

/// Write to a sibling temp file, then rename over the registry file
fn save_nodes(path: &Path, nodes: &[Node]) -> Result<(), RegistryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(nodes)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            warn!("Failed to remove {}: {}", tmp_path.display(), cleanup);
        }
        return Err(e.into());
    }
    Ok(())
}
