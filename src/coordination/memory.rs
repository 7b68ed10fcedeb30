//! Deterministic in-memory coordination tree.
//!
//! Backs the checkpoint tests and offline scans over exported namespace
//! snapshots. Reads are safe for concurrent use; mutation helpers exist so
//! fixtures can evolve a tree between scans, and `fail_path` injects
//! unavailability for exercising partial-failure handling.

use super::reader::{CoordinationReader, StoreError};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default)]
struct Tree {
    nodes: BTreeMap<String, Vec<u8>>,
    failing: BTreeSet<String>,
}

#[derive(Debug, Default)]
pub struct InMemoryCoordinationStore {
    tree: RwLock<Tree>,
}

impl InMemoryCoordinationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a YAML mapping of absolute path to text payload,
    /// the format produced by namespace snapshot exports.
    pub fn from_yaml_snapshot(raw: &str) -> Result<Self, serde_yaml::Error> {
        let entries: BTreeMap<String, String> = serde_yaml::from_str(raw)?;
        let store = Self::new();
        for (path, payload) in entries {
            store.put_str(&path, &payload);
        }
        Ok(store)
    }

    /// Creates `path` with the given payload, creating missing parents with an
    /// empty payload.
    pub fn put(&self, path: &str, data: impl Into<Vec<u8>>) {
        let mut tree = self.tree.write();
        for parent in parent_paths(path) {
            tree.nodes.entry(parent).or_default();
        }
        tree.nodes.insert(path.to_string(), data.into());
    }

    pub fn put_str(&self, path: &str, data: &str) {
        self.put(path, data.as_bytes().to_vec());
    }

    /// Removes `path` and everything beneath it.
    pub fn remove(&self, path: &str) {
        let mut tree = self.tree.write();
        let prefix = format!("{path}/");
        tree.nodes
            .retain(|node, _| node != path && !node.starts_with(&prefix));
    }

    /// Forces subsequent reads of exactly `path` to fail as unavailable.
    pub fn fail_path(&self, path: &str) {
        self.tree.write().failing.insert(path.to_string());
    }

    pub fn clear_failures(&self) {
        self.tree.write().failing.clear();
    }
}

impl CoordinationReader for InMemoryCoordinationStore {
    fn list_children(&self, path: &str) -> Result<Vec<String>, StoreError> {
        let tree = self.tree.read();
        if tree.failing.contains(path) {
            return Err(StoreError::unavailable(path, "injected outage"));
        }
        let prefix = format!("{path}/");
        let children = tree
            .nodes
            .range(prefix.clone()..)
            .take_while(|(node, _)| node.starts_with(&prefix))
            .filter_map(|(node, _)| {
                let rest = &node[prefix.len()..];
                (!rest.contains('/')).then(|| rest.to_string())
            })
            .collect();
        Ok(children)
    }

    fn get_data(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let tree = self.tree.read();
        if tree.failing.contains(path) {
            return Err(StoreError::unavailable(path, "injected outage"));
        }
        Ok(tree.nodes.get(path).cloned())
    }
}

fn parent_paths(path: &str) -> Vec<String> {
    path.char_indices()
        .skip(1)
        .filter(|(_, ch)| *ch == '/')
        .map(|(idx, _)| path[..idx].to_string())
        .collect()
}
