//! The name registry and the identifier universe.

use super::tracker::{ScanError, ScanErrorTracker};
use crate::coordination::{paths, CoordinationReader, StoreError};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Ordered mapping from instance name to its registered identifier; `None`
/// marks a registration whose stored payload was unreadable or unparsable.
pub type NameRegistry = BTreeMap<String, Option<Uuid>>;

pub struct InstanceRegistry<'a, R> {
    reader: &'a R,
    root: &'a str,
}

impl<'a, R: CoordinationReader> InstanceRegistry<'a, R> {
    pub fn new(reader: &'a R, root: &'a str) -> Self {
        Self { reader, root }
    }

    /// Builds the name registry from the names namespace.
    ///
    /// Failing to enumerate the namespace at all is the one fatal condition of
    /// a scan and is propagated to the caller. Every per-name failure is
    /// recorded and the name kept with an absent identifier, so broken
    /// registrations stay visible in the report instead of silently vanishing.
    pub fn load_names(&self, tracker: &ScanErrorTracker) -> Result<NameRegistry, StoreError> {
        let names = self.reader.list_children(&paths::names_path(self.root))?;
        let mut registry = NameRegistry::new();
        for name in names {
            let path = paths::instance_name_path(self.root, &name);
            let id = self.read_identifier(&path, tracker);
            registry.insert(name, id);
        }
        Ok(registry)
    }

    fn read_identifier(&self, path: &str, tracker: &ScanErrorTracker) -> Option<Uuid> {
        let payload = match self.reader.get_data(path) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                tracker.record(&ScanError::MalformedIdentifier {
                    path: path.to_string(),
                    detail: "registration vanished during scan".into(),
                });
                return None;
            }
            Err(err) => {
                tracker.record(&ScanError::Store(err));
                return None;
            }
        };
        match parse_identifier(&payload) {
            Ok(id) => Some(id),
            Err(detail) => {
                tracker.record(&ScanError::MalformedIdentifier {
                    path: path.to_string(),
                    detail,
                });
                None
            }
        }
    }

    /// Every identifier found directly under the root namespace, skipping the
    /// reserved names child. Unparsable entries are recorded and dropped: with
    /// no name attached there is nothing to render a row for.
    pub fn load_identifier_universe(&self, tracker: &ScanErrorTracker) -> BTreeSet<Uuid> {
        let children = match self.reader.list_children(self.root) {
            Ok(children) => children,
            Err(err) => {
                tracker.record(&ScanError::Store(err));
                return BTreeSet::new();
            }
        };
        let mut universe = BTreeSet::new();
        for child in children {
            if child == paths::INSTANCES_NODE {
                continue;
            }
            match Uuid::parse_str(&child) {
                Ok(id) => {
                    universe.insert(id);
                }
                Err(err) => tracker.record(&ScanError::MalformedIdentifier {
                    path: format!("{}/{child}", self.root),
                    detail: err.to_string(),
                }),
            }
        }
        universe
    }
}

/// Identifiers present in the tree with no registered name, in natural UUID
/// order. Pure set difference, no I/O.
pub fn unregistered_ids(registry: &NameRegistry, universe: &BTreeSet<Uuid>) -> BTreeSet<Uuid> {
    let named: BTreeSet<Uuid> = registry.values().flatten().copied().collect();
    universe.difference(&named).copied().collect()
}

fn parse_identifier(payload: &[u8]) -> Result<Uuid, String> {
    let text = std::str::from_utf8(payload).map_err(|err| err.to_string())?;
    Uuid::parse_str(text.trim()).map_err(|err| err.to_string())
}
