//! Well-known layout of the coordination namespace.
//!
//! Every deployment lives under a single root. The reserved `instances` child
//! maps human-assigned names to instance identifiers; every other direct child
//! of the root is an instance identifier in canonical UUID text form, and the
//! leadership lock for an instance lives at a fixed sub-path of its folder.

use uuid::Uuid;

/// Namespace root used when the site configuration does not override it.
pub const DEFAULT_ROOT: &str = "/tabulor";

/// Reserved child of the root holding the name registry.
pub const INSTANCES_NODE: &str = "instances";

/// Lock folder under each instance's root.
pub const LEADER_LOCK_NODE: &str = "leader-lock";

pub fn names_path(root: &str) -> String {
    format!("{root}/{INSTANCES_NODE}")
}

pub fn instance_name_path(root: &str, name: &str) -> String {
    format!("{root}/{INSTANCES_NODE}/{name}")
}

pub fn instance_root(root: &str, id: &Uuid) -> String {
    format!("{root}/{id}")
}

pub fn leader_lock_path(root: &str, id: &Uuid) -> String {
    format!("{root}/{id}/{LEADER_LOCK_NODE}")
}
