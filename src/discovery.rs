//! Cluster instance and leader discovery over the coordination namespace.

pub mod lock;
pub mod orchestrator;
pub mod registry;
pub mod report;
pub mod tracker;

pub use lock::LockHolderResolver;
pub use orchestrator::{DiscoveryError, DiscoveryOrchestrator, ScanOptions, ScanSummary};
pub use registry::{unregistered_ids, InstanceRegistry, NameRegistry};
pub use report::{InstanceRow, ReportRenderer, HOLDER_WIDTH, NAME_WIDTH, UUID_WIDTH};
pub use tracker::{ScanError, ScanErrorTracker};
