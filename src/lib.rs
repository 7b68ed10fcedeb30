//! Core library entrypoint for the Tabulor cluster discovery subsystem.
//! Walks the shared coordination namespace to reconstruct, at read time, the
//! set of database instances known to the cluster and the process currently
//! holding each instance's leadership lock.

pub mod admin;
pub mod config;
pub mod coordination;
pub mod discovery;
pub mod util;

pub use admin::{ClusterControl, ExitStatus, ShutdownError, ShutdownTarget};
pub use config::{SiteConfig, SiteConfigError, DEFAULT_COORDINATION_ENDPOINTS};
pub use coordination::{CachingReader, CoordinationReader, InMemoryCoordinationStore, StoreError};
pub use discovery::{
    unregistered_ids, DiscoveryError, DiscoveryOrchestrator, InstanceRegistry, InstanceRow,
    LockHolderResolver, NameRegistry, ReportRenderer, ScanError, ScanErrorTracker, ScanOptions,
    ScanSummary,
};
pub use util::error::TabulorError;
