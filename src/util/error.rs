use crate::admin::ShutdownError;
use crate::config::SiteConfigError;
use crate::coordination::StoreError;
use crate::discovery::DiscoveryError;
use thiserror::Error;

/// Top-level error for callers that drive more than one subsystem.
#[derive(Debug, Error)]
pub enum TabulorError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Config(#[from] SiteConfigError),
    #[error(transparent)]
    Shutdown(#[from] ShutdownError),
    #[error("{0}")]
    Other(String),
}
