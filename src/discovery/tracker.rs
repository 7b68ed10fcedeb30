//! Cross-cutting accumulation of scan failures.

use crate::coordination::StoreError;
use log::warn;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// A failure observed during one sub-operation of a discovery scan.
///
/// A missing lock holder is a valid empty state and never becomes a
/// `ScanError`.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed instance identifier at {path}: {detail}")]
    MalformedIdentifier { path: String, detail: String },
    #[error("leadership lock holder unreadable at {path}: {detail}")]
    LockHolderUnreadable { path: String, detail: String },
}

/// Counts failures without interrupting the walk that produced them.
///
/// Verbosity is fixed at scan start: when enabled, each failure's detail is
/// logged as it occurs; otherwise only the final count is observable. The
/// counter is safe for concurrent increment so row resolution may fan out.
#[derive(Debug, Default)]
pub struct ScanErrorTracker {
    errors: AtomicU64,
    verbose: bool,
}

impl ScanErrorTracker {
    pub fn new(verbose: bool) -> Self {
        Self {
            errors: AtomicU64::new(0),
            verbose,
        }
    }

    pub fn record(&self, error: &ScanError) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        if self.verbose {
            warn!("scan error: {error}");
        }
    }

    pub fn total(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
