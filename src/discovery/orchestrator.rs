//! End-to-end discovery scan.

use super::lock::LockHolderResolver;
use super::registry::{unregistered_ids, InstanceRegistry};
use super::report::{InstanceRow, ReportRenderer};
use super::tracker::ScanErrorTracker;
use crate::coordination::{CachingReader, CoordinationReader, StoreError};
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

/// Scan configuration, fixed for the duration of one scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Emit full diagnostics per failure instead of only a final count.
    pub show_error_detail: bool,
    /// Render every unregistered identifier as a row instead of a count line.
    pub show_all_instances: bool,
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The names namespace could not be enumerated at all. Nothing beyond the
    /// endpoint diagnostic has been written when this surfaces.
    #[error("unable to enumerate instance names: {0}")]
    NamesUnavailable(#[source] StoreError),
    #[error("report output error: {0}")]
    Io(#[from] io::Error),
}

/// What a completed scan observed, for callers that want more than the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub named: usize,
    pub unnamed: usize,
    pub errors: u64,
}

/// Drives one single-pass scan: names, header, named rows, unregistered
/// identifiers, trailing hint. No state survives the call; every scan rebuilds
/// its view from the store, through a cache scoped to that scan alone.
pub struct DiscoveryOrchestrator<'a> {
    endpoints: &'a str,
    root: &'a str,
    options: ScanOptions,
}

impl<'a> DiscoveryOrchestrator<'a> {
    pub fn new(endpoints: &'a str, root: &'a str, options: ScanOptions) -> Self {
        Self {
            endpoints,
            root,
            options,
        }
    }

    pub fn run<R: CoordinationReader>(
        &self,
        store: R,
        out: &mut impl Write,
    ) -> Result<ScanSummary, DiscoveryError> {
        writeln!(out, "INFO : Using coordination store at {}", self.endpoints)?;

        let reader = CachingReader::new(store);
        let tracker = ScanErrorTracker::new(self.options.show_error_detail);
        let instances = InstanceRegistry::new(&reader, self.root);
        let registry = instances
            .load_names(&tracker)
            .map_err(DiscoveryError::NamesUnavailable)?;

        writeln!(out)?;
        ReportRenderer::write_header(out)?;

        let locks = LockHolderResolver::new(&reader, self.root);
        for (name, id) in &registry {
            let holder = id.as_ref().and_then(|id| locks.resolve(id, &tracker));
            ReportRenderer::write_row(out, &InstanceRow::named(name.clone(), *id, holder))?;
        }

        let universe = instances.load_identifier_universe(&tracker);
        let leftover = unregistered_ids(&registry, &universe);
        if self.options.show_all_instances {
            for id in &leftover {
                let holder = locks.resolve(id, &tracker);
                ReportRenderer::write_row(out, &InstanceRow::unnamed(*id, holder))?;
            }
        } else if !leftover.is_empty() {
            writeln!(out)?;
            let noun = if leftover.len() == 1 {
                "instance was"
            } else {
                "instances were"
            };
            writeln!(
                out,
                "INFO : {} unnamed {noun} not printed, run with --print-all to see all instances",
                leftover.len()
            )?;
        } else {
            writeln!(out)?;
        }

        let errors = tracker.total();
        if !self.options.show_error_detail && errors > 0 {
            writeln!(
                out,
                "WARN : There were {errors} errors, run with --print-errors to see more info"
            )?;
        }

        Ok(ScanSummary {
            named: registry.len(),
            unnamed: leftover.len(),
            errors,
        })
    }
}
