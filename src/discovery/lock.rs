//! Observation of an instance's leadership lock.
//!
//! A leadership lock is a set of sibling sequentially numbered ephemeral
//! children under `<root>/<id>/leader-lock`; the live child with the lowest
//! sequence number holds the lock. This crate never competes for the lock, it
//! only reads who currently holds it.

use super::tracker::{ScanError, ScanErrorTracker};
use crate::coordination::{paths, CoordinationReader};
use uuid::Uuid;

pub struct LockHolderResolver<'a, R> {
    reader: &'a R,
    root: &'a str,
}

impl<'a, R: CoordinationReader> LockHolderResolver<'a, R> {
    pub fn new(reader: &'a R, root: &'a str) -> Self {
        Self { reader, root }
    }

    /// Returns the current holder's payload, or `None` when the lock is
    /// unheld. Read failures along the way are recorded on `tracker` and
    /// surfaced as `None` so the caller's scan keeps going.
    pub fn resolve(&self, id: &Uuid, tracker: &ScanErrorTracker) -> Option<String> {
        let lock_path = paths::leader_lock_path(self.root, id);
        let children = match self.reader.list_children(&lock_path) {
            Ok(children) => children,
            Err(err) => {
                tracker.record(&ScanError::Store(err));
                return None;
            }
        };
        let winner = current_holder_node(&children)?;
        let winner_path = format!("{lock_path}/{winner}");
        let payload = match self.reader.get_data(&winner_path) {
            Ok(Some(payload)) => payload,
            // The winner can disappear between listing and fetching when its
            // session expires; that is an unheld lock, not a failure.
            Ok(None) => return None,
            Err(err) => {
                tracker.record(&ScanError::Store(err));
                return None;
            }
        };
        match String::from_utf8(payload) {
            Ok(holder) => Some(holder),
            Err(err) => {
                tracker.record(&ScanError::LockHolderUnreadable {
                    path: winner_path,
                    detail: err.to_string(),
                });
                None
            }
        }
    }
}

/// The live child with the lowest trailing sequence number. Children without a
/// parsable sequence suffix are not lock contenders and are ignored.
fn current_holder_node(children: &[String]) -> Option<&str> {
    children
        .iter()
        .filter_map(|child| sequence_number(child).map(|seq| (seq, child.as_str())))
        .min_by_key(|(seq, _)| *seq)
        .map(|(_, child)| child)
}

fn sequence_number(child: &str) -> Option<u64> {
    let (_, suffix) = child.rsplit_once('-')?;
    suffix.parse().ok()
}
