//! Interface boundary to the administrative stop command.
//!
//! The discovery core never drives shutdown itself; the end-to-end
//! availability scenarios program against this seam. Implementations must
//! halt every server process for [`ShutdownTarget::All`] and only the
//! addressed process for [`ShutdownTarget::Server`], and must let in-flight
//! table and data operations complete or fail cleanly rather than leave
//! partial, unrecoverable state behind.

use thiserror::Error;

/// What a stop request addresses: the whole cluster or one server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShutdownTarget {
    All,
    Server(String),
}

impl ShutdownTarget {
    /// Maps the optional command-line target to a request: no target means
    /// stop everything.
    pub fn parse(target: Option<&str>) -> Self {
        match target {
            Some(addr) => ShutdownTarget::Server(addr.to_string()),
            None => ShutdownTarget::All,
        }
    }
}

/// Process exit status reported by the stop command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus(pub i32);

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus(0);

    pub fn success(&self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("unknown server {0}")]
    UnknownServer(String),
    #[error("shutdown failed: {0}")]
    Failed(String),
}

pub trait ClusterControl {
    fn stop(&self, target: ShutdownTarget) -> Result<ExitStatus, ShutdownError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_target_means_stop_all() {
        assert_eq!(ShutdownTarget::parse(None), ShutdownTarget::All);
        assert_eq!(
            ShutdownTarget::parse(Some("server-a:9997")),
            ShutdownTarget::Server("server-a:9997".into())
        );
    }

    #[test]
    fn success_maps_to_exit_code_zero() {
        assert!(ExitStatus::SUCCESS.success());
        assert!(!ExitStatus(1).success());
    }
}
