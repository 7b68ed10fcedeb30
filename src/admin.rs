//! Administrative control surface consumed by operator tooling.

pub mod shutdown;

pub use shutdown::{ClusterControl, ExitStatus, ShutdownError, ShutdownTarget};
