//! Read-only access to the shared hierarchical coordination store.

pub mod cache;
pub mod memory;
pub mod paths;
pub mod reader;

pub use cache::CachingReader;
pub use memory::InMemoryCoordinationStore;
pub use reader::{CoordinationReader, StoreError};
