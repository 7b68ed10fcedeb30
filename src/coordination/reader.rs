use thiserror::Error;

/// Narrow read interface over the external coordination store.
///
/// The store is assumed to provide linearizable reads and ephemeral-node
/// semantics; this crate only ever reads from it. Implementations return
/// children in lexicographic order, and listing a path that does not exist
/// yields no children rather than a failure. No retries happen at this layer;
/// retry and backoff policy belongs to the underlying store client.
pub trait CoordinationReader {
    /// Direct children of `path`, lexicographically ordered.
    fn list_children(&self, path: &str) -> Result<Vec<String>, StoreError>;

    /// Payload stored at `path`, or `None` when the path does not exist.
    fn get_data(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError>;
}

impl<R: CoordinationReader + ?Sized> CoordinationReader for &R {
    fn list_children(&self, path: &str) -> Result<Vec<String>, StoreError> {
        (**self).list_children(path)
    }

    fn get_data(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_data(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("coordination store unavailable reading {path}: {detail}")]
    Unavailable { path: String, detail: String },
}

impl StoreError {
    pub fn unavailable(path: impl Into<String>, detail: impl Into<String>) -> Self {
        StoreError::Unavailable {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
