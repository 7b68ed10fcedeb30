//! Scan-scoped read-through cache over a `CoordinationReader`.
//!
//! The discovery walk may touch the same path more than once within a single
//! scan; nothing is ever cached across scans. Failures are not memoized, so a
//! transiently unavailable path is retried on its next use.

use super::reader::{CoordinationReader, StoreError};
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Debug)]
pub struct CachingReader<R> {
    inner: R,
    children: Mutex<HashMap<String, Vec<String>>>,
    data: Mutex<HashMap<String, Option<Vec<u8>>>>,
}

impl<R> CachingReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            children: Mutex::new(HashMap::new()),
            data: Mutex::new(HashMap::new()),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: CoordinationReader> CoordinationReader for CachingReader<R> {
    fn list_children(&self, path: &str) -> Result<Vec<String>, StoreError> {
        if let Some(hit) = self.children.lock().get(path) {
            return Ok(hit.clone());
        }
        let children = self.inner.list_children(path)?;
        self.children
            .lock()
            .insert(path.to_string(), children.clone());
        Ok(children)
    }

    fn get_data(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if let Some(hit) = self.data.lock().get(path) {
            return Ok(hit.clone());
        }
        let payload = self.inner.get_data(path)?;
        self.data.lock().insert(path.to_string(), payload.clone());
        Ok(payload)
    }
}
