//! In-memory mark store.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use super::error::StoreResult;
use super::MarkStore;
use crate::models::Mark;

/// Mark store over a fixed list, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarkStore {
    marks: Arc<RwLock<Vec<Mark>>>,
}

impl InMemoryMarkStore {
    pub fn new(marks: Vec<Mark>) -> Self {
        Self {
            marks: Arc::new(RwLock::new(marks)),
        }
    }

    /// Swap in a new mark list; clones of this store see the change.
    pub fn replace(&self, marks: Vec<Mark>) {
        *self.marks.write() = marks;
    }

    pub fn len(&self) -> usize {
        self.marks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.read().is_empty()
    }
}

#[async_trait]
impl MarkStore for InMemoryMarkStore {
    async fn load(&self) -> StoreResult<Vec<Mark>> {
        Ok(self.marks.read().clone())
    }

    fn describe(&self) -> String {
        format!("memory:{} marks", self.len())
    }
}
