//! In-memory store testing utilities
//!
//! - [`InMemoryStore`]: keeps every stored item, in call order
//! - [`FailingStore`]: rejects every item with a configured error

use std::sync::{Arc, PoisonError, RwLock};
use todo_list_core::environment::ItemStore;
use todo_list_core::error::StoreError;

/// In-memory item store for fast, deterministic testing.
///
/// # Example
///
/// ```
/// use todo_list_testing::InMemoryStore;
/// use todo_list_core::environment::ItemStore;
///
/// let store = InMemoryStore::<String>::new();
/// store.store(&"buy milk".to_string()).unwrap();
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct InMemoryStore<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: Clone> InMemoryStore<T> {
    /// Create a new empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of stored items, in call order
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T: Clone> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync> ItemStore<T> for InMemoryStore<T> {
    fn store(&self, item: &T) -> Result<(), StoreError> {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item.clone());
        Ok(())
    }
}

/// Store that fails every call with the same error.
#[derive(Clone, Debug)]
pub struct FailingStore {
    error: StoreError,
}

impl FailingStore {
    /// Fail with `error` on every call
    #[must_use]
    pub const fn new(error: StoreError) -> Self {
        Self { error }
    }

    /// Fail as if the backend were down
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(StoreError::Unavailable {
            reason: "backend offline".to_string(),
        })
    }
}

impl<T> ItemStore<T> for FailingStore {
    fn store(&self, _item: &T) -> Result<(), StoreError> {
        Err(self.error.clone())
    }
}
