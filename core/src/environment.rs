//! Dependency injection traits.
//!
//! All external dependencies are abstracted behind traits and injected
//! into the list at construction.

use crate::error::StoreError;
use chrono::{DateTime, Utc};

/// Clock trait - abstracts time operations for testability
///
/// # Examples
///
/// ```
/// use todo_list_core::environment::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let before = clock.now();
/// assert!(clock.now() >= before);
/// ```
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Email notification capability.
///
/// Delivery is best effort: the domain only guarantees *when* it calls
/// `notify`, never that the message arrives.
pub trait EmailNotifier: Send + Sync {
    /// Send `message` to `address`.
    fn notify(&self, address: &str, message: &str);
}

/// Durable storage for accepted items.
///
/// # Type Parameters
///
/// - `T`: The item type being stored
pub trait ItemStore<T>: Send + Sync {
    /// Durably record `item`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the item could not be recorded.
    fn store(&self, item: &T) -> Result<(), StoreError>;
}

/// Baseline store that has no backend.
///
/// Every call fails with [`StoreError::NotImplemented`]. Wire a real store
/// in its place to make additions durable.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnimplementedStore;

impl<T> ItemStore<T> for UnimplementedStore {
    fn store(&self, _item: &T) -> Result<(), StoreError> {
        Err(StoreError::NotImplemented)
    }
}
