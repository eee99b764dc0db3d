//! # Todo List Core
//!
//! Capability traits and error types shared by the todo list domain.
//!
//! The domain never reaches for global services. Everything it needs from
//! the outside world is injected as a capability:
//!
//! - **Clock**: the current instant (age checks, item spacing)
//! - **`EmailNotifier`**: best-effort notification delivery
//! - **`ItemStore`**: durable storage for accepted items
//!
//! ## Example
//!
//! ```
//! use todo_list_core::environment::{Clock, ItemStore, SystemClock, UnimplementedStore};
//! use todo_list_core::error::StoreError;
//!
//! let clock = SystemClock;
//! let _now = clock.now();
//!
//! // The baseline store is a seam: callers must supply a working one.
//! let store = UnimplementedStore;
//! assert_eq!(store.store(&"item"), Err(StoreError::NotImplemented));
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Duration, NaiveDate, Utc};

pub mod console;
pub mod environment;
pub mod error;

pub use console::ConsoleNotifier;
pub use environment::{Clock, EmailNotifier, ItemStore, SystemClock, UnimplementedStore};
pub use error::StoreError;
