//! A small, gated to-do list bound to a validated user.
//!
//! It shows:
//!
//! - User validation (email, names, password, minimum age)
//! - Gated additions (capacity, spacing, unique names)
//! - Injected capabilities for time, notification and persistence
//! - Testing with deterministic doubles from `todo-list-testing`
//!
//! # Quick Start
//!
//! ```no_run
//! use todo_list::{ListEnvironment, ToDoItem, ToDoList, User};
//! use todo_list_core::{ConsoleNotifier, SystemClock, UnimplementedStore};
//! use chrono::NaiveDate;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let owner = User::new(
//!     "ada@example.com",
//!     "Ada",
//!     "Lovelace",
//!     "Password123",
//!     NaiveDate::from_ymd_opt(1990, 6, 15).ok_or("bad date")?,
//! );
//! let env = ListEnvironment::new(
//!     Arc::new(SystemClock),
//!     Arc::new(ConsoleNotifier),
//!     Arc::new(UnimplementedStore),
//! );
//! let mut list = ToDoList::new(owner, env)?;
//!
//! // Fails with a persistence error until a real store is wired in.
//! let added = list.add_item(ToDoItem::created_now("milk", "Buy milk", &SystemClock));
//! assert!(added.is_err());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod list;
pub mod types;
pub mod user;

// Re-export commonly used types
pub use config::ListConfig;
pub use list::{ListEnvironment, ListError, Rejection, ToDoList};
pub use types::ToDoItem;
pub use user::{User, UserError};
