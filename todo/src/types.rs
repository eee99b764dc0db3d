//! Domain types for list entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_list_core::environment::Clock;

/// A single to-do entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoItem {
    /// Name, unique within the owning list
    pub name: String,
    /// Free-text body
    pub content: String,
    /// When the item was created
    pub created_at: DateTime<Utc>,
}

impl ToDoItem {
    /// Creates a new item with an explicit creation time
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            created_at,
        }
    }

    /// Creates a new item stamped with `clock`'s current time
    #[must_use]
    pub fn created_now(
        name: impl Into<String>,
        content: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        Self::new(name, content, clock.now())
    }
}
