//! List configuration.
//!
//! Limits default to the documented behavior; applications may tighten or
//! relax them per list.

use crate::constants::list_defaults;
use chrono::Duration;

/// Limits and messages applied by a [`ToDoList`](crate::list::ToDoList).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Maximum number of items.
    ///
    /// Default: 10
    pub capacity: usize,

    /// Minimum time between the last item's creation and a new addition.
    ///
    /// Default: 30 minutes
    pub min_spacing: Duration,

    /// Item count that triggers the owner notification.
    ///
    /// Default: 8
    pub notify_at: usize,

    /// Notification body.
    pub almost_full_message: String,
}

impl ListConfig {
    /// Create configuration with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set minimum spacing between additions.
    #[must_use]
    pub const fn with_min_spacing(mut self, spacing: Duration) -> Self {
        self.min_spacing = spacing;
        self
    }

    /// Set the notification threshold.
    #[must_use]
    pub const fn with_notify_at(mut self, count: usize) -> Self {
        self.notify_at = count;
        self
    }

    /// Set the notification body.
    #[must_use]
    pub fn with_almost_full_message(mut self, message: impl Into<String>) -> Self {
        self.almost_full_message = message.into();
        self
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            capacity: list_defaults::CAPACITY,
            min_spacing: Duration::minutes(list_defaults::MIN_SPACING_MINUTES),
            notify_at: list_defaults::NOTIFY_AT,
            almost_full_message: list_defaults::ALMOST_FULL_MESSAGE.to_string(),
        }
    }
}
