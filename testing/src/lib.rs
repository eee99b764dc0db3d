//! # Todo List Testing
//!
//! Deterministic test doubles for the todo list capabilities.
//!
//! This crate provides:
//! - Clocks that never drift on their own ([`FixedClock`], [`ManualClock`])
//! - A notifier that records every call ([`RecordingNotifier`])
//! - Stores that keep items in memory or always fail
//!   ([`InMemoryStore`], [`FailingStore`])
//!
//! ## Example
//!
//! ```
//! use todo_list_core::environment::{Clock, EmailNotifier};
//! use todo_list_testing::{ManualClock, RecordingNotifier, test_clock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::starting_at(test_clock().now());
//! clock.advance(Duration::minutes(30));
//!
//! let notifier = RecordingNotifier::new();
//! notifier.notify("user@example.com", "hello");
//! assert_eq!(notifier.count(), 1);
//! ```

use chrono::{DateTime, Utc};
use todo_list_core::environment::Clock;

pub mod store_mocks;

/// Mock implementations of environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use chrono::Duration;
    use std::sync::{Arc, PoisonError, RwLock};
    use todo_list_core::environment::EmailNotifier;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_list_testing::mocks::FixedClock;
    /// use todo_list_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock that only moves when told to.
    ///
    /// Clones share the same underlying instant, so a test can keep one
    /// handle while the list under test owns another.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        time: Arc<RwLock<DateTime<Utc>>>,
    }

    impl ManualClock {
        /// Create a clock frozen at `time`
        #[must_use]
        pub fn starting_at(time: DateTime<Utc>) -> Self {
            Self {
                time: Arc::new(RwLock::new(time)),
            }
        }

        /// Move the clock forward by `by`
        pub fn advance(&self, by: Duration) {
            let mut time = self.time.write().unwrap_or_else(PoisonError::into_inner);
            *time += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.time.read().unwrap_or_else(PoisonError::into_inner)
        }
    }

    /// A single captured notification
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SentNotification {
        /// Recipient address
        pub address: String,
        /// Message body
        pub message: String,
    }

    /// Notifier that records calls instead of delivering them.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingNotifier {
        sent: Arc<RwLock<Vec<SentNotification>>>,
    }

    impl RecordingNotifier {
        /// Create a notifier with no recorded calls
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of notifications sent so far
        #[must_use]
        pub fn count(&self) -> usize {
            self.sent.read().unwrap_or_else(PoisonError::into_inner).len()
        }

        /// Snapshot of every notification sent so far, oldest first
        #[must_use]
        pub fn sent(&self) -> Vec<SentNotification> {
            self.sent
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl EmailNotifier for RecordingNotifier {
        fn notify(&self, address: &str, message: &str) {
            self.sent
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(SentNotification {
                    address: address.to_string(),
                    message: message.to_string(),
                });
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Install a test-friendly `tracing` subscriber.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .try_init();
}

// Re-export commonly used items
pub use mocks::{FixedClock, ManualClock, RecordingNotifier, SentNotification, test_clock};
pub use store_mocks::{FailingStore, InMemoryStore};
