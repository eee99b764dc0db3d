//! The owned, gated to-do list.
//!
//! [`ToDoList::add_item`] is the only mutation. Every call runs the gates in
//! order, and a failed gate leaves the list untouched with no side effects:
//!
//! 1. the owner is valid today
//! 2. the list is below capacity
//! 3. the candidate is not stamped in the future, and was created at least
//!    the minimum spacing after the last item
//! 4. no existing item has the same name
//!
//! Once the gates pass the item is stored, appended, and the owner is
//! notified when the new count reaches the configured threshold.

use crate::config::ListConfig;
use crate::types::ToDoItem;
use crate::user::{User, UserError};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use thiserror::Error;
use todo_list_core::environment::{Clock, EmailNotifier, ItemStore};
use todo_list_core::error::StoreError;
use tracing::{debug, info, warn};

/// Injected capabilities for a [`ToDoList`]
#[derive(Clone)]
pub struct ListEnvironment {
    /// Clock for age checks and spacing
    pub clock: Arc<dyn Clock>,
    /// Owner notification channel
    pub notifier: Arc<dyn EmailNotifier>,
    /// Durable storage for accepted items
    pub store: Arc<dyn ItemStore<ToDoItem>>,
}

impl ListEnvironment {
    /// Creates a new `ListEnvironment`
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn EmailNotifier>,
        store: Arc<dyn ItemStore<ToDoItem>>,
    ) -> Self {
        Self {
            clock,
            notifier,
            store,
        }
    }
}

impl std::fmt::Debug for ListEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListEnvironment").finish_non_exhaustive()
    }
}

/// Why a candidate item was turned away.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The owner no longer passes validation.
    #[error("List owner is not valid: {0}")]
    InvalidOwner(UserError),

    /// The list already holds `capacity` items.
    #[error("ToDoList cannot contain more than {capacity} items")]
    Full {
        /// Configured capacity
        capacity: usize,
    },

    /// The candidate is stamped later than the current time.
    #[error("Item creation time {created_at} is in the future")]
    CreatedInFuture {
        /// The candidate's creation time
        created_at: DateTime<Utc>,
    },

    /// The candidate was created too soon after the previous item.
    #[error(
        "Items must be created at least {} minutes apart ({} elapsed)",
        .required.num_minutes(),
        .elapsed.num_minutes()
    )]
    TooSoon {
        /// Time between the last item's creation and the candidate's
        elapsed: Duration,
        /// Configured minimum spacing
        required: Duration,
    },

    /// An item with this name is already in the list.
    #[error("An item named '{name}' already exists")]
    DuplicateName {
        /// The clashing name
        name: String,
    },
}

/// Failures that are not gate rejections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The owner was invalid when the list was created.
    #[error("Invalid User: {0}")]
    InvalidOwner(#[from] UserError),

    /// The store could not record an item that passed every gate.
    #[error("Failed to persist item: {0}")]
    Persistence(#[from] StoreError),
}

/// A user's bounded, append-only to-do list
#[derive(Debug)]
pub struct ToDoList {
    owner: User,
    items: Vec<ToDoItem>,
    config: ListConfig,
    last_rejection: Option<Rejection>,
    env: ListEnvironment,
}

impl ToDoList {
    /// Creates an empty list with default limits.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidOwner`] if `owner` is not valid today.
    pub fn new(owner: User, env: ListEnvironment) -> Result<Self, ListError> {
        Self::with_config(owner, env, ListConfig::default())
    }

    /// Creates an empty list with custom limits.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidOwner`] if `owner` is not valid today.
    pub fn with_config(
        owner: User,
        env: ListEnvironment,
        config: ListConfig,
    ) -> Result<Self, ListError> {
        owner.validate_on(env.clock.now().date_naive())?;
        Ok(Self {
            owner,
            items: Vec::new(),
            config,
            last_rejection: None,
            env,
        })
    }

    /// Runs every gate against `item` without touching the list.
    ///
    /// # Errors
    ///
    /// Returns the first failed gate as a [`Rejection`].
    pub fn check(&self, item: &ToDoItem) -> Result<(), Rejection> {
        let now = self.env.clock.now();

        self.owner
            .validate_on(now.date_naive())
            .map_err(Rejection::InvalidOwner)?;

        if self.items.len() >= self.config.capacity {
            return Err(Rejection::Full {
                capacity: self.config.capacity,
            });
        }

        if item.created_at > now {
            return Err(Rejection::CreatedInFuture {
                created_at: item.created_at,
            });
        }

        // Candidate is not in the future, so this also bounds `now - last`.
        if let Some(last) = self.items.last() {
            let elapsed = item.created_at - last.created_at;
            if elapsed < self.config.min_spacing {
                return Err(Rejection::TooSoon {
                    elapsed,
                    required: self.config.min_spacing,
                });
            }
        }

        if self.contains(&item.name) {
            return Err(Rejection::DuplicateName {
                name: item.name.clone(),
            });
        }

        Ok(())
    }

    /// Tries to add `item`.
    ///
    /// Returns `Ok(true)` once the item is stored and appended, and
    /// `Ok(false)` when a gate rejects it; the reason is then available from
    /// [`last_rejection`](Self::last_rejection).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Persistence`] if every gate passed but the store
    /// failed. The list is left unchanged and no notification is sent.
    pub fn add_item(&mut self, item: ToDoItem) -> Result<bool, ListError> {
        if let Err(rejection) = self.check(&item) {
            debug!(item = %item.name, reason = %rejection, "Item rejected");
            self.last_rejection = Some(rejection);
            return Ok(false);
        }
        self.last_rejection = None;

        if let Err(error) = self.env.store.store(&item) {
            warn!(
                item = %item.name,
                error = %error,
                "Item passed every gate but was not stored"
            );
            return Err(error.into());
        }

        info!(item = %item.name, count = self.items.len() + 1, "Item added");
        self.items.push(item);

        if self.items.len() == self.config.notify_at {
            info!(
                to = %self.owner.email,
                count = self.items.len(),
                "List almost full, notifying owner"
            );
            self.env
                .notifier
                .notify(&self.owner.email, &self.config.almost_full_message);
        }

        Ok(true)
    }

    /// The list owner
    #[must_use]
    pub const fn owner(&self) -> &User {
        &self.owner
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[ToDoItem] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when no more items fit
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.config.capacity
    }

    /// How many more items fit
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.config.capacity.saturating_sub(self.items.len())
    }

    /// Most recently added item
    #[must_use]
    pub fn last_item(&self) -> Option<&ToDoItem> {
        self.items.last()
    }

    /// True if an item named exactly `name` is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|existing| existing.name == name)
    }

    /// Why the most recent `add_item` call was rejected, if it was
    #[must_use]
    pub const fn last_rejection(&self) -> Option<&Rejection> {
        self.last_rejection.as_ref()
    }

    /// Limits in effect
    #[must_use]
    pub const fn config(&self) -> &ListConfig {
        &self.config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use todo_list_core::environment::UnimplementedStore;
    use todo_list_testing::{
        FailingStore, InMemoryStore, ManualClock, RecordingNotifier, test_clock,
    };

    struct Harness {
        clock: ManualClock,
        notifier: RecordingNotifier,
        store: InMemoryStore<ToDoItem>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                clock: ManualClock::starting_at(test_clock().now()),
                notifier: RecordingNotifier::new(),
                store: InMemoryStore::new(),
            }
        }

        fn env(&self) -> ListEnvironment {
            ListEnvironment::new(
                Arc::new(self.clock.clone()),
                Arc::new(self.notifier.clone()),
                Arc::new(self.store.clone()),
            )
        }

        fn list(&self) -> ToDoList {
            ToDoList::new(owner(), self.env()).unwrap()
        }

        fn item(&self, name: &str) -> ToDoItem {
            ToDoItem::created_now(name, format!("{name} content"), &self.clock)
        }
    }

    fn owner() -> User {
        User::new(
            "owner@example.com",
            "Grace",
            "Hopper",
            "Password123",
            NaiveDate::from_ymd_opt(1990, 12, 9).unwrap(),
        )
    }

    #[test]
    fn first_item_is_accepted_and_stored() {
        let h = Harness::new();
        let mut list = h.list();

        assert!(list.add_item(h.item("milk")).unwrap());

        assert_eq!(list.len(), 1);
        assert_eq!(h.store.len(), 1);
        assert!(list.last_rejection().is_none());
        assert_eq!(h.notifier.count(), 0);
    }

    #[test]
    fn item_within_spacing_is_rejected() {
        let h = Harness::new();
        let mut list = h.list();
        assert!(list.add_item(h.item("first")).unwrap());

        h.clock.advance(Duration::minutes(29));

        assert!(!list.add_item(h.item("second")).unwrap());
        assert_eq!(list.len(), 1);
        assert!(matches!(
            list.last_rejection(),
            Some(Rejection::TooSoon { .. })
        ));
        assert_eq!(h.store.len(), 1);
    }

    #[test]
    fn item_at_exactly_spacing_is_accepted() {
        let h = Harness::new();
        let mut list = h.list();
        assert!(list.add_item(h.item("first")).unwrap());

        h.clock.advance(Duration::minutes(30));

        assert!(list.add_item(h.item("second")).unwrap());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let h = Harness::new();
        let mut list = h.list();
        assert!(list.add_item(h.item("milk")).unwrap());

        h.clock.advance(Duration::hours(1));

        assert!(!list.add_item(h.item("milk")).unwrap());
        assert_eq!(
            list.last_rejection(),
            Some(&Rejection::DuplicateName {
                name: "milk".to_string()
            })
        );
    }

    #[test]
    fn rejection_is_cleared_by_next_success() {
        let h = Harness::new();
        let mut list = h.list();
        assert!(list.add_item(h.item("a")).unwrap());
        assert!(!list.add_item(h.item("b")).unwrap());
        assert!(list.last_rejection().is_some());

        h.clock.advance(Duration::minutes(30));
        assert!(list.add_item(h.item("b")).unwrap());
        assert!(list.last_rejection().is_none());
    }

    #[test]
    fn owner_is_rechecked_on_every_add() {
        let h = Harness::new();
        let mut list = h.list();
        list.owner.password = "weak".to_string();

        assert!(!list.add_item(h.item("milk")).unwrap());
        assert_eq!(
            list.last_rejection(),
            Some(&Rejection::InvalidOwner(UserError::WeakPassword))
        );
        assert!(h.store.is_empty());
    }

    #[test]
    fn invalid_owner_fails_construction() {
        let h = Harness::new();
        let owner = User {
            email: "not-an-email".to_string(),
            ..owner()
        };

        let result = ToDoList::new(owner, h.env());

        assert!(matches!(
            result,
            Err(ListError::InvalidOwner(UserError::InvalidEmail { .. }))
        ));
    }

    #[test]
    fn unimplemented_store_surfaces_as_error() {
        let h = Harness::new();
        let env = ListEnvironment::new(
            Arc::new(h.clock.clone()),
            Arc::new(h.notifier.clone()),
            Arc::new(UnimplementedStore),
        );
        let mut list = ToDoList::new(owner(), env).unwrap();

        let result = list.add_item(h.item("milk"));

        assert_eq!(
            result,
            Err(ListError::Persistence(StoreError::NotImplemented))
        );
        assert!(list.is_empty());
        assert!(list.last_rejection().is_none());
    }

    #[test]
    fn failed_store_sends_no_notification() {
        let h = Harness::new();
        let env = ListEnvironment::new(
            Arc::new(h.clock.clone()),
            Arc::new(h.notifier.clone()),
            Arc::new(FailingStore::unavailable()),
        );
        let config = ListConfig::new().with_notify_at(1);
        let mut list = ToDoList::with_config(owner(), env, config).unwrap();

        assert!(list.add_item(h.item("milk")).is_err());
        assert_eq!(h.notifier.count(), 0);
    }

    #[test]
    fn capacity_helpers() {
        let h = Harness::new();
        let config = ListConfig::new().with_capacity(2);
        let mut list = ToDoList::with_config(owner(), h.env(), config).unwrap();
        assert_eq!(list.remaining_capacity(), 2);

        assert!(list.add_item(h.item("a")).unwrap());
        h.clock.advance(Duration::minutes(30));
        assert!(list.add_item(h.item("b")).unwrap());
        h.clock.advance(Duration::minutes(30));

        assert!(list.is_full());
        assert_eq!(list.remaining_capacity(), 0);
        assert!(!list.add_item(h.item("c")).unwrap());
        assert_eq!(
            list.last_rejection(),
            Some(&Rejection::Full { capacity: 2 })
        );
        assert_eq!(list.last_item().unwrap().name, "b");
    }

    #[test]
    fn item_stamped_in_the_future_is_rejected() {
        let h = Harness::new();
        let mut list = h.list();
        let ahead = test_clock().now() + Duration::minutes(1);

        assert!(!list.add_item(ToDoItem::new("later", "", ahead)).unwrap());
        assert_eq!(
            list.last_rejection(),
            Some(&Rejection::CreatedInFuture { created_at: ahead })
        );
        assert!(list.is_empty());
        assert!(h.store.is_empty());
    }

    #[test]
    fn spacing_uses_the_candidate_timestamp() {
        let h = Harness::new();
        let mut list = h.list();
        assert!(list.add_item(h.item("first")).unwrap());

        // Built 10 minutes after the first, submitted an hour later
        h.clock.advance(Duration::minutes(10));
        let early = h.item("second");
        h.clock.advance(Duration::minutes(50));

        assert!(!list.add_item(early).unwrap());
        assert_eq!(
            list.last_rejection(),
            Some(&Rejection::TooSoon {
                elapsed: Duration::minutes(10),
                required: Duration::minutes(30),
            })
        );
    }

    #[test]
    fn check_does_not_mutate() {
        let h = Harness::new();
        let list = h.list();

        assert!(list.check(&h.item("milk")).is_ok());
        assert!(list.is_empty());
        assert!(h.store.is_empty());
    }

    #[test]
    fn rejection_messages() {
        let too_soon = Rejection::TooSoon {
            elapsed: Duration::minutes(29),
            required: Duration::minutes(30),
        };
        assert_eq!(
            too_soon.to_string(),
            "Items must be created at least 30 minutes apart (29 elapsed)"
        );
        assert_eq!(
            Rejection::Full { capacity: 10 }.to_string(),
            "ToDoList cannot contain more than 10 items"
        );
    }
}
