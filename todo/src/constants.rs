//! Domain constants.

/// Minimum age (in whole years) for a valid user.
pub const MIN_AGE_YEARS: i32 = 13;

/// Password length bounds, inclusive.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Upper bound, inclusive.
pub const PASSWORD_MAX_LEN: usize = 40;

/// List defaults used by [`ListConfig::default`](crate::config::ListConfig).
pub mod list_defaults {
    /// Maximum number of items a list accepts.
    pub const CAPACITY: usize = 10;

    /// Minimum minutes between consecutive additions.
    pub const MIN_SPACING_MINUTES: i64 = 30;

    /// Item count that triggers the "almost full" notification.
    pub const NOTIFY_AT: usize = 8;

    /// Body of the "almost full" notification.
    pub const ALMOST_FULL_MESSAGE: &str = "Your ToDoList is almost full";
}
