//! Error types for capability failures.

use thiserror::Error;

/// Reasons an [`ItemStore`](crate::environment::ItemStore) can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No storage backend has been wired in.
    #[error("Save method not implemented")]
    NotImplemented,

    /// The backend could not be reached.
    #[error("Storage unavailable: {reason}")]
    Unavailable {
        /// Reason for failure
        reason: String,
    },

    /// The backend refused the item.
    #[error("Storage rejected item: {reason}")]
    Rejected {
        /// Reason for failure
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            StoreError::NotImplemented.to_string(),
            "Save method not implemented"
        );
        assert_eq!(
            StoreError::Rejected {
                reason: "quota".to_string()
            }
            .to_string(),
            "Storage rejected item: quota"
        );
    }
}
