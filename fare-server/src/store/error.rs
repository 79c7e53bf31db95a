//! Journey store error types.

use crate::fare::QuotaExceeded;

/// Errors from the journey history store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(String),

    /// A stored row holds data the domain types reject
    #[error("corrupt journey row {id}: {message}")]
    CorruptRow {
        /// Row id of the offending record
        id: i64,
        /// What was wrong with it
        message: String,
    },

    /// The transactional insert found the daily cap already reached
    #[error(transparent)]
    QuotaExceeded(#[from] QuotaExceeded),
}
