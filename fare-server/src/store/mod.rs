//! Journey history persistence.
//!
//! The fare engine is pure; everything the daily quota needs to remember
//! lives behind the [`JourneyStore`] trait. The quota check-then-insert
//! sequence is racy if split across calls, so batch recording re-verifies
//! the daily count inside the same transaction that inserts the rows.

mod error;
mod sqlite;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::domain::{JourneyRecord, PricedJourney, UserId};

pub use error::StoreError;
pub use sqlite::SqliteJourneyStore;

/// Persistent store of recorded journeys.
///
/// Records are append-only: nothing in the system updates or deletes a
/// journey once written.
#[async_trait]
pub trait JourneyStore: Send + Sync {
    /// Count journeys recorded by `user` on the given local calendar date.
    async fn count_for_date(&self, user: &UserId, date: NaiveDate) -> Result<u32, StoreError>;

    /// Record a batch of priced journeys atomically.
    ///
    /// The daily count for (`user`, local date of `recorded_at`) is
    /// re-checked inside the insert transaction; if the batch would push it
    /// past `max_per_day` nothing is written and
    /// [`StoreError::QuotaExceeded`] is returned. Returns the stored
    /// records, in input order, with their assigned ids.
    async fn record_batch(
        &self,
        user: &UserId,
        recorded_at: DateTime<FixedOffset>,
        journeys: &[PricedJourney],
        max_per_day: u32,
    ) -> Result<Vec<JourneyRecord>, StoreError>;

    /// All journeys recorded by `user`, most recent first.
    async fn list_for_user(&self, user: &UserId) -> Result<Vec<JourneyRecord>, StoreError>;
}
