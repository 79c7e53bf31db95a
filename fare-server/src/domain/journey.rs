//! Journey types shared between the fare engine and the history store.

use chrono::{DateTime, FixedOffset};

use super::Zone;

/// A journey whose fare has been computed but not yet recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedJourney {
    /// Origin zone
    pub from_zone: Zone,

    /// Destination zone
    pub to_zone: Zone,

    /// Fare amount in the network's base currency unit
    pub fare: u32,
}

/// A journey recorded in the history store.
///
/// Records are immutable once written; they are only ever inserted and read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyRecord {
    /// Row id assigned by the store
    pub id: i64,

    /// Owner of the journey
    pub user_id: String,

    /// Origin zone
    pub from_zone: Zone,

    /// Destination zone
    pub to_zone: Zone,

    /// Fare charged for the journey
    pub fare: u32,

    /// When the journey was recorded (local time, offset preserved)
    pub created_at: DateTime<FixedOffset>,
}
