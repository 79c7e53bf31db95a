//! Fare calculation engine.
//!
//! The core logic of the system: a pure fare table over the three-zone
//! network, a batch processor with per-item error isolation, and the daily
//! quota guard. Nothing in this module performs I/O.

mod batch;
mod error;
mod quota;
mod table;

pub use batch::{
    BatchResult, JourneyInput, JourneyOutcome, MAX_JOURNEYS_PER_BATCH, process_batch,
};
pub use error::FareError;
pub use quota::{MAX_JOURNEYS_PER_DAY, QuotaConfig, QuotaExceeded, check_quota};
pub use table::{FareRule, FareTable};
