//! Domain types for the fare server.
//!
//! This module contains the core domain model types that represent
//! validated fare data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod journey;
mod user;
mod zone;

pub use journey::{JourneyRecord, PricedJourney};
pub use user::{InvalidUserId, UserId};
pub use zone::{InvalidZone, Zone};
