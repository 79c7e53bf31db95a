//! Web layer for the fare server.
//!
//! Provides HTTP endpoints for fare calculation, the zone and fare-rule
//! listings, and per-user journey history.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
