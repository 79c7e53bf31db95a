//! Transit fare calculation server.
//!
//! A web service that prices journeys across a three-zone network,
//! records them per user, and enforces a daily journey quota.

pub mod cache;
pub mod domain;
pub mod fare;
pub mod store;
pub mod web;
pub mod zones;
