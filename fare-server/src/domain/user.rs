//! User identifier type.

use std::fmt;

/// Maximum accepted length for a user identifier.
const MAX_LEN: usize = 64;

/// Error returned when parsing an invalid user identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid user id: {reason}")]
pub struct InvalidUserId {
    reason: &'static str,
}

/// An opaque caller-supplied user identifier.
///
/// There is no authentication model; the id only scopes journey history and
/// the daily quota. It must be non-empty, at most 64 characters, and free of
/// whitespace and control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Parse a user identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidUserId> {
        if s.is_empty() {
            return Err(InvalidUserId {
                reason: "must not be empty",
            });
        }
        if s.len() > MAX_LEN {
            return Err(InvalidUserId {
                reason: "must be at most 64 characters",
            });
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidUserId {
                reason: "must not contain whitespace or control characters",
            });
        }
        Ok(UserId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
