//! Fare calculation error types.
//!
//! These errors represent validation failures in a single fare calculation.
//! In batch processing they are isolated into the failing item's result and
//! never abort sibling items.

/// Errors from validating and pricing a single journey.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// A zone field is absent from the input
    #[error("missing {field}")]
    MissingField {
        /// Which field was absent (`from_zone` or `to_zone`)
        field: &'static str,
    },

    /// A zone field holds a value outside the network
    #[error("invalid {field}: {value}. Must be 1, 2, or 3")]
    InvalidZone {
        /// Which field held the value
        field: &'static str,
        /// The rejected value, echoed for the caller
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FareError::MissingField { field: "to_zone" };
        assert_eq!(err.to_string(), "missing to_zone");

        let err = FareError::InvalidZone {
            field: "from_zone",
            value: "5".into(),
        };
        assert_eq!(err.to_string(), "invalid from_zone: 5. Must be 1, 2, or 3");
    }
}
