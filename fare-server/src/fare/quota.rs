//! Daily journey quota enforcement.
//!
//! The quota is all-or-nothing at batch level: a batch that would tip the
//! user over the daily cap is refused in its entirety, before any pricing,
//! with no partial admission of the items that would still fit.

/// Default maximum journeys a user may record per calendar day.
pub const MAX_JOURNEYS_PER_DAY: u32 = 20;

/// Quota configuration.
#[derive(Debug, Clone, Copy)]
pub struct QuotaConfig {
    /// Maximum journeys per user per local calendar day.
    pub max_per_day: u32,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        QuotaConfig {
            max_per_day: MAX_JOURNEYS_PER_DAY,
        }
    }
}

/// Refusal returned when a batch would exceed the daily cap.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "daily journey limit exceeded: {existing} journeys already recorded today, \
     {requested} requested, limit is {limit}"
)]
pub struct QuotaExceeded {
    /// Journeys already recorded today
    pub existing: u32,

    /// Journeys in the refused batch
    pub requested: u32,

    /// The daily cap
    pub limit: u32,
}

/// Check whether a batch of `requested` new journeys fits under the cap.
///
/// Refuses when `existing + requested > max_per_day`; a batch that lands
/// exactly on the cap is allowed.
pub fn check_quota(
    config: &QuotaConfig,
    existing: u32,
    requested: u32,
) -> Result<(), QuotaExceeded> {
    if existing + requested > config.max_per_day {
        return Err(QuotaExceeded {
            existing,
            requested,
            limit: config.max_per_day,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_twenty() {
        assert_eq!(QuotaConfig::default().max_per_day, 20);
    }

    #[test]
    fn refuses_when_over_cap() {
        let config = QuotaConfig::default();
        let err = check_quota(&config, 18, 5).unwrap_err();
        assert_eq!(err.existing, 18);
        assert_eq!(err.requested, 5);
        assert_eq!(err.limit, 20);
    }

    #[test]
    fn allows_exactly_at_cap() {
        let config = QuotaConfig::default();
        assert!(check_quota(&config, 18, 2).is_ok());
        assert!(check_quota(&config, 0, 20).is_ok());
        assert!(check_quota(&config, 20, 0).is_ok());
    }

    #[test]
    fn refuses_one_over_cap() {
        let config = QuotaConfig::default();
        assert!(check_quota(&config, 20, 1).is_err());
        assert!(check_quota(&config, 19, 2).is_err());
    }

    #[test]
    fn message_carries_counts() {
        let err = check_quota(&QuotaConfig::default(), 18, 5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "daily journey limit exceeded: 18 journeys already recorded today, \
             5 requested, limit is 20"
        );
    }

    #[test]
    fn custom_limit() {
        let config = QuotaConfig { max_per_day: 3 };
        assert!(check_quota(&config, 1, 2).is_ok());
        assert!(check_quota(&config, 2, 2).is_err());
    }
}
