//! Batch fare calculation with per-item error isolation.
//!
//! A malformed journey is reported in its own result slot and never aborts
//! the rest of the batch, so callers must inspect each item's status rather
//! than assuming uniform success. Inputs beyond the batch cap are truncated
//! silently rather than rejected; excess items are simply never priced.

use crate::domain::{PricedJourney, Zone};

use super::error::FareError;
use super::table::FareTable;

/// Maximum journeys accepted in one batch; extra items are dropped.
pub const MAX_JOURNEYS_PER_BATCH: usize = 20;

/// Raw input for one journey in a batch.
///
/// Fields are optional because absence is a per-item error, not a request
/// parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyInput {
    /// Raw origin zone value, if present
    pub from_zone: Option<String>,

    /// Raw destination zone value, if present
    pub to_zone: Option<String>,
}

/// Outcome for one journey in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyOutcome {
    /// 1-based position of the journey in the (truncated) batch
    pub journey_number: usize,

    /// The raw origin value, echoed back
    pub from_zone: Option<String>,

    /// The raw destination value, echoed back
    pub to_zone: Option<String>,

    /// The priced journey, or the validation error that stopped it
    pub result: Result<PricedJourney, FareError>,
}

impl JourneyOutcome {
    /// Fare for this item; 0 for error items.
    pub fn fare(&self) -> u32 {
        self.result.as_ref().map(|p| p.fare).unwrap_or(0)
    }

    /// Whether this item priced successfully.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregate result of a batch calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// Per-item outcomes, in input order
    pub journeys: Vec<JourneyOutcome>,

    /// Sum of fares across successful items only
    pub total_fare: u32,

    /// Number of items processed after truncation
    pub journey_count: usize,
}

impl BatchResult {
    /// The successfully priced journeys, in order, ready for persistence.
    pub fn priced(&self) -> Vec<PricedJourney> {
        self.journeys
            .iter()
            .filter_map(|o| o.result.as_ref().ok().copied())
            .collect()
    }
}

/// Price a batch of journeys against the fare table.
///
/// The input is truncated to [`MAX_JOURNEYS_PER_BATCH`] items; remaining
/// items are processed in order with 1-based numbering. Validation failures
/// are isolated per item.
pub fn process_batch(table: &FareTable, journeys: &[JourneyInput]) -> BatchResult {
    let journeys = &journeys[..journeys.len().min(MAX_JOURNEYS_PER_BATCH)];

    let mut outcomes = Vec::with_capacity(journeys.len());
    let mut total_fare = 0u32;

    for (idx, journey) in journeys.iter().enumerate() {
        let result = price_one(table, journey);
        if let Ok(priced) = &result {
            total_fare += priced.fare;
        }
        outcomes.push(JourneyOutcome {
            journey_number: idx + 1,
            from_zone: journey.from_zone.clone(),
            to_zone: journey.to_zone.clone(),
            result,
        });
    }

    let journey_count = outcomes.len();
    BatchResult {
        journeys: outcomes,
        total_fare,
        journey_count,
    }
}

fn price_one(table: &FareTable, journey: &JourneyInput) -> Result<PricedJourney, FareError> {
    let from_raw = journey
        .from_zone
        .as_deref()
        .ok_or(FareError::MissingField { field: "from_zone" })?;
    let to_raw = journey
        .to_zone
        .as_deref()
        .ok_or(FareError::MissingField { field: "to_zone" })?;

    let from_zone = Zone::parse(from_raw).map_err(|_| FareError::InvalidZone {
        field: "from_zone",
        value: from_raw.to_string(),
    })?;
    let to_zone = Zone::parse(to_raw).map_err(|_| FareError::InvalidZone {
        field: "to_zone",
        value: to_raw.to_string(),
    })?;

    Ok(PricedJourney {
        from_zone,
        to_zone,
        fare: table.price(from_zone, to_zone),
    })
}
