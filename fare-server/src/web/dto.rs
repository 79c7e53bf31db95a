//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::JourneyRecord;
use crate::fare::{FareRule, JourneyInput, JourneyOutcome};
use crate::zones::{ZoneInfo, ZoneRegistry};

/// Request to price and record a batch of journeys.
#[derive(Debug, Deserialize)]
pub struct CalculateFareRequest {
    /// Opaque user identifier the batch is recorded against
    pub user_id: String,

    /// Journeys to price, in order
    #[serde(default)]
    pub journeys: Vec<JourneyItem>,
}

/// One journey in a fare calculation request.
///
/// Zone fields are raw JSON values: absence and type mismatches must be
/// per-item errors, never request parse failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JourneyItem {
    /// Raw origin zone value
    #[serde(default)]
    pub from_zone: Option<Value>,

    /// Raw destination zone value
    #[serde(default)]
    pub to_zone: Option<Value>,
}

impl JourneyItem {
    /// Normalise the raw JSON values into the engine's string-level input.
    pub fn normalized(&self) -> JourneyInput {
        JourneyInput {
            from_zone: zone_field(&self.from_zone),
            to_zone: zone_field(&self.to_zone),
        }
    }
}

/// JSON zone values arrive as strings or numbers (the web client sends
/// numbers); normalise both to the string form the engine validates. Other
/// JSON types are rendered to text and rejected downstream as invalid
/// zones, keeping the failure in the item's own result slot.
fn zone_field(value: &Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    }
}

/// Processing status of one journey in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyStatus {
    Success,
    Error,
}

/// Result for one journey in a batch response.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyResultDto {
    /// 1-based position in the batch
    pub journey_number: usize,

    /// Echoed origin value
    pub from_zone: Option<String>,

    /// Echoed destination value
    pub to_zone: Option<String>,

    /// Computed fare; 0 for error items
    pub fare: u32,

    /// Whether this item priced successfully
    pub status: JourneyStatus,

    /// Why the item failed (error items only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// History record id (persisted successes only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journey_id: Option<i64>,
}

impl JourneyResultDto {
    /// Build the DTO from a batch outcome and its persisted record id.
    pub fn from_outcome(outcome: &JourneyOutcome, journey_id: Option<i64>) -> Self {
        let (status, error_message) = match &outcome.result {
            Ok(_) => (JourneyStatus::Success, None),
            Err(e) => (JourneyStatus::Error, Some(e.to_string())),
        };
        JourneyResultDto {
            journey_number: outcome.journey_number,
            from_zone: outcome.from_zone.clone(),
            to_zone: outcome.to_zone.clone(),
            fare: outcome.fare(),
            status,
            error_message,
            journey_id,
        }
    }
}

/// Response for batch fare calculation.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateFareResponse {
    pub success: bool,

    /// Per-journey results, in input order
    pub journeys: Vec<JourneyResultDto>,

    /// Sum of fares across successful journeys
    pub total_fare: u32,

    /// Number of journeys processed (after batch truncation)
    pub journey_count: usize,
}

/// A zone in the zone list response.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneDto {
    pub zone_number: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl ZoneDto {
    fn from_info(info: &ZoneInfo) -> Self {
        ZoneDto {
            zone_number: info.zone.as_str().to_string(),
            name: info.name.to_string(),
            description: info.description.to_string(),
            is_active: info.is_active,
        }
    }
}

/// Response for the zone list.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneListResponse {
    pub success: bool,
    pub zones: Vec<ZoneDto>,
    pub count: usize,
}

impl ZoneListResponse {
    /// Render the active zones of a registry.
    pub fn from_registry(registry: &ZoneRegistry) -> Self {
        let zones: Vec<ZoneDto> = registry.active().map(ZoneDto::from_info).collect();
        let count = zones.len();
        ZoneListResponse {
            success: true,
            zones,
            count,
        }
    }
}

/// A fare rule in the fare rules response.
#[derive(Debug, Clone, Serialize)]
pub struct FareRuleDto {
    pub from_zone: String,
    pub to_zone: String,
    pub fare: u32,
    pub route: String,
}

impl FareRuleDto {
    fn from_rule(rule: &FareRule) -> Self {
        FareRuleDto {
            from_zone: rule.from_zone.as_str().to_string(),
            to_zone: rule.to_zone.as_str().to_string(),
            fare: rule.fare,
            route: rule.route.clone(),
        }
    }
}

/// Response for the fare rules listing.
#[derive(Debug, Clone, Serialize)]
pub struct FareRulesResponse {
    pub success: bool,
    pub fare_rules: Vec<FareRuleDto>,
    pub count: usize,
}

impl FareRulesResponse {
    /// Render a rule listing.
    pub fn from_rules(rules: &[FareRule]) -> Self {
        let fare_rules: Vec<FareRuleDto> = rules.iter().map(FareRuleDto::from_rule).collect();
        let count = fare_rules.len();
        FareRulesResponse {
            success: true,
            fare_rules,
            count,
        }
    }
}

/// A stored journey in the history response.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyRecordDto {
    pub id: i64,
    pub user_id: String,
    pub from_zone: String,
    pub to_zone: String,
    pub fare: u32,
    pub created_at: String,
}

impl JourneyRecordDto {
    fn from_record(record: &JourneyRecord) -> Self {
        JourneyRecordDto {
            id: record.id,
            user_id: record.user_id.clone(),
            from_zone: record.from_zone.as_str().to_string(),
            to_zone: record.to_zone.as_str().to_string(),
            fare: record.fare,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Response for a user's journey history.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyHistoryResponse {
    pub success: bool,
    pub journeys: Vec<JourneyRecordDto>,
    pub count: usize,
}

impl JourneyHistoryResponse {
    /// Render stored records, preserving their order.
    pub fn from_records(records: &[JourneyRecord]) -> Self {
        let journeys: Vec<JourneyRecordDto> =
            records.iter().map(JourneyRecordDto::from_record).collect();
        let count = journeys.len();
        JourneyHistoryResponse {
            success: true,
            journeys,
            count,
        }
    }
}

/// Response for a user's journey count on the current day.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyCountResponse {
    pub success: bool,
    pub user_id: String,
    pub date: String,
    pub count: u32,
}

/// Error body shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare::{FareTable, process_batch};

    #[test]
    fn string_zone_fields_pass_through() {
        let item: JourneyItem = serde_json::from_str(r#"{"from_zone":"1","to_zone":"3"}"#).unwrap();
        let input = item.normalized();
        assert_eq!(input.from_zone.as_deref(), Some("1"));
        assert_eq!(input.to_zone.as_deref(), Some("3"));
    }

    #[test]
    fn numeric_zone_fields_normalised() {
        let item: JourneyItem = serde_json::from_str(r#"{"from_zone":1,"to_zone":2}"#).unwrap();
        let input = item.normalized();
        assert_eq!(input.from_zone.as_deref(), Some("1"));
        assert_eq!(input.to_zone.as_deref(), Some("2"));
    }

    #[test]
    fn numeric_and_string_zones_price_identically() {
        let table = FareTable::standard();
        let string_item: JourneyItem =
            serde_json::from_str(r#"{"from_zone":"1","to_zone":"2"}"#).unwrap();
        let number_item: JourneyItem =
            serde_json::from_str(r#"{"from_zone":1,"to_zone":2}"#).unwrap();

        let a = process_batch(&table, &[string_item.normalized()]);
        let b = process_batch(&table, &[number_item.normalized()]);
        assert_eq!(a.total_fare, 55);
        assert_eq!(a.total_fare, b.total_fare);
    }

    #[test]
    fn absent_and_null_zones_are_none() {
        let item: JourneyItem = serde_json::from_str(r#"{"to_zone":null}"#).unwrap();
        let input = item.normalized();
        assert!(input.from_zone.is_none());
        assert!(input.to_zone.is_none());
    }

    #[test]
    fn mismatched_type_becomes_invalid_zone() {
        let table = FareTable::standard();
        let item: JourneyItem =
            serde_json::from_str(r#"{"from_zone":true,"to_zone":"2"}"#).unwrap();
        let result = process_batch(&table, &[item.normalized()]);
        let err = result.journeys[0].result.as_ref().unwrap_err();
        assert_eq!(err.to_string(), "invalid from_zone: true. Must be 1, 2, or 3");
    }

    #[test]
    fn success_item_serialisation_omits_error_fields() {
        let table = FareTable::standard();
        let item: JourneyItem = serde_json::from_str(r#"{"from_zone":"2","to_zone":"3"}"#).unwrap();
        let batch = process_batch(&table, &[item.normalized()]);
        let dto = JourneyResultDto::from_outcome(&batch.journeys[0], Some(17));

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["journey_number"], 1);
        assert_eq!(value["fare"], 45);
        assert_eq!(value["status"], "success");
        assert_eq!(value["journey_id"], 17);
        assert!(value.get("error_message").is_none());
    }

    #[test]
    fn error_item_serialisation_carries_message() {
        let table = FareTable::standard();
        let item: JourneyItem = serde_json::from_str(r#"{"from_zone":"9","to_zone":"3"}"#).unwrap();
        let batch = process_batch(&table, &[item.normalized()]);
        let dto = JourneyResultDto::from_outcome(&batch.journeys[0], None);

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["fare"], 0);
        assert_eq!(value["error_message"], "invalid from_zone: 9. Must be 1, 2, or 3");
        assert!(value.get("journey_id").is_none());
    }

    #[test]
    fn zone_list_response_shape() {
        let response = ZoneListResponse::from_registry(&crate::zones::standard_zones());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["count"], 3);
        assert_eq!(value["zones"][0]["zone_number"], "1");
        assert_eq!(value["zones"][0]["name"], "Central");
    }

    #[test]
    fn fare_rules_response_shape() {
        let response = FareRulesResponse::from_rules(&FareTable::standard().all_rules());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["count"], 9);
        assert_eq!(value["fare_rules"][0]["route"], "Zone 1 → Zone 1");
        assert_eq!(value["fare_rules"][0]["fare"], 40);
    }

    #[test]
    fn request_without_journeys_parses_empty() {
        let req: CalculateFareRequest = serde_json::from_str(r#"{"user_id":"u1"}"#).unwrap();
        assert_eq!(req.user_id, "u1");
        assert!(req.journeys.is_empty());
    }
}
