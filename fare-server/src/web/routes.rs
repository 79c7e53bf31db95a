//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info, warn};

use crate::domain::UserId;
use crate::fare::{JourneyInput, MAX_JOURNEYS_PER_BATCH, QuotaExceeded, check_quota, process_batch};
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/calculate-fare", post(calculate_fare))
        .route("/api/zones", get(list_zones))
        .route("/api/fare-rules", get(list_fare_rules))
        .route("/api/users/:user_id/journeys", get(user_journeys))
        .route("/api/users/:user_id/journeys/count", get(user_journey_count))
        // The fare calculator frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Price a batch of journeys, enforce the daily quota, and record the
/// successes.
async fn calculate_fare(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: CalculateFareRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "malformed fare request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let user = UserId::parse(&req.user_id).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    if req.journeys.is_empty() {
        return Err(AppError::BadRequest {
            message: "journeys must not be empty".to_string(),
        });
    }

    let inputs: Vec<JourneyInput> = req.journeys.iter().map(JourneyItem::normalized).collect();

    // Quota refusal happens before any pricing. The count is taken over the
    // post-truncation batch size, since dropped items are never recorded.
    let now = Local::now().fixed_offset();
    let existing = state.store.count_for_date(&user, now.date_naive()).await?;
    let requested = u32::try_from(inputs.len().min(MAX_JOURNEYS_PER_BATCH)).unwrap_or(u32::MAX);
    check_quota(&state.quota, existing, requested)?;

    let batch = process_batch(&state.table, &inputs);

    // The store re-checks the cap transactionally, so a concurrent batch
    // that slipped past the pre-check still gets a quota refusal here.
    let records = state
        .store
        .record_batch(&user, now, &batch.priced(), state.quota.max_per_day)
        .await?;

    let mut record_ids = records.iter().map(|r| r.id);
    let journeys: Vec<JourneyResultDto> = batch
        .journeys
        .iter()
        .map(|outcome| {
            let id = if outcome.is_success() {
                record_ids.next()
            } else {
                None
            };
            JourneyResultDto::from_outcome(outcome, id)
        })
        .collect();

    info!(
        user = %user,
        journey_count = batch.journey_count,
        total_fare = batch.total_fare,
        "priced journey batch"
    );

    Ok(Json(CalculateFareResponse {
        success: true,
        journeys,
        total_fare: batch.total_fare,
        journey_count: batch.journey_count,
    })
    .into_response())
}

/// List the active zones. The response is cached.
async fn list_zones(State(state): State<AppState>) -> Json<ZoneListResponse> {
    let cached = state
        .zones_cache
        .get_or_insert_with(|| {
            debug!("rebuilding zone list response");
            ZoneListResponse::from_registry(&state.registry)
        })
        .await;
    Json((*cached).clone())
}

/// List every directed fare rule. The response is cached.
async fn list_fare_rules(State(state): State<AppState>) -> Json<FareRulesResponse> {
    let cached = state
        .rules_cache
        .get_or_insert_with(|| {
            debug!("rebuilding fare rules response");
            FareRulesResponse::from_rules(&state.table.all_rules())
        })
        .await;
    Json((*cached).clone())
}

/// A user's journey history, most recent first.
async fn user_journeys(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<JourneyHistoryResponse>, AppError> {
    let user = UserId::parse(&user_id).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    let records = state.store.list_for_user(&user).await?;
    Ok(Json(JourneyHistoryResponse::from_records(&records)))
}

/// A user's journey count for the current local day.
///
/// The frontend polls this before submitting a batch, so the value may be
/// stale by the time the batch arrives; the quota check on submission is
/// authoritative.
async fn user_journey_count(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<JourneyCountResponse>, AppError> {
    let user = UserId::parse(&user_id).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    let today = Local::now().date_naive();
    let count = state.store.count_for_date(&user, today).await?;
    Ok(Json(JourneyCountResponse {
        success: true,
        user_id: user.as_str().to_string(),
        date: today.to_string(),
        count,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    TooManyRequests { message: String },
    Internal { message: String },
}

impl From<QuotaExceeded> for AppError {
    fn from(e: QuotaExceeded) -> Self {
        AppError::TooManyRequests {
            message: e.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::QuotaExceeded(q) => q.into(),
            other => AppError::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::TooManyRequests { message } => (StatusCode::TOO_MANY_REQUESTS, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });
        (status, body).into_response()
    }
}
