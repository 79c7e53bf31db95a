use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use fare_server::cache::CacheConfig;
use fare_server::fare::{FareTable, QuotaConfig};
use fare_server::store::SqliteJourneyStore;
use fare_server::web::{AppState, create_router};
use fare_server::zones::standard_zones;

/// Default listen address when FARE_BIND_ADDR is unset.
const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
    8000,
);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get configuration from environment
    let db_dir = std::env::var("FARE_DB_DIR").unwrap_or_else(|_| "data".to_string());
    let addr = std::env::var("FARE_BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ADDR);

    // Open the journey store (fail fast if the database is unusable)
    let store = SqliteJourneyStore::connect(&db_dir)
        .await
        .expect("Failed to open journey store");

    // Build app state
    let state = AppState::new(
        Arc::new(store),
        FareTable::standard(),
        standard_zones(),
        QuotaConfig::default(),
        &CacheConfig::default(),
    );

    // Create router
    let app = create_router(state);

    println!("Fare server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                            - Health check");
    println!("  POST /api/calculate-fare                - Price and record a journey batch");
    println!("  GET  /api/zones                         - List zones");
    println!("  GET  /api/fare-rules                    - List fare rules");
    println!("  GET  /api/users/{{user_id}}/journeys      - Journey history");
    println!("  GET  /api/users/{{user_id}}/journeys/count - Today's journey count");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
