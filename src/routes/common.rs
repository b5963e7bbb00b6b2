//! Common routes: health.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::time::Duration;

/// Upper bound on the store round trip made by the health check.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(1);
pub const HEALTH_ALLOW: &str = "GET, OPTIONS";

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthBody>) {
    match tokio::time::timeout(HEALTH_TIMEOUT, state.items.ping()).await {
        Ok(Ok(())) => (StatusCode::OK, Json(HealthBody { status: "ok" })),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "health check: store unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthBody { status: "down" }))
        }
        Err(_) => {
            tracing::warn!("health check: store did not answer within {:?}", HEALTH_TIMEOUT);
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthBody { status: "down" }))
        }
    }
}

async fn health_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed { allow: HEALTH_ALLOW }
}

/// GET /health with a store liveness check.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health)
                .head(health_method_not_allowed)
                .fallback(health_method_not_allowed),
        )
        .with_state(state)
}
