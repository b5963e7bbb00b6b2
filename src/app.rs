//! Router assembly: `/api` routes plus the middleware stack.

use crate::config::ServerConfig;
use crate::cors::{cors_middleware, CorsPolicy};
use crate::error::AppError;
use crate::routes::{common_routes, item_routes};
use crate::state::AppState;
use axum::{error_handling::HandleErrorLayer, http::Uri, middleware, BoxError, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer, timeout::RequestBodyTimeoutLayer, trace::TraceLayer,
};

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

async fn handle_timeout(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::RequestTimeout
    } else {
        AppError::Internal(err.to_string())
    }
}

/// Build the service router. CORS is the outermost layer so every response,
/// including 404/405/408/413, carries the cross-origin headers.
pub fn build_app(state: AppState, server: &ServerConfig, cors: CorsPolicy) -> Router {
    let api = Router::new()
        .merge(common_routes(state.clone()))
        .merge(item_routes(state));

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(server.body_limit))
        .layer(RequestBodyTimeoutLayer::new(server.read_timeout))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .timeout(server.write_timeout),
        )
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(Arc::new(cors), cors_middleware))
}
