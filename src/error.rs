//! Typed errors and HTTP mapping.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Failures of the item store. Always surfaced to callers as a generic 500.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store unavailable")]
    Unavailable,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("timed out: {0}")]
    Timeout(&'static str),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{action}: {source}")]
    Store {
        /// Generic message returned to the client in place of the cause.
        action: &'static str,
        #[source]
        source: RepositoryError,
    },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method not allowed")]
    MethodNotAllowed { allow: &'static str },
    #[error("request timed out")]
    RequestTimeout,
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    /// Wraps a repository failure with the message the client is allowed to see.
    pub fn store(action: &'static str) -> impl FnOnce(RepositoryError) -> AppError {
        move |source| AppError::Store { action, source }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::MethodNotAllowed { .. } => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
                self.to_string(),
            ),
            AppError::Store { action, source } => {
                tracing::error!(error = %source, "{}", action);
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", (*action).to_string())
            }
            AppError::RequestTimeout => {
                (StatusCode::REQUEST_TIMEOUT, "request_timeout", self.to_string())
            }
            AppError::Config(_) | AppError::Db(_) | AppError::Timeout(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error".to_string(),
                )
            }
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        let mut resp = (status, Json(body)).into_response();
        if let AppError::MethodNotAllowed { allow } = self {
            resp.headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(allow));
        }
        resp
    }
}
