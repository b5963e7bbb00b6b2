//! Cross-origin headers on every response, and `OPTIONS` short-circuit.
//!
//! Installed as the outermost layer so 404s, 405s, timeouts and body-limit
//! rejections carry the headers too. Any `OPTIONS` request is answered with
//! `204 No Content` before routing.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

#[derive(Clone, Debug, Default)]
pub enum AllowedOrigins {
    /// `Access-Control-Allow-Origin: *`
    #[default]
    Any,
    /// Echo the request origin only when it is listed.
    List(Vec<HeaderValue>),
}

#[derive(Clone, Debug, Default)]
pub struct CorsPolicy {
    pub origins: AllowedOrigins,
}

impl CorsPolicy {
    pub fn permissive() -> Self {
        CorsPolicy {
            origins: AllowedOrigins::Any,
        }
    }

    pub fn allow_list<I>(origins: I) -> Self
    where
        I: IntoIterator<Item = HeaderValue>,
    {
        CorsPolicy {
            origins: AllowedOrigins::List(origins.into_iter().collect()),
        }
    }

    fn apply(&self, origin: Option<&HeaderValue>, headers: &mut HeaderMap) {
        match &self.origins {
            AllowedOrigins::Any => {
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                );
            }
            AllowedOrigins::List(list) => {
                if let Some(origin) = origin.filter(|o| list.contains(o)) {
                    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
                }
                headers.append(header::VARY, HeaderValue::from_static("Origin"));
            }
        }
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
    }
}

pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    req: Request,
    next: Next,
) -> Response {
    let origin = req.headers().get(header::ORIGIN).cloned();
    let mut resp = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };
    policy.apply(origin.as_ref(), resp.headers_mut());
    resp
}
