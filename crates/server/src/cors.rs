//! Development CORS layers.
//!
//! Mounted only when the mode allows dev middleware and `CORS_ORIGIN` is set.

use axum::http::header::{ACCEPT, ACCESS_CONTROL_ALLOW_HEADERS, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::warn;

pub const ALLOWED_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// `*` allows any origin; anything else must match the request `Origin` exactly.
/// `None` when the configured origin is not a valid header value.
pub fn cors_layer(origin: &str) -> Option<CorsLayer> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        match HeaderValue::from_str(origin) {
            Ok(v) => AllowOrigin::list([v]),
            Err(_) => {
                warn!(%origin, "CORS_ORIGIN is not a valid header value; CORS disabled");
                return None;
            }
        }
    };
    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
            .allow_headers([ORIGIN, X_REQUESTED_WITH, CONTENT_TYPE, ACCEPT]),
    )
}

/// `CorsLayer` only lists allowed headers on preflight; clients expect them on every response.
pub fn allow_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS))
}
