pub mod system;
pub mod users;

use std::sync::Arc;

use axum::{routing::get, Router};
use configs::AppConfig;
use service::users::UserService;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::cors;

/// Shared handler state
#[derive(Clone)]
pub struct ServerState {
    pub users: UserService,
    pub config: Arc<AppConfig>,
}

/// Build the full application router; optional middleware follows `state.config`.
pub fn build_router(state: ServerState) -> Router {
    let config = Arc::clone(&state.config);

    let mut router = Router::new()
        .route("/", get(system::welcome))
        .route("/health", get(system::health))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user).put(users::update_user).delete(users::delete_user),
        )
        .with_state(state);

    if config.cors_enabled() {
        if let Some(layer) = config.cors_origin.as_deref().and_then(cors::cors_layer) {
            info!(origin = ?config.cors_origin, "cors headers enabled");
            router = router.layer(layer).layer(cors::allow_headers_layer());
        }
    }

    if config.request_logging_enabled() {
        info!("request logging enabled");
        router = router.layer(
            TraceLayer::new_for_http()
                // span per request: method + path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status + latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        );
    }

    router
}
