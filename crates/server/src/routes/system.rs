use axum::{extract::State, Json};
use common::types::{Health, Welcome};

use super::ServerState;

pub async fn welcome() -> Json<Welcome> {
    Json(Welcome::current())
}

pub async fn health(State(state): State<ServerState>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        environment: state.config.environment_name().to_string(),
        version: state.config.api_version.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
