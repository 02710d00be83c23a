//! HTTP status API endpoint handlers.

use axum::{Json, Router, extract::State, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    infrastructure::dto::http::{HealthDto, UserDto},
    usecase::CommandDispatcher,
};

/// Build the status API router.
pub fn router(dispatcher: CommandDispatcher) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/users", get(list_users))
        .layer(TraceLayer::new_for_http())
        .with_state(dispatcher)
}

/// Health check endpoint
pub async fn health_check(State(dispatcher): State<CommandDispatcher>) -> Json<HealthDto> {
    let (registered, consistent) = dispatcher.health().await;
    if !consistent {
        tracing::error!("Directory maps are out of sync");
    }

    Json(HealthDto {
        status: if consistent { "ok" } else { "degraded" }.to_string(),
        registered,
    })
}

/// Registered users, sorted by name
pub async fn list_users(State(dispatcher): State<CommandDispatcher>) -> Json<Vec<UserDto>> {
    // Domain Model から DTO への変換
    let users = dispatcher
        .registrations()
        .await
        .into_iter()
        .map(UserDto::from)
        .collect();

    Json(users)
}
