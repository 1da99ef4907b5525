use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use stylist_store::FavoritesRepository;

#[derive(Clone)]
pub struct HealthState {
    favorites: Arc<dyn FavoritesRepository>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub favorites: HealthCheck,
    pub checked_at: String,
}

pub fn router(favorites: Arc<dyn FavoritesRepository>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { favorites })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let favorites = favorites_check(state.favorites.as_ref()).await;
    let ready = favorites.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "stylist-server runtime initialized".to_string(),
        },
        favorites,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

async fn favorites_check(favorites: &dyn FavoritesRepository) -> HealthCheck {
    match favorites.list().await {
        Ok(entries) => HealthCheck {
            status: "ready",
            detail: format!("favorites store readable ({} saved)", entries.len()),
        },
        Err(error) => HealthCheck {
            status: "degraded",
            detail: format!("favorites store unreadable: {error}"),
        },
    }
}
