use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use weather_core::WeatherProvider;

use crate::errors::RelayError;

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather", get(weather))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// GET /weather?city=<name> - relay the upstream body untouched
async fn weather(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<serde_json::Value>, RelayError> {
    let city = city_param(&params).ok_or(RelayError::MissingCity)?;

    match state.provider.fetch_raw(city).await {
        Ok(body) => {
            info!(city, "relayed weather");
            Ok(Json(body))
        }
        Err(err) => {
            warn!(city, error = %err, "weather relay failed");
            Err(err.into())
        }
    }
}

/// First non-blank `city` value. Pairs keep repeated keys, so no query string is rejected.
fn city_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .filter(|(key, _)| key == "city")
        .map(|(_, value)| value.trim())
        .find(|value| !value.is_empty())
}
