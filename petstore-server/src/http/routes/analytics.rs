//! Analytics endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Analytics;

/// GET /analytics - pet counts grouped by type
async fn get_analytics(State(state): State<Arc<AppState>>) -> Result<Json<Analytics>, ApiError> {
    let analytics = state.pets.get_analytics().await?;
    Ok(Json(analytics))
}

/// Analytics routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analytics", get(get_analytics))
}
