//! Static advice endpoint

use axum::{response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use sizing_core::advice::{best_practices, HEADING};

use super::AppState;

/// Best-practice advice list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub heading: String,
    pub practices: Vec<String>,
}

/// Build the advice routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/advice", get(advice_handler))
}

/// GET /api/v1/advice
async fn advice_handler() -> Json<AdviceResponse> {
    Json(AdviceResponse {
        heading: HEADING.to_string(),
        practices: best_practices().iter().map(|p| p.to_string()).collect(),
    })
}
