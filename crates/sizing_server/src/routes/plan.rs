//! Risk plan endpoints
//!
//! Every request is an independent computation: the body is clamped at the
//! boundary, derived, and formatted. Nothing is retained between requests.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sizing_core::display::FormattedPlan;
use sizing_core::engine::derive;
use sizing_core::types::{InputField, RiskInput, RiskPlan};
use tracing::{debug, warn};

use super::{ApiError, AppState};

/// Plan response carrying the effective input, the plan, and display strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Input after boundary clamping
    pub input: RiskInput,
    /// Derived plan at full precision
    pub plan: RiskPlan,
    /// Plan rendered for display
    pub formatted: FormattedPlan,
}

impl PlanResponse {
    fn from_input(input: RiskInput) -> Self {
        let plan = derive(&input);
        let formatted = FormattedPlan::from_plan(&plan);
        Self {
            input,
            plan,
            formatted,
        }
    }
}

/// Build the plan routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/plan", post(create_plan))
        .route("/api/v1/plan/defaults", get(default_plan))
}

/// POST /api/v1/plan - Derive a plan from a partial input record
///
/// Missing fields keep the form defaults. Values are read the way the form
/// reads them: numbers and numeric strings are parsed, anything else takes
/// the field's fallback.
async fn create_plan(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<PlanResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let mut input = input_from_body(&body);
    if input.num_trades > state.config.max_trades {
        warn!(
            requested = input.num_trades,
            max_trades = state.config.max_trades,
            "Clamping trade count to configured maximum"
        );
        input.num_trades = state.config.max_trades;
    }

    debug!(
        funds = input.funds,
        num_trades = input.num_trades,
        daily_risk_pct = input.daily_risk_pct,
        risk_reward = input.risk_reward,
        "Deriving plan"
    );

    Ok(Json(PlanResponse::from_input(input)))
}

/// GET /api/v1/plan/defaults - The plan for the form defaults
async fn default_plan() -> Json<PlanResponse> {
    Json(PlanResponse::from_input(RiskInput::default()))
}

/// Apply every recognised key of a JSON object as a field edit
pub fn input_from_body(body: &Map<String, Value>) -> RiskInput {
    let mut input = RiskInput::default();
    for (key, value) in body {
        match key.parse::<InputField>() {
            Ok(field) => input.edit(field, &raw_text(value)),
            Err(e) => debug!(error = %e, "Ignoring request key"),
        }
    }
    input
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
