use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/flights/{id}/passengers", get(simulate_checkin))
}

async fn simulate_checkin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    // The id segment must be purely numeric.
    let flight_id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("flight id must be a number".to_string()))?;

    let simulation = state
        .checkin
        .simulate(flight_id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match simulation {
        Some(data) => {
            info!(
                flight_id,
                passengers = data.passengers.len(),
                "served check-in simulation"
            );
            Ok(Json(json!({ "code": 200, "data": data })))
        }
        None => Err(AppError::NotFound),
    }
}
