//! Request handlers.

use crate::error::ApiError;
use crate::models::{BoundsResponse, HealthResponse, SimulationRequest, SimulationResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info};
use wheel_lab_simulation::monte_carlo::MonteCarloRunner;

/// Liveness check.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Lists accepted parameter ranges and cadence presets.
pub async fn get_bounds(State(state): State<AppState>) -> Json<BoundsResponse> {
    Json(BoundsResponse::new(state.bounds().clone()))
}

/// Runs a Monte Carlo simulation.
///
/// In strict mode out-of-range values are rejected with 422; otherwise they
/// are clamped into range, including the server's path-count ceiling. A body
/// that does not deserialize is reported with the same JSON error shape.
pub async fn run_simulation(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<Json<SimulationResponse>, ApiError> {
    let Json(request) = payload?;
    let strict = request.strict;
    let requested = request.into_parameters(u64::from(rand::random::<u32>()));
    let bounds = state.bounds();

    let (parameters, clamped) = if strict {
        bounds.validate(&requested)?;
        (requested, false)
    } else {
        let parameters = bounds.clamp(&requested);
        let clamped = parameters != requested;
        if clamped {
            debug!(?requested, ?parameters, "clamped simulation parameters");
        }
        (parameters, clamped)
    };

    info!(
        paths = parameters.path_count,
        seed = parameters.seed,
        option_period_days = parameters.option_period_days,
        "running simulation"
    );

    let runner = MonteCarloRunner::new(parameters.clone());
    let summary = tokio::task::spawn_blocking(move || runner.run_parallel())
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(SimulationResponse {
        parameters,
        clamped,
        summary,
    }))
}
