//! API request handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use phase_core::PhaseVolumes;

use crate::error::{ApiError, ApiResult};
use crate::state::ApiState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query string of `GET /phase-change-diagram`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PressureQuery {
    /// Pressure in MPa.
    pub pressure: f64,
}

/// Interpolated specific volumes, rounded to six decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseChangeResponse {
    pub specific_volume_liquid: f64,
    pub specific_volume_vapor: f64,
}

impl From<PhaseVolumes> for PhaseChangeResponse {
    fn from(volumes: PhaseVolumes) -> Self {
        PhaseChangeResponse {
            specific_volume_liquid: volumes.liquid,
            specific_volume_vapor: volumes.vapor,
        }
    }
}

// ============================================================================
// Phase Change Handlers
// ============================================================================

/// Liquid and vapor specific volumes at the requested pressure.
pub async fn get_phase_change(
    State(state): State<ApiState>,
    query: Result<Query<PressureQuery>, QueryRejection>,
) -> ApiResult<Json<PhaseChangeResponse>> {
    let Query(PressureQuery { pressure }) =
        query.map_err(|rejection| ApiError::validation_error(rejection.body_text()))?;

    let volumes = state.table.interpolate(pressure).map_err(|err| {
        debug!(pressure, %err, "rejected pressure");
        ApiError::from(err)
    })?;

    trace!(pressure, liquid = volumes.liquid, vapor = volumes.vapor, "interpolated");
    Ok(Json(volumes.into()))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::not_found(format!("no route for {}", uri.path()))
}
