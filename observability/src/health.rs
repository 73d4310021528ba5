//! Liveness reporting.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Body of the liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// GET /healthz. Answers whenever the process can serve HTTP.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
