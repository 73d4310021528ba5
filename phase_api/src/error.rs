//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use phase_core::InterpolationError;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Valid range echoed back with an out-of-range rejection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeDetail {
    pub pressure: f64,
    pub min_pressure: f64,
    pub max_pressure: f64,
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable description.
    pub detail: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeDetail>,
}

/// Error returned from a handler, rendered as a JSON response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, code: &str, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: code.to_string(),
                detail: detail.into(),
                range: None,
            },
        }
    }

    /// Malformed or missing request parameters.
    pub fn validation_error(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", detail)
    }

    /// Pressure outside the anchor table. Reported as 404: no data exists there.
    pub fn out_of_range(pressure: f64, min: f64, max: f64) -> Self {
        let err = InterpolationError::OutOfRange { pressure, min, max };
        let mut api_err = Self::new(StatusCode::NOT_FOUND, "out_of_range", err.to_string());
        api_err.body.range = Some(RangeDetail {
            pressure,
            min_pressure: min,
            max_pressure: max,
        });
        api_err
    }
}

impl From<InterpolationError> for ApiError {
    fn from(err: InterpolationError) -> Self {
        match err {
            InterpolationError::OutOfRange { pressure, min, max } => {
                Self::out_of_range(pressure, min, max)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_maps_to_not_found() {
        let err: ApiError = InterpolationError::OutOfRange {
            pressure: 0.04,
            min: 0.05,
            max: 10.0,
        }
        .into();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.error, "out_of_range");
        assert_eq!(err.body.detail, "Pressure 0.04 MPa out of range [0.05–10]");
        assert_eq!(
            err.body.range,
            Some(RangeDetail {
                pressure: 0.04,
                min_pressure: 0.05,
                max_pressure: 10.0,
            })
        );
    }

    #[test]
    fn test_error_body_flattens_range() {
        let err = ApiError::out_of_range(10.01, 0.05, 10.0);
        let json = serde_json::to_value(&err.body).unwrap();
        assert_eq!(json["error"], "out_of_range");
        assert_eq!(json["pressure"], 10.01);
        assert_eq!(json["min_pressure"], 0.05);
        assert_eq!(json["max_pressure"], 10.0);
    }

    #[test]
    fn test_validation_error_has_no_range() {
        let err = ApiError::validation_error("missing pressure");
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        let json = serde_json::to_value(&err.body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "validation_error", "detail": "missing pressure"}));
    }
}
