//! Route table.

use axum::{http::Request, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info_span;
use uuid::Uuid;

use crate::handlers;
use crate::state::ApiState;

pub const PHASE_CHANGE_DIAGRAM: &str = "/phase-change-diagram";
pub const HEALTHZ: &str = "/healthz";

/// Build the application router with tracing and CORS layers.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route(PHASE_CHANGE_DIAGRAM, get(handlers::get_phase_change))
        .route(HEALTHZ, get(observability::health))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    info_span!(
                        "http_request",
                        request_id = %Uuid::new_v4(),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }))
                .layer(CorsLayer::permissive()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router(ApiState::water())
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_lower_anchor() {
        let (status, body) = get_json("/phase-change-diagram?pressure=0.05").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"specific_volume_liquid": 0.00105, "specific_volume_vapor": 30.0})
        );
    }

    #[tokio::test]
    async fn test_upper_anchor() {
        let (status, body) = get_json("/phase-change-diagram?pressure=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"specific_volume_liquid": 0.0035, "specific_volume_vapor": 0.0035})
        );
    }

    #[tokio::test]
    async fn test_midpoint() {
        let (status, body) = get_json("/phase-change-diagram?pressure=5.025").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"specific_volume_liquid": 0.002275, "specific_volume_vapor": 15.00175})
        );
    }

    #[tokio::test]
    async fn test_below_range_is_not_found() {
        let (status, body) = get_json("/phase-change-diagram?pressure=0.04").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "out_of_range");
        assert_eq!(body["pressure"], 0.04);
        assert_eq!(body["min_pressure"], 0.05);
        assert_eq!(body["max_pressure"], 10.0);
        assert!(body["detail"].as_str().unwrap().contains("0.04"));
    }

    #[tokio::test]
    async fn test_above_range_is_not_found() {
        let (status, body) = get_json("/phase-change-diagram?pressure=10.01").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Pressure 10.01 MPa out of range [0.05–10]");
    }

    #[tokio::test]
    async fn test_infinite_pressure_is_not_found() {
        for query in ["inf", "infinity", "-inf", "1e400"] {
            let (status, body) = get_json(&format!("/phase-change-diagram?pressure={query}")).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "pressure={query}");
            assert_eq!(body["error"], "out_of_range");
            assert_eq!(body["min_pressure"], 0.05);
            assert_eq!(body["max_pressure"], 10.0);
        }
    }

    #[tokio::test]
    async fn test_missing_pressure_is_unprocessable() {
        let (status, body) = get_json("/phase-change-diagram").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_non_numeric_pressure_is_unprocessable() {
        let (status, body) = get_json("/phase-change-diagram?pressure=high").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_healthz_is_ok_regardless_of_prior_calls() {
        let (status, body) = get_json("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));

        let _ = get_json("/phase-change-diagram?pressure=99").await;
        let _ = get_json("/phase-change-diagram?pressure=1").await;

        let (status, body) = get_json("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let (status, body) = get_json("/phase-change").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}
