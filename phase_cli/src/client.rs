//! HTTP client for the phase change diagram API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use url::Url;

use crate::error::{CliError, Result};

/// Volumes returned by `GET /phase-change-diagram`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tabled)]
pub struct PhaseChange {
    #[tabled(rename = "Liquid (m³/kg)")]
    pub specific_volume_liquid: f64,
    #[tabled(rename = "Vapor (m³/kg)")]
    pub specific_volume_vapor: f64,
}

/// Body of `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: String,
}

pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(server: &str) -> Result<Self> {
        let mut base = Url::parse(server)?;
        // Relative joins keep a path prefix only when it ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// GET `path`, relative to the server URL, and decode a JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.base.join(path)?;
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.detail)
            .unwrap_or(text);
        Err(CliError::Api {
            status: status.as_u16(),
            detail,
        })
    }

    pub async fn phase_change(&self, pressure: f64) -> Result<PhaseChange> {
        self.get("phase-change-diagram", &[("pressure", pressure.to_string())])
            .await
    }

    pub async fn health(&self) -> Result<Health> {
        self.get("healthz", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_phase_change_sends_pressure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/phase-change-diagram"))
            .and(query_param("pressure", "5.025"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "specific_volume_liquid": 0.002275,
                "specific_volume_vapor": 15.00175,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let result = client.phase_change(5.025).await.unwrap();
        assert_eq!(
            result,
            PhaseChange {
                specific_volume_liquid: 0.002275,
                specific_volume_vapor: 15.00175,
            }
        );
    }

    #[tokio::test]
    async fn test_out_of_range_surfaces_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/phase-change-diagram"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": "out_of_range",
                "detail": "Pressure 10.01 MPa out of range [0.05–10]",
                "pressure": 10.01,
                "min_pressure": 0.05,
                "max_pressure": 10.0,
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let err = client.phase_change(10.01).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "API error (404): Pressure 10.01 MPa out of range [0.05–10]"
        );
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/healthz"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        match client.health().await.unwrap_err() {
            CliError::Api { status, detail } => {
                assert_eq!(status, 503);
                assert_eq!(detail, "upstream down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_server_path_prefix_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/healthz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
            .expect(2)
            .mount(&server)
            .await;

        for prefix in ["/api", "/api/"] {
            let client = ApiClient::new(&format!("{}{prefix}", server.uri())).unwrap();
            assert_eq!(client.base_url().path(), "/api/");
            assert_eq!(client.health().await.unwrap().status, "ok");
        }
    }

    #[test]
    fn test_invalid_server_url() {
        assert!(matches!(ApiClient::new("not a url"), Err(CliError::InvalidUrl(_))));
    }
}
