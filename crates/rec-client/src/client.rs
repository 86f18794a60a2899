use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info};

use model::{Assessment, RecommendationRequest, RecommendationResponse};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// How much of an error body is kept for diagnostics
pub const ERROR_SNIPPET_CHARS: usize = 200;

const RECOMMEND_PATH: &str = "/recommend";
const HEALTH_PATH: &str = "/health";

/// Anything that can turn a request into a list of assessments.
///
/// The submission controller only sees this trait, so tests can hand it a
/// canned source instead of a live HTTP client.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Assessment>, ClientError>;
}

/// Answer from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// HTTP client for the recommendation service.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RecommendationClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Build on top of a preconfigured `reqwest::Client` (proxies, TLS roots).
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one `POST /recommend` and return the assessments in response order.
    ///
    /// Exactly one request goes out per call; there is no retry and no
    /// timeout beyond what the underlying client imposes.
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Assessment>, ClientError> {
        let url = self.config.endpoint(RECOMMEND_PATH)?;
        info!(
            "Requesting up to {} recommendations from {} (remote={}, adaptive={})",
            request.k, url, request.prefer_remote, request.prefer_adaptive
        );

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", RECOMMEND_PATH, e);
                ClientError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Request {
                status: status.as_u16(),
                endpoint: RECOMMEND_PATH.to_string(),
                snippet: error_snippet(response.text().await),
            });
        }

        let body = response.bytes().await.map_err(ClientError::Network)?;
        let assessments = decode_recommendations(&body)?;
        debug!("Received {} assessments", assessments.len());
        Ok(assessments)
    }

    /// Probe `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.config.endpoint(HEALTH_PATH)?;
        debug!("Checking service health at {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Request {
                status: status.as_u16(),
                endpoint: HEALTH_PATH.to_string(),
                snippet: error_snippet(response.text().await),
            });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientError::Decode("health response has no 'status' field".into()))?;

        Ok(HealthStatus {
            status: status.to_string(),
        })
    }
}

#[async_trait]
impl RecommendationSource for RecommendationClient {
    async fn fetch_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Assessment>, ClientError> {
        self.recommend(request).await
    }
}

/// Decode a successful `/recommend` body.
///
/// `null` or invalid JSON is an error. Any other JSON value without a
/// `recommended_assessments` list is "no results".
fn decode_recommendations(body: &[u8]) -> Result<Vec<Assessment>, ClientError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    match value {
        Value::Null => Err(ClientError::Decode("response body is null".into())),
        Value::Object(_) => {
            let response: RecommendationResponse =
                serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))?;
            Ok(response.recommended_assessments)
        }
        other => {
            debug!("Response body is not an object ({}), treating as empty", other);
            Ok(Vec::new())
        }
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(ERROR_SNIPPET_CHARS).collect()
}

/// Snippet of an error response body. A body that cannot be read is
/// reported in the snippet instead of showing up as an empty string.
fn error_snippet(body: Result<String, reqwest::Error>) -> String {
    match body {
        Ok(body) => snippet(&body),
        Err(e) => {
            debug!("Failed to read error response body: {}", e);
            snippet(&format!("<unreadable body: {e}>"))
        }
    }
}
