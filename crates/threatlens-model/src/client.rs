//! reqwest client for the remote inference API.

use serde::de::DeserializeOwned;
use serde_json::Value;
use threatlens_common::{ModelApiConfig, Result, ThreatLensError};

use crate::provider::{AnomalyProvider, HybridProvider};
use crate::types::{AnomalyPrediction, HybridPrediction};

/// Path of the hybrid (signature + autoencoder) analysis endpoint.
pub const HYBRID_ANALYSIS_PATH: &str = "/predict/hybrid-analysis";

/// Path of the pure anomaly-detector endpoint.
pub const PREDICT_ANOMALY_PATH: &str = "/predictanomaly";

/// HTTP client for the two prediction endpoints.
///
/// No explicit timeout is set: a hung model request is surfaced only when
/// the transport itself gives up, matching the documented panel behaviour.
#[derive(Debug, Clone)]
pub struct ModelClient {
    http: reqwest::Client,
    base_url: String,
}

impl ModelClient {
    pub fn new(config: &ModelApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON payload and decode the 2xx body.
    ///
    /// A non-2xx status is a uniform failure — the body is never parsed.
    /// A 2xx body that does not match the contract fails closed with
    /// `MalformedResponse` rather than rendering half a prediction.
    async fn post_json<T: DeserializeOwned>(&self, path: &str, payload: &Value) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let resp = self.http.post(&url).json(payload).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ThreatLensError::ModelStatus(status.as_u16()));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ThreatLensError::MalformedResponse(format!("{path}: {e}")))
    }
}

#[async_trait::async_trait]
impl HybridProvider for ModelClient {
    async fn predict_hybrid(&self, payload: Value) -> Result<HybridPrediction> {
        self.post_json(HYBRID_ANALYSIS_PATH, &payload).await
    }
}

#[async_trait::async_trait]
impl AnomalyProvider for ModelClient {
    async fn predict_anomaly(&self, payload: Value) -> Result<AnomalyPrediction> {
        self.post_json(PREDICT_ANOMALY_PATH, &payload).await
    }
}
