//! Provider traits the panels are written against, plus mock
//! implementations for tests.

use serde_json::Value;
use std::sync::Mutex;
use threatlens_common::{Result, ThreatLensError};

use crate::types::{AnomalyPrediction, HybridPrediction};

/// Source of hybrid-analysis verdicts.
#[async_trait::async_trait]
pub trait HybridProvider: Send + Sync {
    async fn predict_hybrid(&self, payload: Value) -> Result<HybridPrediction>;
}

/// Source of anomaly verdicts.
#[async_trait::async_trait]
pub trait AnomalyProvider: Send + Sync {
    async fn predict_anomaly(&self, payload: Value) -> Result<AnomalyPrediction>;
}

// ── Mock Implementations for Testing ───────────────────────────────────────

/// Canned hybrid provider. Records the last payload it was sent so tests
/// can assert on the outgoing wire shape.
pub struct MockHybridProvider {
    response: Option<HybridPrediction>,
    last_payload: Mutex<Option<Value>>,
}

impl MockHybridProvider {
    pub fn new() -> Self {
        Self {
            response: None,
            last_payload: Mutex::new(None),
        }
    }

    pub fn with(mut self, prediction: HybridPrediction) -> Self {
        self.response = Some(prediction);
        self
    }

    pub fn last_payload(&self) -> Option<Value> {
        self.last_payload.lock().unwrap().clone()
    }
}

impl Default for MockHybridProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HybridProvider for MockHybridProvider {
    async fn predict_hybrid(&self, payload: Value) -> Result<HybridPrediction> {
        *self.last_payload.lock().unwrap() = Some(payload);
        self.response
            .clone()
            .ok_or(ThreatLensError::ModelStatus(503))
    }
}

/// Canned anomaly provider, same shape as [`MockHybridProvider`].
pub struct MockAnomalyProvider {
    response: Option<AnomalyPrediction>,
    last_payload: Mutex<Option<Value>>,
}

impl MockAnomalyProvider {
    pub fn new() -> Self {
        Self {
            response: None,
            last_payload: Mutex::new(None),
        }
    }

    pub fn with(mut self, prediction: AnomalyPrediction) -> Self {
        self.response = Some(prediction);
        self
    }

    pub fn last_payload(&self) -> Option<Value> {
        self.last_payload.lock().unwrap().clone()
    }
}

impl Default for MockAnomalyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AnomalyProvider for MockAnomalyProvider {
    async fn predict_anomaly(&self, payload: Value) -> Result<AnomalyPrediction> {
        *self.last_payload.lock().unwrap() = Some(payload);
        self.response
            .clone()
            .ok_or(ThreatLensError::ModelStatus(503))
    }
}
