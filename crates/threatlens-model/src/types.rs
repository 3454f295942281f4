//! Wire types for the two prediction endpoints.

use serde::{Deserialize, Serialize};

/// Successful response body from `POST /predict/hybrid-analysis`.
///
/// The verdict is kept as the raw string the model produced; mapping onto
/// the closed display enumeration (with its fallback) is the panels' job,
/// so an unrecognised verdict still renders instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridPrediction {
    pub verdict: String,
    pub anomaly_score: f64,
    pub is_known_threat: bool,
}

/// Successful response body from `POST /predictanomaly`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyPrediction {
    pub is_anomaly: bool,
    pub reconstruction_error: f64,
    pub threshold: f64,
}
