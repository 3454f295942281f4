//! threatlens-model — Typed client for the remote inference API.
//!
//! The model itself is external; this crate owns the two wire contracts
//! (`/predict/hybrid-analysis` and `/predictanomaly`), the reqwest client
//! that speaks them, and the provider traits the panels are written against
//! so they can be tested without a live model.

pub mod client;
pub mod provider;
pub mod types;

pub use client::ModelClient;
pub use provider::{AnomalyProvider, HybridProvider, MockAnomalyProvider, MockHybridProvider};
pub use types::{AnomalyPrediction, HybridPrediction};
