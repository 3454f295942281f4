//! threatlens-common — Shared errors, configuration, and dashboard fixture
//! data used across all ThreatLens crates.

pub mod config;
pub mod error;
pub mod fixtures;

pub use config::ModelApiConfig;
pub use error::{Result, ThreatLensError};
