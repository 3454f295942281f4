//! Configuration loading for ThreatLens.
//! Reads threatlens.toml from the current directory or the path in the
//! THREATLENS_CONFIG env var; every field has a serde default so a missing
//! file yields the documented defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ThreatLensError};

/// Where the remote inference model lives. The default matches the
/// documented deployment (local FastAPI model server on port 8000).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ModelApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub model: ModelApiConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("THREATLENS_CONFIG")
            .unwrap_or_else(|_| "threatlens.toml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| ThreatLensError::Config(format!("failed to read {path}: {e}")))?;

        toml::from_str(&raw)
            .map_err(|e| ThreatLensError::Config(format!("failed to parse {path}: {e}")))
    }
}
