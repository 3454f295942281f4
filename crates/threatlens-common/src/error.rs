use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThreatLensError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The model API answered with a non-2xx status. The body is never
    /// parsed in this case; only the status is carried for logging.
    #[error("Model endpoint returned status {0}")]
    ModelStatus(u16),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ThreatLensError>;
