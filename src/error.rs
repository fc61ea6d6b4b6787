use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Failures talking to the statistics provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response structure: {0}")]
    UnexpectedSchema(String),
}

impl ProviderError {
    /// Classify a ureq failure, pulling timeouts out into their own variant.
    pub fn from_ureq(url: &str, source: ureq::Error) -> Self {
        let timed_out = match &source {
            ureq::Error::Timeout(_) => true,
            ureq::Error::Io(e) => e.kind() == std::io::ErrorKind::TimedOut,
            _ => false,
        };
        if timed_out {
            ProviderError::Timeout { url: url.to_string() }
        } else {
            ProviderError::Request { url: url.to_string(), source }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ProviderError::Timeout { .. })
    }
}

/// A single game could not be turned into a result. The game is skipped.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Fetch(#[from] ProviderError),

    #[error("malformed box score: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid game time {value:?}: {source}")]
    GameTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid minutes value {0:?}")]
    Minutes(String),
}

/// The whole request failed.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid socket address: {value:?}")]
    BindAddr { name: &'static str, value: String },

    #[error("{name} must be a whole number of seconds, got {value:?}")]
    Timeout { name: &'static str, value: String },
}
