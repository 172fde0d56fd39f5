use reqwest::StatusCode;
use thiserror::Error;

/// Why a live upstream result could not be produced.
///
/// Every variant degrades to the same fallback payload; the variant only
/// decides how the failure is logged.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0} API key not configured")]
    NotConfigured(&'static str),

    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected payload: {0}")]
    Payload(String),
}

impl UpstreamError {
    /// Log the reason under the operation that degraded.
    pub fn log(&self, operation: &str) {
        match self {
            Self::NotConfigured(_) => {
                tracing::warn!(operation, "{}, using fallback data", self);
            }
            Self::Status { status, .. } => {
                tracing::error!(operation, status = status.as_u16(), "{}", self);
            }
            Self::Transport(err) if err.is_timeout() => {
                tracing::error!(operation, "upstream timed out: {}", err);
            }
            Self::Transport(_) | Self::Payload(_) => {
                tracing::error!(operation, "{}", self);
            }
        }
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::Payload(err.to_string())
    }
}
