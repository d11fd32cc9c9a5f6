use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid backend base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("response parsing failed: {0}")]
    ResponseParse(#[from] serde_json::Error),
}

impl GatewayError {
    /// True when the backend rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GatewayError::Status { status: 401, .. })
    }
}
