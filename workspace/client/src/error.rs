use thiserror::Error;

/// Error types for API access.
///
/// Values are `Clone` so that one failed request can be handed to every
/// caller waiting on the same cache key.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("HTTP error {status} from {url}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON shape
    #[error("Failed to parse response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The request was rejected before sending, e.g. a blank identifier
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Message shown in error panes. Error kinds are not distinguished there.
    pub fn user_message(&self) -> &'static str {
        "Unable to load data."
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Type alias for Result with ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
