use async_trait::async_trait;

use crate::error::Result;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A GET request as handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Absolute (or same-origin) URL without the query string
    pub url: String,
    /// Endpoint path, e.g. "/api/v1/metrics"
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn get(url: String, endpoint: &str, query: &[(&str, String)]) -> Self {
        Self {
            url,
            endpoint: endpoint.to_string(),
            query: query
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
            headers: vec![
                ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
                ("Accept".to_string(), JSON_CONTENT_TYPE.to_string()),
            ],
        }
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status code and undecoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The seam between the API client and the HTTP stack.
///
/// The browser build sends through `gloo-net`, the terminal console through
/// `reqwest`, and mock mode through [`crate::mock::MockTransport`].
/// Implementations return `ApiError::Network` when no response was received
/// and otherwise hand back whatever status the server produced.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}
