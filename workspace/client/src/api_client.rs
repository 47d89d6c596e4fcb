pub mod metrics;
pub mod reports;

use serde::de::DeserializeOwned;
use std::rc::Rc;

use crate::error::{ApiError, Result};
use crate::settings::Settings;
use crate::transport::{ApiRequest, Transport};

/// Path prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Issues JSON GET requests against the configured base URL.
///
/// One attempt per call: failures are logged and returned to the caller.
#[derive(Clone)]
pub struct ApiClient {
    settings: Rc<Settings>,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(settings: Rc<Settings>, transport: Rc<dyn Transport>) -> Self {
        Self {
            settings,
            transport,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Common GET request handler
    pub async fn get<T>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.settings.api_url(endpoint);
        log::debug!("GET request to: {}", url);

        let response = self
            .transport
            .send(ApiRequest::get(url.clone(), endpoint, query))
            .await
            .map_err(|e| {
                log::error!("GET {} - {}", endpoint, e);
                e
            })?;

        if !response.ok() {
            let error = ApiError::Status {
                url,
                status: response.status,
            };
            log::error!("GET {} - {}", endpoint, error);
            return Err(error);
        }

        log::trace!("GET {} - Response received, parsing JSON", endpoint);
        let data = serde_json::from_str::<T>(&response.body).map_err(|e| {
            let error = ApiError::Decode {
                url,
                message: e.to_string(),
            };
            log::error!("GET {} - {}", endpoint, error);
            error
        })?;

        log::info!("GET {} - Success", endpoint);
        Ok(data)
    }
}

/// Percent-encodes one path segment, e.g. a metric identifier.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::transport::ApiResponse;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Transport answering from a fixed table of endpoint → response.
    #[derive(Default)]
    pub struct StubTransport {
        pub responses: HashMap<String, std::result::Result<ApiResponse, ApiError>>,
        pub requests: RefCell<Vec<ApiRequest>>,
    }

    impl StubTransport {
        pub fn with(mut self, endpoint: &str, status: u16, body: &str) -> Self {
            self.responses
                .insert(endpoint.to_string(), Ok(ApiResponse::new(status, body)));
            self
        }

        pub fn with_network_error(mut self, endpoint: &str) -> Self {
            self.responses.insert(
                endpoint.to_string(),
                Err(ApiError::Network {
                    url: endpoint.to_string(),
                    message: "connection refused".to_string(),
                }),
            );
            self
        }
    }

    #[async_trait(?Send)]
    impl Transport for StubTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
            let endpoint = request.endpoint.clone();
            self.requests.borrow_mut().push(request);
            self.responses
                .get(&endpoint)
                .cloned()
                .unwrap_or_else(|| Ok(ApiResponse::new(404, "")))
        }
    }

    pub fn client_with(transport: StubTransport) -> (ApiClient, Rc<StubTransport>) {
        let transport = Rc::new(transport);
        let settings = Rc::new(Settings {
            api_base_url: "http://api.test".to_string(),
            ..Settings::default()
        });
        (ApiClient::new(settings, transport.clone()), transport)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Health {
        status: String,
    }

    #[tokio::test]
    async fn test_get_parses_json_body() {
        let (client, transport) =
            client_with(StubTransport::default().with("/health", 200, r#"{"status": "ok"}"#));

        let health: Health = client.get("/health", &[]).await.unwrap();
        assert_eq!(health.status, "ok");

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].url, "http://api.test/health");
        assert!(
            requests[0]
                .headers
                .contains(&("Content-Type".to_string(), "application/json".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_non_success_status() {
        let (client, _) =
            client_with(StubTransport::default().with("/health", 503, "unavailable"));

        let error = client.get::<Health>("/health", &[]).await.unwrap_err();
        assert_eq!(error.status(), Some(503));
        assert_eq!(error.user_message(), "Unable to load data.");
    }

    #[tokio::test]
    async fn test_get_malformed_body() {
        let (client, _) = client_with(StubTransport::default().with("/health", 200, "[1, 2"));

        let error = client.get::<Health>("/health", &[]).await.unwrap_err();
        assert!(matches!(error, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_get_network_error_is_propagated() {
        let (client, transport) =
            client_with(StubTransport::default().with_network_error("/health"));

        let error = client.get::<Health>("/health", &[]).await.unwrap_err();
        assert!(matches!(error, ApiError::Network { .. }));
        // single attempt, no retry
        assert_eq!(transport.requests.borrow().len(), 1);
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("gdp-growth"), "gdp-growth");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
