use async_trait::async_trait;
use client::{ApiError, ApiRequest, ApiResponse, Transport};
use std::time::Duration;
use tracing::trace;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Native HTTP transport for the terminal console.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("prophet-console/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

fn network_error(url: &str, error: reqwest::Error) -> ApiError {
    ApiError::Network {
        url: url.to_string(),
        message: error.to_string(),
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> client::Result<ApiResponse> {
        trace!("GET {} {:?}", request.url, request.query);
        let mut builder = self.http.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| network_error(&request.url, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| network_error(&request.url, e))?;

        Ok(ApiResponse::new(status, body))
    }
}
