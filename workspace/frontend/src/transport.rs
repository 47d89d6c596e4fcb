use async_trait::async_trait;
use client::{ApiError, ApiRequest, ApiResponse, Result, Transport};
use gloo_net::http::Request;

/// Browser `fetch` transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = Request::get(&request.url).query(
            request
                .query
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(|e| ApiError::Network {
            url: request.url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Network {
            url: request.url.clone(),
            message: format!("Failed to read body: {}", e),
        })?;

        Ok(ApiResponse::new(status, body))
    }
}
