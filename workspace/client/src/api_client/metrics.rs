use common::{
    MetricDataPoint, MetricDetail, MetricForecastPoint, MetricOverview, PaginatedResponse, TrafficTag,
};
use serde::{Deserialize, Serialize};

use super::{segment, ApiClient, API_PREFIX};
use crate::error::Result;

/// Filters for the metrics overview list.
///
/// Blank fields are normalised to `None` so that "" and "no filter" share a
/// cache key and neither is sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetricsQuery {
    pub category: Option<String>,
    pub status: Option<TrafficTag>,
    pub search: Option<String>,
}

impl MetricsQuery {
    pub fn new(category: Option<&str>, status: Option<TrafficTag>, search: Option<&str>) -> Self {
        Self {
            category: non_blank(category),
            status,
            search: non_blank(search),
        }
    }

    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn with_status(mut self, status: Option<TrafficTag>) -> Self {
        self.status = status;
        self
    }

    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = non_blank(search);
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.status.is_none() && self.search.is_none()
    }

    /// Query-string parameters in a fixed order; absent filters are omitted.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Get the metrics overview list matching the given filters
pub async fn get_metrics(
    client: &ApiClient,
    query: &MetricsQuery,
) -> Result<PaginatedResponse<MetricOverview>> {
    log::trace!("Fetching metrics with filters {:?}", query);
    let endpoint = format!("{}/metrics", API_PREFIX);
    let result: Result<PaginatedResponse<MetricOverview>> = client.get(&endpoint, &query.to_params()).await;

    match &result {
        Ok(page) => log::info!(
            "Successfully fetched {} metrics (total {})",
            page.items.len(),
            page.total
        ),
        Err(e) => log::error!("Failed to fetch metrics: {}", e),
    }

    result
}

/// Get a single metric with evaluation and metadata
pub async fn get_metric_detail(client: &ApiClient, metric_id: &str) -> Result<MetricDetail> {
    log::trace!("Fetching metric detail for ID: {}", metric_id);
    let endpoint = format!("{}/metrics/{}", API_PREFIX, segment(metric_id));
    let result: Result<MetricDetail> = client.get(&endpoint, &[]).await;

    match &result {
        Ok(detail) => log::info!(
            "Successfully fetched metric {} ({})",
            metric_id,
            detail.overview.name
        ),
        Err(e) => log::error!("Failed to fetch metric {}: {}", metric_id, e),
    }

    result
}

/// Get the historical series of a metric
pub async fn get_metric_series(client: &ApiClient, metric_id: &str) -> Result<Vec<MetricDataPoint>> {
    log::trace!("Fetching series for metric ID: {}", metric_id);
    let endpoint = format!("{}/metrics/{}/series", API_PREFIX, segment(metric_id));
    let result: Result<Vec<MetricDataPoint>> = client.get(&endpoint, &[]).await;

    match &result {
        Ok(points) => log::info!(
            "Successfully fetched {} series points for metric {}",
            points.len(),
            metric_id
        ),
        Err(e) => log::error!("Failed to fetch series for metric {}: {}", metric_id, e),
    }

    result
}

/// Get the forecast of a metric
pub async fn get_metric_forecast(
    client: &ApiClient,
    metric_id: &str,
) -> Result<Vec<MetricForecastPoint>> {
    log::trace!("Fetching forecast for metric ID: {}", metric_id);
    let endpoint = format!("{}/metrics/{}/forecast", API_PREFIX, segment(metric_id));
    let result: Result<Vec<MetricForecastPoint>> = client.get(&endpoint, &[]).await;

    match &result {
        Ok(points) => log::info!(
            "Successfully fetched {} forecast points for metric {}",
            points.len(),
            metric_id
        ),
        Err(e) => log::error!("Failed to fetch forecast for metric {}: {}", metric_id, e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::testing::{client_with, StubTransport};
    use crate::error::ApiError;

    const METRICS_BODY: &str = r#"{
        "items": [
            {
                "metric_id": "unemployment-rate",
                "name": "Unemployment rate",
                "category": "labour",
                "jurisdiction": "Commonwealth",
                "latest_value": 4.1,
                "unit": "%",
                "tag": "GREEN",
                "trend": "stable",
                "last_updated": "2024-06-30"
            }
        ],
        "total": 1
    }"#;

    #[test]
    fn test_metrics_query_normalises_blank_filters() {
        let query = MetricsQuery::new(Some(""), None, Some("   "));
        assert!(query.is_unfiltered());
        assert_eq!(query, MetricsQuery::default());
        assert!(query.to_params().is_empty());
    }

    #[test]
    fn test_metrics_query_params_order() {
        let query = MetricsQuery::default()
            .with_search(Some(" jobs "))
            .with_status(Some(TrafficTag::Red))
            .with_category(Some("labour"));

        assert_eq!(
            query.to_params(),
            vec![
                ("category", "labour".to_string()),
                ("status", "RED".to_string()),
                ("search", "jobs".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_metrics_sends_filters() {
        let (client, transport) =
            client_with(StubTransport::default().with("/api/v1/metrics", 200, METRICS_BODY));
        let query = MetricsQuery::new(Some("labour"), Some(TrafficTag::Green), None);

        let page = get_metrics(&client, &query).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].metric_id, "unemployment-rate");

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].query_param("category"), Some("labour"));
        assert_eq!(requests[0].query_param("status"), Some("GREEN"));
        assert_eq!(requests[0].query_param("search"), None);
    }

    #[tokio::test]
    async fn test_get_metric_detail_encodes_identifier() {
        let (client, transport) = client_with(StubTransport::default());

        let error = get_metric_detail(&client, "cpi/headline").await.unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(
            transport.requests.borrow()[0].endpoint,
            "/api/v1/metrics/cpi%2Fheadline"
        );
    }

    #[tokio::test]
    async fn test_get_metric_series_and_forecast() {
        let (client, _) = client_with(
            StubTransport::default()
                .with(
                    "/api/v1/metrics/cpi/series",
                    200,
                    r#"[{"ds": "2024-01-01", "value": 3.4}, {"ds": "2024-02-01", "value": 3.6}]"#,
                )
                .with(
                    "/api/v1/metrics/cpi/forecast",
                    200,
                    r#"[{"ds": "2024-03-01", "forecast": 3.5, "lower": 3.1, "upper": 3.9}]"#,
                ),
        );

        let series = get_metric_series(&client, "cpi").await.unwrap();
        assert_eq!(series.len(), 2);

        let forecast = get_metric_forecast(&client, "cpi").await.unwrap();
        assert_eq!(forecast[0].lower, Some(3.1));
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_decode_error() {
        let (client, _) = client_with(
            StubTransport::default().with("/api/v1/metrics/cpi/series", 200, r#"{"items": []}"#),
        );

        let error = get_metric_series(&client, "cpi").await.unwrap_err();
        assert!(matches!(error, ApiError::Decode { .. }));
    }
}
