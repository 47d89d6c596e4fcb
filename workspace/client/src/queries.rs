use common::{
    MetricDataPoint, MetricDetail, MetricForecastPoint, MetricOverview, PaginatedResponse,
    ReportDetail, ReportSummary,
};
use std::rc::Rc;

use crate::api_client::metrics::{self, MetricsQuery};
use crate::api_client::{reports, ApiClient};
use crate::error::{ApiError, Result};
use crate::query::{MetricResource, QueryCache, QueryKey};
use crate::settings::Settings;
use crate::transport::Transport;

/// Any value the query cache can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedData {
    Metrics(Rc<PaginatedResponse<MetricOverview>>),
    MetricDetail(Rc<MetricDetail>),
    MetricSeries(Rc<Vec<MetricDataPoint>>),
    MetricForecast(Rc<Vec<MetricForecastPoint>>),
    Reports(Rc<PaginatedResponse<ReportSummary>>),
    ReportDetail(Rc<ReportDetail>),
}

/// Typed access to one [`CachedData`] variant.
pub trait QueryData: Sized {
    fn from_cached(data: CachedData) -> Option<Rc<Self>>;
}

macro_rules! query_data {
    ($ty:ty, $variant:ident) => {
        impl QueryData for $ty {
            fn from_cached(data: CachedData) -> Option<Rc<Self>> {
                match data {
                    CachedData::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

query_data!(PaginatedResponse<MetricOverview>, Metrics);
query_data!(MetricDetail, MetricDetail);
query_data!(Vec<MetricDataPoint>, MetricSeries);
query_data!(Vec<MetricForecastPoint>, MetricForecast);
query_data!(PaginatedResponse<ReportSummary>, Reports);
query_data!(ReportDetail, ReportDetail);

/// Resolves a key to its fetcher. No caching.
pub async fn load(api: &ApiClient, key: &QueryKey) -> Result<CachedData> {
    let data = match key {
        QueryKey::Metrics(query) => CachedData::Metrics(Rc::new(metrics::get_metrics(api, query).await?)),
        QueryKey::Metric {
            metric_id,
            resource: MetricResource::Detail,
        } => CachedData::MetricDetail(Rc::new(metrics::get_metric_detail(api, metric_id).await?)),
        QueryKey::Metric {
            metric_id,
            resource: MetricResource::Series,
        } => CachedData::MetricSeries(Rc::new(metrics::get_metric_series(api, metric_id).await?)),
        QueryKey::Metric {
            metric_id,
            resource: MetricResource::Forecast,
        } => CachedData::MetricForecast(Rc::new(
            metrics::get_metric_forecast(api, metric_id).await?,
        )),
        QueryKey::Reports => CachedData::Reports(Rc::new(reports::get_reports(api).await?)),
        QueryKey::Report { report_id } => {
            CachedData::ReportDetail(Rc::new(reports::get_report_detail(api, report_id).await?))
        }
    };
    Ok(data)
}

/// The API client behind a shared query cache.
///
/// Cloning is cheap and clones share the cache.
#[derive(Clone)]
pub struct QueryClient {
    api: ApiClient,
    cache: QueryCache<CachedData>,
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        self.cache == other.cache
    }
}

impl QueryClient {
    pub fn new(settings: Rc<Settings>, transport: Rc<dyn Transport>) -> Self {
        let cache = QueryCache::from_settings(&settings);
        Self {
            api: ApiClient::new(settings, transport),
            cache,
        }
    }

    pub fn settings(&self) -> &Settings {
        self.api.settings()
    }

    pub fn cache(&self) -> &QueryCache<CachedData> {
        &self.cache
    }

    /// Cached or deduplicated load of `key`.
    pub async fn fetch(&self, key: QueryKey) -> Result<CachedData> {
        let api = self.api.clone();
        let load_key = key.clone();
        self.cache
            .fetch(key, move || async move { load(&api, &load_key).await })
            .await
    }

    /// Drops any cached value for `key` and loads it again.
    pub async fn refetch(&self, key: QueryKey) -> Result<CachedData> {
        self.cache.invalidate(&key);
        self.fetch(key).await
    }

    pub fn invalidate(&self, key: &QueryKey) {
        self.cache.invalidate(key);
    }

    /// Invalidates detail, series and forecast of one metric.
    pub fn invalidate_metric(&self, metric_id: &str) -> usize {
        self.cache
            .invalidate_where(|key| key.metric_id() == Some(metric_id))
    }

    /// Fresh cached value of type `T` for `key`, if any.
    pub fn cached<T: QueryData>(&self, key: &QueryKey) -> Option<Rc<T>> {
        self.cache.get_fresh(key).and_then(T::from_cached)
    }

    pub async fn query<T: QueryData>(&self, key: QueryKey) -> Result<Rc<T>> {
        let data = self.fetch(key.clone()).await?;
        T::from_cached(data).ok_or_else(|| ApiError::Decode {
            url: key.to_string(),
            message: "cached value has an unexpected type".to_string(),
        })
    }

    pub async fn metrics(&self, query: &MetricsQuery) -> Result<Rc<PaginatedResponse<MetricOverview>>> {
        self.query(QueryKey::metrics(query.clone())).await
    }

    pub async fn metric_detail(&self, metric_id: &str) -> Result<Rc<MetricDetail>> {
        self.query(guarded(QueryKey::metric_detail(metric_id), "metric")?)
            .await
    }

    pub async fn metric_series(&self, metric_id: &str) -> Result<Rc<Vec<MetricDataPoint>>> {
        self.query(guarded(QueryKey::metric_series(metric_id), "metric")?)
            .await
    }

    pub async fn metric_forecast(&self, metric_id: &str) -> Result<Rc<Vec<MetricForecastPoint>>> {
        self.query(guarded(QueryKey::metric_forecast(metric_id), "metric")?)
            .await
    }

    pub async fn reports(&self) -> Result<Rc<PaginatedResponse<ReportSummary>>> {
        self.query(QueryKey::reports()).await
    }

    pub async fn report_detail(&self, report_id: &str) -> Result<Rc<ReportDetail>> {
        self.query(guarded(QueryKey::report(report_id), "report")?)
            .await
    }
}

fn guarded(key: Option<QueryKey>, resource: &str) -> Result<QueryKey> {
    key.ok_or_else(|| ApiError::InvalidRequest(format!("{} identifier must not be empty", resource)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use common::TrafficTag;

    fn client() -> (QueryClient, Rc<MockTransport>) {
        let transport = Rc::new(MockTransport::new());
        let client = QueryClient::new(Rc::new(Settings::default()), transport.clone());
        (client, transport)
    }

    #[tokio::test]
    async fn test_detail_page_fetches_run_concurrently_and_dedupe() {
        let (client, transport) = client();

        let (detail, series, forecast, detail_again) = futures::join!(
            client.metric_detail("unemployment-rate"),
            client.metric_series("unemployment-rate"),
            client.metric_forecast("unemployment-rate"),
            client.metric_detail("unemployment-rate"),
        );

        assert_eq!(detail.unwrap().overview.metric_id, "unemployment-rate");
        assert!(!series.unwrap().is_empty());
        assert!(!forecast.unwrap().is_empty());
        assert!(detail_again.is_ok());
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_filter_change_triggers_new_request() {
        let (client, transport) = client();

        let all = client.metrics(&MetricsQuery::default()).await.unwrap();
        let red = client
            .metrics(&MetricsQuery::default().with_status(Some(TrafficTag::Red)))
            .await
            .unwrap();

        assert_eq!(transport.request_count(), 2);
        assert!(red.items.len() < all.items.len());
        assert!(red.items.iter().all(|metric| metric.tag == TrafficTag::Red));

        let last = transport.last_request().unwrap();
        assert_eq!(last.query_param("status"), Some("RED"));

        // same filters again are served from the cache
        client.metrics(&MetricsQuery::default()).await.unwrap();
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_blank_identifier_is_rejected_without_request() {
        let (client, transport) = client();

        let error = client.metric_detail("  ").await.unwrap_err();
        assert!(matches!(error, ApiError::InvalidRequest(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_refetch_after_error() {
        let (client, transport) = client();

        let error = client.report_detail("missing").await.unwrap_err();
        assert!(error.is_not_found());

        let key = QueryKey::report("missing").unwrap();
        assert!(client.refetch(key).await.is_err());
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_cached_lookup_and_invalidate_metric() {
        let (client, _) = client();
        let key = QueryKey::metric_series("unemployment-rate").unwrap();

        assert!(client.cached::<Vec<MetricDataPoint>>(&key).is_none());
        client.metric_series("unemployment-rate").await.unwrap();
        assert!(client.cached::<Vec<MetricDataPoint>>(&key).is_some());
        // wrong type for the key
        assert!(client.cached::<MetricDetail>(&key).is_none());

        assert_eq!(client.invalidate_metric("unemployment-rate"), 1);
        assert!(client.cached::<Vec<MetricDataPoint>>(&key).is_none());
    }
}
