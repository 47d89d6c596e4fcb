#[cfg(test)]
pub mod test_utils {
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        response::Json,
        routing::get,
        Router,
    };
    use client::mock::{
        generate_forecast, generate_series, get_mock_metric_detail, get_mock_report_detail,
        get_mock_reports, query_mock_metrics,
    };
    use client::{MetricsQuery, QueryClient, Settings};
    use common::{
        MetricDataPoint, MetricDetail, MetricForecastPoint, MetricOverview, PaginatedResponse,
        ReportDetail, ReportSummary,
    };
    use std::rc::Rc;
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    use crate::transport::ReqwestTransport;

    async fn list_metrics(Query(query): Query<MetricsQuery>) -> Json<PaginatedResponse<MetricOverview>> {
        let query = MetricsQuery::new(query.category.as_deref(), query.status, query.search.as_deref());
        Json(query_mock_metrics(&query))
    }

    async fn metric_detail(Path(metric_id): Path<String>) -> Result<Json<MetricDetail>, StatusCode> {
        get_mock_metric_detail(&metric_id).map(Json).ok_or(StatusCode::NOT_FOUND)
    }

    async fn metric_series(Path(metric_id): Path<String>) -> Result<Json<Vec<MetricDataPoint>>, StatusCode> {
        generate_series(&metric_id).map(Json).ok_or(StatusCode::NOT_FOUND)
    }

    async fn metric_forecast(
        Path(metric_id): Path<String>,
    ) -> Result<Json<Vec<MetricForecastPoint>>, StatusCode> {
        // one fixture metric has a broken forecast model
        if metric_id == "wholesale-price" {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        generate_forecast(&metric_id).map(Json).ok_or(StatusCode::NOT_FOUND)
    }

    async fn list_reports() -> Json<PaginatedResponse<ReportSummary>> {
        Json(PaginatedResponse::new(get_mock_reports()))
    }

    async fn report_detail(Path(report_id): Path<String>) -> Result<Json<ReportDetail>, StatusCode> {
        get_mock_report_detail(&report_id).map(Json).ok_or(StatusCode::NOT_FOUND)
    }

    /// Fixture analytics API serving the mock data set.
    pub fn fixture_router() -> Router {
        Router::new()
            .route("/api/v1/metrics", get(list_metrics))
            .route("/api/v1/metrics/:metric_id", get(metric_detail))
            .route("/api/v1/metrics/:metric_id/series", get(metric_series))
            .route("/api/v1/metrics/:metric_id/forecast", get(metric_forecast))
            .route("/api/v1/reports", get(list_reports))
            .route("/api/v1/reports/:report_id", get(report_detail))
    }

    /// An API that answers every request with a body that is not JSON.
    pub fn garbage_router() -> Router {
        Router::new().fallback(|| async { "<html>maintenance</html>" })
    }

    /// Serves `router` on an ephemeral local port and returns its origin.
    pub async fn spawn_api(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fixture API");
        let address = listener.local_addr().expect("Fixture API has no address");
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Fixture API stopped");
        });
        format!("http://{}", address)
    }

    /// Query client talking to `base_url` over reqwest.
    pub fn live_client(base_url: &str) -> QueryClient {
        let settings = Settings {
            api_base_url: base_url.to_string(),
            environment: "test".to_string(),
            ..Settings::default()
        };
        let transport = ReqwestTransport::new().expect("Failed to build HTTP client");
        QueryClient::new(Rc::new(settings), Rc::new(transport))
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Console output captured from a command.
    pub fn plain_output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).expect("Console output is not UTF-8")
    }
}
