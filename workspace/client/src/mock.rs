//! In-process stand-in for the analytics API, used when mock mode is enabled
//! and by tests. Fixtures are deterministic.

use async_trait::async_trait;
use common::{
    EvaluationMetrics, Metadata, MetricDataPoint, MetricDetail, MetricForecastPoint,
    MetricOverview, PaginatedResponse, ReportDetail, ReportHighlights, ReportSummary, TagCounts,
    TrafficTag, Trend,
};
use serde::Serialize;
use std::cell::RefCell;

use crate::api_client::metrics::MetricsQuery;
use crate::api_client::API_PREFIX;
use crate::error::{ApiError, Result};
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Months of history generated per metric.
pub const MOCK_SERIES_LEN: usize = 150;
/// Months of forecast generated per metric.
pub const MOCK_FORECAST_LEN: usize = 12;

const SERIES_START_YEAR: i32 = 2012;

struct MetricFixture {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    jurisdiction: &'static str,
    unit: &'static str,
    base: f64,
    slope: f64,
    tag: TrafficTag,
    trend: Trend,
}

const METRICS: [MetricFixture; 12] = [
    MetricFixture { id: "gdp-growth", name: "Real GDP growth", category: "economy", jurisdiction: "Commonwealth", unit: "%", base: 2.4, slope: -0.004, tag: TrafficTag::Green, trend: Trend::Stable },
    MetricFixture { id: "cpi-headline", name: "Headline CPI", category: "economy", jurisdiction: "Commonwealth", unit: "%", base: 2.1, slope: 0.012, tag: TrafficTag::Red, trend: Trend::Rising },
    MetricFixture { id: "ed-wait-time", name: "Emergency department wait time", category: "health", jurisdiction: "NSW", unit: "hours", base: 3.2, slope: 0.008, tag: TrafficTag::Red, trend: Trend::Rising },
    MetricFixture { id: "elective-surgery", name: "Elective surgery completed on time", category: "health", jurisdiction: "VIC", unit: "%", base: 78.0, slope: 0.05, tag: TrafficTag::Green, trend: Trend::Rising },
    MetricFixture { id: "property-crime", name: "Property crime rate", category: "crime", jurisdiction: "QLD", unit: "per 100k", base: 4120.0, slope: -6.5, tag: TrafficTag::Green, trend: Trend::Falling },
    MetricFixture { id: "defence-readiness", name: "Defence readiness index", category: "defence", jurisdiction: "Commonwealth", unit: "", base: 71.0, slope: 0.0, tag: TrafficTag::White, trend: Trend::Stable },
    MetricFixture { id: "year12-attainment", name: "Year 12 attainment", category: "education", jurisdiction: "Commonwealth", unit: "%", base: 84.5, slope: 0.03, tag: TrafficTag::White, trend: Trend::Stable },
    MetricFixture { id: "unemployment-rate", name: "Unemployment rate", category: "labour", jurisdiction: "Commonwealth", unit: "%", base: 5.6, slope: -0.01, tag: TrafficTag::Green, trend: Trend::Falling },
    MetricFixture { id: "youth-unemployment", name: "Youth unemployment rate", category: "labour", jurisdiction: "SA", unit: "%", base: 11.8, slope: 0.006, tag: TrafficTag::Black, trend: Trend::Unknown },
    MetricFixture { id: "renewable-share", name: "Renewable share of generation", category: "energy", jurisdiction: "Commonwealth", unit: "%", base: 14.0, slope: 0.12, tag: TrafficTag::Green, trend: Trend::Rising },
    MetricFixture { id: "wholesale-price", name: "Wholesale electricity price", category: "energy", jurisdiction: "NEM", unit: "AUD/MWh", base: 61.0, slope: 0.35, tag: TrafficTag::Red, trend: Trend::Rising },
    MetricFixture { id: "underlying-cash", name: "Underlying cash balance", category: "budget", jurisdiction: "Commonwealth", unit: "AUD bn", base: -32.0, slope: 0.22, tag: TrafficTag::Black, trend: Trend::Unknown },
];

fn month_start(offset: usize) -> String {
    let year = SERIES_START_YEAR + (offset / 12) as i32;
    let month = offset % 12 + 1;
    format!("{:04}-{:02}-01", year, month)
}

fn fixture_value(fixture: &MetricFixture, offset: usize) -> f64 {
    // a yearly wave on top of a linear trend
    let seasonal = ((offset % 12) as f64 - 5.5) / 5.5;
    let raw = fixture.base + fixture.slope * offset as f64 + seasonal * fixture.base.abs() * 0.02;
    (raw * 100.0).round() / 100.0
}

fn find_fixture(metric_id: &str) -> Option<&'static MetricFixture> {
    METRICS.iter().find(|fixture| fixture.id == metric_id)
}

fn overview(fixture: &MetricFixture) -> MetricOverview {
    // the black-tagged metrics have no usable latest reading
    let latest_value = match fixture.tag {
        TrafficTag::Black => None,
        _ => Some(fixture_value(fixture, MOCK_SERIES_LEN - 1)),
    };
    MetricOverview {
        metric_id: fixture.id.to_string(),
        name: fixture.name.to_string(),
        category: fixture.category.to_string(),
        jurisdiction: fixture.jurisdiction.to_string(),
        latest_value,
        unit: fixture.unit.to_string(),
        tag: fixture.tag,
        trend: fixture.trend,
        last_updated: Some(month_start(MOCK_SERIES_LEN - 1)),
    }
}

pub fn get_mock_metrics() -> Vec<MetricOverview> {
    METRICS.iter().map(overview).collect()
}

pub fn get_mock_metric_detail(metric_id: &str) -> Option<MetricDetail> {
    let fixture = find_fixture(metric_id)?;
    let tag_explanation = match fixture.tag {
        TrafficTag::Red => Some("Outside the tolerance band for the last two quarters.".to_string()),
        TrafficTag::Green => Some("Within target and moving in the intended direction.".to_string()),
        TrafficTag::White => None,
        TrafficTag::Black => Some("Insufficient recent data to classify.".to_string()),
    };

    let mut metadata = Metadata::new();
    metadata.insert("source".to_string(), serde_json::json!("Mock analytics feed"));
    metadata.insert("frequency".to_string(), serde_json::json!("monthly"));
    metadata.insert("series_length".to_string(), serde_json::json!(MOCK_SERIES_LEN));

    Some(MetricDetail {
        overview: overview(fixture),
        tag_explanation,
        evaluation: Some(EvaluationMetrics {
            mae: Some((fixture.base.abs() * 0.03 * 100.0).round() / 100.0),
            rmse: Some((fixture.base.abs() * 0.045 * 100.0).round() / 100.0),
            mape: match fixture.tag {
                TrafficTag::Black => None,
                _ => Some(3.2),
            },
        }),
        metadata: Some(metadata),
    })
}

pub fn generate_series(metric_id: &str) -> Option<Vec<MetricDataPoint>> {
    let fixture = find_fixture(metric_id)?;
    Some(
        (0..MOCK_SERIES_LEN)
            .map(|offset| MetricDataPoint {
                ds: month_start(offset),
                value: fixture_value(fixture, offset),
                metadata: None,
            })
            .collect(),
    )
}

pub fn generate_forecast(metric_id: &str) -> Option<Vec<MetricForecastPoint>> {
    let fixture = find_fixture(metric_id)?;
    Some(
        (0..MOCK_FORECAST_LEN)
            .map(|step| {
                let offset = MOCK_SERIES_LEN + step;
                let forecast = fixture_value(fixture, offset);
                // interval widens with the horizon
                let spread = fixture.base.abs() * 0.01 * (step + 1) as f64;
                MetricForecastPoint {
                    ds: month_start(offset),
                    forecast,
                    lower: Some(forecast - spread),
                    upper: Some(forecast + spread),
                }
            })
            .collect(),
    )
}

fn report_summary(report_id: &str, scope: &str, generated_at: &str, counts: [u32; 4]) -> ReportSummary {
    ReportSummary {
        report_id: report_id.to_string(),
        scope: scope.to_string(),
        generated_at: generated_at.to_string(),
        tag_counts: TagCounts {
            red: counts[0],
            green: counts[1],
            white: counts[2],
            black: counts[3],
        },
    }
}

pub fn get_mock_reports() -> Vec<ReportSummary> {
    vec![
        report_summary("weekly-2024-06-28", "Weekly", "2024-06-28T08:00:00Z", [3, 5, 2, 2]),
        report_summary("monthly-2024-06", "Monthly", "2024-07-01T09:30:00+10:00", [3, 5, 2, 2]),
        report_summary("quarterly-2024-q2", "Quarterly", "2024-07-05", [2, 3, 0, 1]),
    ]
}

pub fn get_mock_report_detail(report_id: &str) -> Option<ReportDetail> {
    let summary = get_mock_reports()
        .into_iter()
        .find(|report| report.report_id == report_id)?;
    let quarterly = summary.scope == "Quarterly";
    Some(ReportDetail {
        summary,
        highlights: ReportHighlights {
            top_risks: vec![
                "Headline CPI".to_string(),
                "Emergency department wait time".to_string(),
            ],
            improving: vec!["Property crime rate".to_string(), "Unemployment rate".to_string()],
            worsening: vec!["Wholesale electricity price".to_string()],
        },
        notes: quarterly.then(|| "Figures for June are preliminary.".to_string()),
    })
}

/// Transport answering from the fixtures above.
///
/// Unknown paths and identifiers produce a 404. Requests are recorded so
/// tests can assert on what was sent.
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    fn route(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let path = request
            .endpoint
            .strip_prefix(API_PREFIX)
            .unwrap_or(&request.endpoint);
        let segments: Vec<String> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                urlencoding::decode(segment)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| segment.to_string())
            })
            .collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        match segments.as_slice() {
            ["metrics"] => json(&filter_metrics(request)),
            ["metrics", id] => found(&request.url, get_mock_metric_detail(id)),
            ["metrics", id, "series"] => found(&request.url, generate_series(id)),
            ["metrics", id, "forecast"] => found(&request.url, generate_forecast(id)),
            ["reports"] => json(&PaginatedResponse::new(get_mock_reports())),
            ["reports", id] => found(&request.url, get_mock_report_detail(id)),
            _ => Ok(ApiResponse::new(404, r#"{"detail": "Not Found"}"#)),
        }
    }
}

fn filter_metrics(request: &ApiRequest) -> PaginatedResponse<MetricOverview> {
    let status = request
        .query_param("status")
        .and_then(|status| status.parse::<TrafficTag>().ok());
    let query = MetricsQuery::new(
        request.query_param("category"),
        status,
        request.query_param("search"),
    );
    query_mock_metrics(&query)
}

/// Fixture metrics matching `query`: exact category and tag, and a
/// case-insensitive search over name and identifier.
pub fn query_mock_metrics(query: &MetricsQuery) -> PaginatedResponse<MetricOverview> {
    let search = query.search.as_deref().map(str::to_lowercase);

    let items = get_mock_metrics()
        .into_iter()
        .filter(|metric| query.category.as_deref().is_none_or(|category| metric.category == category))
        .filter(|metric| query.status.is_none_or(|status| metric.tag == status))
        .filter(|metric| {
            search.as_deref().is_none_or(|search| {
                metric.name.to_lowercase().contains(search) || metric.metric_id.contains(search)
            })
        })
        .collect();
    PaginatedResponse::new(items)
}

fn json<T: Serialize>(body: &T) -> Result<ApiResponse> {
    serde_json::to_string(body)
        .map(|body| ApiResponse::new(200, body))
        .map_err(|e| ApiError::Decode {
            url: "mock".to_string(),
            message: e.to_string(),
        })
}

fn found<T: Serialize>(url: &str, body: Option<T>) -> Result<ApiResponse> {
    match body {
        Some(body) => json(&body),
        None => {
            log::debug!("Mock API has no resource at {}", url);
            Ok(ApiResponse::new(404, r#"{"detail": "Not Found"}"#))
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        log::trace!("Mock API handling {}", request.endpoint);
        let response = self.route(&request);
        self.requests.borrow_mut().push(request);
        response
    }
}
