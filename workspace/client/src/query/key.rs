use std::fmt;

use crate::api_client::metrics::MetricsQuery;

/// Sub-resource of a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricResource {
    Detail,
    Series,
    Forecast,
}

impl MetricResource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricResource::Detail => "detail",
            MetricResource::Series => "series",
            MetricResource::Forecast => "forecast",
        }
    }
}

/// Structural identity of a cached query.
///
/// List keys carry the full filter object, so any filter change is a
/// different key. Per-metric keys carry the identifier and sub-resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKey {
    Metrics(MetricsQuery),
    Metric {
        metric_id: String,
        resource: MetricResource,
    },
    Reports,
    Report {
        report_id: String,
    },
}

impl QueryKey {
    pub fn metrics(query: MetricsQuery) -> Self {
        QueryKey::Metrics(query)
    }

    /// `None` for a blank identifier: the query stays disabled.
    pub fn metric_detail(metric_id: &str) -> Option<Self> {
        Self::metric(metric_id, MetricResource::Detail)
    }

    pub fn metric_series(metric_id: &str) -> Option<Self> {
        Self::metric(metric_id, MetricResource::Series)
    }

    pub fn metric_forecast(metric_id: &str) -> Option<Self> {
        Self::metric(metric_id, MetricResource::Forecast)
    }

    pub fn metric(metric_id: &str, resource: MetricResource) -> Option<Self> {
        let metric_id = metric_id.trim();
        if metric_id.is_empty() {
            return None;
        }
        Some(QueryKey::Metric {
            metric_id: metric_id.to_string(),
            resource,
        })
    }

    pub fn reports() -> Self {
        QueryKey::Reports
    }

    pub fn report(report_id: &str) -> Option<Self> {
        let report_id = report_id.trim();
        if report_id.is_empty() {
            return None;
        }
        Some(QueryKey::Report {
            report_id: report_id.to_string(),
        })
    }

    /// Metric identifier for per-metric keys.
    pub fn metric_id(&self) -> Option<&str> {
        match self {
            QueryKey::Metric { metric_id, .. } => Some(metric_id),
            _ => None,
        }
    }

    pub fn is_metrics_list(&self) -> bool {
        matches!(self, QueryKey::Metrics(_))
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Metrics(query) => {
                write!(f, "metrics")?;
                for (name, value) in query.to_params() {
                    write!(f, " {}={}", name, value)?;
                }
                Ok(())
            }
            QueryKey::Metric {
                metric_id,
                resource,
            } => write!(f, "metric/{}/{}", metric_id, resource.as_str()),
            QueryKey::Reports => write!(f, "reports"),
            QueryKey::Report { report_id } => write!(f, "report/{}", report_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::TrafficTag;

    #[test]
    fn test_blank_identifier_disables_query() {
        assert_eq!(QueryKey::metric_detail(""), None);
        assert_eq!(QueryKey::metric_series("   "), None);
        assert_eq!(QueryKey::report(""), None);
        assert!(QueryKey::metric_forecast("cpi").is_some());
    }

    #[test]
    fn test_filter_change_is_a_different_key() {
        let base = MetricsQuery::new(Some("health"), None, None);
        let with_status = base.clone().with_status(Some(TrafficTag::Red));
        let with_search = base.clone().with_search(Some("wait"));

        assert_ne!(QueryKey::metrics(base.clone()), QueryKey::metrics(with_status));
        assert_ne!(QueryKey::metrics(base.clone()), QueryKey::metrics(with_search));
        assert_eq!(
            QueryKey::metrics(base),
            QueryKey::metrics(MetricsQuery::new(Some("health"), None, Some("")))
        );
    }

    #[test]
    fn test_sub_resources_are_distinct_keys() {
        let detail = QueryKey::metric_detail("cpi").unwrap();
        let series = QueryKey::metric_series("cpi").unwrap();
        assert_ne!(detail, series);
        assert_eq!(detail.metric_id(), Some("cpi"));
        assert_eq!(series.to_string(), "metric/cpi/series");
    }

    #[test]
    fn test_display_metrics_key() {
        let key = QueryKey::metrics(MetricsQuery::new(Some("economy"), Some(TrafficTag::Green), None));
        assert_eq!(key.to_string(), "metrics category=economy status=GREEN");
        assert_eq!(QueryKey::metrics(MetricsQuery::default()).to_string(), "metrics");
    }
}
