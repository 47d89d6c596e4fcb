use crate::tags::{TrafficTag, Trend};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open key/value metadata attached to metrics and data points.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Snapshot of a metric as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricOverview {
    pub metric_id: String,
    pub name: String,
    pub category: String,
    pub jurisdiction: String,
    pub latest_value: Option<f64>,
    #[serde(default)]
    pub unit: String,
    pub tag: TrafficTag,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Forecast accuracy figures reported by the modelling service.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    #[serde(default)]
    pub mae: Option<f64>,
    #[serde(default)]
    pub rmse: Option<f64>,
    #[serde(default)]
    pub mape: Option<f64>,
}

/// Full metric record for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDetail {
    #[serde(flatten)]
    pub overview: MetricOverview,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// One observation of a metric's historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDataPoint {
    pub ds: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Predicted value with optional confidence bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricForecastPoint {
    pub ds: String,
    pub forecast: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}
