//! Common transport-layer types shared between the console front ends.
//! These structs mirror the analytics API payloads so that the web frontend
//! and the terminal console deserialize responses without duplicating shapes.

mod categories;
mod formatting;
mod metrics;
mod reports;
mod tags;

pub use categories::{CATEGORY_LABELS, category_label};
pub use formatting::{EM_DASH, display_or_dash, format_date, format_number};
pub use metrics::{
    EvaluationMetrics, Metadata, MetricDataPoint, MetricDetail, MetricForecastPoint, MetricOverview,
};
pub use reports::{ReportDetail, ReportHighlights, ReportSummary};
pub use tags::{ParseTagError, TagCounts, TrafficTag, Trend};

use serde::{Deserialize, Serialize};

/// List envelope returned by the collection endpoints.
///
/// `total` is reported by the backend; the console only ever renders `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self { items, total }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
