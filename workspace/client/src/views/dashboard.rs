use common::{MetricOverview, PaginatedResponse, TagCounts, TrafficTag};
use std::rc::Rc;

use crate::error::ApiError;
use crate::query::FetchState;

/// Number of metric cards shown above the table.
pub const PREVIEW_LIMIT: usize = 6;

pub const EMPTY_METRICS_MESSAGE: &str = "No metrics match the selected filters.";

/// Per-tag counts over the loaded list.
///
/// Computed client-side in one pass, so it describes the items the API
/// returned, not the full population when the list was truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub total: usize,
    pub counts: TagCounts,
}

impl DashboardSummary {
    pub fn from_metrics(metrics: &[MetricOverview]) -> Self {
        Self {
            total: metrics.len(),
            counts: TagCounts::tally(metrics.iter().map(|metric| metric.tag)),
        }
    }

    pub fn count(&self, tag: TrafficTag) -> u32 {
        self.counts.get(tag)
    }
}

/// Dashboard body in render priority order: loading, error, empty, loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView<'a> {
    Loading,
    Error(&'a ApiError),
    Empty,
    Loaded {
        summary: DashboardSummary,
        preview: &'a [MetricOverview],
        metrics: &'a [MetricOverview],
        /// Server-reported total when it exceeds the loaded items
        truncated_total: Option<u64>,
    },
}

impl<'a> DashboardView<'a> {
    pub fn from_state(state: &'a FetchState<Rc<PaginatedResponse<MetricOverview>>>) -> Self {
        match state {
            // the overview query is always enabled
            FetchState::NotStarted | FetchState::Loading => DashboardView::Loading,
            FetchState::Error(err) => DashboardView::Error(err),
            FetchState::Success(page) if page.items.is_empty() => DashboardView::Empty,
            FetchState::Success(page) => {
                let metrics = page.items.as_slice();
                let truncated_total = (page.total > metrics.len() as u64).then_some(page.total);
                if let Some(total) = truncated_total {
                    log::warn!(
                        "Metrics list holds {} of {} items; tag counts cover loaded items only",
                        metrics.len(),
                        total
                    );
                }
                DashboardView::Loaded {
                    summary: DashboardSummary::from_metrics(metrics),
                    preview: &metrics[..metrics.len().min(PREVIEW_LIMIT)],
                    metrics,
                    truncated_total,
                }
            }
        }
    }
}
