use common::{format_date, PaginatedResponse, ReportDetail, ReportSummary};
use std::rc::Rc;

use crate::error::ApiError;
use crate::query::FetchState;

pub const EMPTY_REPORTS_MESSAGE: &str = "No reports available yet.";
pub const NO_HIGHLIGHTS: &str = "Nothing recorded.";

#[derive(Debug, Clone, PartialEq)]
pub enum ReportsView<'a> {
    Loading,
    Error(&'a ApiError),
    Empty,
    Loaded(&'a [ReportSummary]),
}

impl<'a> ReportsView<'a> {
    pub fn from_state(state: &'a FetchState<Rc<PaginatedResponse<ReportSummary>>>) -> Self {
        match state {
            FetchState::NotStarted | FetchState::Loading => ReportsView::Loading,
            FetchState::Error(err) => ReportsView::Error(err),
            FetchState::Success(page) if page.items.is_empty() => ReportsView::Empty,
            FetchState::Success(page) => ReportsView::Loaded(&page.items),
        }
    }
}

pub fn report_title(report: &ReportSummary) -> String {
    format!("{} report", report.scope)
}

pub fn generated_label(report: &ReportSummary) -> String {
    format!("Generated {}", format_date(Some(&report.generated_at)))
}

/// Lines of one highlight section, or the placeholder when it is empty.
pub fn section_lines(items: &[String]) -> Vec<&str> {
    if items.is_empty() {
        vec![NO_HIGHLIGHTS]
    } else {
        items.iter().map(String::as_str).collect()
    }
}

pub fn report_notes(report: &ReportDetail) -> Option<&str> {
    report
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
}
