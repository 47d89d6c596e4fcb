//! Render-ready view models shared by the web pages and the terminal
//! console. Nothing here depends on a UI toolkit.

pub mod dashboard;
pub mod metric_detail;
pub mod reports;

use crate::error::ApiError;

/// What a page section should show for one query.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneView<'a, T> {
    Loading,
    Error(&'a ApiError),
    /// Nothing to draw: the query is disabled or its data is not usable yet
    Hidden,
    Ready(T),
}

impl<T> PaneView<'_, T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, PaneView::Ready(_))
    }
}
