use anyhow::{anyhow, Result};
use client::views::dashboard::DashboardView;
use client::{FetchState, MetricsQuery, QueryClient};
use std::io::Write;
use tracing::{debug, error, info};

use crate::render;

/// Prints the dashboard for `query`. Fails when the metrics list could not
/// be loaded, after printing the error pane.
pub async fn dashboard(client: &QueryClient, query: MetricsQuery, out: &mut impl Write) -> Result<()> {
    info!("Loading dashboard");
    debug!("Dashboard filters: {:?}", query);

    let state: FetchState<_> = client.metrics(&query).await.into();
    let view = DashboardView::from_state(&state);
    write!(out, "{}", render::dashboard(&view, &query)?)?;

    if let Some(e) = state.error() {
        error!("Dashboard failed: {}", e);
        return Err(anyhow!("failed to load metrics: {}", e));
    }
    Ok(())
}
