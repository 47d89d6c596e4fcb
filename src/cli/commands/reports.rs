use anyhow::{anyhow, Context, Result};
use client::views::reports::ReportsView;
use client::{FetchState, QueryClient};
use std::io::Write;
use tracing::{error, info};

use crate::render;

pub async fn reports(client: &QueryClient, out: &mut impl Write) -> Result<()> {
    info!("Loading reports");

    let state: FetchState<_> = client.reports().await.into();
    write!(out, "{}", render::reports(&ReportsView::from_state(&state))?)?;

    if let Some(e) = state.error() {
        error!("Reports failed: {}", e);
        return Err(anyhow!("failed to load reports: {}", e));
    }
    Ok(())
}

pub async fn report(client: &QueryClient, report_id: &str, out: &mut impl Write) -> Result<()> {
    info!("Loading report {}", report_id);

    match client.report_detail(report_id).await {
        Ok(report) => {
            write!(out, "{}", render::report_detail(&report)?)?;
            Ok(())
        }
        Err(e) => {
            error!("Report {} failed: {}", report_id, e);
            writeln!(out, "{}", render::error_pane(&e))
                .context("failed to write report output")?;
            Err(anyhow!("failed to load report '{}': {}", report_id, e))
        }
    }
}
