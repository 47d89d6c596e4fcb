use anyhow::{anyhow, Result};
use client::{FetchState, QueryClient};
use std::io::Write;
use tracing::{debug, error, info};

use crate::render;

/// Prints one metric. Detail, series and forecast load concurrently; only
/// a failed detail makes the command fail.
pub async fn metric(client: &QueryClient, metric_id: &str, out: &mut impl Write) -> Result<()> {
    info!("Loading metric {}", metric_id);

    let (detail, series, forecast) = futures::join!(
        client.metric_detail(metric_id),
        client.metric_series(metric_id),
        client.metric_forecast(metric_id),
    );
    debug!(
        "Metric {} loaded: detail ok={}, series ok={}, forecast ok={}",
        metric_id,
        detail.is_ok(),
        series.is_ok(),
        forecast.is_ok()
    );

    let detail: FetchState<_> = detail.into();
    let series: FetchState<_> = series.into();
    let forecast: FetchState<_> = forecast.into();
    write!(out, "{}", render::metric_detail(&detail, &series, &forecast)?)?;

    if let Some(e) = detail.error() {
        error!("Metric {} failed: {}", metric_id, e);
        return Err(anyhow!("failed to load metric '{}': {}", metric_id, e));
    }
    Ok(())
}
