//! Plain-text renderings of the console pages.
//!
//! Each page is built from the same view models the web frontend uses, so
//! render priority, empty-state messages and the forecast window match.

use anyhow::{anyhow, Result};
use client::views::dashboard::{DashboardSummary, DashboardView, EMPTY_METRICS_MESSAGE};
use client::views::metric_detail::{
    evaluation_rows, forecast_pane, metadata_rows, series_pane, subtitle, tag_explanation,
    ForecastChartData, NO_METADATA,
};
use client::views::reports::{
    generated_label, report_notes, report_title, section_lines, ReportsView, EMPTY_REPORTS_MESSAGE,
};
use client::views::PaneView;
use client::{ApiError, FetchState, MetricsQuery};
use colored::{ColoredString, Colorize};
use common::{
    category_label, display_or_dash, format_date, format_number, MetricDataPoint, MetricDetail,
    MetricForecastPoint, MetricOverview, ReportDetail, ReportSummary, TagCounts, TrafficTag,
};
use std::fmt::Write as _;
use std::io::Write as _;
use std::rc::Rc;
use tabwriter::TabWriter;

/// Trailing points of the history listed under the series heading.
const SERIES_TAIL: usize = 6;

pub fn tag_badge(tag: TrafficTag, label: &str) -> ColoredString {
    let label = format!("[{}]", label);
    match tag {
        TrafficTag::Red => label.white().on_red().bold(),
        TrafficTag::Green => label.white().on_green().bold(),
        TrafficTag::White => label.black().on_white().bold(),
        TrafficTag::Black => label.white().on_black().bold(),
    }
}

fn count_badges(counts: &TagCounts) -> String {
    counts
        .iter()
        .zip(counts.badges())
        .map(|((tag, _), label)| tag_badge(tag, &label).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generic failure pane; error kinds are not distinguished on screen.
pub fn error_pane(error: &ApiError) -> String {
    format!("{} {}", "!".red().bold(), error.user_message())
}

fn heading(text: &str) -> ColoredString {
    text.bold().underline()
}

fn table<I>(header: &[&str], rows: I) -> Result<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = TabWriter::new(Vec::new()).padding(2);
    writeln!(writer, "{}", header.join("\t"))?;
    for row in rows {
        writeln!(writer, "{}", row.join("\t"))?;
    }
    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("failed to lay out table: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn metric_table(metrics: &[MetricOverview]) -> Result<String> {
    table(
        &["Name", "Category", "Latest value", "Trend", "Tag", "Last updated"],
        metrics.iter().map(|metric| {
            vec![
                metric.name.clone(),
                category_label(Some(&metric.category)).to_string(),
                format_number(metric.latest_value, &metric.unit),
                format!("{} {}", metric.trend.arrow(), metric.trend.label()),
                metric.tag.to_string(),
                format_date(metric.last_updated.as_deref()),
            ]
        }),
    )
}

fn metric_card(metric: &MetricOverview) -> String {
    format!(
        "{} {} ({} · {})  {}  {} {}  updated {}  [{}]",
        tag_badge(metric.tag, metric.tag.as_str()),
        metric.name.bold(),
        metric.category,
        metric.jurisdiction,
        format_number(metric.latest_value, &metric.unit),
        metric.trend.arrow(),
        metric.trend.label(),
        format_date(metric.last_updated.as_deref()),
        metric.metric_id,
    )
}

fn summary_line(summary: &DashboardSummary) -> String {
    format!(
        "Total metrics: {}  {}",
        summary.total,
        count_badges(&summary.counts)
    )
}

fn filters_line(filters: &MetricsQuery) -> String {
    let status = filters
        .status
        .map(|tag| tag.to_string())
        .unwrap_or_else(|| "All statuses".to_string());
    format!(
        "Filters: {} | {} | search: {}",
        category_label(filters.category.as_deref()),
        status,
        filters.search.as_deref().unwrap_or("—"),
    )
}

pub fn dashboard(view: &DashboardView<'_>, filters: &MetricsQuery) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", heading("Dashboard"))?;
    writeln!(out, "{}", filters_line(filters))?;
    writeln!(out)?;

    match view {
        DashboardView::Loading => writeln!(out, "Loading metrics")?,
        DashboardView::Error(error) => writeln!(out, "{}", error_pane(error))?,
        DashboardView::Empty => writeln!(out, "{}", EMPTY_METRICS_MESSAGE)?,
        DashboardView::Loaded {
            summary,
            preview,
            metrics,
            truncated_total,
        } => {
            writeln!(out, "{}", summary_line(summary))?;
            if let Some(total) = truncated_total {
                writeln!(
                    out,
                    "Showing {} of {} metrics. Tag counts cover the metrics shown.",
                    metrics.len(),
                    total
                )?;
            }
            writeln!(out)?;
            writeln!(out, "{}", heading("Preview"))?;
            for metric in preview.iter() {
                writeln!(out, "{}", metric_card(metric))?;
            }
            writeln!(out)?;
            writeln!(out, "{}", heading("All metrics"))?;
            out.push_str(&metric_table(metrics)?);
        }
    }
    Ok(out)
}

fn detail_cards(out: &mut String, detail: &MetricDetail) -> Result<()> {
    let overview = &detail.overview;
    writeln!(
        out,
        "Latest value: {} (As of {})",
        format_number(overview.latest_value, &overview.unit),
        format_date(overview.last_updated.as_deref())
    )?;
    writeln!(out, "Trend: {} {}", overview.trend.arrow(), overview.trend.label())?;
    let evaluation = evaluation_rows(detail.evaluation.as_ref())
        .into_iter()
        .map(|(label, value)| format!("{} {}", label, value))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "Evaluation: {}", evaluation)?;
    writeln!(out, "Tag explanation: {}", tag_explanation(detail))?;
    Ok(())
}

fn series_section(out: &mut String, state: &FetchState<Rc<Vec<MetricDataPoint>>>) -> Result<()> {
    writeln!(out, "{}", heading("Historical series"))?;
    match series_pane(state) {
        PaneView::Loading => writeln!(out, "Loading history")?,
        PaneView::Error(error) => writeln!(out, "{}", error_pane(error))?,
        PaneView::Hidden => writeln!(out, "No historical data available.")?,
        PaneView::Ready(points) => {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                writeln!(
                    out,
                    "{} points from {} to {}",
                    points.len(),
                    format_date(Some(&first.ds)),
                    format_date(Some(&last.ds))
                )?;
            }
            let tail = &points[points.len().saturating_sub(SERIES_TAIL)..];
            out.push_str(&table(
                &["Date", "Value"],
                tail.iter()
                    .map(|point| vec![format_date(Some(&point.ds)), display_or_dash(Some(point.value))]),
            )?);
        }
    }
    Ok(())
}

fn forecast_table(chart: &ForecastChartData) -> Result<String> {
    table(
        &["Date", "Forecast", "Lower", "Upper"],
        chart.forecast().map(|point| {
            vec![
                format_date(Some(&point.ds)),
                display_or_dash(Some(point.value)),
                display_or_dash(point.lower),
                display_or_dash(point.upper),
            ]
        }),
    )
}

fn forecast_section(
    out: &mut String,
    series: &FetchState<Rc<Vec<MetricDataPoint>>>,
    forecast: &FetchState<Rc<Vec<MetricForecastPoint>>>,
) -> Result<()> {
    writeln!(out, "{}", heading("Forecast"))?;
    match forecast_pane(series, forecast) {
        PaneView::Loading => writeln!(out, "Loading forecast")?,
        PaneView::Error(error) => writeln!(out, "{}", error_pane(error))?,
        PaneView::Hidden => writeln!(out, "Forecast is shown once the historical series is available.")?,
        PaneView::Ready(chart) => {
            writeln!(
                out,
                "{} historical points, {} forecast points after {}",
                chart.history_len(),
                chart.forecast_len(),
                format_date(chart.boundary.as_deref())
            )?;
            out.push_str(&forecast_table(&chart)?);
        }
    }
    Ok(())
}

fn metadata_section(out: &mut String, detail: &MetricDetail) -> Result<()> {
    writeln!(out, "{}", heading("Metadata"))?;
    match metadata_rows(detail.metadata.as_ref()) {
        Some(rows) => out.push_str(&table(
            &["Key", "Value"],
            rows.into_iter().map(|(key, value)| vec![key, value]),
        )?),
        None => writeln!(out, "{}", NO_METADATA)?,
    }
    Ok(())
}

/// Metric detail page; every pane renders from its own state.
pub fn metric_detail(
    detail: &FetchState<Rc<MetricDetail>>,
    series: &FetchState<Rc<Vec<MetricDataPoint>>>,
    forecast: &FetchState<Rc<Vec<MetricForecastPoint>>>,
) -> Result<String> {
    let mut out = String::new();

    match detail {
        FetchState::Success(detail) => {
            writeln!(
                out,
                "{} {}",
                heading(&detail.overview.name),
                tag_badge(detail.overview.tag, detail.overview.tag.as_str())
            )?;
            writeln!(out, "{}", subtitle(detail))?;
            writeln!(out)?;
            detail_cards(&mut out, detail)?;
        }
        FetchState::Error(error) => {
            writeln!(out, "{}", heading("Metric detail"))?;
            writeln!(out, "{}", error_pane(error))?;
        }
        FetchState::NotStarted | FetchState::Loading => {
            writeln!(out, "{}", heading("Metric detail"))?;
            writeln!(out, "Loading metric")?;
        }
    }

    writeln!(out)?;
    series_section(&mut out, series)?;
    writeln!(out)?;
    forecast_section(&mut out, series, forecast)?;

    if let Some(detail) = detail.data() {
        writeln!(out)?;
        metadata_section(&mut out, detail)?;
    }
    Ok(out)
}

fn report_card(report: &ReportSummary) -> String {
    format!(
        "{}  {}\n  {}\n  id: {}",
        report_title(report).bold(),
        generated_label(report),
        count_badges(&report.tag_counts),
        report.report_id
    )
}

pub fn reports(view: &ReportsView<'_>) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", heading("Reports"))?;
    writeln!(out, "Operational and oversight reports")?;
    writeln!(out)?;

    match view {
        ReportsView::Loading => writeln!(out, "Loading reports")?,
        ReportsView::Error(error) => writeln!(out, "{}", error_pane(error))?,
        ReportsView::Empty => writeln!(out, "{}", EMPTY_REPORTS_MESSAGE)?,
        ReportsView::Loaded(reports) => {
            for report in reports.iter() {
                writeln!(out, "{}", report_card(report))?;
                writeln!(out)?;
            }
        }
    }
    Ok(out)
}

pub fn report_detail(report: &ReportDetail) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", report_card(&report.summary))?;

    for (title, items) in report.highlights.sections() {
        writeln!(out)?;
        writeln!(out, "{}", heading(title))?;
        for line in section_lines(items) {
            writeln!(out, "  - {}", line)?;
        }
    }

    if let Some(notes) = report_notes(report) {
        writeln!(out)?;
        writeln!(out, "{}", heading("Notes"))?;
        writeln!(out, "{}", notes)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::mock::{
        generate_forecast, generate_series, get_mock_metric_detail, get_mock_metrics,
        get_mock_report_detail, get_mock_reports,
    };
    use common::PaginatedResponse;

    fn plain() {
        colored::control::set_override(false);
    }

    fn success<T>(value: T) -> FetchState<Rc<T>> {
        FetchState::Success(Rc::new(value))
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            url: "http://api.test/api/v1/metrics/x".to_string(),
            status: 404,
        }
    }

    #[test]
    fn test_dashboard_lists_counts_preview_and_table() {
        plain();
        let state = success(PaginatedResponse::new(get_mock_metrics()));
        let text = dashboard(&DashboardView::from_state(&state), &MetricsQuery::default()).unwrap();

        assert!(text.contains("Total metrics: 12"));
        assert!(text.contains("[RED: 3] [GREEN: 5] [WHITE: 2] [BLACK: 2]"));
        assert!(text.contains("Filters: All Categories | All statuses"));
        // six preview cards, one table row per metric
        assert_eq!(text.matches("  updated ").count(), 6);
        assert!(text.contains("Underlying cash balance"));
    }

    #[test]
    fn test_dashboard_empty_and_error() {
        plain();
        let empty = success(PaginatedResponse::new(Vec::new()));
        let text = dashboard(&DashboardView::from_state(&empty), &MetricsQuery::default()).unwrap();
        assert!(text.contains(EMPTY_METRICS_MESSAGE));

        let failed = FetchState::Error(not_found());
        let text = dashboard(&DashboardView::from_state(&failed), &MetricsQuery::default()).unwrap();
        assert!(text.contains("Unable to load data."));
        assert!(!text.contains("Total metrics"));
    }

    #[test]
    fn test_dashboard_notes_truncated_list() {
        plain();
        let mut page = PaginatedResponse::new(get_mock_metrics());
        page.total = 40;
        let state = success(page);
        let text = dashboard(&DashboardView::from_state(&state), &MetricsQuery::default()).unwrap();
        assert!(text.contains("Showing 12 of 40 metrics."));
    }

    #[test]
    fn test_metric_detail_all_panes() {
        plain();
        let detail = success(get_mock_metric_detail("cpi-headline").unwrap());
        let series = success(generate_series("cpi-headline").unwrap());
        let forecast = success(generate_forecast("cpi-headline").unwrap());

        let text = metric_detail(&detail, &series, &forecast).unwrap();
        assert!(text.contains("Headline CPI"));
        assert!(text.contains("economy · Commonwealth · cpi-headline"));
        assert!(text.contains("150 points from"));
        assert!(text.contains("120 historical points, 12 forecast points"));
        assert!(text.contains("Mock analytics feed"));
    }

    #[test]
    fn test_metric_detail_panes_fail_independently() {
        plain();
        let detail = success(get_mock_metric_detail("gdp-growth").unwrap());
        let series = FetchState::Error(not_found());
        let forecast = success(generate_forecast("gdp-growth").unwrap());

        let text = metric_detail(&detail, &series, &forecast).unwrap();
        assert!(text.contains("Real GDP growth"));
        assert!(text.contains("Unable to load data."));
        assert!(text.contains("Forecast is shown once the historical series is available."));
    }

    #[test]
    fn test_reports_render_four_badges_each() {
        plain();
        let state = success(PaginatedResponse::new(get_mock_reports()));
        let text = reports(&ReportsView::from_state(&state)).unwrap();

        assert!(text.contains("Quarterly report"));
        assert!(text.contains("[RED: 2] [GREEN: 3] [WHITE: 0] [BLACK: 1]"));
        assert_eq!(text.matches("[WHITE: ").count(), 3);
    }

    #[test]
    fn test_reports_empty() {
        plain();
        let state = success(PaginatedResponse::<ReportSummary>::new(Vec::new()));
        let text = reports(&ReportsView::from_state(&state)).unwrap();
        assert!(text.contains(EMPTY_REPORTS_MESSAGE));
    }

    #[test]
    fn test_report_detail_sections_and_notes() {
        plain();
        let report = get_mock_report_detail("quarterly-2024-q2").unwrap();
        let text = report_detail(&report).unwrap();

        assert!(text.contains("Top risks"));
        assert!(text.contains("  - Headline CPI"));
        assert!(text.contains("Worsening"));
        assert!(text.contains("Figures for June are preliminary."));
    }
}
