use common::{
    display_or_dash, EvaluationMetrics, Metadata, MetricDataPoint, MetricDetail,
    MetricForecastPoint,
};
use std::rc::Rc;

use super::PaneView;
use crate::query::FetchState;

/// Number of most recent historical points drawn next to the forecast.
pub const HISTORY_WINDOW: usize = 120;

pub const NO_EXPLANATION: &str = "No explanation provided.";
pub const NO_METADATA: &str = "No metadata available.";

/// The last `HISTORY_WINDOW` points of `series`, or all of them when shorter.
pub fn history_window(series: &[MetricDataPoint]) -> &[MetricDataPoint] {
    &series[series.len().saturating_sub(HISTORY_WINDOW)..]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    History,
    Forecast,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub ds: String,
    pub value: f64,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub kind: PointKind,
}

/// One dataset holding the recent history followed by the forecast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastChartData {
    pub points: Vec<ChartPoint>,
    /// Timestamp of the last historical point, where the forecast begins
    pub boundary: Option<String>,
}

impl ForecastChartData {
    pub fn combine(series: &[MetricDataPoint], forecast: &[MetricForecastPoint]) -> Self {
        let history = history_window(series);
        let mut points = Vec::with_capacity(history.len() + forecast.len());

        points.extend(history.iter().map(|point| ChartPoint {
            ds: point.ds.clone(),
            value: point.value,
            lower: None,
            upper: None,
            kind: PointKind::History,
        }));
        points.extend(forecast.iter().map(|point| ChartPoint {
            ds: point.ds.clone(),
            value: point.forecast,
            lower: point.lower,
            upper: point.upper,
            kind: PointKind::Forecast,
        }));

        Self {
            points,
            boundary: history.last().map(|point| point.ds.clone()),
        }
    }

    pub fn history(&self) -> impl Iterator<Item = &ChartPoint> {
        self.points
            .iter()
            .filter(|point| point.kind == PointKind::History)
    }

    pub fn forecast(&self) -> impl Iterator<Item = &ChartPoint> {
        self.points
            .iter()
            .filter(|point| point.kind == PointKind::Forecast)
    }

    pub fn history_len(&self) -> usize {
        self.history().count()
    }

    pub fn forecast_len(&self) -> usize {
        self.forecast().count()
    }
}

/// Historical series pane. An empty series draws nothing.
pub fn series_pane(state: &FetchState<Rc<Vec<MetricDataPoint>>>) -> PaneView<'_, &[MetricDataPoint]> {
    match state {
        FetchState::NotStarted => PaneView::Hidden,
        FetchState::Loading => PaneView::Loading,
        FetchState::Error(err) => PaneView::Error(err),
        FetchState::Success(series) if series.is_empty() => PaneView::Hidden,
        FetchState::Success(series) => PaneView::Ready(series.as_slice()),
    }
}

/// Forecast pane. The chart needs both results, so a loaded forecast stays
/// hidden until the series has arrived too; the series' own failure is shown
/// in the series pane.
pub fn forecast_pane<'a>(
    series: &'a FetchState<Rc<Vec<MetricDataPoint>>>,
    forecast: &'a FetchState<Rc<Vec<MetricForecastPoint>>>,
) -> PaneView<'a, ForecastChartData> {
    match (forecast, series) {
        (FetchState::NotStarted, _) => PaneView::Hidden,
        (FetchState::Loading, _) => PaneView::Loading,
        (FetchState::Error(err), _) => PaneView::Error(err),
        (FetchState::Success(forecast), FetchState::Success(series)) => {
            PaneView::Ready(ForecastChartData::combine(series, forecast))
        }
        (FetchState::Success(_), _) => PaneView::Hidden,
    }
}

/// "category · jurisdiction · id" line under the page title.
pub fn subtitle(detail: &MetricDetail) -> String {
    let overview = &detail.overview;
    format!(
        "{} · {} · {}",
        overview.category, overview.jurisdiction, overview.metric_id
    )
}

pub fn tag_explanation(detail: &MetricDetail) -> &str {
    detail
        .tag_explanation
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_EXPLANATION)
}

/// MAE, RMSE and MAPE as raw values, em-dash when absent.
pub fn evaluation_rows(evaluation: Option<&EvaluationMetrics>) -> [(&'static str, String); 3] {
    let evaluation = evaluation.copied().unwrap_or_default();
    [
        ("MAE", display_or_dash(evaluation.mae)),
        ("RMSE", display_or_dash(evaluation.rmse)),
        ("MAPE", display_or_dash(evaluation.mape)),
    ]
}

/// Metadata as key/value text rows; `None` when there is nothing to show.
///
/// Strings are shown without quotes, everything else as compact JSON.
pub fn metadata_rows(metadata: Option<&Metadata>) -> Option<Vec<(String, String)>> {
    let metadata = metadata.filter(|metadata| !metadata.is_empty())?;
    Some(
        metadata
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(text) => text.clone(),
                    serde_json::Value::Null => "null".to_string(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::mock::{generate_forecast, generate_series, get_mock_metric_detail};

    fn series_of(len: usize) -> Vec<MetricDataPoint> {
        (0..len)
            .map(|i| MetricDataPoint {
                ds: format!("point-{}", i),
                value: i as f64,
                metadata: None,
            })
            .collect()
    }

    fn forecast_of(len: usize) -> Vec<MetricForecastPoint> {
        (0..len)
            .map(|i| MetricForecastPoint {
                ds: format!("forecast-{}", i),
                forecast: i as f64,
                lower: None,
                upper: None,
            })
            .collect()
    }

    #[test]
    fn test_short_series_is_used_whole() {
        let chart = ForecastChartData::combine(&series_of(40), &forecast_of(6));

        assert_eq!(chart.history_len(), 40);
        assert_eq!(chart.forecast_len(), 6);
        assert_eq!(chart.points[0].ds, "point-0");
        assert_eq!(chart.boundary.as_deref(), Some("point-39"));
    }

    #[test]
    fn test_long_series_keeps_most_recent_window() {
        let chart = ForecastChartData::combine(&series_of(200), &forecast_of(12));

        assert_eq!(chart.history_len(), HISTORY_WINDOW);
        assert_eq!(chart.points[0].ds, "point-80");
        assert_eq!(chart.points[HISTORY_WINDOW - 1].ds, "point-199");
        assert_eq!(chart.points[HISTORY_WINDOW].kind, PointKind::Forecast);
        assert_eq!(chart.points.len(), HISTORY_WINDOW + 12);
    }

    #[test]
    fn test_exact_window_and_empty_history() {
        assert_eq!(history_window(&series_of(120)).len(), 120);
        assert_eq!(history_window(&series_of(121))[0].ds, "point-1");

        let chart = ForecastChartData::combine(&[], &forecast_of(3));
        assert_eq!(chart.history_len(), 0);
        assert_eq!(chart.boundary, None);
    }

    #[test]
    fn test_forecast_pane_waits_for_series() {
        let forecast = FetchState::Success(Rc::new(generate_forecast("cpi-headline").unwrap()));
        let loading: FetchState<Rc<Vec<MetricDataPoint>>> = FetchState::Loading;
        assert_eq!(forecast_pane(&loading, &forecast), PaneView::Hidden);

        let series = FetchState::Success(Rc::new(generate_series("cpi-headline").unwrap()));
        match forecast_pane(&series, &forecast) {
            PaneView::Ready(chart) => {
                assert_eq!(chart.history_len(), HISTORY_WINDOW);
                assert_eq!(chart.forecast_len(), 12);
            }
            other => panic!("expected chart, got {:?}", other),
        }
    }

    #[test]
    fn test_panes_fail_independently() {
        let error = ApiError::Status {
            url: "http://localhost:8000/api/v1/metrics/cpi-headline/forecast".to_string(),
            status: 502,
        };
        let series = FetchState::Success(Rc::new(series_of(3)));
        let forecast = FetchState::Error(error.clone());

        assert!(series_pane(&series).is_ready());
        assert_eq!(forecast_pane(&series, &forecast), PaneView::Error(&error));
    }

    #[test]
    fn test_series_pane_states() {
        assert_eq!(series_pane(&FetchState::NotStarted), PaneView::Hidden);
        assert_eq!(series_pane(&FetchState::Loading), PaneView::Loading);
        assert_eq!(
            series_pane(&FetchState::Success(Rc::new(Vec::new()))),
            PaneView::Hidden
        );
    }

    #[test]
    fn test_detail_text_helpers() {
        let mut detail = get_mock_metric_detail("defence-readiness").unwrap();
        assert_eq!(subtitle(&detail), "defence · Commonwealth · defence-readiness");
        assert_eq!(tag_explanation(&detail), NO_EXPLANATION);

        detail.tag_explanation = Some("Holding steady".to_string());
        assert_eq!(tag_explanation(&detail), "Holding steady");

        detail.evaluation = Some(EvaluationMetrics {
            mae: Some(0.4),
            rmse: None,
            mape: Some(12.0),
        });
        let rows = evaluation_rows(detail.evaluation.as_ref());
        assert_eq!(rows[0], ("MAE", "0.4".to_string()));
        assert_eq!(rows[1], ("RMSE", "—".to_string()));
        assert_eq!(rows[2], ("MAPE", "12".to_string()));
        assert!(evaluation_rows(None).iter().all(|(_, value)| value == "—"));
    }

    #[test]
    fn test_metadata_rows() {
        let mut metadata = Metadata::new();
        metadata.insert("source".to_string(), serde_json::json!("ABS"));
        metadata.insert("revisions".to_string(), serde_json::json!(3));
        metadata.insert("seasonal".to_string(), serde_json::json!(true));

        let rows = metadata_rows(Some(&metadata)).unwrap();
        assert_eq!(
            rows,
            vec![
                ("revisions".to_string(), "3".to_string()),
                ("seasonal".to_string(), "true".to_string()),
                ("source".to_string(), "ABS".to_string()),
            ]
        );

        assert_eq!(metadata_rows(None), None);
        assert_eq!(metadata_rows(Some(&Metadata::new())), None);
    }
}
