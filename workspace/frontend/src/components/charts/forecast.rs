use client::views::metric_detail::ForecastChartData;
use plotly::common::{DashType, Fill, Line, Mode};
use plotly::Scatter;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::{base_layout, render_plot, PRIMARY, SECONDARY};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub chart_id: AttrValue,
    pub data: ForecastChartData,
}

/// Recent history and forecast in one chart, with the forecast interval
/// shaded and a marker where the forecast begins.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.data.clone(), props.chart_id.clone()),
        move |(container_ref, data, chart_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(chart_id);

                let (history_x, history_y): (Vec<String>, Vec<Option<f64>>) =
                    data.history().map(|p| (p.ds.clone(), Some(p.value))).unzip();

                // the forecast line starts at the last observed point
                let (forecast_x, forecast_y): (Vec<String>, Vec<Option<f64>>) = data
                    .history()
                    .last()
                    .into_iter()
                    .chain(data.forecast())
                    .map(|p| (p.ds.clone(), Some(p.value)))
                    .unzip();

                let band_x: Vec<String> = data.forecast().map(|p| p.ds.clone()).collect();
                let upper: Vec<Option<f64>> = data.forecast().map(|p| p.upper).collect();
                let lower: Vec<Option<f64>> = data.forecast().map(|p| p.lower).collect();

                let traces = vec![
                    Scatter::new(band_x.clone(), upper)
                        .mode(Mode::Lines)
                        .name("Upper bound")
                        .show_legend(false)
                        .line(Line::new().width(0.0)),
                    Scatter::new(band_x, lower)
                        .mode(Mode::Lines)
                        .name("Interval")
                        .fill(Fill::ToNextY)
                        .fill_color("rgba(31,111,235,0.15)")
                        .line(Line::new().width(0.0)),
                    Scatter::new(history_x, history_y)
                        .mode(Mode::Lines)
                        .name("Historical")
                        .line(Line::new().color(PRIMARY).width(2.0)),
                    Scatter::new(forecast_x, forecast_y)
                        .mode(Mode::Lines)
                        .name("Forecast")
                        .line(Line::new().color(SECONDARY).width(2.0).dash(DashType::Dash)),
                ];

                let mut layout = base_layout(340);
                if let Some(boundary) = &data.boundary {
                    layout["shapes"] = serde_json::json!([{
                        "type": "line",
                        "x0": boundary,
                        "x1": boundary,
                        "y0": 0,
                        "y1": 1,
                        "xref": "x",
                        "yref": "paper",
                        "line": {"color": "rgba(0,0,0,0.2)", "width": 1, "dash": "dot"}
                    }]);
                }

                render_plot(chart_id, &traces, &layout);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} class="chart-container" style="width:100%; height:340px;"></div>
    }
}
