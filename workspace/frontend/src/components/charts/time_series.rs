use common::MetricDataPoint;
use plotly::common::{Line, Mode};
use plotly::Scatter;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::{base_layout, render_plot, PRIMARY};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub chart_id: AttrValue,
    pub points: Vec<MetricDataPoint>,
    #[prop_or(AttrValue::Static(PRIMARY))]
    pub color: AttrValue,
}

#[function_component(TimeSeriesChart)]
pub fn time_series_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.points.clone(), props.chart_id.clone(), props.color.clone()),
        move |(container_ref, points, chart_id, color)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(chart_id);

                let dates: Vec<String> = points.iter().map(|p| p.ds.clone()).collect();
                let values: Vec<f64> = points.iter().map(|p| p.value).collect();

                let trace = Scatter::new(dates, values)
                    .mode(Mode::Lines)
                    .name("Value")
                    .line(Line::new().color(color.to_string()).width(2.0));

                render_plot(chart_id, &[trace], &base_layout(320));
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} class="chart-container" style="width:100%; height:320px;"></div>
    }
}
