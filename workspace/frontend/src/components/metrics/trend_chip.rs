use common::Trend;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub trend: Trend,
}

#[function_component(TrendChip)]
pub fn trend_chip(props: &Props) -> Html {
    let (icon, class) = match props.trend {
        Trend::Rising => ("fas fa-arrow-up", "badge-success"),
        Trend::Falling => ("fas fa-arrow-down", "badge-error"),
        Trend::Stable => ("fas fa-minus", "badge-ghost badge-outline"),
        Trend::Unknown => ("fas fa-question", "badge-ghost badge-outline"),
    };

    html! {
        <span class={classes!("badge", "badge-sm", "gap-1", class)}>
            <i class={icon}></i>
            {props.trend.label()}
        </span>
    }
}
