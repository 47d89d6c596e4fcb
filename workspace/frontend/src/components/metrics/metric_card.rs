use common::{format_date, format_number, MetricOverview};
use yew::prelude::*;

use super::tag_badge::TagBadge;
use super::trend_chip::TrendChip;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metric: MetricOverview,
    #[prop_or_default]
    pub on_click: Option<Callback<String>>,
    #[prop_or_default]
    pub on_hover: Option<Callback<String>>,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &Props) -> Html {
    let metric = &props.metric;

    let onclick = props.on_click.clone().map(|on_click| {
        let metric_id = metric.metric_id.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(metric_id.clone()))
    });
    let onmouseenter = props.on_hover.clone().map(|on_hover| {
        let metric_id = metric.metric_id.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(metric_id.clone()))
    });
    let cursor = if onclick.is_some() { "cursor-pointer" } else { "cursor-default" };

    html! {
        <div
            class={classes!("card", "bg-base-100", "shadow", "hover:shadow-lg", "transition-shadow", cursor)}
            aria-label={format!("Metric {}", metric.name)}
            {onclick}
            {onmouseenter}
        >
            <div class="card-body p-4">
                <div class="flex justify-between items-start gap-2">
                    <div>
                        <h3 class="font-semibold">{&metric.name}</h3>
                        <span class="text-xs text-gray-500">
                            {format!("{} · {}", metric.category, metric.jurisdiction)}
                        </span>
                    </div>
                    <TagBadge tag={metric.tag} />
                </div>
                <div class="flex justify-between items-center mt-3">
                    <span class="text-3xl font-bold">{format_number(metric.latest_value, &metric.unit)}</span>
                    <TrendChip trend={metric.trend} />
                </div>
                <p class="text-sm text-gray-500 mt-1">
                    {format!("Updated {}", format_date(metric.last_updated.as_deref()))}
                </p>
            </div>
        </div>
    }
}
