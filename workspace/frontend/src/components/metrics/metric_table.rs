use common::{format_date, format_number, MetricOverview};
use yew::prelude::*;
use yew_router::prelude::*;

use super::tag_badge::TagBadge;
use super::trend_chip::TrendChip;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metrics: Vec<MetricOverview>,
}

#[function_component(MetricTable)]
pub fn metric_table(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table class="table table-sm table-zebra" aria-label="metric table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Category"}</th>
                        <th>{"Latest value"}</th>
                        <th>{"Trend"}</th>
                        <th>{"Tag"}</th>
                        <th>{"Last updated"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.metrics.iter().map(|metric| html! {
                        <tr key={metric.metric_id.clone()} class="hover">
                            <td>
                                <Link<Route>
                                    to={Route::MetricDetail { metric_id: metric.metric_id.clone() }}
                                    classes="font-semibold hover:text-primary"
                                >
                                    {&metric.name}
                                </Link<Route>>
                                <div class="text-xs text-gray-500">{&metric.metric_id}</div>
                            </td>
                            <td>{&metric.category}</td>
                            <td>{format_number(metric.latest_value, &metric.unit)}</td>
                            <td><TrendChip trend={metric.trend} /></td>
                            <td><TagBadge tag={metric.tag} /></td>
                            <td>{format_date(metric.last_updated.as_deref())}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
