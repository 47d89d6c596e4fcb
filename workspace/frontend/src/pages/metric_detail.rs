use client::views::metric_detail::{
    evaluation_rows, forecast_pane, metadata_rows, series_pane, subtitle, tag_explanation,
    NO_METADATA,
};
use client::views::PaneView;
use common::{format_date, format_number, MetricDetail};
use std::rc::Rc;
use yew::prelude::*;

use crate::common::empty::EmptyState;
use crate::common::error::ErrorState;
use crate::common::fetch_render::FetchRender;
use crate::common::loading::LoadingState;
use crate::components::charts::forecast::ForecastChart;
use crate::components::charts::time_series::TimeSeriesChart;
use crate::components::layout::page_header::{Crumb, PageHeader};
use crate::components::metrics::tag_badge::{BadgeSize, TagBadge};
use crate::components::metrics::trend_chip::TrendChip;
use crate::hooks::{use_metric_detail, use_metric_forecast, use_metric_series};
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metric_id: String,
}

/// Detail, history and forecast are fetched independently; each pane shows
/// its own loading and error state.
#[function_component(MetricDetailPage)]
pub fn metric_detail_page(props: &Props) -> Html {
    let detail = use_metric_detail(props.metric_id.clone());
    let series = use_metric_series(props.metric_id.clone());
    let forecast = use_metric_forecast(props.metric_id.clone());

    let loaded = detail.state.data();
    let title = loaded
        .map(|detail| detail.overview.name.clone())
        .unwrap_or_else(|| "Metric detail".to_string());
    let header_subtitle = loaded.map(|detail| AttrValue::from(subtitle(detail)));
    let actions = match loaded {
        Some(detail) => html! { <TagBadge tag={detail.overview.tag} size={BadgeSize::Medium} /> },
        None => html! {},
    };

    let series_body = match series_pane(&series.state) {
        PaneView::Loading => html! { <LoadingState label="Loading history" /> },
        PaneView::Error(_) => html! { <ErrorState on_retry={series.refetch.clone()} /> },
        PaneView::Hidden => html! { <EmptyState message="No historical data available." /> },
        PaneView::Ready(points) => html! {
            <TimeSeriesChart
                chart_id={format!("series-chart-{}", props.metric_id)}
                points={points.to_vec()}
            />
        },
    };

    let forecast_body = match forecast_pane(&series.state, &forecast.state) {
        PaneView::Loading => html! { <LoadingState label="Loading forecast" /> },
        PaneView::Error(_) => html! { <ErrorState on_retry={forecast.refetch.clone()} /> },
        PaneView::Hidden => html! {},
        PaneView::Ready(data) => html! {
            <ForecastChart chart_id={format!("forecast-chart-{}", props.metric_id)} {data} />
        },
    };

    html! {
        <>
            <PageHeader
                {title}
                subtitle={header_subtitle}
                breadcrumbs={vec![Crumb::link("Dashboard", Route::Dashboard), Crumb::text("Metric detail")]}
                {actions}
            />
            <FetchRender<MetricDetail>
                state={detail.state.clone()}
                render={Callback::from(|detail: Rc<MetricDetail>| summary_cards(&detail))}
                on_retry={detail.refetch.clone()}
                loading_text="Loading metric"
            />
            <div class="grid gap-6 lg:grid-cols-2 my-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Historical series"}</h2>
                        { series_body }
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Forecast"}</h2>
                        { forecast_body }
                    </div>
                </div>
            </div>
            if let Some(detail) = loaded {
                { metadata_card(detail) }
            }
        </>
    }
}

fn summary_cards(detail: &MetricDetail) -> Html {
    let overview = &detail.overview;

    html! {
        <div class="grid gap-4 md:grid-cols-2 xl:grid-cols-4">
            <div class="card bg-base-100 shadow">
                <div class="card-body p-4">
                    <span class="text-sm text-gray-500">{"Latest value"}</span>
                    <span class="text-2xl font-bold">{format_number(overview.latest_value, &overview.unit)}</span>
                    <span class="text-xs text-gray-500">
                        {format!("As of {}", format_date(overview.last_updated.as_deref()))}
                    </span>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body p-4">
                    <span class="text-sm text-gray-500">{"Trend"}</span>
                    <TrendChip trend={overview.trend} />
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body p-4">
                    <span class="text-sm text-gray-500">{"Evaluation"}</span>
                    { for evaluation_rows(detail.evaluation.as_ref()).into_iter().map(|(label, value)| html! {
                        <div class="flex justify-between text-sm">
                            <span>{label}</span>
                            <span class="font-mono">{value}</span>
                        </div>
                    })}
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body p-4">
                    <span class="text-sm text-gray-500">{"Tag explanation"}</span>
                    <p class="text-sm">{tag_explanation(detail)}</p>
                </div>
            </div>
        </div>
    }
}

fn metadata_card(detail: &MetricDetail) -> Html {
    let body = match metadata_rows(detail.metadata.as_ref()) {
        Some(rows) => html! {
            <table class="table table-sm">
                <tbody>
                    { for rows.into_iter().map(|(key, value)| html! {
                        <tr>
                            <th class="w-1/3">{key}</th>
                            <td class="font-mono">{value}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        },
        None => html! { <p class="text-sm text-gray-500">{NO_METADATA}</p> },
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Metadata"}</h2>
                { body }
            </div>
        </div>
    }
}
