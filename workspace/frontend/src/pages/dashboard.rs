use client::views::dashboard::{DashboardSummary, DashboardView, EMPTY_METRICS_MESSAGE};
use client::MetricsQuery;
use common::{MetricOverview, TrafficTag, CATEGORY_LABELS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::empty::EmptyState;
use crate::common::error::ErrorState;
use crate::common::loading::LoadingState;
use crate::components::layout::page_header::PageHeader;
use crate::components::metrics::metric_card::MetricCard;
use crate::components::metrics::metric_table::MetricTable;
use crate::components::metrics::tag_badge::TagBadge;
use crate::hooks::{prefetch_metric, use_metrics_overview, use_query_client};
use crate::router::Route;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let filters = use_state(MetricsQuery::default);
    let overview = use_metrics_overview((*filters).clone());
    let client = use_query_client();
    let navigator = use_navigator().expect("Navigator not found");

    let on_category = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let value = select.value();
                log::debug!("Category filter changed to '{}'", value);
                filters.set((*filters).clone().with_category(Some(&value)));
            }
        })
    };

    let on_status = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let status = select.value().parse::<TrafficTag>().ok();
                log::debug!("Status filter changed to {:?}", status);
                filters.set((*filters).clone().with_status(status));
            }
        })
    };

    let on_search = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                log::trace!("Search changed to '{}'", value);
                filters.set((*filters).clone().with_search(Some(&value)));
            }
        })
    };

    let on_open = Callback::from(move |metric_id: String| {
        log::debug!("Opening metric {}", metric_id);
        navigator.push(&Route::MetricDetail { metric_id });
    });

    let on_hover = Callback::from(move |metric_id: String| prefetch_metric(&client, &metric_id));

    let body = match DashboardView::from_state(&overview.state) {
        DashboardView::Loading => html! { <LoadingState label="Loading metrics" /> },
        DashboardView::Error(_) => html! { <ErrorState on_retry={overview.refetch.clone()} /> },
        DashboardView::Empty => html! { <EmptyState message={EMPTY_METRICS_MESSAGE} /> },
        DashboardView::Loaded { summary, preview, metrics, truncated_total } => html! {
            <>
                { summary_cards(&summary) }
                if let Some(total) = truncated_total {
                    <div class="alert alert-warning mb-4">
                        <i class="fas fa-info-circle"></i>
                        <span>
                            {format!("Showing {} of {} metrics. Tag counts cover the metrics shown.", metrics.len(), total)}
                        </span>
                    </div>
                }
                <div class="grid gap-4 md:grid-cols-2 xl:grid-cols-3 mb-6">
                    { for preview.iter().map(|metric| preview_card(metric, &on_open, &on_hover)) }
                </div>
                <MetricTable metrics={metrics.to_vec()} />
            </>
        },
    };

    html! {
        <>
            <PageHeader
                title="Dashboard"
                subtitle="Latest metric values, traffic tags and trends"
            />
            <div class="flex flex-wrap gap-3 mb-6">
                <select class="select select-bordered select-sm" aria-label="Category" onchange={on_category}>
                    <option value="" selected={filters.category.is_none()}>{"All categories"}</option>
                    { for CATEGORY_LABELS.iter().map(|(key, label)| html! {
                        <option value={*key} selected={filters.category.as_deref() == Some(*key)}>{*label}</option>
                    })}
                </select>
                <select class="select select-bordered select-sm" aria-label="Status" onchange={on_status}>
                    <option value="" selected={filters.status.is_none()}>{"All statuses"}</option>
                    { for TrafficTag::ALL.iter().map(|tag| html! {
                        <option value={tag.as_str()} selected={filters.status == Some(*tag)}>{tag.as_str()}</option>
                    })}
                </select>
                <input
                    type="search"
                    class="input input-bordered input-sm w-64"
                    placeholder="Search metrics"
                    value={filters.search.clone().unwrap_or_default()}
                    oninput={on_search}
                />
            </div>
            { body }
        </>
    }
}

fn summary_cards(summary: &DashboardSummary) -> Html {
    html! {
        <div class="stats stats-vertical md:stats-horizontal shadow w-full mb-6 bg-base-100">
            <div class="stat">
                <div class="stat-title">{"Total metrics"}</div>
                <div class="stat-value">{summary.total}</div>
            </div>
            { for TrafficTag::ALL.iter().map(|tag| html! {
                <div class="stat">
                    <div class="stat-title"><TagBadge tag={*tag} /></div>
                    <div class="stat-value">{summary.count(*tag)}</div>
                </div>
            })}
        </div>
    }
}

fn preview_card(
    metric: &MetricOverview,
    on_open: &Callback<String>,
    on_hover: &Callback<String>,
) -> Html {
    html! {
        <MetricCard
            key={metric.metric_id.clone()}
            metric={metric.clone()}
            on_click={on_open.clone()}
            on_hover={on_hover.clone()}
        />
    }
}
