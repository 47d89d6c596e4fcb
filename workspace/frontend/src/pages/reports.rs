use client::views::reports::{ReportsView, EMPTY_REPORTS_MESSAGE};
use yew::prelude::*;

use crate::common::empty::EmptyState;
use crate::common::error::ErrorState;
use crate::common::loading::LoadingState;
use crate::components::layout::page_header::{Crumb, PageHeader};
use crate::components::reports::report_list::ReportList;
use crate::hooks::use_reports;
use crate::router::Route;

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let reports = use_reports();

    let body = match ReportsView::from_state(&reports.state) {
        ReportsView::Loading => html! { <LoadingState label="Loading reports" /> },
        ReportsView::Error(_) => html! { <ErrorState on_retry={reports.refetch.clone()} /> },
        ReportsView::Empty => html! { <EmptyState message={EMPTY_REPORTS_MESSAGE} /> },
        ReportsView::Loaded(items) => html! { <ReportList reports={items.to_vec()} /> },
    };

    html! {
        <>
            <PageHeader
                title="Reports"
                subtitle="Operational and oversight reports"
                breadcrumbs={vec![Crumb::link("Dashboard", Route::Dashboard), Crumb::text("Reports")]}
            />
            { body }
        </>
    }
}
