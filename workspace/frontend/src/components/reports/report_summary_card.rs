use client::views::reports::{generated_label, report_title};
use common::ReportSummary;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::metrics::tag_badge::TagBadge;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub report: ReportSummary,
}

/// Report title, generation date and one badge per traffic tag.
#[function_component(ReportSummaryCard)]
pub fn report_summary_card(props: &Props) -> Html {
    let report = &props.report;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body p-4">
                <div class="flex justify-between items-start gap-2">
                    <div>
                        <h3 class="card-title text-lg">{report_title(report)}</h3>
                        <span class="text-sm text-gray-500">{generated_label(report)}</span>
                    </div>
                    <Link<Route>
                        to={Route::ReportDetail { report_id: report.report_id.clone() }}
                        classes="btn btn-ghost btn-sm"
                    >
                        {"View"}
                    </Link<Route>>
                </div>
                <div class="flex flex-wrap gap-2 mt-3">
                    { for report.tag_counts.iter().map(|(tag, count)| html! {
                        <TagBadge {tag} label={AttrValue::from(format!("{}: {}", tag, count))} />
                    })}
                </div>
            </div>
        </div>
    }
}
