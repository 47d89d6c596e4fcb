use client::views::reports::{generated_label, report_notes, report_title, section_lines};
use common::ReportDetail;
use std::rc::Rc;
use yew::prelude::*;

use crate::common::fetch_render::FetchRender;
use crate::components::layout::page_header::{Crumb, PageHeader};
use crate::components::metrics::tag_badge::TagBadge;
use crate::hooks::use_report_detail;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub report_id: String,
}

#[function_component(ReportDetailPage)]
pub fn report_detail_page(props: &Props) -> Html {
    let report = use_report_detail(props.report_id.clone());

    html! {
        <>
            <PageHeader
                title="Report"
                breadcrumbs={vec![
                    Crumb::link("Dashboard", Route::Dashboard),
                    Crumb::link("Reports", Route::Reports),
                    Crumb::text(props.report_id.clone()),
                ]}
            />
            <FetchRender<ReportDetail>
                state={report.state.clone()}
                render={Callback::from(|report: Rc<ReportDetail>| render_report(&report))}
                on_retry={report.refetch.clone()}
                loading_text="Loading report"
            />
        </>
    }
}

fn render_report(report: &ReportDetail) -> Html {
    let summary = &report.summary;

    html! {
        <div class="flex flex-col gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{report_title(summary)}</h2>
                    <span class="text-sm text-gray-500">{generated_label(summary)}</span>
                    <div class="flex flex-wrap gap-2 mt-2">
                        { for summary.tag_counts.iter().map(|(tag, count)| html! {
                            <TagBadge {tag} label={AttrValue::from(format!("{}: {}", tag, count))} />
                        })}
                    </div>
                </div>
            </div>
            <div class="grid gap-4 md:grid-cols-3">
                { for report.highlights.sections().into_iter().map(|(heading, items)| html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body p-4">
                            <h3 class="font-semibold">{heading}</h3>
                            <ul class="list-disc list-inside text-sm">
                                { for section_lines(items).into_iter().map(|line| html! { <li>{line}</li> }) }
                            </ul>
                        </div>
                    </div>
                })}
            </div>
            if let Some(notes) = report_notes(report) {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="font-semibold">{"Notes"}</h3>
                        <p class="text-sm whitespace-pre-line">{notes.to_string()}</p>
                    </div>
                </div>
            }
        </div>
    }
}
