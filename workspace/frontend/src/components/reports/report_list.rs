use common::ReportSummary;
use yew::prelude::*;

use super::report_summary_card::ReportSummaryCard;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub reports: Vec<ReportSummary>,
}

#[function_component(ReportList)]
pub fn report_list(props: &Props) -> Html {
    html! {
        <div class="grid gap-4 md:grid-cols-2">
            { for props.reports.iter().map(|report| html! {
                <ReportSummaryCard key={report.report_id.clone()} report={report.clone()} />
            })}
        </div>
    }
}
