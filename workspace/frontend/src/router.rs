use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::pages::dashboard::DashboardPage;
use crate::pages::metric_detail::MetricDetailPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::report_detail::ReportDetailPage;
use crate::pages::reports::ReportsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/metrics/:metric_id")]
    MetricDetail { metric_id: String },
    #[at("/reports")]
    Reports,
    #[at("/reports/:report_id")]
    ReportDetail { report_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    let page = match routes {
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <DashboardPage /> }
        }
        Route::MetricDetail { metric_id } => {
            log::trace!("Rendering Metric detail page for {}", metric_id);
            // keyed so that switching metrics remounts the charts
            let key = metric_id.clone();
            html! { <MetricDetailPage {key} {metric_id} /> }
        }
        Route::Reports => {
            log::trace!("Rendering Reports page");
            html! { <ReportsPage /> }
        }
        Route::ReportDetail { report_id } => {
            log::trace!("Rendering Report detail page for {}", report_id);
            html! { <ReportDetailPage {report_id} /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFoundPage /> }
        }
    };

    html! { <Layout>{page}</Layout> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Dashboard.to_path(), "/");
        assert_eq!(
            Route::MetricDetail { metric_id: "gdp-growth".to_string() }.to_path(),
            "/metrics/gdp-growth"
        );
        assert_eq!(Route::Reports.to_path(), "/reports");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(
            Route::recognize("/metrics/cpi-headline"),
            Some(Route::MetricDetail { metric_id: "cpi-headline".to_string() })
        );
        assert_eq!(
            Route::recognize("/reports/weekly-2024-06-28"),
            Some(Route::ReportDetail { report_id: "weekly-2024-06-28".to_string() })
        );
        assert_eq!(Route::recognize("/nowhere/at/all"), Some(Route::NotFound));
    }
}
