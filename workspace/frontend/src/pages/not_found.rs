use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::page_header::{Crumb, PageHeader};
use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <>
            <PageHeader
                title="Page not found"
                breadcrumbs={vec![Crumb::link("Dashboard", Route::Dashboard), Crumb::text("Not found")]}
            />
            <div class="card bg-base-100 shadow max-w-xl">
                <div class="card-body items-start">
                    <p>{"The page you are looking for does not exist or has been moved."}</p>
                    <Link<Route> to={Route::Dashboard} classes="btn btn-primary btn-sm mt-2">
                        {"Return to dashboard"}
                    </Link<Route>>
                </div>
            </div>
        </>
    }
}
