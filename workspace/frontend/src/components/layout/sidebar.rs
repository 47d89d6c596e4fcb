use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

struct NavItem {
    label: &'static str,
    icon: &'static str,
    route: Route,
    active_on: fn(&Route) -> bool,
}

const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "Dashboard",
        icon: "fas fa-th-large",
        route: Route::Dashboard,
        active_on: |route| matches!(route, Route::Dashboard),
    },
    NavItem {
        label: "Metrics",
        icon: "fas fa-chart-bar",
        route: Route::Dashboard,
        active_on: |route| matches!(route, Route::MetricDetail { .. }),
    },
    NavItem {
        label: "Reports",
        icon: "fas fa-file-alt",
        route: Route::Reports,
        active_on: |route| matches!(route, Route::Reports | Route::ReportDetail { .. }),
    },
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let current = use_route::<Route>();

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="nav-drawer"></label>
            <ul class="menu p-4 w-64 min-h-full text-white" style="background-color: #0B3D91;">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <i class="fas fa-landmark text-2xl"></i>
                        <span class="text-xl font-bold tracking-tight">{"Prophet Labs"}</span>
                    </div>
                </li>
                { for NAV_ITEMS.iter().map(|item| {
                    let active = current.as_ref().is_some_and(item.active_on);
                    html! {
                        <li>
                            <Link<Route> to={item.route.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                                <i class={classes!(item.icon, "w-5")}></i>
                                {" "}{item.label}
                            </Link<Route>>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
