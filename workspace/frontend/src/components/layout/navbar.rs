use yew::prelude::*;

use crate::hooks::use_query_client;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let client = use_query_client();
    let settings = client.settings();

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="nav-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4 flex flex-col items-start">
                <span class="text-lg font-bold">{"Prophet Labs"}</span>
                <span class="text-xs text-gray-500">{"Australian Government Analytics Console"}</span>
            </div>
            <div class="flex-none gap-2">
                if settings.enable_mock {
                    <span class="badge badge-warning badge-outline">{"MOCK DATA"}</span>
                }
                <span class="badge badge-primary badge-outline">{settings.environment_label()}</span>
            </div>
        </div>
    }
}
