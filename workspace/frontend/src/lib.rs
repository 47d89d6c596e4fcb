use client::mock::MockTransport;
use client::{QueryClient, Settings, Transport};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

mod common;
mod components;
mod pages;
pub mod hooks;
pub mod router;
pub mod settings;
pub mod transport;

use router::{switch, Route};
use transport::GlooTransport;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub settings: Rc<Settings>,
}

/// Picks the transport the settings ask for.
fn make_transport(settings: &Settings) -> Rc<dyn Transport> {
    if settings.enable_mock {
        log::info!("Mock mode enabled, serving data from the in-process API");
        Rc::new(MockTransport::new())
    } else {
        Rc::new(GlooTransport)
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let query_client = {
        let settings = props.settings.clone();
        use_state(move || {
            let transport = make_transport(&settings);
            QueryClient::new(settings, transport)
        })
    };

    html! {
        <ContextProvider<QueryClient> context={(*query_client).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<QueryClient>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    let settings = settings::load_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Prophet Labs Console Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: '{}'", settings.api_base_url);
    if settings.error_reporting_enabled() {
        log::info!("Error reporting enabled for {}", settings.environment_label());
    }

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::with_props(AppProps {
        settings: Rc::new(settings),
    })
    .render();
    log::info!("Application initialized successfully");
}
