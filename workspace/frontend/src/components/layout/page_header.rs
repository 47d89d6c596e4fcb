use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

/// One breadcrumb; the last one is usually plain text.
#[derive(Clone, PartialEq)]
pub struct Crumb {
    pub label: AttrValue,
    pub route: Option<Route>,
}

impl Crumb {
    pub fn link(label: &'static str, route: Route) -> Self {
        Self {
            label: AttrValue::Static(label),
            route: Some(route),
        }
    }

    pub fn text(label: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            route: None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub breadcrumbs: Vec<Crumb>,
    #[prop_or_default]
    pub actions: Html,
}

#[function_component(PageHeader)]
pub fn page_header(props: &Props) -> Html {
    html! {
        <div class="mb-6">
            if !props.breadcrumbs.is_empty() {
                <div class="breadcrumbs text-sm" aria-label="breadcrumb">
                    <ul>
                        { for props.breadcrumbs.iter().map(|crumb| html! {
                            <li>
                                if let Some(route) = crumb.route.clone() {
                                    <Link<Route> to={route} classes="hover:text-primary">{&crumb.label}</Link<Route>>
                                } else {
                                    <span class="font-semibold">{&crumb.label}</span>
                                }
                            </li>
                        })}
                    </ul>
                </div>
            }
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold mb-1">{&props.title}</h1>
                    if let Some(subtitle) = &props.subtitle {
                        <p class="text-sm text-gray-500">{subtitle}</p>
                    }
                </div>
                { props.actions.clone() }
            </div>
        </div>
    }
}
