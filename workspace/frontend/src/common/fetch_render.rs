use client::FetchState;
use std::rc::Rc;
use yew::prelude::*;

use super::error::ErrorState;
use super::loading::LoadingState;

#[derive(Properties)]
pub struct FetchRenderProps<T: PartialEq + 'static> {
    pub state: FetchState<Rc<T>>,
    pub render: Callback<Rc<T>, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub loading_text: Option<AttrValue>,
}

impl<T: PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.loading_text == other.loading_text
    }
}

/// Component that handles rendering based on FetchState
/// - NotStarted: renders nothing
/// - Loading: shows loading state
/// - Error: shows the generic error pane with optional retry
/// - Success: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => match &props.loading_text {
            Some(text) => html! { <LoadingState label={text.clone()} /> },
            None => html! { <LoadingState /> },
        },
        FetchState::Error(_) => html! { <ErrorState on_retry={props.on_retry.clone()} /> },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}
