use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingStateProps {
    #[prop_or(AttrValue::Static("Loading data..."))]
    pub label: AttrValue,
}

#[function_component(LoadingState)]
pub fn loading_state(props: &LoadingStateProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4" aria-busy="true">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <p class="text-sm text-gray-500">{&props.label}</p>
        </div>
    }
}
