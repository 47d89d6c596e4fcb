use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    #[prop_or(AttrValue::Static("No data available."))]
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="alert alert-info">
            <i class="fas fa-info-circle"></i>
            <span>{&props.message}</span>
        </div>
    }
}
