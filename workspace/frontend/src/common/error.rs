use yew::prelude::*;

pub const DEFAULT_ERROR_MESSAGE: &str = "Unable to load data.";

#[derive(Properties, PartialEq)]
pub struct ErrorStateProps {
    #[prop_or(AttrValue::Static(DEFAULT_ERROR_MESSAGE))]
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Generic failure pane. Error kinds are not distinguished here; the
/// underlying error is logged where it happened.
#[function_component(ErrorState)]
pub fn error_state(props: &ErrorStateProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-8 gap-4" role="alert">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <span>{&props.message}</span>
            </div>
            if let Some(on_retry) = props.on_retry.clone() {
                <button
                    class="btn btn-outline btn-sm"
                    onclick={Callback::from(move |_| {
                        log::debug!("User clicked retry button");
                        on_retry.emit(());
                    })}
                >
                    <i class="fas fa-redo"></i>
                    {" Retry"}
                </button>
            }
        </div>
    }
}
