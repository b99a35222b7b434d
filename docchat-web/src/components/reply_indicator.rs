use crate::models::app_state::AppState;
use yew::{Html, function_component, html};
use yewdux::prelude::use_selector;

/// Shown under the chat log while a chat request is in flight.
#[function_component(ReplyIndicator)]
pub fn reply_indicator() -> Html {
    let sending = use_selector(|state: &AppState| state.sending);
    if !*sending {
        return Html::default();
    }

    html! {
        <div class="text-xs text-base-content/70 animate-pulse py-2">
            {"Waiting for reply…"}
        </div>
    }
}
