use crate::components::chat_message::ChatMessage;
use crate::models::app_state::AppState;
use web_sys::Element;
use yew::{Html, function_component, html, use_effect_with, use_node_ref};
use yewdux::prelude::use_selector;

/// Scrollable list of chat entries, pinned to the newest one.
#[function_component(ChatLog)]
pub fn chat_log() -> Html {
    let chat = use_selector(|state: &AppState| state.chat.clone());
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with(chat.len(), move |_| {
            if let Some(element) = container.cast::<Element>() {
                element.set_scroll_top(element.scroll_height());
            }
            || ()
        });
    }

    html! {
        <div ref={container} class="chat flex-1 overflow-y-auto p-4">
            {
                if chat.is_empty() {
                    html! {
                        <div class="text-sm text-base-content/70">
                            {"Pick a space, select pages, and ask a question."}
                        </div>
                    }
                } else {
                    html! {
                        { for chat.iter().cloned().map(|entry| {
                            let key = entry.id.to_string();
                            html! { <ChatMessage key={key} {entry} /> }
                        }) }
                    }
                }
            }
        </div>
    }
}
