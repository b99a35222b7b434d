use chrono::{DateTime, Utc};
use shared::models::{ChatEntry, MessageRole};
use shared::text::message_html;
use yew::{AttrValue, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct ChatMessageProps {
    pub entry: ChatEntry,
}

pub const fn role_classes(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "bg-primary text-primary-content",
        MessageRole::Assistant => "bg-base-200 text-base-content",
        MessageRole::System => "bg-base-300 text-base-content/80 italic",
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

#[function_component(ChatMessage)]
pub fn chat_message(props: &ChatMessageProps) -> Html {
    let entry = &props.entry;
    // Body is escaped by message_html before it reaches the DOM.
    let body = Html::from_html_unchecked(AttrValue::from(message_html(&entry.text)));
    let bubble = classes!(
        "msg",
        "rounded-xl",
        "px-4",
        "py-2",
        "shadow-sm",
        "break-words",
        role_classes(entry.role)
    );

    html! {
        <div class="mb-3 space-y-1">
            <div class="flex items-center gap-2 text-xs text-base-content/70">
                <span class="who font-semibold">{ entry.role.to_string() }</span>
                <span>{ format_timestamp(&entry.created_at) }</span>
            </div>
            <div class={bubble}>{ body }</div>
        </div>
    }
}
