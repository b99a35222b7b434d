use web_sys::HtmlTextAreaElement;
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct ChatComposerProps {
    pub text: String,
    pub on_text_change: Callback<String>,
    pub on_submit: Callback<()>,
    /// Disables sending; the textarea stays editable.
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub placeholder: String,
}

#[function_component(ChatComposer)]
pub fn chat_composer(props: &ChatComposerProps) -> Html {
    let on_input = {
        let on_text_change = props.on_text_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            on_text_change.emit(target.value());
        })
    };

    // Enter sends, Shift+Enter inserts a newline.
    let on_keydown = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: yew::events::KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                on_submit.emit(());
            }
        })
    };

    let on_form_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: yew::events::SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="flex items-end gap-2" onsubmit={on_form_submit}>
            <textarea
                id="msg"
                class={classes!("textarea", "textarea-bordered", "flex-1", "min-h-[4rem]")}
                placeholder={props.placeholder.clone()}
                value={props.text.clone()}
                oninput={on_input}
                onkeydown={on_keydown}
            />
            <button
                id="sendBtn"
                class="btn btn-primary"
                type="submit"
                disabled={props.disabled}
            >
                {"Send"}
            </button>
        </form>
    }
}
