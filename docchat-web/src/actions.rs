//! User-triggered flows. Each one runs to completion on the browser event loop
//! and turns failures into system chat messages.

use crate::api::DocChatClient;
use crate::models::app_state::AppState;
use shared::models::{MessageRole, Space};
use shared::text::normalize_message;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use yewdux::Dispatch;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Message posted after the selection has been copied.
pub const COPIED_MESSAGE: &str = "Copied selection JSON to clipboard.";

/// Load the space list into the store.
pub fn load_spaces(dispatch: Dispatch<AppState>) {
    dispatch.reduce_mut(|state| state.loading_spaces = true);
    spawn_local(async move {
        let client = DocChatClient::shared();
        match client.fetch_spaces().await {
            Ok(spaces) => {
                log(&format!("Loaded {} spaces", spaces.len()));
                dispatch.reduce_mut(|state| state.spaces_loaded(spaces));
            }
            Err(err) => {
                log(&format!("Failed to load spaces: {err}"));
                dispatch.reduce_mut(|state| state.request_failed(&err));
            }
        }
    });
}

/// Switch to `space` and load its page tree.
pub fn select_space(dispatch: Dispatch<AppState>, space: Space) {
    let space_id = space.id.clone();
    dispatch.reduce_mut(|state| state.select_space(space));
    spawn_local(async move {
        let client = DocChatClient::shared();
        match client.fetch_pages(&space_id).await {
            Ok(pages) => {
                let count = pages.len();
                dispatch.reduce_mut(|state| {
                    if !state.pages_loaded(&space_id, pages) {
                        log(&format!("Dropped {count} pages for inactive space {space_id}"));
                    }
                });
            }
            Err(err) => {
                log(&format!("Failed to load pages of {space_id}: {err}"));
                dispatch.reduce_mut(|state| state.pages_failed(&space_id, &err));
            }
        }
    });
}

/// Send the composer text with the current selection. Blank input, or no
/// space, is a no-op; the return value says whether the message was sent.
pub fn send_message(dispatch: Dispatch<AppState>, text: &str) -> bool {
    let Some(message) = normalize_message(text) else {
        return false;
    };
    let current = dispatch.get();
    if current.workspace.current_space.is_none() {
        return false;
    }
    let request = current.workspace.chat_request(message.clone());

    dispatch.reduce_mut(|state| {
        state.push_chat(MessageRole::User, message);
        state.sending = true;
    });

    spawn_local(async move {
        let client = DocChatClient::shared();
        let result = client.post_chat(&request).await;
        dispatch.reduce_mut(|state| match result {
            Ok(response) => {
                state.sending = false;
                state.push_chat(MessageRole::Assistant, response.reply_text());
            }
            Err(err) => state.request_failed(&err),
        });
    });
    true
}

/// Copy the selection as pretty JSON to the clipboard.
pub fn copy_selection(dispatch: Dispatch<AppState>) {
    let export = dispatch.get().workspace.selection_export();
    spawn_local(async move {
        let outcome = match export.to_pretty_json() {
            Ok(json) => write_clipboard(&json).await,
            Err(err) => Err(err.to_string()),
        };
        let message = match outcome {
            Ok(()) => COPIED_MESSAGE.to_string(),
            Err(err) => format!("Copy failed: {err}"),
        };
        dispatch.reduce_mut(|state| state.push_chat(MessageRole::System, message));
    });
}

async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
