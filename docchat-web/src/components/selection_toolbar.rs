use crate::actions;
use crate::models::app_state::AppState;
use yew::{Callback, Html, MouseEvent, function_component, html};
use yewdux::prelude::{use_dispatch, use_selector};

/// Selected-page count with the copy and clear actions.
#[function_component(SelectionToolbar)]
pub fn selection_toolbar() -> Html {
    let dispatch = use_dispatch::<AppState>();
    let controls = use_selector(|state: &AppState| state.workspace.controls());

    let on_copy = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| actions::copy_selection(dispatch.clone()))
    };
    let on_clear = Callback::from(move |_: MouseEvent| dispatch.reduce_mut(AppState::clear_selection));

    html! {
        <div class="flex items-center gap-2 p-2 border-b border-base-300">
            <span class="text-sm text-base-content/70">
                {"Selected: "}<span id="selectedCount" class="font-semibold">{ controls.selected_count }</span>
            </span>
            <div class="flex-1"></div>
            <button
                id="copyBtn"
                class="btn btn-sm btn-ghost"
                type="button"
                disabled={!controls.can_copy}
                onclick={on_copy}
            >
                {"Copy selection"}
            </button>
            <button
                id="clearBtn"
                class="btn btn-sm btn-ghost"
                type="button"
                disabled={!controls.can_clear}
                onclick={on_clear}
            >
                {"Clear"}
            </button>
        </div>
    }
}
