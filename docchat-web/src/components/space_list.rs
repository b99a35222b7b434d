use crate::actions;
use crate::components::loading::Loading;
use crate::models::app_state::AppState;
use yew::{Callback, Html, MouseEvent, classes, function_component, html};
use yewdux::prelude::{use_dispatch, use_selector};

#[function_component(SpaceList)]
pub fn space_list() -> Html {
    let dispatch = use_dispatch::<AppState>();
    let spaces = use_selector(|state: &AppState| state.spaces.clone());
    let current = use_selector(|state: &AppState| state.workspace.space_id().map(str::to_string));
    let loading = use_selector(|state: &AppState| state.loading_spaces);

    if *loading {
        return html! { <Loading label="Loading spaces" /> };
    }
    if spaces.is_empty() {
        return html! {
            <div class="p-4 text-sm text-base-content/70">{"No spaces available."}</div>
        };
    }

    html! {
        <ul id="spaces" class="divide-y divide-base-300">
            { for spaces.iter().map(|space| {
                let is_current = current.as_deref() == Some(space.id.as_str());
                let class = if is_current {
                    classes!("space", "p-3", "bg-base-300", "cursor-pointer")
                } else {
                    classes!("space", "p-3", "hover:bg-base-200", "cursor-pointer")
                };
                let onclick = {
                    let dispatch = dispatch.clone();
                    let space = space.clone();
                    Callback::from(move |_: MouseEvent| actions::select_space(dispatch.clone(), space.clone()))
                };
                html! {
                    <li key={space.id.clone()} {class} {onclick}>
                        <div class="name text-sm font-medium text-base-content">
                            { space.display_name().to_string() }
                        </div>
                        <div class="id text-xs text-base-content/50 mt-1 truncate">
                            { space.id.clone() }
                        </div>
                    </li>
                }
            }) }
        </ul>
    }
}
