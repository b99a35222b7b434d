use crate::components::loading::Loading;
use crate::models::app_state::AppState;
use shared::text::{INTERACTIVE_SELECTOR, is_interactive_tag};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use yew::{
    AttrValue, Callback, Event, Html, MouseEvent, Properties, TargetCast, classes,
    function_component, html, use_state,
};
use yewdux::prelude::{use_dispatch, use_selector, use_selector_with_deps};

const EXPANDED_GLYPH: &str = "-";
const COLLAPSED_GLYPH: &str = "+";
const LEAF_GLYPH: &str = "•";

/// Glyph shown in the toggle column of a tree row.
pub fn toggle_glyph(has_children: bool, expanded: bool) -> &'static str {
    match (has_children, expanded) {
        (false, _) => LEAF_GLYPH,
        (true, true) => EXPANDED_GLYPH,
        (true, false) => COLLAPSED_GLYPH,
    }
}

/// Whether a click landed on, or inside, an element that handles it itself.
fn is_interactive_target(event: &MouseEvent) -> bool {
    let Some(element) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return false;
    };
    is_interactive_tag(&element.tag_name())
        || element.closest(INTERACTIVE_SELECTOR).ok().flatten().is_some()
}

#[derive(Properties, PartialEq)]
pub struct TreeNodeProps {
    pub page_id: AttrValue,
}

#[function_component(TreeNode)]
pub fn tree_node(props: &TreeNodeProps) -> Html {
    let dispatch = use_dispatch::<AppState>();
    let node = use_selector_with_deps(
        |state: &AppState, id: &AttrValue| state.workspace.tree.get(id).cloned(),
        props.page_id.clone(),
    );
    let checked = use_selector_with_deps(
        |state: &AppState, id: &AttrValue| state.workspace.selection.contains(id),
        props.page_id.clone(),
    );
    let expanded = use_state(|| false);

    let Some(node) = (*node).clone() else {
        return Html::default();
    };
    let has_children = !node.children.is_empty();

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            if has_children {
                expanded.set(!*expanded);
            }
        })
    };

    let on_row_click = {
        let expanded = expanded.clone();
        Callback::from(move |event: MouseEvent| {
            if !has_children || is_interactive_target(&event) {
                return;
            }
            expanded.set(!*expanded);
        })
    };

    let on_check = {
        let page_id = props.page_id.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let is_checked = input.checked();
            dispatch.reduce_mut(|state| state.set_page_selected(&page_id, is_checked));
        })
    };

    let title = node.page.display_title().to_string();
    let toggle_class = classes!(
        "toggle-glyph",
        "w-4",
        "text-center",
        "select-none",
        has_children.then_some("cursor-pointer"),
        (!has_children).then_some("disabled"),
        (!has_children).then_some("text-base-content/40")
    );
    let children_class = classes!("children", "pl-5", (!*expanded).then_some("hidden"));

    html! {
        <div>
            <div
                class="node flex items-center gap-2 px-2 py-1 rounded hover:bg-base-200 cursor-pointer"
                onclick={on_row_click}
            >
                <div
                    class={toggle_class}
                    data-expanded={if *expanded { "1" } else { "0" }}
                    onclick={on_toggle}
                >
                    { toggle_glyph(has_children, *expanded) }
                </div>
                <input
                    type="checkbox"
                    class="checkbox checkbox-sm"
                    checked={*checked}
                    onchange={on_check}
                />
                <div class="label min-w-0 flex-1">
                    <div class="t truncate text-sm" title={title.clone()}>{ title }</div>
                </div>
            </div>
            <div class={children_class}>
                { for node.children.iter().map(|child| {
                    let key = child.clone();
                    let page_id: AttrValue = child.clone().into();
                    html! { <TreeNode key={key} {page_id} /> }
                }) }
            </div>
        </div>
    }
}

#[function_component(PageTree)]
pub fn page_tree() -> Html {
    let roots = use_selector(|state: &AppState| state.workspace.tree.roots().to_vec());
    let has_space = use_selector(|state: &AppState| state.workspace.current_space.is_some());
    let loading = use_selector(|state: &AppState| state.loading_pages);

    if !*has_space {
        return html! {
            <div class="p-4 text-sm text-base-content/70">
                {"Select a space to browse its pages."}
            </div>
        };
    }
    if *loading {
        return html! { <Loading label="Loading pages" /> };
    }
    if roots.is_empty() {
        return html! {
            <div class="p-4 text-sm text-base-content/70">{"No pages in this space."}</div>
        };
    }

    html! {
        <div class="tree">
            { for roots.iter().map(|id| {
                let key = id.clone();
                let page_id: AttrValue = id.clone().into();
                html! { <TreeNode key={key} {page_id} /> }
            }) }
        </div>
    }
}
