//! Browser tests for the page tree
//!
//! Mounts the tree against the global store and drives it with DOM clicks:
//! row clicks expand a branch, checkbox clicks select without expanding.

use std::time::Duration;

use shared::models::{Page, Space};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use yew::platform::time::sleep;
use yewdux::Dispatch;

use crate::components::page_tree::PageTree;
use crate::models::app_state::AppState;

wasm_bindgen_test_configure!(run_in_browser);

fn seed_store() -> Dispatch<AppState> {
    let mut state = AppState::default();
    state.select_space(Space {
        id: "s1".into(),
        name: "Team".into(),
        slug: String::new(),
    });
    state.pages_loaded(
        "s1",
        vec![
            Page {
                id: "guide".into(),
                title: "Guide".into(),
                space_id: "s1".into(),
                ..Default::default()
            },
            Page {
                id: "intro".into(),
                title: "Intro".into(),
                space_id: "s1".into(),
                parent_page_id: Some("guide".into()),
                ..Default::default()
            },
        ],
    );
    let dispatch = Dispatch::<AppState>::global();
    dispatch.set(state);
    dispatch
}

fn mount() -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document");
    let root = document.create_element("div").expect("root element");
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("attach root");
    yew::Renderer::<PageTree>::with_root(root.clone()).render();
    root
}

fn find(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

fn is_hidden(element: &Element) -> bool {
    element
        .class_name()
        .split_whitespace()
        .any(|class| class == "hidden")
}

async fn settle() {
    sleep(Duration::from_millis(20)).await;
}

/// Checkbox clicks select without expanding; row clicks expand
#[wasm_bindgen_test]
async fn test_checkbox_selects_and_row_expands() {
    let dispatch = seed_store();
    let root = mount();
    settle().await;

    assert!(is_hidden(&find(&root, ".children")));
    assert_eq!(find(&root, ".toggle-glyph").text_content().as_deref(), Some("+"));

    find(&root, "input[type=checkbox]").click();
    settle().await;
    assert!(dispatch.get().workspace.selection.contains("guide"));
    assert!(is_hidden(&find(&root, ".children")));

    find(&root, ".node .t").click();
    settle().await;
    assert!(!is_hidden(&find(&root, ".children")));
    assert_eq!(find(&root, ".toggle-glyph").text_content().as_deref(), Some("-"));
    assert_eq!(dispatch.get().workspace.selection.len(), 1);
}
