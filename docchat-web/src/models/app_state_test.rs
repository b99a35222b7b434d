//! Tests for the application store
//!
//! Validates space switching, stale page loads, selection changes, and the
//! chat log entries the store produces.

use shared::models::{ApiError, MessageRole, Page, Resource, Space};

use crate::models::app_state::AppState;

fn space(id: &str, name: &str) -> Space {
    Space {
        id: id.to_string(),
        name: name.to_string(),
        slug: String::new(),
    }
}

fn pages(space_id: &str) -> Vec<Page> {
    vec![
        Page {
            id: "root".into(),
            title: "Handbook".into(),
            space_id: space_id.into(),
            ..Default::default()
        },
        Page {
            id: "child".into(),
            title: "Onboarding".into(),
            space_id: space_id.into(),
            parent_page_id: Some("root".into()),
            ..Default::default()
        },
    ]
}

/// Selecting a space replaces the chat log with a single announcement
#[test]
fn test_select_space_announces() {
    let mut state = AppState::default();
    state.push_chat(MessageRole::User, "old message");
    state.select_space(space("s1", "Team"));

    assert_eq!(state.chat.len(), 1);
    assert_eq!(state.chat[0].role, MessageRole::System);
    assert_eq!(state.chat[0].text, "Space selected: Team (s1)");
    assert!(state.loading_pages);
    assert_eq!(state.space_title(), Some("Team"));
}

/// An unnamed space is announced with the placeholder name
#[test]
fn test_select_unnamed_space() {
    let mut state = AppState::default();
    state.select_space(space("s9", ""));
    assert_eq!(state.chat[0].text, "Space selected: (unnamed) (s9)");
    assert_eq!(state.space_title(), Some("(unnamed)"));
}

/// Pages for the current space build the tree
#[test]
fn test_pages_loaded_for_current_space() {
    let mut state = AppState::default();
    state.select_space(space("s1", "Team"));
    assert!(state.pages_loaded("s1", pages("s1")));

    assert!(!state.loading_pages);
    assert_eq!(state.workspace.tree.roots(), ["root"]);
    assert_eq!(state.workspace.tree.children("root"), ["child"]);
}

/// Pages arriving after a space switch are dropped
#[test]
fn test_stale_pages_are_ignored() {
    let mut state = AppState::default();
    state.select_space(space("s1", "First"));
    state.select_space(space("s2", "Second"));

    assert!(!state.pages_loaded("s1", pages("s1")));
    assert!(state.workspace.tree.is_empty());
    assert!(state.loading_pages);
}

/// A failed load for the current space becomes a system message
#[test]
fn test_pages_failed_reports() {
    let mut state = AppState::default();
    state.select_space(space("s1", "Team"));
    let err = ApiError::NotOk {
        resource: Resource::Pages,
    };
    state.pages_failed("s1", &err);

    assert!(!state.loading_pages);
    assert_eq!(state.chat.last().map(|entry| entry.text.as_str()), Some("pages failed"));

    state.pages_failed("other", &err);
    assert_eq!(state.chat.len(), 2);
}

/// A failed request clears only its own busy flag
#[test]
fn test_request_failed_clears_busy_flag() {
    let mut state = AppState {
        loading_spaces: true,
        sending: true,
        ..Default::default()
    };
    state.request_failed(&ApiError::Status {
        resource: Resource::Chat,
        status: 502,
        body: "{}".to_string(),
    });
    assert!(!state.sending);
    assert!(state.loading_spaces);
    assert_eq!(
        state.chat.last().map(|entry| (entry.role, entry.text.as_str())),
        Some((MessageRole::System, "chat failed: 502 {}"))
    );

    state.request_failed(&ApiError::Network {
        resource: Resource::Spaces,
        message: "offline".to_string(),
    });
    assert!(!state.loading_spaces);
    assert_eq!(state.chat.len(), 2);
}

/// Switching space clears the previous selection
#[test]
fn test_selection_reset_on_space_change() {
    let mut state = AppState::default();
    state.select_space(space("s1", "Team"));
    state.pages_loaded("s1", pages("s1"));
    state.set_page_selected("child", true);
    assert_eq!(state.workspace.controls().selected_count, 1);

    state.select_space(space("s2", "Other"));
    assert_eq!(state.workspace.controls().selected_count, 0);
}

/// Clearing keeps the tree but empties the selection
#[test]
fn test_clear_selection_keeps_tree() {
    let mut state = AppState::default();
    state.select_space(space("s1", "Team"));
    state.pages_loaded("s1", pages("s1"));
    state.set_page_selected("root", true);
    state.set_page_selected("child", true);

    state.clear_selection();
    assert!(state.workspace.selection.is_empty());
    assert_eq!(state.workspace.tree.len(), 2);
}

/// Loading spaces stores them and ends the loading state
#[test]
fn test_spaces_loaded() {
    let mut state = AppState {
        loading_spaces: true,
        ..Default::default()
    };
    state.spaces_loaded(vec![space("a", "A"), space("b", "B")]);
    assert!(!state.loading_spaces);
    assert_eq!(state.spaces.len(), 2);
}
