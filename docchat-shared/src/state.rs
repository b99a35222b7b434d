//! Workspace state: current space, its page tree, and the selection.

use crate::models::{ChatRequest, Page, SelectionExport, Space};
use crate::selection::Selection;
use crate::tree::PageTree;

/// Which actions the UI currently allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// Send button and composer.
    pub can_send: bool,
    /// Copy selection button.
    pub can_copy: bool,
    /// Clear selection button.
    pub can_clear: bool,
    /// Number shown next to the selection buttons.
    pub selected_count: usize,
}

/// The current space, its page tree, and the checked pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceState {
    /// Space being browsed.
    pub current_space: Option<Space>,
    /// Pages of the current space; empty until they load.
    pub tree: PageTree,
    /// Checked pages of the current space.
    pub selection: Selection,
}

impl WorkspaceState {
    /// Switches to `space`, dropping the previous space's tree and selection.
    pub fn set_space(&mut self, space: Space) {
        tracing::debug!(space_id = %space.id, "space selected");
        self.current_space = Some(space);
        self.tree = PageTree::default();
        self.clear_selection();
    }

    /// Replaces the tree with one built from `pages`.
    pub fn load_pages(&mut self, pages: Vec<Page>) {
        self.tree = PageTree::build(pages);
    }

    /// Unchecks every page.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Id of the current space, if any.
    #[must_use]
    pub fn space_id(&self) -> Option<&str> {
        self.current_space.as_ref().map(|space| space.id.as_str())
    }

    /// Checks or unchecks a page of the current tree. Unknown ids are ignored.
    pub fn set_page_selected(&mut self, page_id: &str, checked: bool) {
        if let Some(node) = self.tree.get(page_id) {
            self.selection.set(&node.page, checked);
        }
    }

    /// Enablement of the chat and selection controls.
    #[must_use]
    pub fn controls(&self) -> Controls {
        let has_space = self.current_space.is_some();
        let has_selection = !self.selection.is_empty();
        Controls {
            can_send: has_space,
            can_copy: has_space && has_selection,
            can_clear: has_space && has_selection,
            selected_count: self.selection.len(),
        }
    }

    /// Builds the chat payload for `message` with the current selection.
    #[must_use]
    pub fn chat_request(&self, message: impl Into<String>) -> ChatRequest {
        ChatRequest {
            space: self.current_space.clone(),
            selected_pages: self.selection.entries().to_vec(),
            message: message.into(),
        }
    }

    /// Clipboard payload for the current selection.
    #[must_use]
    pub fn selection_export(&self) -> SelectionExport {
        SelectionExport {
            space: self.current_space.clone(),
            selected_pages: self.selection.entries().to_vec(),
        }
    }
}
