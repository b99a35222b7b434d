use shared::WorkspaceState;
use shared::models::{ApiError, ChatEntry, MessageRole, Page, Resource, Space};
use yewdux::Store;

#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub workspace: WorkspaceState,
    pub spaces: Vec<Space>,
    pub chat: Vec<ChatEntry>,
    pub loading_spaces: bool,
    pub loading_pages: bool,
    pub sending: bool,
}

impl AppState {
    pub fn push_chat(&mut self, role: MessageRole, text: impl Into<String>) {
        self.chat.push(ChatEntry::new(role, text));
    }

    pub fn spaces_loaded(&mut self, spaces: Vec<Space>) {
        self.spaces = spaces;
        self.loading_spaces = false;
    }

    /// Switches space: resets selection and tree, clears the chat, and
    /// announces the switch.
    pub fn select_space(&mut self, space: Space) {
        let announcement = format!("Space selected: {} ({})", space.display_name(), space.id);
        self.workspace.set_space(space);
        self.chat.clear();
        self.push_chat(MessageRole::System, announcement);
        self.loading_pages = true;
    }

    /// Installs the pages of `space_id`. Returns `false`, leaving state
    /// untouched, when the user has since moved to another space.
    pub fn pages_loaded(&mut self, space_id: &str, pages: Vec<Page>) -> bool {
        if self.workspace.space_id() != Some(space_id) {
            return false;
        }
        self.workspace.load_pages(pages);
        self.loading_pages = false;
        true
    }

    /// Reports a failed pages load for `space_id` unless it is stale.
    pub fn pages_failed(&mut self, space_id: &str, err: &ApiError) {
        if self.workspace.space_id() != Some(space_id) {
            return;
        }
        self.request_failed(err);
    }

    /// Ends the busy state of the failed request and posts the error.
    pub fn request_failed(&mut self, err: &ApiError) {
        match err.resource() {
            Resource::Spaces => self.loading_spaces = false,
            Resource::Pages => self.loading_pages = false,
            Resource::Chat => self.sending = false,
        }
        self.push_chat(MessageRole::System, err.to_string());
    }

    pub fn set_page_selected(&mut self, page_id: &str, checked: bool) {
        self.workspace.set_page_selected(page_id, checked);
    }

    pub fn clear_selection(&mut self) {
        self.workspace.clear_selection();
    }

    pub fn space_title(&self) -> Option<&str> {
        self.workspace
            .current_space
            .as_ref()
            .map(Space::display_name)
    }
}
