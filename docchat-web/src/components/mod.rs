pub(crate) mod chat_composer;
pub(crate) mod chat_log;
pub(crate) mod chat_message;
pub(crate) mod loading;
pub(crate) mod page_tree;
pub(crate) mod reply_indicator;
pub(crate) mod selection_toolbar;
pub(crate) mod space_list;

#[cfg(all(test, target_arch = "wasm32"))]
mod page_tree_test;

// Re-export components for convenience
pub use chat_composer::ChatComposer;
pub use chat_log::ChatLog;
pub use page_tree::PageTree;
pub use reply_indicator::ReplyIndicator;
pub use selection_toolbar::SelectionToolbar;
pub use space_list::SpaceList;
