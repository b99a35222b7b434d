#![cfg_attr(not(test), forbid(unsafe_code))]
//! Target-independent core of the `DocChat` client: wire models, the page tree,
//! the selection store, and endpoint configuration.

pub mod config;
pub mod models;
pub mod selection;
pub mod state;
pub mod text;
pub mod tree;

pub use selection::Selection;
pub use state::{Controls, WorkspaceState};
pub use tree::{PageNode, PageTree};
