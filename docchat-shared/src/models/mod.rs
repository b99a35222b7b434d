//! Wire types exchanged with the `DocChat` backend.

pub mod chat;
pub mod errors;
pub mod page;
pub mod space;

pub use chat::{
    ChatEntry, ChatRequest, ChatResponse, MessageRole, SelectionEntry, SelectionExport,
};
pub use errors::{ApiError, Resource, check_chat_response};
pub use page::{Page, PagesResponse, UNTITLED_PAGE};
pub use space::{Space, SpacesResponse, UNNAMED_SPACE};

use serde::{Deserialize, Deserializer};

/// Reads an optional field, mapping an explicit `null` to the default.
/// Pair with `#[serde(default)]` so a missing field is accepted too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
