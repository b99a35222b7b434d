//! Chat request, response, and panel entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::Display;
use uuid::Uuid;

use super::page::Page;
use super::space::Space;

/// Author of a line in the chat panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum MessageRole {
    /// Typed by the user.
    User,
    /// Reply from the chat backend.
    Assistant,
    /// Status notices and errors raised by the client.
    System,
}

/// A selected page as sent to the chat backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionEntry {
    /// Space the page belongs to.
    pub space_id: String,
    /// Selected page id.
    pub page_id: String,
    /// Page title as loaded, possibly empty.
    pub title: String,
    /// Page slug.
    pub slug_id: String,
}

impl From<&Page> for SelectionEntry {
    fn from(page: &Page) -> Self {
        Self {
            space_id: page.space_id.clone(),
            page_id: page.id.clone(),
            title: page.title.clone(),
            slug_id: page.slug_id.clone(),
        }
    }
}

/// Request schema for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// Current space, `null` when none is chosen.
    pub space: Option<Space>,
    /// Checked pages in selection order.
    pub selected_pages: Vec<SelectionEntry>,
    /// Trimmed message text.
    pub message: String,
}

/// Clipboard payload produced by the copy action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionExport {
    /// Current space.
    pub space: Option<Space>,
    /// Checked pages in selection order.
    pub selected_pages: Vec<SelectionEntry>,
}

impl SelectionExport {
    /// Two-space indented JSON, the format written to the clipboard.
    ///
    /// # Errors
    /// Propagates serialization failures from `serde_json`.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Response schema for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatResponse {
    /// Whether the backend handled the message.
    #[serde(default)]
    pub ok: bool,
    /// Assistant text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    /// Request echo returned by placeholder backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub echo: Option<Value>,
    /// Backend error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    /// The assistant's reply, or the whole response as JSON when there is none.
    #[must_use]
    pub fn reply_text(&self) -> String {
        match &self.reply {
            Some(reply) => reply.clone(),
            None => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

/// One rendered line of the chat panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    /// Render key.
    pub id: Uuid,
    /// Who produced the line.
    pub role: MessageRole,
    /// Raw text; escaped at render time.
    pub text: String,
    /// When the line was added.
    pub created_at: DateTime<Utc>,
}

impl ChatEntry {
    /// Timestamped entry with a fresh id.
    #[must_use]
    pub fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}
