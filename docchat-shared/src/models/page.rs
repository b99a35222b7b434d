//! Pages and the pages listing response.

use serde::{Deserialize, Serialize};

use super::errors::{ApiError, Resource};
use super::null_as_default;

/// Shown in place of a page title the backend left empty.
pub const UNTITLED_PAGE: &str = "(untitled)";

/// Hierarchical document node within a space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Page {
    /// Backend identifier of the page.
    pub id: String,
    /// Page title, may be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Short slug used in page URLs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug_id: String,
    /// Owning space.
    #[serde(default, deserialize_with = "null_as_default")]
    pub space_id: String,
    /// Parent page, absent for top-level pages.
    #[serde(default)]
    pub parent_page_id: Option<String>,
    /// ISO-8601 timestamp of the last edit, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Page {
    /// Title to render, falling back to [`UNTITLED_PAGE`].
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_PAGE
        } else {
            &self.title
        }
    }

    /// Parent id, with empty strings treated as absent.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_page_id
            .as_deref()
            .filter(|parent| !parent.is_empty())
    }
}

/// Response schema for the pages-of-a-space endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PagesResponse {
    /// Whether the backend served the listing.
    #[serde(default)]
    pub ok: bool,
    /// The pages, absent on failure.
    #[serde(default)]
    pub pages: Option<Vec<Page>>,
    /// Backend error code, when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PagesResponse {
    /// Unwraps the listing, treating `ok: false` as a failure.
    ///
    /// # Errors
    /// Returns [`ApiError::NotOk`] when the backend reports failure.
    pub fn into_pages(self) -> Result<Vec<Page>, ApiError> {
        if !self.ok {
            return Err(ApiError::NotOk {
                resource: Resource::Pages,
            });
        }
        Ok(self.pages.unwrap_or_default())
    }
}
