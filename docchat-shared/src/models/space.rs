//! Spaces and the spaces listing response.

use serde::{Deserialize, Serialize};

use super::errors::{ApiError, Resource};
use super::null_as_default;

/// Shown in place of a space name the backend left empty.
pub const UNNAMED_SPACE: &str = "(unnamed)";

/// Top-level document container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Space {
    /// Backend identifier of the space.
    pub id: String,
    /// Human readable name, may be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// URL slug, may be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

impl Space {
    /// Name to render, falling back to [`UNNAMED_SPACE`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNNAMED_SPACE
        } else {
            &self.name
        }
    }
}

/// Response schema for the spaces listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SpacesResponse {
    /// Whether the backend served the listing.
    #[serde(default)]
    pub ok: bool,
    /// The spaces, absent on failure.
    #[serde(default)]
    pub spaces: Option<Vec<Space>>,
    /// Backend error code, when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SpacesResponse {
    /// Unwraps the listing, treating `ok: false` as a failure.
    ///
    /// # Errors
    /// Returns [`ApiError::NotOk`] when the backend reports failure.
    pub fn into_spaces(self) -> Result<Vec<Space>, ApiError> {
        if !self.ok {
            return Err(ApiError::NotOk {
                resource: Resource::Spaces,
            });
        }
        Ok(self.spaces.unwrap_or_default())
    }
}
