//! # Configuration
//!
//! Endpoint layout and origin of the backend API the client talks to.

use std::str::FromStr;

use thiserror::Error;

/// Errors raised while resolving client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The layout name is neither `standard` nor `docmost`.
    #[error("unknown API layout `{0}`; expected `standard` or `docmost`")]
    UnknownLayout(String),
}

/// How the backend exposes the spaces and pages listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiLayout {
    /// `GET /api/spaces` and `GET /api/spaces/:id/pages`.
    #[default]
    Standard,
    /// `GET /docmost/api` and `GET /docmost/api/:id/pages`.
    Docmost,
}

impl ApiLayout {
    const fn spaces_path(self) -> &'static str {
        match self {
            Self::Standard => "/api/spaces",
            Self::Docmost => "/docmost/api",
        }
    }
}

impl FromStr for ApiLayout {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "docmost" => Ok(Self::Docmost),
            _ => Err(ConfigError::UnknownLayout(value.to_string())),
        }
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Path scheme of the listing endpoints.
    pub layout: ApiLayout,
    /// Scheme and host prefixed to every path; empty for same-origin requests.
    pub origin: String,
}

impl ClientConfig {
    /// Builds a configuration from optional raw values, defaulting missing ones.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownLayout`] for an unrecognised layout name.
    pub fn from_values(layout: Option<&str>, origin: Option<&str>) -> Result<Self, ConfigError> {
        let layout = match layout.filter(|value| !value.trim().is_empty()) {
            Some(value) => value.parse()?,
            None => ApiLayout::default(),
        };
        Ok(Self {
            layout,
            origin: origin.unwrap_or_default().trim_end_matches('/').to_string(),
        })
    }

    /// Spaces listing.
    #[must_use]
    pub fn spaces_url(&self) -> String {
        format!("{}{}", self.origin, self.layout.spaces_path())
    }

    /// Pages listing for `space_id`, with the id encoded as one path segment.
    #[must_use]
    pub fn pages_url(&self, space_id: &str) -> String {
        format!(
            "{}{}/{}/pages",
            self.origin,
            self.layout.spaces_path(),
            urlencoding::encode(space_id)
        )
    }

    /// Chat endpoint, the same for both layouts.
    #[must_use]
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin_standard() {
        let config = ClientConfig::default();
        assert_eq!(config.spaces_url(), "/api/spaces");
        assert_eq!(config.pages_url("abc"), "/api/spaces/abc/pages");
        assert_eq!(config.chat_url(), "/api/chat");
    }

    #[test]
    fn test_docmost_layout() {
        let config = ClientConfig::from_values(Some("Docmost"), None).unwrap();
        assert_eq!(config.spaces_url(), "/docmost/api");
        assert_eq!(config.pages_url("abc"), "/docmost/api/abc/pages");
        assert_eq!(config.chat_url(), "/api/chat");
    }

    #[test]
    fn test_space_id_is_encoded() {
        let config = ClientConfig::default();
        assert_eq!(config.pages_url("a b/c"), "/api/spaces/a%20b%2Fc/pages");
    }

    #[test]
    fn test_origin_trailing_slash_trimmed() {
        let config = ClientConfig::from_values(None, Some("http://localhost:8090/")).unwrap();
        assert_eq!(config.spaces_url(), "http://localhost:8090/api/spaces");
    }

    #[test]
    fn test_blank_layout_uses_default() {
        let config = ClientConfig::from_values(Some("  "), None).unwrap();
        assert_eq!(config.layout, ApiLayout::Standard);
    }

    #[test]
    fn test_unknown_layout_rejected() {
        let err = ClientConfig::from_values(Some("graphql"), None).unwrap_err();
        assert_eq!(err, ConfigError::UnknownLayout("graphql".to_string()));
        assert!(err.to_string().contains("graphql"));
    }
}
