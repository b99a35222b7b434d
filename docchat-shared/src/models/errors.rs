//! Errors from backend calls.

use serde_json::Value;
use strum::Display;
use thiserror::Error;

use super::chat::ChatResponse;

/// Backend resource a request was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    /// The space listing.
    Spaces,
    /// One space's page listing.
    Pages,
    /// The chat endpoint.
    Chat,
}

/// Failure of a backend call, rendered verbatim as a system chat message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{resource} failed: {message}")]
    Network {
        /// Endpoint that was called.
        resource: Resource,
        /// Transport error text.
        message: String,
    },

    /// The backend answered with `ok: false`.
    #[error("{resource} failed")]
    NotOk {
        /// Endpoint that was called.
        resource: Resource,
    },

    /// Non-success status, or `ok` missing from the body.
    #[error("{resource} failed: {status} {body}")]
    Status {
        /// Endpoint that was called.
        resource: Resource,
        /// HTTP status code.
        status: u16,
        /// Compact JSON of the response body.
        body: String,
    },

    /// The body was JSON but did not match the expected shape.
    #[error("{resource} failed: invalid response ({message})")]
    Decode {
        /// Endpoint that was called.
        resource: Resource,
        /// Decoder error text.
        message: String,
    },
}

impl ApiError {
    /// The resource the failed call was made against.
    #[must_use]
    pub const fn resource(&self) -> Resource {
        match self {
            Self::Network { resource, .. }
            | Self::NotOk { resource }
            | Self::Status { resource, .. }
            | Self::Decode { resource, .. } => *resource,
        }
    }
}

/// Validates a chat reply from its raw status and body.
///
/// An unparsable body is treated as `{}`. Anything other than a 2xx status
/// with `"ok": true` in the body is reported as [`ApiError::Status`], carrying
/// the status code and the compact JSON of the body.
///
/// # Errors
/// Returns [`ApiError::Status`] for rejected replies and [`ApiError::Decode`]
/// when an accepted body does not match [`ChatResponse`].
pub fn check_chat_response(status: u16, body: &str) -> Result<ChatResponse, ApiError> {
    let value: Value =
        serde_json::from_str(body).unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

    let accepted = (200..300).contains(&status) && value.get("ok") == Some(&Value::Bool(true));
    if !accepted {
        tracing::warn!(status, "chat request rejected");
        return Err(ApiError::Status {
            resource: Resource::Chat,
            status,
            body: value.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|err| ApiError::Decode {
        resource: Resource::Chat,
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ok_messages() {
        let spaces = ApiError::NotOk {
            resource: Resource::Spaces,
        };
        let pages = ApiError::NotOk {
            resource: Resource::Pages,
        };
        assert_eq!(spaces.to_string(), "spaces failed");
        assert_eq!(pages.to_string(), "pages failed");
    }

    #[test]
    fn test_status_message_includes_body() {
        let err = ApiError::Status {
            resource: Resource::Chat,
            status: 500,
            body: r#"{"ok":false}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"chat failed: 500 {"ok":false}"#);
        assert_eq!(err.resource(), Resource::Chat);
    }

    #[test]
    fn test_check_chat_response_accepts_ok() {
        let reply = check_chat_response(200, r#"{"ok":true,"reply":"hello"}"#).unwrap();
        assert_eq!(reply.reply.as_deref(), Some("hello"));
    }

    #[test]
    fn test_check_chat_response_rejects_error_status() {
        let err = check_chat_response(502, r#"{"ok":true,"reply":"x"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 502, .. }));
    }

    #[test]
    fn test_check_chat_response_rejects_ok_false() {
        let err = check_chat_response(200, r#"{"ok":false,"error":"boom"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"chat failed: 200 {"error":"boom","ok":false}"#
        );
    }

    #[test]
    fn test_check_chat_response_unparsable_body() {
        let err = check_chat_response(500, "<html>Internal Server Error</html>").unwrap_err();
        assert_eq!(err.to_string(), "chat failed: 500 {}");
    }

    #[test]
    fn test_check_chat_response_missing_ok() {
        let err = check_chat_response(200, r#"{"reply":"hi"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 200, .. }));
    }
}
