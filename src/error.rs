//! Error types for the Freshservice client.
//!
//! Two narrow error types describe local failures:
//!
//! - [`EntityError`] when a wire object cannot be turned into an entity
//! - [`RequestError`] when a request payload fails its precondition checks
//!
//! Both convert into [`FreshserviceError`], the single error type returned
//! by every [`FreshserviceClient`](crate::client::FreshserviceClient)
//! operation. The umbrella keeps the message text of whatever it
//! wraps.
//!
//! # Security
//!
//! Response bodies are passed through [`FreshserviceError::sanitize_message`]
//! before they are stored, so the API key never shows up in an error.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// The entity type an [`EntityError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A ticket.
    Ticket,
    /// A department.
    Department,
    /// A requester.
    Requester,
    /// A ticket conversation.
    Conversation,
    /// A file attached to a ticket or conversation.
    Attachment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Ticket => "ticket",
            EntityKind::Department => "department",
            EntityKind::Requester => "requester",
            EntityKind::Conversation => "conversation",
            EntityKind::Attachment => "attachment",
        };
        f.write_str(name)
    }
}

/// The request type a [`RequestError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// A ticket creation payload.
    Ticket,
    /// A department creation payload.
    Department,
    /// A requester creation or update payload.
    Requester,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestKind::Ticket => "ticket request",
            RequestKind::Department => "department request",
            RequestKind::Requester => "requester request",
        };
        f.write_str(name)
    }
}

/// A wire object could not be decoded into a well-formed entity.
///
/// The message is the first failure encountered, including failures of
/// nested entities (an invalid attachment inside a ticket is reported as a
/// ticket error carrying the attachment's message).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EntityError {
    /// Which entity failed to decode.
    pub kind: EntityKind,
    /// What went wrong.
    pub message: String,
}

impl EntityError {
    /// Creates an entity error of the given kind.
    pub fn new(kind: EntityKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A request payload failed a mandatory-field or enumeration check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestError {
    /// Which request failed validation.
    pub kind: RequestKind,
    /// What went wrong.
    pub message: String,
}

impl RequestError {
    /// Creates a request error of the given kind.
    pub fn new(kind: RequestKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Unified error type for all client operations.
#[derive(Error, Debug)]
pub enum FreshserviceError {
    /// Configuration error - missing or invalid settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The response body, with the API key redacted.
        body: String,
    },

    /// A response object could not be turned into an entity.
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// A request payload failed validation before it was sent.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// JSON encoding or decoding failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading an attachment from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The response body did not contain the expected top-level key.
    #[error("Wrong json response")]
    WrongResponse {
        /// The key that was expected.
        key: &'static str,
    },

    /// A lookup succeeded but matched nothing.
    #[error("{resource} not found")]
    NotFound {
        /// The kind of resource that was looked up, e.g. `Department`.
        resource: &'static str,
    },
}

impl FreshserviceError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FreshserviceError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshserviceError::Config(message.into())
    }

    /// Creates a "wrong json response" error for the given key.
    pub fn wrong_response(key: &'static str) -> Self {
        FreshserviceError::WrongResponse { key }
    }

    /// Creates a "not found" error for a lookup that matched nothing.
    pub fn not_found(resource: &'static str) -> Self {
        FreshserviceError::NotFound { resource }
    }

    /// Returns the upstream HTTP status, if this error carries one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FreshserviceError::HttpStatus { status, .. } => Some(*status),
            FreshserviceError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true if the upstream server answered with the given status.
    #[must_use]
    pub fn has_status(&self, status: StatusCode) -> bool {
        self.status() == Some(status)
    }

    /// Returns true for an empty lookup result or an upstream 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FreshserviceError::NotFound { .. })
            || self.has_status(StatusCode::NOT_FOUND)
    }

    /// Sanitizes a message to remove any occurrence of the API key.
    ///
    /// Every occurrence of `api_key` is replaced with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.is_empty() {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, api_key: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = FreshserviceError::missing_env("FRESHSERVICE_API_KEY");
        assert!(err.to_string().contains("FRESHSERVICE_API_KEY"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_entity_error_keeps_message() {
        let err: FreshserviceError =
            EntityError::new(EntityKind::Ticket, "Unsupported status").into();
        assert_eq!(err.to_string(), "Unsupported status");
        assert!(matches!(
            err,
            FreshserviceError::Entity(EntityError {
                kind: EntityKind::Ticket,
                ..
            })
        ));
    }

    #[test]
    fn test_request_error_keeps_message() {
        let err: FreshserviceError =
            RequestError::new(RequestKind::Department, "Department name is required").into();
        assert_eq!(err.to_string(), "Department name is required");
    }

    #[test]
    fn test_wrong_response_message() {
        let err = FreshserviceError::wrong_response("ticket");
        assert_eq!(err.to_string(), "Wrong json response");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            FreshserviceError::not_found("Department").to_string(),
            "Department not found"
        );
    }

    #[test]
    fn test_http_status_carries_body() {
        let err = FreshserviceError::HttpStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: r#"{"message":"boom"}"#.to_string(),
        };
        assert!(err.to_string().contains(r#"{"message":"boom"}"#));
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(err.has_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!err.has_status(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_status_absent_for_local_errors() {
        let err = FreshserviceError::not_found("Requester");
        assert_eq!(err.status(), None);
        assert!(err.is_not_found());
        assert!(!FreshserviceError::wrong_response("requesters").is_not_found());
    }

    #[test]
    fn test_sanitize_message_removes_api_key() {
        let api_key = "super_secret_key_12345";
        let message = format!("Error connecting with key {} to server", api_key);
        let sanitized = FreshserviceError::sanitize_message(&message, api_key);
        assert!(!sanitized.contains(api_key));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_key() {
        let message = "Some error message";
        let sanitized = FreshserviceError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntityKind::Attachment.to_string(), "attachment");
        assert_eq!(RequestKind::Requester.to_string(), "requester request");
    }
}
