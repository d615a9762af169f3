//! Error types for the room-type API client.
//!
//! # Design
//! The backend reports business failures as a non-2xx status with a
//! `{"message": "..."}` body. Those become `Rejected` so the message can be
//! shown to the user verbatim. `NotFound` covers a bare 404, and every other
//! non-2xx lands in `HttpError` with the raw status and body for debugging.

use thiserror::Error;

/// Errors returned by `RoomTypeClient` parse methods and by `Transport`
/// implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 without an explanatory message.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the request and said why.
    #[error("HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The server returned a non-2xx status with no parseable error body.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never completed (connection refused, DNS, reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// The backend's own explanation, when it sent one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Rejected { status, .. } | ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rejections_carry_a_user_message() {
        let rejected = ApiError::Rejected {
            status: 409,
            message: "duplicate".to_string(),
        };
        assert_eq!(rejected.user_message(), Some("duplicate"));
        assert_eq!(rejected.status(), Some(409));

        assert!(ApiError::NotFound.user_message().is_none());
        assert!(ApiError::Transport("refused".into()).user_message().is_none());
        assert!(ApiError::Transport("refused".into()).status().is_none());
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = ApiError::Rejected {
            status: 400,
            message: "bad capacity".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 400: bad capacity");
    }
}
