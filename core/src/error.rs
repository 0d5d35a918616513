//! Error types for the matchmaking client.
//!
//! # Design
//! Parameter problems are detected while building a request, before any
//! network call. `NotFound` gets a dedicated variant because callers often
//! branch on it; every other non-2xx response lands in `HttpError` with the
//! raw status and body, unchanged.

use thiserror::Error;

/// Errors returned by `MatchmakingClient` build/parse methods and transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field was empty. Holds the wire name of the field.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A request field was present but malformed.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for client operations.
pub type ApiResult<T> = Result<T, ApiError>;
