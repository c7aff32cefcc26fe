//! Error types for the taskboard API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server rejected the request." Any
//! other non-2xx response lands in `Service` carrying only a human-readable
//! message — callers never see a status code or a raw response object.

use std::fmt;

/// Errors returned by the clients, gateways and panels.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested entity does not exist.
    NotFound,

    /// The server reported a failure. The message is the server's own error
    /// message when it sent one, otherwise a generic description.
    Service { message: String },

    /// The request never completed — connection refused, timeout, DNS.
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Service { message } => write!(f, "{message}"),
            ApiError::Transport(msg) => write!(f, "network failure: {msg}"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
