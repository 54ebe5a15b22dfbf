//! Error types for SoftLayer API calls.
//!
//! # Error Handling
//!
//! Every call made through a [`Service`](crate::Service) returns
//! `Result<serde_json::Value, ServiceError>`:
//!
//! - [`ServiceError::Transport`]: The request could not be delivered (connection refused, DNS, TLS...)
//! - [`ServiceError::Api`]: The API answered with an `error` payload
//! - [`ServiceError::MalformedResponse`]: The response body was not valid JSON
//! - [`ServiceError::InvalidRequest`]: The request failed validation before it was sent
//!
//! Nothing is retried. A failed call has no side effect beyond whatever the
//! remote server already performed.
//!
//! # Example
//!
//! ```rust,ignore
//! use softlayer_api::ServiceError;
//!
//! match service.call("getSnargled", &[]).await {
//!     Ok(value) => println!("Result: {value}"),
//!     Err(ServiceError::Api { message, .. }) => println!("API error: {message}"),
//!     Err(ServiceError::Transport(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },
}

/// Unified error type for SoftLayer API calls.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Network or connection error.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The decoded response carried a top-level `error` field, or the
    /// server answered with a non-success status.
    #[error("SoftLayer API error: {message}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// The message supplied by the server.
        message: String,
    },

    /// The response body could not be decoded as JSON.
    #[error("Malformed response (status {status}): {source}")]
    MalformedResponse {
        /// The HTTP status code of the response.
        status: u16,
        /// The raw response body.
        body: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl ServiceError {
    /// Returns the server-supplied message for [`ServiceError::Api`] errors.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
