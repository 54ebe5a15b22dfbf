//! HTTP transport for SoftLayer API communication.
//!
//! This module provides the low-level layer underneath
//! [`Service`](crate::Service): building a validated request, attaching
//! credentials, executing it, and decoding the response.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client, authenticating with HTTP Basic
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: The raw response, decoded with [`HttpResponse::into_value`]
//! - [`HttpMethod`]: GET or POST
//! - [`DataType`]: Content types for request bodies
//! - [`ServiceError`]: Errors raised while calling the API
//!
//! # Retry Behavior
//!
//! None. Every request is sent exactly once and failures are surfaced
//! immediately.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{InvalidHttpRequestError, ServiceError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
