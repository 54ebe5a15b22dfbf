//! HTTP client for SoftLayer API communication.
//!
//! This module provides the [`HttpClient`] type, which attaches HTTP Basic
//! credentials to every request and executes it with `reqwest`.

use std::collections::HashMap;

use base64::prelude::*;

use crate::clients::errors::ServiceError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiKey, Username};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the SoftLayer API.
///
/// The client handles:
/// - Default headers including User-Agent, Accept and Basic authorization
/// - Sending the request exactly once (no retries)
/// - Collecting status, headers and the raw body
///
/// # Example
///
/// ```rust,ignore
/// use softlayer_api::clients::{HttpClient, HttpRequest, HttpMethod};
/// use softlayer_api::{ApiKey, Username};
///
/// let client = HttpClient::new(
///     &Username::new("sample").unwrap(),
///     &ApiKey::new("blah").unwrap(),
///     None,
/// )?;
///
/// let request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://api.softlayer.com/rest/v3/SoftLayer_Account/getObject.json",
/// )
/// .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client authenticating as the given user.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(
        username: &Username,
        api_key: &ApiKey,
        user_agent_prefix: Option<&str>,
    ) -> Result<Self, ServiceError> {
        Ok(Self::with_transport(
            Self::build_transport()?,
            username,
            api_key,
            user_agent_prefix,
        ))
    }

    /// Creates an HTTP client sending through an existing reqwest client.
    ///
    /// The reqwest client holds no credentials, so one transport can be
    /// shared by clients authenticating as different users.
    #[must_use]
    pub fn with_transport(
        transport: reqwest::Client,
        username: &Username,
        api_key: &ApiKey,
        user_agent_prefix: Option<&str>,
    ) -> Self {
        let user_agent_prefix =
            user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}softlayer_api v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            basic_authorization(username, api_key),
        );

        Self {
            client: transport,
            default_headers,
        }
    }

    /// Builds the rustls-backed reqwest client used as the transport.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] on TLS initialization failure.
    pub fn build_transport() -> Result<reqwest::Client, ServiceError> {
        Ok(reqwest::Client::builder().use_rustls_tls().build()?)
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the SoftLayer API.
    ///
    /// The request is sent once. Any status code is returned as an
    /// [`HttpResponse`]; interpreting it is left to
    /// [`HttpResponse::into_value`].
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be delivered or the body cannot be read (`Transport`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ServiceError> {
        request.verify()?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body_type) = &request.body_type {
            req_builder = req_builder.header("Content-Type", body_type.as_content_type());
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Builds the `Authorization` header value for HTTP Basic authentication.
fn basic_authorization(username: &Username, api_key: &ApiKey) -> String {
    let credentials = format!("{}:{}", username.as_ref(), api_key.as_ref());
    format!("Basic {}", BASE64_STANDARD.encode(credentials))
}
