//! HTTP response types for SoftLayer API calls.
//!
//! This module provides the [`HttpResponse`] type, which holds the raw
//! response and translates it into a decoded value or a [`ServiceError`].

use std::collections::HashMap;

use crate::clients::errors::ServiceError;

/// An HTTP response from the SoftLayer API.
///
/// The body is kept as raw text until [`HttpResponse::into_value`] decodes it,
/// so that a malformed body can be reported alongside the decode error.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the body into the call result.
    ///
    /// - An empty body decodes to `Value::Null`.
    /// - A body that is not JSON yields [`ServiceError::MalformedResponse`].
    /// - An object with a top-level `error` key yields [`ServiceError::Api`]
    ///   carrying that message.
    /// - A non-2xx status without an `error` key yields [`ServiceError::Api`]
    ///   carrying the raw body (or the status code when the body is empty).
    ///
    /// Any other decoded value is returned unchanged.
    ///
    /// # Errors
    ///
    /// See above.
    ///
    /// # Example
    ///
    /// ```rust
    /// use softlayer_api::clients::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), "[1,2,3]".to_string());
    /// assert_eq!(response.into_value().unwrap(), serde_json::json!([1, 2, 3]));
    /// ```
    pub fn into_value(self) -> Result<serde_json::Value, ServiceError> {
        let value = if self.body.trim().is_empty() {
            serde_json::Value::Null
        } else {
            match serde_json::from_str(&self.body) {
                Ok(value) => value,
                Err(source) => {
                    return Err(ServiceError::MalformedResponse {
                        status: self.code,
                        body: self.body,
                        source,
                    })
                }
            }
        };

        if let Some(error) = value.get("error") {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), String::from);
            return Err(ServiceError::Api {
                status: self.code,
                message,
            });
        }

        if !self.is_ok() {
            let message = if self.body.trim().is_empty() {
                format!("HTTP status {}", self.code)
            } else {
                self.body
            };
            return Err(ServiceError::Api {
                status: self.code,
                message,
            });
        }

        Ok(value)
    }
}
