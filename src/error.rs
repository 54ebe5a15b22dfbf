//! Error types for the SoftLayer API client.
//!
//! This module contains error types used throughout the crate for
//! configuration and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors and credential setters return
//! `Result<T, ConfigError>` to enable fail-fast validation. Configuration
//! errors are raised when a value is built or assigned, never when a call
//! is made.
//!
//! # Example
//!
//! ```rust
//! use softlayer_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("   ");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a client or service.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Service name cannot be empty.
    #[error("Service name cannot be empty. Please provide a SoftLayer service name such as 'SoftLayer_Account'.")]
    EmptyServiceName,

    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide a valid SoftLayer API username.")]
    EmptyUsername,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid SoftLayer API key.")]
    EmptyApiKey,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.softlayer.com/rest/v3/').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing after falling back to the defaults.
    #[error("Missing required field: '{field}'. Provide it explicitly or set a default in the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("SoftLayer API key"));
    }

    #[test]
    fn test_invalid_endpoint_url_error_message() {
        let error = ConfigError::InvalidEndpointUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "username" };
        let message = error.to_string();
        assert!(message.contains("username"));
        assert!(message.contains("default"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyServiceName;
        let _: &dyn std::error::Error = &error;
    }
}
