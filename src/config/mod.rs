//! Configuration types for the SoftLayer API client.
//!
//! This module provides the default configuration consulted whenever a
//! [`Service`](crate::Service) is created without explicit credentials.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SoftLayerConfig`]: Default username, API key and endpoint URL
//! - [`SoftLayerConfigBuilder`]: A builder for constructing [`SoftLayerConfig`] instances
//! - [`ServiceName`], [`Username`], [`ApiKey`], [`EndpointUrl`]: Validated newtypes
//!
//! # Lifecycle
//!
//! A `SoftLayerConfig` is built once at process start (with the builder or
//! [`SoftLayerConfig::from_env`]) and is read-only afterwards. It is passed
//! explicitly to every service that should inherit its defaults.
//!
//! # Example
//!
//! ```rust
//! use softlayer_api::{SoftLayerConfig, Username, ApiKey, API_PUBLIC_ENDPOINT};
//!
//! let config = SoftLayerConfig::builder()
//!     .username(Username::new("my-username").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build();
//!
//! assert_eq!(config.endpoint_url().as_ref(), API_PUBLIC_ENDPOINT);
//! ```

mod newtypes;

pub use newtypes::{ApiKey, EndpointUrl, ServiceName, Username};

use crate::error::ConfigError;

/// The public SoftLayer REST endpoint.
pub const API_PUBLIC_ENDPOINT: &str = "https://api.softlayer.com/rest/v3/";

/// The SoftLayer REST endpoint reachable from the private network.
pub const API_PRIVATE_ENDPOINT: &str = "https://api.service.softlayer.com/rest/v3/";

/// Environment variable holding the default API username.
pub const USERNAME_ENV_VAR: &str = "SL_API_USERNAME";

/// Environment variable holding the default API key.
pub const API_KEY_ENV_VAR: &str = "SL_API_KEY";

/// Environment variable holding the default endpoint URL.
pub const ENDPOINT_URL_ENV_VAR: &str = "SL_API_BASE_URL";

/// Default configuration for SoftLayer services.
///
/// Username and API key are optional here: a service may always supply its
/// own. The endpoint URL defaults to [`API_PUBLIC_ENDPOINT`].
///
/// # Thread Safety
///
/// `SoftLayerConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use softlayer_api::{SoftLayerConfig, EndpointUrl, API_PRIVATE_ENDPOINT};
///
/// let config = SoftLayerConfig::builder()
///     .endpoint_url(EndpointUrl::new(API_PRIVATE_ENDPOINT).unwrap())
///     .build();
///
/// assert!(config.username().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct SoftLayerConfig {
    username: Option<Username>,
    api_key: Option<ApiKey>,
    endpoint_url: EndpointUrl,
    user_agent_prefix: Option<String>,
}

impl SoftLayerConfig {
    /// Creates a new builder for constructing a `SoftLayerConfig`.
    #[must_use]
    pub fn builder() -> SoftLayerConfigBuilder {
        SoftLayerConfigBuilder::new()
    }

    /// Builds a configuration from the `SL_API_USERNAME`, `SL_API_KEY` and
    /// `SL_API_BASE_URL` environment variables.
    ///
    /// Unset or blank variables are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if `SL_API_BASE_URL` is set
    /// but is not an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut builder = SoftLayerConfigBuilder::new();
        if let Some(username) = present(USERNAME_ENV_VAR) {
            builder = builder.username(Username::new(username)?);
        }
        if let Some(api_key) = present(API_KEY_ENV_VAR) {
            builder = builder.api_key(ApiKey::new(api_key)?);
        }
        if let Some(endpoint_url) = present(ENDPOINT_URL_ENV_VAR) {
            builder = builder.endpoint_url(EndpointUrl::new(endpoint_url)?);
        }

        tracing::debug!(
            has_username = builder.username.is_some(),
            has_api_key = builder.api_key.is_some(),
            "Loaded SoftLayer defaults from the environment"
        );

        Ok(builder.build())
    }

    /// Returns the default username, if configured.
    #[must_use]
    pub const fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }

    /// Returns the default API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the default endpoint URL.
    #[must_use]
    pub const fn endpoint_url(&self) -> &EndpointUrl {
        &self.endpoint_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for SoftLayerConfig {
    fn default() -> Self {
        Self {
            username: None,
            api_key: None,
            endpoint_url: public_endpoint(),
            user_agent_prefix: None,
        }
    }
}

fn public_endpoint() -> EndpointUrl {
    EndpointUrl::new(API_PUBLIC_ENDPOINT).expect("API_PUBLIC_ENDPOINT is an absolute URL")
}

// Verify SoftLayerConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SoftLayerConfig>();
};

/// Builder for constructing [`SoftLayerConfig`] instances.
///
/// # Defaults
///
/// - `username`: `None`
/// - `api_key`: `None`
/// - `endpoint_url`: [`API_PUBLIC_ENDPOINT`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct SoftLayerConfigBuilder {
    username: Option<Username>,
    api_key: Option<ApiKey>,
    endpoint_url: Option<EndpointUrl>,
    user_agent_prefix: Option<String>,
}

impl SoftLayerConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default username.
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the default API key.
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the default endpoint URL.
    #[must_use]
    pub fn endpoint_url(mut self, endpoint_url: EndpointUrl) -> Self {
        self.endpoint_url = Some(endpoint_url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SoftLayerConfig`], using the public endpoint when none is set.
    #[must_use]
    pub fn build(self) -> SoftLayerConfig {
        SoftLayerConfig {
            username: self.username,
            api_key: self.api_key,
            endpoint_url: self.endpoint_url.unwrap_or_else(public_endpoint),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = SoftLayerConfig::builder().build();

        assert!(config.username().is_none());
        assert!(config.api_key().is_none());
        assert_eq!(config.endpoint_url().as_ref(), API_PUBLIC_ENDPOINT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_default_matches_empty_builder() {
        let config = SoftLayerConfig::default();
        assert_eq!(config.endpoint_url().as_ref(), API_PUBLIC_ENDPOINT);
        assert!(config.username().is_none());
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = SoftLayerConfig::builder()
            .username(Username::new("sample").unwrap())
            .api_key(ApiKey::new("sample-key").unwrap())
            .endpoint_url(EndpointUrl::new(API_PRIVATE_ENDPOINT).unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build();

        assert_eq!(config.username().unwrap().as_ref(), "sample");
        assert_eq!(config.api_key().unwrap().as_ref(), "sample-key");
        assert_eq!(config.endpoint_url().as_ref(), API_PRIVATE_ENDPOINT);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = SoftLayerConfig::from_lookup(lookup_from(&[
            (USERNAME_ENV_VAR, "env-user"),
            (API_KEY_ENV_VAR, "env-key"),
            (
                ENDPOINT_URL_ENV_VAR,
                "http://someendpoint.softlayer.com/from/globals",
            ),
        ]))
        .unwrap();

        assert_eq!(config.username().unwrap().as_ref(), "env-user");
        assert_eq!(config.api_key().unwrap().as_ref(), "env-key");
        assert_eq!(
            config.endpoint_url().as_ref(),
            "http://someendpoint.softlayer.com/from/globals"
        );
    }

    #[test]
    fn test_from_lookup_treats_blank_variables_as_absent() {
        let config = SoftLayerConfig::from_lookup(lookup_from(&[
            (USERNAME_ENV_VAR, ""),
            (API_KEY_ENV_VAR, "   "),
        ]))
        .unwrap();

        assert!(config.username().is_none());
        assert!(config.api_key().is_none());
        assert_eq!(config.endpoint_url().as_ref(), API_PUBLIC_ENDPOINT);
    }

    #[test]
    fn test_from_lookup_rejects_relative_endpoint() {
        let result =
            SoftLayerConfig::from_lookup(lookup_from(&[(ENDPOINT_URL_ENV_VAR, "rest/v3")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEndpointUrl { .. })
        ));
    }

    #[test]
    fn test_from_lookup_rejects_malformed_port() {
        let result = SoftLayerConfig::from_lookup(lookup_from(&[(
            ENDPOINT_URL_ENV_VAR,
            "http://host:notaport/rest/v3",
        )]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEndpointUrl { .. })
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SoftLayerConfig>();
    }
}
