//! A façade handing out services that share one configuration.

use crate::config::SoftLayerConfig;
use crate::error::ConfigError;
use crate::service::{Service, ServiceOptions};

/// Prefix shared by every SoftLayer service name.
pub const SERVICE_NAME_PREFIX: &str = "SoftLayer_";

/// Hands out [`Service`] values built from one [`SoftLayerConfig`].
///
/// # Example
///
/// ```rust
/// use softlayer_api::{Client, SoftLayerConfig, Username, ApiKey};
///
/// let client = Client::new(
///     SoftLayerConfig::builder()
///         .username(Username::new("sample").unwrap())
///         .api_key(ApiKey::new("blah").unwrap())
///         .build(),
/// );
///
/// let hardware = client.service("Hardware").unwrap();
/// assert_eq!(hardware.service_name(), "SoftLayer_Hardware");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Client {
    config: SoftLayerConfig,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client around the given configuration.
    #[must_use]
    pub const fn new(config: SoftLayerConfig) -> Self {
        Self { config }
    }

    /// Creates a client configured from the `SL_API_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`SoftLayerConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        SoftLayerConfig::from_env().map(Self::new)
    }

    /// Returns the configuration shared by every service of this client.
    #[must_use]
    pub const fn config(&self) -> &SoftLayerConfig {
        &self.config
    }

    /// Returns the named service, adding the `SoftLayer_` prefix if missing.
    ///
    /// # Errors
    ///
    /// See [`Service::new`].
    pub fn service(&self, name: &str) -> Result<Service, ConfigError> {
        self.service_with_options(name, ServiceOptions::new())
    }

    /// Returns the named service with per-service overrides.
    ///
    /// # Errors
    ///
    /// See [`Service::new`].
    pub fn service_with_options(
        &self,
        name: &str,
        options: ServiceOptions,
    ) -> Result<Service, ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyServiceName);
        }

        let full_name = if name.starts_with(SERVICE_NAME_PREFIX) {
            name.to_string()
        } else {
            format!("{SERVICE_NAME_PREFIX}{name}")
        };

        Service::new(full_name, options, &self.config)
    }
}
