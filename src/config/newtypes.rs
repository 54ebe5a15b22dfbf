//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper trims surrounding whitespace and validates its contents on
//! construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use std::fmt;

/// Trims the value and returns `None` when nothing is left.
fn trimmed(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A validated SoftLayer service name, such as `SoftLayer_Account`.
///
/// # Example
///
/// ```rust
/// use softlayer_api::ServiceName;
///
/// let name = ServiceName::new("SoftLayer_Ticket").unwrap();
/// assert_eq!(name.as_ref(), "SoftLayer_Ticket");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    /// Creates a new validated service name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyServiceName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        trimmed(name).map(Self).ok_or(ConfigError::EmptyServiceName)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated SoftLayer API username.
///
/// # Example
///
/// ```rust
/// use softlayer_api::Username;
///
/// let username = Username::new("  fred  ").unwrap();
/// assert_eq!(username.as_ref(), "fred");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty or
    /// whitespace-only.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        trimmed(username).map(Self).ok_or(ConfigError::EmptyUsername)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated SoftLayer API key.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `ApiKey(*****)`.
///
/// # Example
///
/// ```rust
/// use softlayer_api::ApiKey;
///
/// let key = ApiKey::new("abc123").unwrap();
/// assert_eq!(key.as_ref(), "abc123");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or
    /// whitespace-only.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        trimmed(key).map(Self).ok_or(ConfigError::EmptyApiKey)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated absolute endpoint URL, e.g. `https://api.softlayer.com/rest/v3/`.
///
/// # Example
///
/// ```rust
/// use softlayer_api::EndpointUrl;
///
/// let url = EndpointUrl::new(" https://api.softlayer.com/rest/v3/ ").unwrap();
/// assert_eq!(url.as_ref(), "https://api.softlayer.com/rest/v3/");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.softlayer.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl {
    url: String,
    parsed: Url,
}

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// The trimmed text is kept as given; it is only parsed to check that it
    /// is a well-formed absolute URL with a host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL is empty, does
    /// not parse, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();
        let invalid = || ConfigError::InvalidEndpointUrl { url: url.clone() };

        // `https:///path` would otherwise parse with `path` as the host.
        let authority = url.split_once("://").map(|(_, rest)| rest).ok_or_else(invalid)?;
        if authority.is_empty() || authority.starts_with('/') {
            return Err(invalid());
        }

        let parsed = Url::parse(&url).map_err(|_| invalid())?;
        if !parsed.has_host() {
            return Err(invalid());
        }

        Ok(Self { url, parsed })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
