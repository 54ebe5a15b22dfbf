//! # SoftLayer API Rust Client
//!
//! A Rust client for the SoftLayer REST API (v3). Remote methods are invoked
//! dynamically by name: the client turns a service name, a method name, an
//! optional filter and a list of JSON arguments into an authenticated HTTPS
//! request and decodes the JSON reply.
//!
//! ## Overview
//!
//! This crate provides:
//! - Configuration via [`SoftLayerConfig`] and [`SoftLayerConfigBuilder`], or the `SL_API_*` environment variables
//! - Validated newtypes for service names, credentials and endpoint URLs
//! - [`Service`], which invokes any remote method on one `SoftLayer_*` service
//! - Object ids, object masks and result limits via [`ParameterFilter`] and [`FilteredService`]
//! - A [`Client`] handing out services that share one configuration
//! - Bare metal server ordering via [`orders`]
//!
//! ## Quick Start
//!
//! ```rust
//! use softlayer_api::{Client, SoftLayerConfig, Username, ApiKey};
//!
//! let config = SoftLayerConfig::builder()
//!     .username(Username::new("your-username").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build();
//!
//! let client = Client::new(config);
//! let account = client.service("Account").unwrap();
//!
//! assert_eq!(
//!     account.url_to_call_method("getOpenTickets", None),
//!     "https://api.softlayer.com/rest/v3/SoftLayer_Account/getOpenTickets.json"
//! );
//! ```
//!
//! ## Calling Methods
//!
//! ```rust,ignore
//! use softlayer_api::Client;
//! use serde_json::json;
//!
//! let client = Client::from_env()?;
//!
//! // POST /SoftLayer_Account/getOpenTickets.json
//! let tickets = client.service("Account")?.call("getOpenTickets", &[]).await?;
//!
//! // GET /SoftLayer_Ticket/12345/getObject.json?objectMask=id;title
//! let ticket = client.service("Ticket")?;
//! let details = ticket
//!     .object_with_id(12345)
//!     .object_mask(["id", "title"])
//!     .get_object()
//!     .await?;
//!
//! // POST with arguments
//! let result = ticket
//!     .object_with_id(12345)
//!     .call("addUpdate", &[json!({"entry": "Update text"})])
//!     .await?;
//! ```
//!
//! ## Ordering Servers
//!
//! ```rust,ignore
//! use softlayer_api::Client;
//! use softlayer_api::orders::{BareMetalServerOrder, CreateObjectOptions};
//!
//! let client = Client::from_env()?;
//! let options = CreateObjectOptions::fetch(&client).await?;
//!
//! let order = BareMetalServerOrder {
//!     datacenter: options.datacenter_options().into_iter().next(),
//!     hostname: Some("web01".to_string()),
//!     domain: Some("example.com".to_string()),
//!     cores: Some(4),
//!     memory: Some(8),
//!     os_reference_code: Some("UBUNTU_LATEST".to_string()),
//!     hourly: true,
//!     ..Default::default()
//! };
//!
//! // Validate without placing the order
//! let template = order.verify(&client).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable filters**: Chaining a filter never changes the value it was derived from

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod orders;
pub mod service;

// Re-export public types at crate root for convenience
pub use client::{Client, SERVICE_NAME_PREFIX};
pub use config::{
    ApiKey, EndpointUrl, ServiceName, SoftLayerConfig, SoftLayerConfigBuilder, Username,
    API_PRIVATE_ENDPOINT, API_PUBLIC_ENDPOINT,
};
pub use error::ConfigError;

pub use service::{
    build_url, http_method_for, marshall_arguments_for_call, FilteredService, ParameterFilter,
    Service, ServiceOptions,
};

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, ServiceError,
};

pub use orders::{BareMetalServerOrder, CreateObjectOptions, OrderError};
