//! Filter proxies returned by the chaining methods of [`Service`].

use serde_json::Value;

use crate::clients::ServiceError;
use crate::service::filter::ParameterFilter;
use crate::service::marshal::GET_OBJECT_METHOD;
use crate::service::Service;

/// A [`Service`] paired with the [`ParameterFilter`] to apply to its calls.
///
/// Chaining returns a new proxy with a derived filter; neither the receiver
/// nor the target service is modified.
///
/// # Example
///
/// ```rust
/// use softlayer_api::{Service, ServiceOptions, SoftLayerConfig};
///
/// let ticket = Service::new(
///     "SoftLayer_Ticket",
///     ServiceOptions::new().username("sample").api_key("blah"),
///     &SoftLayerConfig::default(),
/// )
/// .unwrap();
///
/// let by_id = ticket.object_with_id(123456);
/// let masked = by_id.object_mask(["fish", "cow", "duck"]);
///
/// assert!(by_id.filter().object_mask().is_none());
/// assert_eq!(
///     masked.url_to_call_method("getObject"),
///     "https://api.softlayer.com/rest/v3/SoftLayer_Ticket/123456/getObject.json?objectMask=fish;cow;duck"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct FilteredService<'a> {
    target: &'a Service,
    filter: ParameterFilter,
}

impl<'a> FilteredService<'a> {
    /// Creates a proxy calling `target` with `filter`.
    #[must_use]
    pub const fn new(target: &'a Service, filter: ParameterFilter) -> Self {
        Self { target, filter }
    }

    /// Returns the service calls are forwarded to.
    #[must_use]
    pub const fn target(&self) -> &'a Service {
        self.target
    }

    /// Returns the filter applied to forwarded calls.
    #[must_use]
    pub const fn filter(&self) -> &ParameterFilter {
        &self.filter
    }

    /// Returns a new proxy that also targets the object with the given id.
    #[must_use]
    pub fn object_with_id(&self, id: u64) -> Self {
        Self::new(self.target, self.filter.with_object_id(id))
    }

    /// Returns a new proxy that also applies the given object mask.
    #[must_use]
    pub fn object_mask<I, S>(&self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(self.target, self.filter.with_object_mask(tokens))
    }

    /// Returns a new proxy that also limits the number of results.
    #[must_use]
    pub fn result_limit(&self, count: u32) -> Self {
        Self::new(self.target, self.filter.with_result_limit(count))
    }

    /// Returns a new proxy that also skips the first `count` results.
    #[must_use]
    pub fn result_offset(&self, count: u32) -> Self {
        Self::new(self.target, self.filter.with_result_offset(count))
    }

    /// Returns the URL that calling `method_name` through this proxy would hit.
    #[must_use]
    pub fn url_to_call_method(&self, method_name: &str) -> String {
        self.target.url_to_call_method(method_name, Some(&self.filter))
    }

    /// Calls `method_name` on the target service with this proxy's filter.
    ///
    /// # Errors
    ///
    /// See [`Service::invoke`].
    pub async fn call(&self, method_name: &str, args: &[Value]) -> Result<Value, ServiceError> {
        self.target
            .invoke(method_name, Some(&self.filter), args)
            .await
    }

    /// Calls `getObject` on the target service with this proxy's filter.
    ///
    /// # Errors
    ///
    /// See [`Service::invoke`].
    pub async fn get_object(&self) -> Result<Value, ServiceError> {
        self.call(GET_OBJECT_METHOD, &[]).await
    }
}
