//! URL construction for SoftLayer REST calls.
//!
//! URLs follow the fixed convention
//! `<endpoint>/<Service>[/<id>]/<Method>.json[?objectMask=a;b][&resultLimit=offset,limit]`.

use crate::service::filter::ParameterFilter;

/// Separator between object mask tokens in the query string.
pub const OBJECT_MASK_SEPARATOR: &str = ";";

/// Builds the absolute URL for calling `method_name` on `service_name`.
///
/// Trailing slashes on `endpoint` are collapsed so that exactly one `/`
/// separates it from the service name.
///
/// # Example
///
/// ```rust
/// use softlayer_api::{build_url, ParameterFilter};
///
/// let filter = ParameterFilter::new().with_object_id(12345);
/// let url = build_url(
///     "https://api.example.com/rest/v3",
///     "SoftLayer_Ticket",
///     "getObject",
///     Some(&filter),
/// );
/// assert_eq!(
///     url,
///     "https://api.example.com/rest/v3/SoftLayer_Ticket/12345/getObject.json"
/// );
/// ```
#[must_use]
pub fn build_url(
    endpoint: &str,
    service_name: &str,
    method_name: &str,
    filter: Option<&ParameterFilter>,
) -> String {
    let mut url = format!("{}/{service_name}", endpoint.trim_end_matches('/'));

    if let Some(id) = filter.and_then(ParameterFilter::object_id) {
        url.push('/');
        url.push_str(&id.to_string());
    }

    url.push('/');
    url.push_str(method_name);
    url.push_str(".json");

    let query = filter.map(query_params).unwrap_or_default();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }

    url
}

/// Returns the `objectMask` and `resultLimit` query parameters of a filter.
fn query_params(filter: &ParameterFilter) -> Vec<String> {
    let mut params = Vec::new();

    if let Some(tokens) = filter.object_mask() {
        let mask = tokens
            .iter()
            .map(|token| urlencoding::encode(token).into_owned())
            .collect::<Vec<_>>()
            .join(OBJECT_MASK_SEPARATOR);
        params.push(format!("objectMask={mask}"));
    }

    match (filter.result_limit(), filter.result_offset()) {
        (Some(limit), offset) => {
            params.push(format!("resultLimit={},{limit}", offset.unwrap_or(0)));
        }
        (None, Some(offset)) => {
            tracing::warn!(
                offset,
                "Result offset given without a result limit; the offset is not sent"
            );
        }
        (None, None) => {}
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://api.example.com/rest/v3";

    #[test]
    fn test_concatenates_method_to_base_url() {
        assert_eq!(
            build_url(ENDPOINT, "SoftLayer_Account", "getOpenTickets", None),
            "https://api.example.com/rest/v3/SoftLayer_Account/getOpenTickets.json"
        );
    }

    #[test]
    fn test_trailing_slash_on_endpoint_is_collapsed() {
        assert_eq!(
            build_url(
                "https://api.softlayer.com/rest/v3/",
                "SoftLayer_Account",
                "getOpenTickets",
                None
            ),
            "https://api.softlayer.com/rest/v3/SoftLayer_Account/getOpenTickets.json"
        );
    }

    #[test]
    fn test_object_id_is_inserted_before_method() {
        let filter = ParameterFilter::new().with_object_id(12345);
        assert_eq!(
            build_url(ENDPOINT, "SoftLayer_Ticket", "getObject", Some(&filter)),
            "https://api.example.com/rest/v3/SoftLayer_Ticket/12345/getObject.json"
        );
    }

    #[test]
    fn test_object_mask_is_trimmed_and_escaped() {
        let filter =
            ParameterFilter::new().with_object_mask(["cow  ", "  duck", "chicken", "bull dog"]);
        assert_eq!(
            build_url(ENDPOINT, "SoftLayer_Account", "getObject", Some(&filter)),
            "https://api.example.com/rest/v3/SoftLayer_Account/getObject.json?objectMask=cow;duck;chicken;bull%20dog"
        );
    }

    #[test]
    fn test_mask_tokens_never_contain_raw_separator() {
        let filter = ParameterFilter::new().with_object_mask(["a;b", "c"]);
        let url = build_url(ENDPOINT, "SoftLayer_Account", "getObject", Some(&filter));
        assert!(url.ends_with("?objectMask=a%3Bb;c"));
    }

    #[test]
    fn test_result_limit_defaults_offset_to_zero() {
        let filter = ParameterFilter::new().with_result_limit(10);
        assert_eq!(
            build_url(ENDPOINT, "SoftLayer_Account", "getOpenTickets", Some(&filter)),
            "https://api.example.com/rest/v3/SoftLayer_Account/getOpenTickets.json?resultLimit=0,10"
        );
    }

    #[test]
    fn test_result_limit_with_offset() {
        let filter = ParameterFilter::new()
            .with_result_offset(5)
            .with_result_limit(10);
        assert_eq!(
            build_url(ENDPOINT, "SoftLayer_Account", "getOpenTickets", Some(&filter)),
            "https://api.example.com/rest/v3/SoftLayer_Account/getOpenTickets.json?resultLimit=5,10"
        );
    }

    #[test]
    fn test_offset_without_limit_is_dropped() {
        let filter = ParameterFilter::new().with_result_offset(5);
        assert_eq!(
            build_url(ENDPOINT, "SoftLayer_Account", "getOpenTickets", Some(&filter)),
            "https://api.example.com/rest/v3/SoftLayer_Account/getOpenTickets.json"
        );
    }

    #[test]
    fn test_all_modifiers_together() {
        let filter = ParameterFilter::new()
            .with_object_id(123_456)
            .with_object_mask(["fish", "cow", "duck"])
            .with_result_limit(2);
        assert_eq!(
            build_url(ENDPOINT, "SoftLayer_Ticket", "getUpdates", Some(&filter)),
            "https://api.example.com/rest/v3/SoftLayer_Ticket/123456/getUpdates.json?objectMask=fish;cow;duck&resultLimit=0,2"
        );
    }

    #[test]
    fn test_empty_filter_adds_nothing() {
        let filter = ParameterFilter::new();
        assert_eq!(
            build_url(ENDPOINT, "SoftLayer_Account", "getObject", Some(&filter)),
            "https://api.example.com/rest/v3/SoftLayer_Account/getObject.json"
        );
    }
}
