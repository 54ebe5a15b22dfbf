//! Request body marshalling and verb selection.

use serde_json::{json, Value};

use crate::clients::HttpMethod;

/// The only remote method fetched with GET.
pub const GET_OBJECT_METHOD: &str = "getObject";

/// Wraps positional arguments in the `{"parameters": [...]}` envelope.
///
/// Arguments are passed through as given, order preserved.
///
/// # Example
///
/// ```rust
/// use softlayer_api::marshall_arguments_for_call;
/// use serde_json::json;
///
/// let body = marshall_arguments_for_call(&[json!("first"), json!(3), json!({"cow": "chicken"})]);
/// assert_eq!(body.to_string(), r#"{"parameters":["first",3,{"cow":"chicken"}]}"#);
/// ```
#[must_use]
pub fn marshall_arguments_for_call(args: &[Value]) -> Value {
    json!({ "parameters": args })
}

/// Selects the HTTP verb for a remote method.
///
/// `getObject` is the only method sent with GET, whatever arguments it is
/// given; every other method is sent with POST.
#[must_use]
pub fn http_method_for(method_name: &str) -> HttpMethod {
    if method_name == GET_OBJECT_METHOD {
        HttpMethod::Get
    } else {
        HttpMethod::Post
    }
}
