//! Bare metal server ordering built on the `SoftLayer_Hardware` service.
//!
//! - [`BareMetalServerOrder`]: Describes a server and verifies or places the order
//! - [`CreateObjectOptions`]: The values the API accepts for each order attribute
//! - [`OrderError`]: Failures while building or submitting an order

mod bare_metal;
mod errors;
mod options;

pub use bare_metal::BareMetalServerOrder;
pub use errors::OrderError;
pub use options::CreateObjectOptions;

/// Service used to order bare metal servers.
pub(crate) const HARDWARE_SERVICE: &str = "SoftLayer_Hardware";
