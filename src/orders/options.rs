//! Values accepted by bare metal server orders.

use serde::Deserialize;

use crate::client::Client;
use crate::orders::errors::OrderError;
use crate::orders::HARDWARE_SERVICE;

const CREATE_OBJECT_OPTIONS_METHOD: &str = "getCreateObjectOptions";

/// The result of `SoftLayer_Hardware::getCreateObjectOptions`.
///
/// The API call is slow, so fetch once and keep the value around for as
/// long as the lists are needed.
///
/// # Example
///
/// ```rust
/// use softlayer_api::orders::CreateObjectOptions;
/// use serde_json::json;
///
/// let options = CreateObjectOptions::from_value(json!({
///     "datacenters": [
///         {"template": {"datacenter": {"name": "dal05"}}},
///         {"template": {"datacenter": {"name": "ams01"}}}
///     ],
///     "processors": [
///         {"template": {"processorCoreAmount": 8}},
///         {"template": {"processorCoreAmount": 2}}
///     ]
/// }))
/// .unwrap();
///
/// assert_eq!(options.datacenter_options(), vec!["dal05", "ams01"]);
/// assert_eq!(options.core_options(), vec![2, 8]);
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateObjectOptions {
    #[serde(default)]
    datacenters: Vec<OptionEntry<DatacenterTemplate>>,
    #[serde(default)]
    processors: Vec<OptionEntry<ProcessorTemplate>>,
    #[serde(default)]
    hard_drives: Vec<OptionEntry<HardDrivesTemplate>>,
    #[serde(default)]
    operating_systems: Vec<OptionEntry<OperatingSystemTemplate>>,
    #[serde(default)]
    network_components: Vec<OptionEntry<NetworkComponentsTemplate>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
struct OptionEntry<T> {
    template: T,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
struct DatacenterTemplate {
    datacenter: NamedDatacenter,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
struct NamedDatacenter {
    name: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct ProcessorTemplate {
    processor_core_amount: u32,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct HardDrivesTemplate {
    #[serde(default)]
    hard_drives: Vec<HardDrive>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
struct HardDrive {
    capacity: u32,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct OperatingSystemTemplate {
    operating_system_reference_code: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct NetworkComponentsTemplate {
    #[serde(default)]
    network_components: Vec<NetworkComponent>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct NetworkComponent {
    max_speed: u32,
}

impl CreateObjectOptions {
    /// Fetches the options from the `SoftLayer_Hardware` service.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Config`] or [`OrderError::Service`] if the call
    /// fails, and [`OrderError::UnexpectedOptions`] if the result cannot be
    /// read.
    pub async fn fetch(client: &Client) -> Result<Self, OrderError> {
        let hardware = client.service(HARDWARE_SERVICE)?;
        let value = hardware.call(CREATE_OBJECT_OPTIONS_METHOD, &[]).await?;
        Self::from_value(value)
    }

    /// Reads options from a decoded `getCreateObjectOptions` result.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::UnexpectedOptions`] if `value` does not have the
    /// expected shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, OrderError> {
        serde_json::from_value(value).map_err(|e| OrderError::UnexpectedOptions {
            reason: e.to_string(),
        })
    }

    /// Data center names, without duplicates, in the order the API lists them.
    #[must_use]
    pub fn datacenter_options(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in &self.datacenters {
            let name = &entry.template.datacenter.name;
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }

    /// Available processor core counts, sorted and without duplicates.
    #[must_use]
    pub fn core_options(&self) -> Vec<u32> {
        sorted_unique(
            self.processors
                .iter()
                .map(|entry| entry.template.processor_core_amount),
        )
    }

    /// Available disk capacities in gigabytes, sorted and without duplicates.
    #[must_use]
    pub fn disk_options(&self) -> Vec<u32> {
        sorted_unique(
            self.hard_drives
                .iter()
                .filter_map(|entry| entry.template.hard_drives.first())
                .map(|drive| drive.capacity),
        )
    }

    /// Operating system reference codes, sorted and without duplicates.
    #[must_use]
    pub fn os_reference_code_options(&self) -> Vec<String> {
        sorted_unique(
            self.operating_systems
                .iter()
                .map(|entry| entry.template.operating_system_reference_code.clone()),
        )
    }

    /// Port speeds in Mbps, in the order the API lists them.
    #[must_use]
    pub fn max_port_speed_options(&self) -> Vec<u32> {
        self.network_components
            .iter()
            .filter_map(|entry| entry.template.network_components.first())
            .map(|component| component.max_speed)
            .collect()
    }
}

fn sorted_unique<T: Ord>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut values: Vec<T> = values.collect();
    values.sort_unstable();
    values.dedup();
    values
}
