//! Bare metal server orders placed through `SoftLayer_Hardware::createObject`.
//!
//! The SoftLayer system selects a server matching the attributes of the
//! order and provisions it, or reports an error. See
//! <http://sldn.softlayer.com/reference/services/SoftLayer_Hardware/createObject>
//! for the meaning of each template field.

use serde_json::{json, Map, Value};

use crate::client::Client;
use crate::orders::errors::OrderError;
use crate::orders::HARDWARE_SERVICE;

/// An order for a bare metal server described by a few simple attributes.
///
/// Required for a successful order: `datacenter`, `hostname`, `domain`,
/// `os_reference_code`, and either `fixed_config_key` or `cores` and
/// `memory`.
///
/// # Example
///
/// ```rust
/// use softlayer_api::orders::BareMetalServerOrder;
///
/// let order = BareMetalServerOrder {
///     datacenter: Some("dal05".to_string()),
///     hostname: Some("web01".to_string()),
///     domain: Some("example.com".to_string()),
///     cores: Some(4),
///     memory: Some(8),
///     os_reference_code: Some("UBUNTU_LATEST".to_string()),
///     hourly: true,
///     ..Default::default()
/// };
///
/// let template = order.hardware_instance_template().unwrap();
/// assert_eq!(template["processorCoreAmount"], 4);
/// assert_eq!(template["datacenter"]["name"], "dal05");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BareMetalServerOrder {
    /// Name of the data center the server is provisioned in.
    pub datacenter: Option<String>,

    /// The hostname to assign to the new server.
    pub hostname: Option<String>,

    /// The domain (e.g. `softlayer.com`) for the new server.
    pub domain: Option<String>,

    /// Number of CPU cores (`processorCoreAmount`).
    /// Must not be set together with `fixed_config_key`.
    pub cores: Option<u32>,

    /// RAM in gigabytes (`memoryCapacity`).
    /// Must not be set together with `fixed_config_key`.
    pub memory: Option<u32>,

    /// Key of a fixed configuration preset (`fixedConfigurationPreset.keyName`).
    pub fixed_config_key: Option<String>,

    /// Operating system reference code (`operatingSystemReferenceCode`).
    pub os_reference_code: Option<String>,

    /// Hourly billing when `true`, monthly otherwise (`hourlyBillingFlag`).
    pub hourly: bool,

    /// Use local disks rather than SAN storage (`localDiskFlag`).
    pub use_local_disk: bool,

    /// Id of the public VLAN to join (`primaryNetworkComponent.networkVlan.id`).
    pub public_vlan_id: Option<u64>,

    /// Id of the private VLAN to join (`primaryBackendNetworkComponent.networkVlan.id`).
    pub private_vlan_id: Option<u64>,

    /// Disk sizes in gigabytes (`hardDrives`).
    pub disks: Vec<u32>,

    /// Ids of SSH keys added to the root account (`sshKeys`).
    pub ssh_key_ids: Vec<u64>,

    /// URI of a script run once the server is provisioned (`postInstallScriptUri`).
    pub provision_script_uri: Option<String>,

    /// Only a private network interface when `true` (`privateNetworkOnlyFlag`).
    pub private_network_only: bool,

    /// User metadata associated with the server (`userData`).
    pub user_metadata: Option<String>,

    /// Maximum NIC speed in Mbps, one of 10, 100 or 1000 (`networkComponents.maxSpeed`).
    pub max_port_speed: Option<u32>,
}

impl BareMetalServerOrder {
    /// Returns the `createObject` template described by this order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::FixedConfigConflict`] if `fixed_config_key` is
    /// set together with `cores` or `memory`.
    pub fn hardware_instance_template(&self) -> Result<Map<String, Value>, OrderError> {
        let mut template = Map::new();
        template.insert("hostname".to_string(), json!(self.hostname));
        template.insert("domain".to_string(), json!(self.domain));
        template.insert(
            "operatingSystemReferenceCode".to_string(),
            json!(self.os_reference_code),
        );
        template.insert("localDiskFlag".to_string(), json!(self.use_local_disk));
        template.insert("hourlyBillingFlag".to_string(), json!(self.hourly));

        if let Some(key_name) = &self.fixed_config_key {
            if self.cores.is_some() || self.memory.is_some() {
                return Err(OrderError::FixedConfigConflict);
            }
            template.insert(
                "fixedConfigurationPreset".to_string(),
                json!({ "keyName": key_name }),
            );
        } else {
            template.insert(
                "processorCoreAmount".to_string(),
                json!(self.cores.unwrap_or(0)),
            );
            template.insert("memoryCapacity".to_string(), json!(self.memory.unwrap_or(0)));
        }

        if self.private_network_only {
            template.insert("privateNetworkOnlyFlag".to_string(), json!(true));
        }
        if let Some(datacenter) = &self.datacenter {
            template.insert("datacenter".to_string(), json!({ "name": datacenter }));
        }
        if let Some(user_metadata) = &self.user_metadata {
            template.insert("userData".to_string(), json!([{ "value": user_metadata }]));
        }
        if let Some(max_port_speed) = self.max_port_speed {
            template.insert(
                "networkComponents".to_string(),
                json!([{ "maxSpeed": max_port_speed }]),
            );
        }
        if let Some(uri) = &self.provision_script_uri {
            template.insert("postInstallScriptUri".to_string(), json!(uri));
        }
        if let Some(vlan_id) = self.public_vlan_id {
            template.insert(
                "primaryNetworkComponent".to_string(),
                json!({ "networkVlan": { "id": vlan_id } }),
            );
        }
        if let Some(vlan_id) = self.private_vlan_id {
            template.insert(
                "primaryBackendNetworkComponent".to_string(),
                json!({ "networkVlan": { "id": vlan_id } }),
            );
        }
        if !self.ssh_key_ids.is_empty() {
            let keys: Vec<Value> = self.ssh_key_ids.iter().map(|id| json!({ "id": id })).collect();
            template.insert("sshKeys".to_string(), Value::Array(keys));
        }
        if !self.disks.is_empty() {
            let drives: Vec<Value> = self
                .disks
                .iter()
                .map(|capacity| json!({ "capacity": capacity }))
                .collect();
            template.insert("hardDrives".to_string(), Value::Array(drives));
        }

        Ok(template)
    }

    /// Asks the API to validate this order without placing it.
    ///
    /// Returns the order template generated by the API. No server is created
    /// and billing is not affected.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] if the template cannot be built or the call fails.
    pub async fn verify(&self, client: &Client) -> Result<Value, OrderError> {
        self.verify_with(client, |template| template).await
    }

    /// Like [`verify`](Self::verify), letting `modify` edit the template
    /// before it is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] if the template cannot be built or the call fails.
    pub async fn verify_with<F>(&self, client: &Client, modify: F) -> Result<Value, OrderError>
    where
        F: FnOnce(Map<String, Value>) -> Map<String, Value>,
    {
        let template = modify(self.hardware_instance_template()?);
        let hardware = client.service(HARDWARE_SERVICE)?;

        tracing::debug!(hostname = ?self.hostname, "Verifying bare metal server order");
        Ok(hardware.generate_order_template(&template).await?)
    }

    /// Places the order. If this succeeds the new server is billed.
    ///
    /// Returns the server record created by the API.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] if the template cannot be built or the call fails.
    pub async fn place_order(&self, client: &Client) -> Result<Value, OrderError> {
        self.place_order_with(client, |template| template).await
    }

    /// Like [`place_order`](Self::place_order), letting `modify` edit the
    /// template before it is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] if the template cannot be built or the call fails.
    pub async fn place_order_with<F>(&self, client: &Client, modify: F) -> Result<Value, OrderError>
    where
        F: FnOnce(Map<String, Value>) -> Map<String, Value>,
    {
        let template = modify(self.hardware_instance_template()?);
        let hardware = client.service(HARDWARE_SERVICE)?;

        tracing::debug!(hostname = ?self.hostname, "Placing bare metal server order");
        Ok(hardware.create_object(&template).await?)
    }
}
