//! Install config document types

use crate::config::{validate_document, Defaults};
use crate::types::{IpNet, Platform, PlatformFields, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};

/// Format identifier written to `apiVersion`.
pub const SCHEMA_VERSION: &str = "v1beta1";

/// A fully-specified cluster install configuration.
///
/// Built by [`crate::config::Composer`] or converted from a parsed
/// [`InstallConfigDocument`]; both paths go through the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallConfig {
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub base_domain: String,
    pub networking: Networking,
    pub machines: Vec<MachinePool>,
    pub platform: Platform,
    pub pull_secret: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssh_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Networking {
    #[serde(rename = "machineCIDR")]
    pub machine_cidr: IpNet,
    #[serde(rename = "type")]
    pub network_type: String,
    #[serde(rename = "serviceCIDR")]
    pub service_cidr: IpNet,
    #[serde(rename = "clusterNetworks")]
    pub cluster_networks: Vec<ClusterNetwork>,
}

impl Default for Networking {
    fn default() -> Self {
        Defaults::default().networking()
    }
}

/// Pod network range and the per-node subnet size carved out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNetwork {
    pub cidr: IpNet,
    pub host_subnet_length: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachinePool {
    pub name: String,
    /// `None` leaves the count to downstream defaults; `Some(0)` is an
    /// explicit empty pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
}

/// Deserialization shape of a persisted install config.
///
/// Missing scalars come back empty and `platform` keeps every variant slot,
/// leaving required-field and platform checks to the validator. Missing
/// or null `networking` and `machines` fill from the standard [`Defaults`];
/// an explicit empty `machines: []` stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallConfigDocument {
    pub api_version: String,
    pub metadata: ObjectMeta,
    pub base_domain: String,
    pub networking: Networking,
    #[serde(deserialize_with = "machines_or_defaults")]
    pub machines: Vec<MachinePool>,
    pub platform: PlatformFields,
    pub pull_secret: String,
    pub ssh_key: String,
}

impl Default for InstallConfigDocument {
    fn default() -> Self {
        let defaults = Defaults::default();
        Self {
            api_version: String::new(),
            metadata: ObjectMeta::default(),
            base_domain: String::new(),
            networking: defaults.networking(),
            machines: defaults.machine_pools(),
            platform: PlatformFields::default(),
            pull_secret: String::new(),
            ssh_key: String::new(),
        }
    }
}

fn machines_or_defaults<'de, D>(deserializer: D) -> Result<Vec<MachinePool>, D::Error>
where
    D: Deserializer<'de>,
{
    let machines = Option::<Vec<MachinePool>>::deserialize(deserializer)?;
    Ok(machines.unwrap_or_else(|| Defaults::default().machine_pools()))
}

impl TryFrom<InstallConfigDocument> for InstallConfig {
    type Error = ValidationError;

    fn try_from(document: InstallConfigDocument) -> Result<Self, Self::Error> {
        validate_document(&document)?;

        Ok(InstallConfig {
            api_version: document.api_version,
            metadata: document.metadata,
            base_domain: document.base_domain,
            networking: document.networking,
            machines: document.machines,
            platform: document.platform.into_platform()?,
            pull_secret: document.pull_secret,
            ssh_key: document.ssh_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AwsPlatform;

    #[test]
    fn test_document_defaults_fill_networking_and_machines() {
        let document: InstallConfigDocument =
            serde_yaml::from_str("baseDomain: example.com\n").unwrap();
        let defaults = Defaults::default();
        assert_eq!(document.base_domain, "example.com");
        assert_eq!(document.networking, defaults.networking());
        assert_eq!(document.machines, defaults.machine_pools());
        assert!(document.api_version.is_empty());
    }

    #[test]
    fn test_partial_networking_override() {
        let document: InstallConfigDocument =
            serde_yaml::from_str("networking:\n  serviceCIDR: 172.31.0.0/16\n").unwrap();
        assert_eq!(document.networking.service_cidr.to_string(), "172.31.0.0/16");
        assert_eq!(document.networking.machine_cidr.to_string(), "10.0.0.0/16");
        assert_eq!(document.networking.network_type, "OpenshiftSDN");
    }

    #[test]
    fn test_null_machines_fill_defaults() {
        let document: InstallConfigDocument = serde_yaml::from_str("machines:\n").unwrap();
        assert_eq!(document.machines, Defaults::default().machine_pools());

        let document: InstallConfigDocument = serde_yaml::from_str("machines: []\n").unwrap();
        assert!(document.machines.is_empty());
    }

    #[test]
    fn test_replicas_unset_and_zero_are_distinct() {
        let document: InstallConfigDocument = serde_yaml::from_str(
            "machines:\n- name: master\n  replicas: 0\n- name: worker\n",
        )
        .unwrap();
        assert_eq!(document.machines[0].replicas, Some(0));
        assert_eq!(document.machines[1].replicas, None);
    }

    #[test]
    fn test_try_from_document() {
        let document = InstallConfigDocument {
            api_version: SCHEMA_VERSION.to_string(),
            metadata: ObjectMeta {
                name: "test-cluster".to_string(),
            },
            base_domain: "test-domain".to_string(),
            platform: PlatformFields {
                aws: Some(AwsPlatform {
                    region: "us-east-1".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            pull_secret: "{}".to_string(),
            ..Default::default()
        };
        let config = InstallConfig::try_from(document).unwrap();
        assert_eq!(config.platform.name(), "aws");
        assert_eq!(config.metadata.name, "test-cluster");
    }

    #[test]
    fn test_serialized_field_names() {
        let config = InstallConfig {
            api_version: SCHEMA_VERSION.to_string(),
            metadata: ObjectMeta {
                name: "c".to_string(),
            },
            base_domain: "d".to_string(),
            networking: Networking::default(),
            machines: Defaults::default().machine_pools(),
            platform: Platform::None,
            pull_secret: "s".to_string(),
            ssh_key: String::new(),
        };
        let value = serde_yaml::to_value(&config).unwrap();
        assert_eq!(value["apiVersion"].as_str(), Some("v1beta1"));
        assert_eq!(value["networking"]["machineCIDR"].as_str(), Some("10.0.0.0/16"));
        assert_eq!(
            value["networking"]["clusterNetworks"][0]["hostSubnetLength"].as_u64(),
            Some(9)
        );
        assert!(value["platform"]["none"].is_mapping());
        assert!(value.get("sshKey").is_none());
    }
}
