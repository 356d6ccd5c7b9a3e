//! Target platform selection
//!
//! In memory a [`Platform`] is always exactly one variant. On the wire it is
//! a map keyed by variant name, read through [`PlatformFields`] so that
//! documents naming zero or several platforms can be reported by the
//! validator instead of failing to parse.

use crate::types::{IpNet, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "PlatformFields")]
pub enum Platform {
    Aws(AwsPlatform),
    Libvirt(LibvirtPlatform),
    OpenStack(OpenStackPlatform),
    None,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Aws(_) => "aws",
            Platform::Libvirt(_) => "libvirt",
            Platform::OpenStack(_) => "openstack",
            Platform::None => "none",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsPlatform {
    pub region: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub user_tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibvirtPlatform {
    #[serde(rename = "URI")]
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<LibvirtNetwork>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibvirtNetwork {
    #[serde(rename = "if")]
    pub interface: String,
    pub ip_range: IpNet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackPlatform {
    pub region: String,
    pub base_image: String,
    pub cloud: String,
    pub external_network: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonePlatform {}

/// Wire form of the platform map: one optional slot per variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libvirt: Option<LibvirtPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openstack: Option<OpenStackPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub none: Option<NonePlatform>,
}

impl PlatformFields {
    /// Names of the populated variants, in declaration order.
    pub fn configured(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.aws.is_some() {
            names.push("aws");
        }
        if self.libvirt.is_some() {
            names.push("libvirt");
        }
        if self.openstack.is_some() {
            names.push("openstack");
        }
        if self.none.is_some() {
            names.push("none");
        }
        names
    }

    pub fn into_platform(self) -> Result<Platform, ValidationError> {
        let configured = self.configured();
        if configured.len() > 1 {
            return Err(ValidationError::MultiplePlatforms(configured));
        }

        match self {
            PlatformFields { aws: Some(aws), .. } => Ok(Platform::Aws(aws)),
            PlatformFields {
                libvirt: Some(libvirt),
                ..
            } => Ok(Platform::Libvirt(libvirt)),
            PlatformFields {
                openstack: Some(openstack),
                ..
            } => Ok(Platform::OpenStack(openstack)),
            PlatformFields { none: Some(_), .. } => Ok(Platform::None),
            _ => Err(ValidationError::NoPlatform),
        }
    }
}

impl From<Platform> for PlatformFields {
    fn from(platform: Platform) -> Self {
        let mut fields = PlatformFields::default();
        match platform {
            Platform::Aws(aws) => fields.aws = Some(aws),
            Platform::Libvirt(libvirt) => fields.libvirt = Some(libvirt),
            Platform::OpenStack(openstack) => fields.openstack = Some(openstack),
            Platform::None => fields.none = Some(NonePlatform {}),
        }
        fields
    }
}
