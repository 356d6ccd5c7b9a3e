//! Install config data model and error types

pub mod errors;
mod install_config;
mod ipnet;
mod platform;

pub use errors::{FetchError, InstallConfigError, Result, ValidationError};
pub use install_config::{
    ClusterNetwork, InstallConfig, InstallConfigDocument, MachinePool, Networking, ObjectMeta,
    SCHEMA_VERSION,
};
pub use ipnet::{IpNet, IpNetError};
pub use platform::{
    AwsPlatform, LibvirtNetwork, LibvirtPlatform, NonePlatform, OpenStackPlatform, Platform,
    PlatformFields,
};
