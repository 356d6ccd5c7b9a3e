//! Built-in defaults for the structural parts of an install config
//!
//! The composer applies these unconditionally, and the document loader fills
//! absent `networking` and `machines` sections from the same table.

use crate::types::{ClusterNetwork, IpNet, MachinePool, Networking};
use std::net::Ipv4Addr;

pub const DEFAULT_MACHINE_CIDR: IpNet = IpNet::v4(Ipv4Addr::new(10, 0, 0, 0), 16);
pub const DEFAULT_SERVICE_CIDR: IpNet = IpNet::v4(Ipv4Addr::new(172, 30, 0, 0), 16);
pub const DEFAULT_CLUSTER_NETWORK_CIDR: IpNet = IpNet::v4(Ipv4Addr::new(10, 128, 0, 0), 14);
pub const DEFAULT_HOST_SUBNET_LENGTH: u32 = 9;
pub const DEFAULT_NETWORK_TYPE: &str = "OpenshiftSDN";
pub const DEFAULT_REPLICAS: i64 = 3;

pub const MASTER_POOL: &str = "master";
pub const WORKER_POOL: &str = "worker";

/// Table of default values. Callers can substitute their own through
/// [`crate::config::Composer::with_defaults`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub machine_cidr: IpNet,
    pub service_cidr: IpNet,
    pub network_type: String,
    pub cluster_networks: Vec<ClusterNetwork>,
    /// Pool names in output order.
    pub machine_pools: Vec<String>,
    pub replicas: Option<i64>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            machine_cidr: DEFAULT_MACHINE_CIDR,
            service_cidr: DEFAULT_SERVICE_CIDR,
            network_type: DEFAULT_NETWORK_TYPE.to_string(),
            cluster_networks: vec![ClusterNetwork {
                cidr: DEFAULT_CLUSTER_NETWORK_CIDR,
                host_subnet_length: DEFAULT_HOST_SUBNET_LENGTH,
            }],
            machine_pools: vec![MASTER_POOL.to_string(), WORKER_POOL.to_string()],
            replicas: Some(DEFAULT_REPLICAS),
        }
    }
}

impl Defaults {
    pub fn networking(&self) -> Networking {
        Networking {
            machine_cidr: self.machine_cidr,
            network_type: self.network_type.clone(),
            service_cidr: self.service_cidr,
            cluster_networks: self.cluster_networks.clone(),
        }
    }

    pub fn machine_pools(&self) -> Vec<MachinePool> {
        self.machine_pools
            .iter()
            .map(|name| MachinePool {
                name: name.clone(),
                replicas: self.replicas,
            })
            .collect()
    }
}
