//! Install config composition, loading and validation
//!
//! Two entry points produce an [`InstallConfig`](crate::types::InstallConfig):
//! 1. [`Composer::generate`] from resolved [`Dependencies`] plus [`Defaults`]
//! 2. [`load`] from a persisted document obtained through a file fetcher
//!
//! Both finish with the shared validator.

mod composer;
mod defaults;
mod inputs;
mod loader;
mod registry;
mod validate;

pub use composer::Composer;
pub use defaults::{
    Defaults, DEFAULT_CLUSTER_NETWORK_CIDR, DEFAULT_HOST_SUBNET_LENGTH, DEFAULT_MACHINE_CIDR,
    DEFAULT_NETWORK_TYPE, DEFAULT_REPLICAS, DEFAULT_SERVICE_CIDR, MASTER_POOL, WORKER_POOL,
};
pub use inputs::{ClusterInputs, InputsFile, INPUTS_ENV};
pub use loader::{load, parse, INSTALL_CONFIG_FILENAME};
pub use registry::{Dependencies, ResolvedDependencies};
pub use validate::{validate, validate_document};
