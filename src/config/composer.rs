//! Compose an install config from resolved inputs plus defaults

use crate::config::{validate, Defaults, Dependencies};
use crate::types::{InstallConfig, InstallConfigError, ObjectMeta, Result, SCHEMA_VERSION};
use tracing::{debug, error};

#[derive(Debug, Clone, Default)]
pub struct Composer {
    defaults: Defaults,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: Defaults) -> Self {
        Self { defaults }
    }

    /// Build an install config. Performs no I/O; equal inputs produce equal
    /// output.
    ///
    /// Networking and machine pools always come from the defaults table,
    /// whichever platform was selected.
    pub fn generate<D>(&self, dependencies: &D) -> Result<InstallConfig>
    where
        D: Dependencies + ?Sized,
    {
        let ssh_key = dependencies
            .ssh_public_key()
            .ok_or(InstallConfigError::MissingDependency("ssh public key"))?;
        let base_domain = dependencies
            .base_domain()
            .ok_or(InstallConfigError::MissingDependency("base domain"))?;
        let cluster_name = dependencies
            .cluster_name()
            .ok_or(InstallConfigError::MissingDependency("cluster name"))?;
        let pull_secret = dependencies
            .pull_secret()
            .ok_or(InstallConfigError::MissingDependency("pull secret"))?;
        let platform = dependencies
            .platform()
            .ok_or(InstallConfigError::MissingDependency("platform"))?;

        debug!(
            "Composing install config for {}.{} on {}",
            cluster_name,
            base_domain,
            platform.name()
        );

        let config = InstallConfig {
            api_version: SCHEMA_VERSION.to_string(),
            metadata: ObjectMeta {
                name: cluster_name.to_string(),
            },
            base_domain: base_domain.to_string(),
            networking: self.defaults.networking(),
            machines: self.defaults.machine_pools(),
            platform: platform.clone(),
            pull_secret: pull_secret.to_string(),
            ssh_key: ssh_key.to_string(),
        };

        if let Err(e) = validate(&config) {
            error!("Composed install config is invalid: {}", e);
            return Err(InstallConfigError::InvalidDefaults(e));
        }

        Ok(config)
    }
}
