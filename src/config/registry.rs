//! Inputs the composer reads from sibling computations

use crate::types::Platform;

/// Typed view over already-resolved install inputs.
///
/// Each getter returns `None` when the value was never resolved or could
/// not be resolved into the expected shape.
pub trait Dependencies {
    fn ssh_public_key(&self) -> Option<&str>;
    fn base_domain(&self) -> Option<&str>;
    fn cluster_name(&self) -> Option<&str>;
    fn pull_secret(&self) -> Option<&str>;
    fn platform(&self) -> Option<&Platform>;
}

/// In-memory set of resolved inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDependencies {
    ssh_public_key: Option<String>,
    base_domain: Option<String>,
    cluster_name: Option<String>,
    pull_secret: Option<String>,
    platform: Option<Platform>,
}

impl ResolvedDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ssh_public_key(mut self, key: impl Into<String>) -> Self {
        self.ssh_public_key = Some(key.into());
        self
    }

    pub fn with_base_domain(mut self, domain: impl Into<String>) -> Self {
        self.base_domain = Some(domain.into());
        self
    }

    pub fn with_cluster_name(mut self, name: impl Into<String>) -> Self {
        self.cluster_name = Some(name.into());
        self
    }

    pub fn with_pull_secret(mut self, secret: impl Into<String>) -> Self {
        self.pull_secret = Some(secret.into());
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

impl Dependencies for ResolvedDependencies {
    fn ssh_public_key(&self) -> Option<&str> {
        self.ssh_public_key.as_deref()
    }

    fn base_domain(&self) -> Option<&str> {
        self.base_domain.as_deref()
    }

    fn cluster_name(&self) -> Option<&str> {
        self.cluster_name.as_deref()
    }

    fn pull_secret(&self) -> Option<&str> {
        self.pull_secret.as_deref()
    }

    fn platform(&self) -> Option<&Platform> {
        self.platform.as_ref()
    }
}
