//! Inputs file parsing
//!
//! A TOML file standing in for the sibling computations when running from
//! the command line:
//!
//! ```toml
//! [cluster]
//! name = "test-cluster"
//! base_domain = "example.com"
//! pull_secret_file = "pull-secret.json"
//! ssh_key_file = "~/.ssh/id_ed25519.pub"
//!
//! [platform.aws]
//! region = "us-east-1"
//! ```
//!
//! Search order when no path is given:
//! 1. $INSTALL_CONFIG_INPUTS
//! 2. ~/.config/install-config/inputs.toml

use crate::config::ResolvedDependencies;
use crate::types::{InstallConfigError, PlatformFields, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const INPUTS_ENV: &str = "INSTALL_CONFIG_INPUTS";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputsFile {
    #[serde(default)]
    pub cluster: ClusterInputs,
    #[serde(default)]
    pub platform: PlatformFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterInputs {
    pub name: Option<String>,
    pub base_domain: Option<String>,
    pub pull_secret: Option<String>,
    pub pull_secret_file: Option<PathBuf>,
    pub ssh_key: Option<String>,
    pub ssh_key_file: Option<PathBuf>,
}

impl InputsFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| InstallConfigError::Inputs(format!("Failed to parse inputs: {}", e)))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading inputs from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            InstallConfigError::Inputs(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Locate and read the inputs file. `explicit` wins over the search path.
    pub fn discover(explicit: Option<&Path>) -> Result<(PathBuf, Self)> {
        if let Some(path) = explicit {
            return Ok((path.to_path_buf(), Self::from_path(path)?));
        }

        let mut candidates = Vec::new();
        if let Ok(path) = std::env::var(INPUTS_ENV) {
            candidates.push(PathBuf::from(path));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("install-config").join("inputs.toml"));
        }

        for path in candidates {
            if path.exists() {
                let inputs = Self::from_path(&path)?;
                return Ok((path, inputs));
            }
        }

        Err(InstallConfigError::Inputs(format!(
            "No inputs file found (pass --inputs or set ${})",
            INPUTS_ENV
        )))
    }

    /// Resolve into registry values. Relative `*_file` paths are taken
    /// relative to `base_dir`.
    ///
    /// Values that cannot be resolved are left unset and surface as missing
    /// dependencies when composing.
    pub fn resolve(&self, base_dir: &Path) -> Result<ResolvedDependencies> {
        let mut resolved = ResolvedDependencies::new();

        if let Some(name) = &self.cluster.name {
            resolved = resolved.with_cluster_name(name.clone());
        }
        if let Some(domain) = &self.cluster.base_domain {
            resolved = resolved.with_base_domain(domain.clone());
        }

        let pull_secret = match (&self.cluster.pull_secret, &self.cluster.pull_secret_file) {
            (Some(secret), _) => Some(secret.clone()),
            (None, Some(path)) => Some(read_trimmed(&resolve_path(base_dir, path))?),
            (None, None) => None,
        };
        if let Some(secret) = pull_secret {
            resolved = resolved.with_pull_secret(secret);
        }

        // An SSH key is optional; leaving it out means an empty key.
        let ssh_key = match (&self.cluster.ssh_key, &self.cluster.ssh_key_file) {
            (Some(key), _) => key.clone(),
            (None, Some(path)) => read_trimmed(&resolve_path(base_dir, path))?,
            (None, None) => String::new(),
        };
        resolved = resolved.with_ssh_public_key(ssh_key);

        match self.platform.clone().into_platform() {
            Ok(platform) => resolved = resolved.with_platform(platform),
            Err(e) => warn!("Inputs do not select a platform: {}", e),
        }

        Ok(resolved)
    }
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn read_trimmed(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| {
        InstallConfigError::Inputs(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(content.trim().to_string())
}
