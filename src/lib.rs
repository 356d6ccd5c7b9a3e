//! Install Config - cluster installation configuration
//!
//! Materializes a fully-specified install config either by composing it
//! from resolved inputs (SSH key, base domain, cluster name, pull secret,
//! platform) plus built-in defaults, or by loading and validating a
//! previously persisted `install-config.yml`.

pub mod asset;
pub mod config;
pub mod types;

pub use asset::{DirectoryFetcher, File, FileFetcher, InstallConfigAsset};
pub use config::{Composer, Defaults, Dependencies, ResolvedDependencies};
pub use types::{InstallConfig, InstallConfigError, Platform, ValidationError};
