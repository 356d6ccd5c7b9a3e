//! Install config invariants
//!
//! Checks run in a fixed order and stop at the first violation.

use crate::types::{InstallConfig, InstallConfigDocument, ValidationError};

struct Fields<'a> {
    api_version: &'a str,
    name: &'a str,
    base_domain: &'a str,
    platforms: Vec<&'static str>,
    pull_secret: &'a str,
}

pub fn validate(config: &InstallConfig) -> Result<(), ValidationError> {
    check(Fields {
        api_version: &config.api_version,
        name: &config.metadata.name,
        base_domain: &config.base_domain,
        platforms: vec![config.platform.name()],
        pull_secret: &config.pull_secret,
    })
}

/// Validate a parsed document before it is converted into an [`InstallConfig`].
pub fn validate_document(document: &InstallConfigDocument) -> Result<(), ValidationError> {
    check(Fields {
        api_version: &document.api_version,
        name: &document.metadata.name,
        base_domain: &document.base_domain,
        platforms: document.platform.configured(),
        pull_secret: &document.pull_secret,
    })
}

fn check(fields: Fields<'_>) -> Result<(), ValidationError> {
    require("apiVersion", fields.api_version)?;
    require("metadata.name", fields.name)?;
    require("baseDomain", fields.base_domain)?;

    match fields.platforms.len() {
        1 => {}
        0 => return Err(ValidationError::NoPlatform),
        _ => return Err(ValidationError::MultiplePlatforms(fields.platforms)),
    }

    require("pullSecret", fields.pull_secret)
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
