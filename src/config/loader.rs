//! Install config loader
//!
//! Outcomes of [`load`]:
//! 1. `Ok(Some(config))` - the document was fetched, parsed and validated
//! 2. `Ok(None)` - the fetcher reported the document as not found
//! 3. `Err(_)` - any other fetch failure, a parse failure or a validation failure

use crate::asset::{File, FileFetcher};
use crate::types::{InstallConfig, InstallConfigDocument, InstallConfigError, Result};
use tracing::{debug, info, warn};

/// Well-known name of the persisted install config.
pub const INSTALL_CONFIG_FILENAME: &str = "install-config.yml";

pub fn load<F>(fetcher: &F) -> Result<Option<InstallConfig>>
where
    F: FileFetcher + ?Sized,
{
    let file = match fetcher.fetch_by_name(INSTALL_CONFIG_FILENAME) {
        Ok(file) => file,
        Err(e) if e.is_not_found() => {
            debug!("No {} found", INSTALL_CONFIG_FILENAME);
            return Ok(None);
        }
        Err(e) => {
            warn!("Failed to fetch {}: {}", INSTALL_CONFIG_FILENAME, e);
            return Err(e.into());
        }
    };

    let config = parse(&file)?;
    info!("Loaded install config for cluster {}", config.metadata.name);
    Ok(Some(config))
}

/// Parse and validate a fetched install config document.
pub fn parse(file: &File) -> Result<InstallConfig> {
    if file.data.iter().all(u8::is_ascii_whitespace) {
        return Err(InstallConfigError::EmptyDocument {
            filename: file.filename.clone(),
        });
    }

    let document: InstallConfigDocument =
        serde_yaml::from_slice(&file.data).map_err(|source| InstallConfigError::Parse {
            filename: file.filename.clone(),
            source,
        })?;

    Ok(InstallConfig::try_from(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::MockFileFetcher;
    use crate::config::Defaults;
    use crate::types::{AwsPlatform, FetchError, ObjectMeta, Platform, ValidationError};
    use pretty_assertions::assert_eq;
    use std::io;

    const PULL_SECRET: &str = r#"{"auths":{"example.com":{"auth":"authorization value"}}}"#;

    const VALID: &str = r#"
apiVersion: v1beta1
metadata:
  name: test-cluster
baseDomain: test-domain
platform:
  aws:
    region: us-east-1
pullSecret: "{\"auths\":{\"example.com\":{\"auth\":\"authorization value\"}}}"
"#;

    fn fetcher_returning(data: &str) -> MockFileFetcher {
        let data = data.as_bytes().to_vec();
        let mut fetcher = MockFileFetcher::new();
        fetcher
            .expect_fetch_by_name()
            .withf(|name: &str| name == INSTALL_CONFIG_FILENAME)
            .times(1)
            .returning(move |name| {
                Ok(File {
                    filename: name.to_string(),
                    data: data.clone(),
                })
            });
        fetcher
    }

    fn fetcher_failing(kind: io::ErrorKind) -> MockFileFetcher {
        let mut fetcher = MockFileFetcher::new();
        fetcher
            .expect_fetch_by_name()
            .times(1)
            .returning(move |name| {
                Err(FetchError::new(name, io::Error::new(kind, "fetch failed")))
            });
        fetcher
    }

    #[test]
    fn test_load_valid() {
        let config = load(&fetcher_returning(VALID)).unwrap().unwrap();
        let defaults = Defaults::default();

        let expected = InstallConfig {
            api_version: "v1beta1".to_string(),
            metadata: ObjectMeta {
                name: "test-cluster".to_string(),
            },
            base_domain: "test-domain".to_string(),
            networking: defaults.networking(),
            machines: defaults.machine_pools(),
            platform: Platform::Aws(AwsPlatform {
                region: "us-east-1".to_string(),
                ..Default::default()
            }),
            pull_secret: PULL_SECRET.to_string(),
            ssh_key: String::new(),
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_load_missing_required_fields() {
        let err = load(&fetcher_returning("metadata:\n  name: test-cluster\n")).unwrap_err();
        assert!(matches!(
            err,
            InstallConfigError::Validation(ValidationError::MissingField("apiVersion"))
        ));
    }

    #[test]
    fn test_load_empty() {
        let err = load(&fetcher_returning("")).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_load_not_yaml() {
        let err = load(&fetcher_returning("This is not yaml.")).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_load_wrong_shape() {
        let err = load(&fetcher_returning("machines: 7\n")).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_load_no_platform() {
        let err = load(&fetcher_returning(
            "apiVersion: v1beta1\nmetadata:\n  name: c\nbaseDomain: d\npullSecret: s\n",
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            InstallConfigError::Validation(ValidationError::NoPlatform)
        ));
    }

    #[test]
    fn test_load_two_platforms() {
        let data = concat!(
            "apiVersion: v1beta1\nmetadata:\n  name: c\nbaseDomain: d\npullSecret: s\n",
            "platform:\n  aws:\n    region: r\n  none: {}\n",
        );
        let err = load(&fetcher_returning(data)).unwrap_err();
        assert!(matches!(
            err,
            InstallConfigError::Validation(ValidationError::MultiplePlatforms(_))
        ));
    }

    #[test]
    fn test_load_file_not_found() {
        let found = load(&fetcher_failing(io::ErrorKind::NotFound)).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_load_fetch_error() {
        let err = load(&fetcher_failing(io::ErrorKind::PermissionDenied)).unwrap_err();
        match err {
            InstallConfigError::Fetch(e) => {
                assert_eq!(e.filename, INSTALL_CONFIG_FILENAME);
                assert_eq!(e.source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_null_sections_use_defaults() {
        let data = format!("{VALID}networking:\nmachines:\n");
        let config = load(&fetcher_returning(&data)).unwrap().unwrap();
        let defaults = Defaults::default();
        assert_eq!(config.networking, defaults.networking());
        assert_eq!(config.machines, defaults.machine_pools());
    }

    #[test]
    fn test_load_keeps_overrides() {
        let data = format!(
            "{VALID}networking:\n  type: OVNKubernetes\n\
             machines:\n- name: master\n  replicas: 0\n- name: worker\n"
        );
        let config = load(&fetcher_returning(&data)).unwrap().unwrap();
        assert_eq!(config.networking.network_type, "OVNKubernetes");
        assert_eq!(config.networking.machine_cidr.to_string(), "10.0.0.0/16");
        assert_eq!(config.machines[0].replicas, Some(0));
        assert_eq!(config.machines[1].replicas, None);
    }
}
