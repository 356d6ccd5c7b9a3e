//! Install config asset
//!
//! Owns the single stored install config produced by either entry point and
//! knows how to write it back out.

mod fetcher;

pub use fetcher::{DirectoryFetcher, File, FileFetcher};

#[cfg(test)]
pub use fetcher::MockFileFetcher;

use crate::config::{self, Composer, Dependencies, INSTALL_CONFIG_FILENAME};
use crate::types::{InstallConfig, InstallConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default)]
pub struct InstallConfigAsset {
    composer: Composer,
    config: Option<InstallConfig>,
}

impl InstallConfigAsset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_composer(composer: Composer) -> Self {
        Self {
            composer,
            config: None,
        }
    }

    pub fn config(&self) -> Option<&InstallConfig> {
        self.config.as_ref()
    }

    pub fn into_config(self) -> Option<InstallConfig> {
        self.config
    }

    /// Compose the install config, replacing whatever was stored before.
    /// Nothing is stored when composition fails.
    pub fn generate<D>(&mut self, dependencies: &D) -> Result<()>
    where
        D: Dependencies + ?Sized,
    {
        self.config = None;
        let config = self.composer.generate(dependencies)?;
        info!("Generated install config for cluster {}", config.metadata.name);
        self.config = Some(config);
        Ok(())
    }

    /// Load a persisted install config, replacing whatever was stored before.
    ///
    /// Returns `Ok(false)` when the document does not exist; the caller
    /// decides whether to fall back to [`generate`](Self::generate).
    pub fn load<F>(&mut self, fetcher: &F) -> Result<bool>
    where
        F: FileFetcher + ?Sized,
    {
        self.config = None;
        match config::load(fetcher)? {
            Some(config) => {
                self.config = Some(config);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Serialized form of the stored config, empty when nothing is stored.
    pub fn files(&self) -> Result<Vec<File>> {
        let Some(config) = &self.config else {
            return Ok(Vec::new());
        };

        let data = serde_yaml::to_string(config).map_err(InstallConfigError::Serialize)?;
        Ok(vec![File {
            filename: INSTALL_CONFIG_FILENAME.to_string(),
            data: data.into_bytes(),
        }])
    }

    /// Write [`files`](Self::files) below `dir`, creating it if needed.
    pub fn persist(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let files = self.files()?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let path = dir.join(&file.filename);
            fs::write(&path, &file.data)?;
            info!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
