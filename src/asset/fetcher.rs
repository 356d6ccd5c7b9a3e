//! File fetch collaborator
//!
//! Loaders ask for persisted files by name. Absence is reported as an
//! `io::ErrorKind::NotFound` source so callers can tell it apart from other
//! fetch failures.

use crate::types::FetchError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A named blob of file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub filename: String,
    pub data: Vec<u8>,
}

#[cfg_attr(test, mockall::automock)]
pub trait FileFetcher {
    fn fetch_by_name(&self, name: &str) -> Result<File, FetchError>;
}

/// Fetches files relative to a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileFetcher for DirectoryFetcher {
    fn fetch_by_name(&self, name: &str) -> Result<File, FetchError> {
        let path = self.root.join(name);
        debug!("Fetching {}", path.display());

        let data = fs::read(&path).map_err(|e| FetchError::new(name, e))?;
        Ok(File {
            filename: name.to_string(),
            data,
        })
    }
}
