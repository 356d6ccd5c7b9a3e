use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallConfigError {
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{filename} is empty")]
    EmptyDocument { filename: String },

    #[error("Failed to parse {filename}: {source}")]
    Parse {
        filename: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid install config: {0}")]
    Validation(#[from] ValidationError),

    /// The composer produced a config its own validator rejects.
    #[error("Generated install config failed validation: {0}")]
    InvalidDefaults(#[source] ValidationError),

    #[error("Failed to serialize install config: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Invalid inputs: {0}")]
    Inputs(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl InstallConfigError {
    /// True for content that is not a well-formed install config document.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::EmptyDocument { .. } | Self::Parse { .. })
    }
}

/// First invariant an install config violates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("exactly one platform must be configured, found none")]
    NoPlatform,

    #[error("exactly one platform must be configured, found {}", .0.join(", "))]
    MultiplePlatforms(Vec<&'static str>),
}

/// Failure reported by a [`crate::asset::FileFetcher`].
#[derive(Error, Debug)]
#[error("Failed to fetch {filename}: {source}")]
pub struct FetchError {
    pub filename: String,
    #[source]
    pub source: io::Error,
}

impl FetchError {
    pub fn new(filename: impl Into<String>, source: io::Error) -> Self {
        Self {
            filename: filename.into(),
            source,
        }
    }

    pub fn not_found(filename: impl Into<String>) -> Self {
        Self::new(filename, io::Error::from(io::ErrorKind::NotFound))
    }

    pub fn is_not_found(&self) -> bool {
        self.source.kind() == io::ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, InstallConfigError>;
