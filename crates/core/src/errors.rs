use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration problems, surfaced at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no networks configured")]
    NoNetworks,

    #[error("duplicate network name: {0}")]
    DuplicateNetwork(String),

    #[error("network {0} has invalid slot timing")]
    InvalidTiming(String),

    #[error("unable to read network config {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to parse network config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Violations of the drill-down parameter hierarchy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{finer} parameter requires {coarser} parameter")]
    MissingDependency {
        finer: &'static str,
        coarser: &'static str,
    },

    #[error("Column parameter must be between 0 and 127, found {0}")]
    ColumnOutOfRange(i64),
}
