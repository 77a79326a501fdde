use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?}, expected low, medium or high")]
pub struct ParseDifficultyError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

/// The background search ended without delivering a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search worker exited without a result")]
pub struct WorkerLost;
