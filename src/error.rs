use std::path::PathBuf;
use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, OutlineError>;

#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum OutlineError {
    /// The parse tree nests deeper than the configured limit.
    #[error("Outline depth limit of {limit} exceeded; the parse tree is too deep or malformed")]
    DepthLimitExceeded { limit: usize },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The input does not describe a parse tree.
    #[error("Invalid parse tree: {0}")]
    InvalidTree(#[source] serde_json::Error),

    #[error("Failed to serialize outline: {0}")]
    Serialize(#[source] serde_json::Error),
}
