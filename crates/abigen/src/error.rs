//! Errors raised while converting a single artifact.

use std::path::PathBuf;

/// Errors that can occur while converting an artifact into a binding file.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a JSON artifact", .0.display())]
    NotJson(PathBuf),

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain an \"abi\" property", .0.display())]
    MissingAbi(PathBuf),

    #[error("\"abi\" property in {} is not an array", .0.display())]
    AbiNotArray(PathBuf),

    #[error("invalid export name derived from {0:?}")]
    InvalidExportName(String),

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
