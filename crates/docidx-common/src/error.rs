//! Error types for the setup-failure paths.
//!
//! Only setup failures are represented as values. Per-TU parse failures and
//! per-declaration rejections are absorbed by logging further down the
//! pipeline and never reach this type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("compile database not found: {path}")]
    CompileDatabaseMissing { path: PathBuf },

    #[error("compile database at {path} could not be parsed: {source}")]
    CompileDatabaseUnparsable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read compile database at {path}: {source}")]
    CompileDatabaseIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file not found: {path}")]
    ConfigMissing { path: PathBuf },

    #[error("config file at {path} could not be parsed: {source}")]
    ConfigUnparsable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read config file at {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
