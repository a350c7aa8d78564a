use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read theme storage: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write theme storage: {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse theme storage entry \"{key}\"")]
    Parse {
        key: String,
        source: serde_json::Error,
    },
    #[error("failed to serialize theme state")]
    Serialize(#[from] serde_json::Error),
}
