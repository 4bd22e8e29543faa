use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("mapping database unavailable at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, MapperError>;
