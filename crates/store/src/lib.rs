use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::info;

pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write `data` as indented UTF-8 JSON to `dir/filename`, creating `dir` if needed.
///
/// Non-ASCII text is written as-is rather than escaped.
pub async fn save_json<T: Serialize + ?Sized>(
    dir: &Path,
    filename: &str,
    data: &T,
) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir)
        .await
        .map_err(|source| StoreError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

    let path = dir.join(filename);
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');

    fs::write(&path, json)
        .await
        .map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), "Saved JSON");
    Ok(path)
}

/// Read a file written by [`save_json`] back into `T`
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(serde_json::from_str(&content)?)
}
