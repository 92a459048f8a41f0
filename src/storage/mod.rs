use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::serialize::EXPORT_FILE_NAME;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read document {}", path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write document {}", path.display())]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("reading {} ended without a result", path.display())]
    ReadInterrupted { path: PathBuf },
    #[error("no export directory configured")]
    MissingExportDir,
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

pub fn export_path(dir: &Path) -> PathBuf {
    dir.join(EXPORT_FILE_NAME)
}

/// Writes `contents` to `ui-config.json` inside `dir`, overwriting any
/// previous export.
pub fn write_export(dir: &Path, contents: &str) -> StorageResult<PathBuf> {
    let path = export_path(dir);
    let write_error = |source| StorageError::WriteDocument {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(write_error)?;
    fs::write(&path, contents).map_err(write_error)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "exported style config");
    Ok(path)
}

pub fn read_document(path: &Path) -> StorageResult<String> {
    fs::read_to_string(path).map_err(|source| StorageError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })
}
