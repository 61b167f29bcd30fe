// src/filesystem/file.rs
use crate::catalog::FileHandle;
use crate::error::{Result, VaultError};
use std::path::Path;

/// Name and byte size of a regular file, the way a browser exposes a
/// dropped `File`.
pub fn handle_from_path(path: &Path) -> Result<FileHandle> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(VaultError::NotAFile(path.to_path_buf()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| VaultError::NotAFile(path.to_path_buf()))?;

    Ok(FileHandle::new(name, metadata.len()))
}

/// Reads every path, logging and skipping the ones that are not files.
pub fn handles_from_paths<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Vec<FileHandle> {
    paths
        .into_iter()
        .filter_map(|path| match handle_from_path(path) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping dropped path");
                None
            }
        })
        .collect()
}
