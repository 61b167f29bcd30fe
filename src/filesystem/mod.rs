// src/filesystem/mod.rs
pub mod drop;
pub mod file;
pub mod picker;

pub use drop::parse_dropped;
pub use file::handle_from_path;
pub use picker::FilePicker;

use crate::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    pub is_hidden: bool,
}

impl PickerEntry {
    pub fn from_path(path: &Path) -> Option<Self> {
        let metadata = std::fs::metadata(path).ok()?;
        let name = path.file_name()?.to_string_lossy().to_string();
        let is_hidden = name.starts_with('.');

        Some(PickerEntry {
            name,
            path: path.to_path_buf(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            is_hidden,
        })
    }
}

/// Expands shell-style patterns. A pattern without matches that names an
/// existing path is kept as is, so literal file names with brackets work.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let before = paths.len();
        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => tracing::warn!(error = %e, "unreadable glob match"),
            }
        }
        if paths.len() == before {
            let literal = PathBuf::from(pattern);
            if literal.exists() {
                paths.push(literal);
            } else {
                tracing::warn!(pattern, "pattern matched nothing");
            }
        }
    }
    Ok(paths)
}
