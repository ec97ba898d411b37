use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

/// One regular file as seen by the report: where it is, how long it is and
/// which extension group it falls into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Length in bytes
    pub len: u64,
    /// Extension including the leading dot, empty if the file has none
    pub extension: String,
}

impl FileRecord {
    /// Look up the length of `path` and derive its extension
    pub fn from_path(path: PathBuf) -> Result<Self> {
        let metadata = std::fs::metadata(&path).map_err(|e| ReportError::io(&path, e))?;
        let extension = extension_of(&path);

        Ok(Self {
            path,
            len: metadata.len(),
            extension,
        })
    }
}

/// Extension of the final path segment with its leading dot.
///
/// Follows `Path::extension`: dotfiles such as `.bashrc` and names ending in
/// a dot have no extension. Matching is case-sensitive.
pub fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy()),
        _ => String::new(),
    }
}
