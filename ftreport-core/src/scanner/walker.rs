use std::path::{Path, PathBuf};

use jwalk::{DirEntryIter, Parallelism, WalkDir};

use crate::error::{ReportError, Result};

/// Scanner configuration
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Follow symbolic links
    pub follow_symlinks: bool,
    /// Maximum depth to scan (None = unlimited, 1 = direct children only)
    pub max_depth: Option<usize>,
}

/// Lazy sequence of regular file paths below a root directory.
///
/// Within each directory the files come first, then every subdirectory is
/// walked depth-first. Listing order is otherwise the filesystem's own.
pub struct FileEnumerator {
    entries: DirEntryIter<((), ())>,
}

impl Iterator for FileEnumerator {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.entries.next()? {
                Ok(mut entry) => {
                    // jwalk reports unreadable directories on the entry itself
                    if let Some(e) = entry.read_children_error.take() {
                        tracing::debug!("cannot read {}: {e}", entry.path().display());
                        return Some(Err(ReportError::Walk(e)));
                    }
                    if entry.file_type().is_file() {
                        return Some(Ok(entry.path()));
                    }
                }
                Err(e) => {
                    tracing::debug!("walk error: {e}");
                    return Some(Err(ReportError::Walk(e)));
                }
            }
        }
    }
}

/// Start enumerating the regular files below `root`.
///
/// The root is checked up front; nothing is read from it until the returned
/// iterator is advanced.
pub fn enumerate_files(root: &Path, config: &ScanConfig) -> Result<FileEnumerator> {
    let metadata = match std::fs::metadata(root) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ReportError::PathNotFound(root.to_path_buf()));
        }
        Err(e) => return Err(ReportError::io(root, e)),
    };
    if !metadata.is_dir() {
        return Err(ReportError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(config.follow_symlinks)
        .sort(false)
        .parallelism(Parallelism::Serial)
        .process_read_dir(|_depth, _path, _read_dir_state, children| {
            // Stable, so listing order survives within files and within dirs
            children.sort_by_key(|entry| match entry {
                Ok(e) => e.file_type().is_dir(),
                Err(_) => false,
            });
        });

    let walker = if let Some(depth) = config.max_depth {
        walker.max_depth(depth)
    } else {
        walker
    };

    Ok(FileEnumerator {
        entries: walker.into_iter(),
    })
}
