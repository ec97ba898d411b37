mod group;
mod row;

use std::path::PathBuf;

pub use group::{ExtensionGroup, group_by_extension, sort_groups};
pub use row::{ReportRow, RowStyle, build_rows};

use crate::error::Result;
use crate::scanner::FileRecord;

/// Rows of the report plus the totals they were built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Rows ordered by total size descending
    pub rows: Vec<ReportRow>,
    /// Number of files enumerated
    pub total_files: u64,
    /// Sum of all file lengths in bytes
    pub total_bytes: u64,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Resolve every path, group by extension and produce the ordered rows.
///
/// Stops at the first path that cannot be read.
pub fn build_report<I>(paths: I) -> Result<Report>
where
    I: IntoIterator<Item = Result<PathBuf>>,
{
    let records = paths
        .into_iter()
        .map(|path| path.and_then(FileRecord::from_path));
    let groups = group_by_extension(records)?;

    let total_files = groups.iter().map(|g| g.count).sum();
    let total_bytes = groups.iter().map(|g| g.total_size).sum();

    Ok(Report {
        rows: build_rows(&groups),
        total_files,
        total_bytes,
    })
}
