use std::collections::HashMap;

use crate::error::Result;
use crate::scanner::FileRecord;

/// Count and total size of every file sharing one extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionGroup {
    /// Extension including the leading dot, empty for extensionless files
    pub extension: String,
    /// Number of files in the group (always at least 1)
    pub count: u64,
    /// Sum of the member file lengths in bytes
    pub total_size: u64,
}

/// Group records by exact extension in one pass, largest group first.
///
/// Groups of equal size are ordered by extension so the result does not
/// depend on hash or listing order. The first failing record aborts.
pub fn group_by_extension<I>(records: I) -> Result<Vec<ExtensionGroup>>
where
    I: IntoIterator<Item = Result<FileRecord>>,
{
    let mut map: HashMap<String, ExtensionGroup> = HashMap::new();

    for record in records {
        let record = record?;
        let group = map
            .entry(record.extension)
            .or_insert_with_key(|ext| ExtensionGroup {
                extension: ext.clone(),
                count: 0,
                total_size: 0,
            });
        group.count += 1;
        group.total_size += record.len;
    }

    let mut groups: Vec<ExtensionGroup> = map.into_values().collect();
    sort_groups(&mut groups);
    Ok(groups)
}

/// Sort by total size descending, ties by extension ascending
pub fn sort_groups(groups: &mut [ExtensionGroup]) {
    groups.sort_by(|a, b| {
        b.total_size
            .cmp(&a.total_size)
            .then_with(|| a.extension.cmp(&b.extension))
    });
}
