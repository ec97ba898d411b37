use super::group::ExtensionGroup;
use crate::size::format_size;

/// Alternating visual style of a data row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Light,
    Dark,
}

impl RowStyle {
    /// Style for the zero-based row position: even rows light, odd rows dark
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            RowStyle::Light
        } else {
            RowStyle::Dark
        }
    }
}

/// A group ready to be placed in the report table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub extension: String,
    pub count: u64,
    /// Total size as shown, e.g. `2.00KB`
    pub size: String,
    pub style: RowStyle,
}

/// Format each group and assign alternating styles in order
pub fn build_rows(groups: &[ExtensionGroup]) -> Vec<ReportRow> {
    groups
        .iter()
        .enumerate()
        .map(|(position, group)| ReportRow {
            extension: group.extension.clone(),
            count: group.count,
            size: format_size(group.total_size),
            style: RowStyle::for_position(position),
        })
        .collect()
}
