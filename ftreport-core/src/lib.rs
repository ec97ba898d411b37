pub mod error;
pub mod html;
pub mod markup;
pub mod report;
pub mod scanner;
pub mod size;

use std::path::Path;

pub use error::{ReportError, Result};
pub use html::{render_report, report_document};
pub use markup::{ElementId, MarkupTree};
pub use report::{ExtensionGroup, Report, ReportRow, RowStyle, build_report};
pub use scanner::{FileEnumerator, FileRecord, ScanConfig, enumerate_files};
pub use size::format_size;

/// Scan `root`, build the per-extension report and write it to `output`.
///
/// The output file is only written once the whole scan succeeded, so a
/// failed run leaves an existing report untouched.
pub fn generate_report(root: &Path, output: &Path, config: &ScanConfig) -> Result<Report> {
    tracing::info!("Scanning {}", root.display());

    let files = enumerate_files(root, config)?;
    let report = build_report(files)?;

    tracing::info!(
        files = report.total_files,
        bytes = report.total_bytes,
        groups = report.rows.len(),
        "Scan complete"
    );

    let html = render_report(&report.rows);
    std::fs::write(output, html).map_err(|e| ReportError::io(output, e))?;

    tracing::info!("Report written to {}", output.display());
    Ok(report)
}
