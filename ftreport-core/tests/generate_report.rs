//! End-to-end tests of `generate_report` against real temporary trees.

use std::fs;
use std::path::Path;

use ftreport_core::{
    ReportError, RowStyle, ScanConfig, build_report, enumerate_files, generate_report,
};
use tempfile::TempDir;

/// Build a small tree:
///
/// ```text
/// root/
///   a.txt        (500 bytes)
///   b.txt        (1500 bytes)
///   c.log        (2000 bytes)
///   Makefile     (20 bytes)
///   media/
///     clip.mp4   (1200000 bytes)
///     deep/
///       d.txt    (100 bytes)
/// ```
fn build_test_tree(root: &Path) {
    fs::create_dir_all(root.join("media/deep")).unwrap();
    write_bytes(&root.join("a.txt"), 500);
    write_bytes(&root.join("b.txt"), 1500);
    write_bytes(&root.join("c.log"), 2000);
    write_bytes(&root.join("Makefile"), 20);
    write_bytes(&root.join("media/clip.mp4"), 1_200_000);
    write_bytes(&root.join("media/deep/d.txt"), 100);
}

fn write_bytes(path: &Path, n: usize) {
    fs::write(path, vec![b'x'; n]).unwrap();
}

#[test]
fn report_totals_match_tree() {
    let temp = TempDir::new().unwrap();
    build_test_tree(temp.path());

    let files = enumerate_files(temp.path(), &ScanConfig::default()).unwrap();
    let report = build_report(files).unwrap();

    assert_eq!(report.total_files, 6);
    assert_eq!(report.total_bytes, 500 + 1500 + 2000 + 20 + 1_200_000 + 100);

    let rows: Vec<(&str, u64, &str)> = report
        .rows
        .iter()
        .map(|r| (r.extension.as_str(), r.count, r.size.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (".mp4", 1, "1.20MB"),
            (".txt", 3, "2.10KB"),
            (".log", 1, "2.00KB"),
            ("", 1, "20B"),
        ]
    );

    let styles: Vec<RowStyle> = report.rows.iter().map(|r| r.style).collect();
    assert_eq!(
        styles,
        vec![RowStyle::Light, RowStyle::Dark, RowStyle::Light, RowStyle::Dark]
    );
}

#[test]
fn writes_html_report() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("scan");
    fs::create_dir(&root).unwrap();
    build_test_tree(&root);
    let output = temp.path().join("report.html");

    let report = generate_report(&root, &output, &ScanConfig::default()).unwrap();
    let html = fs::read_to_string(&output).unwrap();

    assert_eq!(report.rows.len(), 4);
    assert!(html.contains("<title>Assignment 3 Report</title>"));
    assert_eq!(html.matches("<tr").count(), 5);
    assert!(html.contains("<td>.mp4</td>"));
    assert!(html.contains("<td>1.20MB</td>"));

    // Largest group is rendered first
    let mp4 = html.find("<td>.mp4</td>").unwrap();
    let txt = html.find("<td>.txt</td>").unwrap();
    let log = html.find("<td>.log</td>").unwrap();
    assert!(mp4 < txt && txt < log);
}

#[test]
fn tie_order_is_stable_across_runs() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("scan");
    fs::create_dir(&root).unwrap();
    write_bytes(&root.join("a.txt"), 500);
    write_bytes(&root.join("b.txt"), 1500);
    write_bytes(&root.join("c.log"), 2000);

    let first_out = temp.path().join("first.html");
    let second_out = temp.path().join("second.html");
    let first = generate_report(&root, &first_out, &ScanConfig::default()).unwrap();
    let second = generate_report(&root, &second_out, &ScanConfig::default()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.rows[0].extension, ".log");
    assert_eq!(first.rows[1].extension, ".txt");
    assert_eq!(first.rows[1].count, 2);
    assert_eq!(
        fs::read_to_string(first_out).unwrap(),
        fs::read_to_string(second_out).unwrap()
    );
}

#[test]
fn empty_directory_has_header_row_only() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("empty");
    fs::create_dir(&root).unwrap();
    let output = temp.path().join("report.html");

    let report = generate_report(&root, &output, &ScanConfig::default()).unwrap();
    let html = fs::read_to_string(&output).unwrap();

    assert!(report.is_empty());
    assert_eq!(html.matches("<tr").count(), 1);
    assert_eq!(html.matches("<td").count(), 0);
    assert!(html.contains("<th>Type</th>"));
    assert!(html.contains("<th>Count</th>"));
    assert!(html.contains("<th>Size</th>"));
}

#[test]
fn missing_root_leaves_output_untouched() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");
    let output = temp.path().join("report.html");
    fs::write(&output, "previous report").unwrap();

    let err = generate_report(&missing, &output, &ScanConfig::default()).unwrap_err();

    assert!(matches!(err, ReportError::PathNotFound(_)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous report");
}

#[test]
fn unwritable_output_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    build_test_tree(temp.path());
    let output = temp.path().join("no-such-dir").join("report.html");

    let err = generate_report(temp.path(), &output, &ScanConfig::default()).unwrap_err();

    assert!(matches!(err, ReportError::Io { path, .. } if path == output));
}

#[test]
fn vanished_directory_aborts_report() {
    let temp = TempDir::new().unwrap();
    write_bytes(&temp.path().join("a.txt"), 6);
    fs::create_dir(temp.path().join("sub")).unwrap();
    write_bytes(&temp.path().join("sub/big.bin"), 5000);

    let mut files = enumerate_files(temp.path(), &ScanConfig::default()).unwrap();
    let first = files.next().unwrap();
    fs::remove_dir_all(temp.path().join("sub")).unwrap();

    let err = build_report(std::iter::once(first).chain(files)).unwrap_err();
    assert!(matches!(err, ReportError::Walk(_)));
}

#[cfg(unix)]
#[test]
fn unreadable_directory_leaves_output_untouched() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = temp.path().join("scan");
    let locked = root.join("locked");
    fs::create_dir_all(&locked).unwrap();
    write_bytes(&root.join("a.txt"), 6);
    write_bytes(&locked.join("big.bin"), 5000);
    let output = temp.path().join("report.html");
    fs::write(&output, "previous report").unwrap();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Permission bits do not stop a privileged user
    let readable = fs::read_dir(&locked).is_ok();

    let result = generate_report(&root, &output, &ScanConfig::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if readable {
        return;
    }
    assert!(matches!(result, Err(ReportError::Walk(_))));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous report");
}
