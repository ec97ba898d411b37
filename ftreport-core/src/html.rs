//! Composition of the HTML report document.

use crate::markup::{ElementId, MarkupTree, render};
use crate::report::{ReportRow, RowStyle};

pub const TITLE: &str = "Assignment 3 Report";

pub const BODY_STYLE: &str = "background-color:#a99985";
pub const TABLE_STYLE: &str = "position:absolute; left:0px; top:0px; width:100%; text-align:center; border: solid 5px #252323; border-collapse: collapse;";
pub const HEADER_STYLE: &str =
    "background-color:#70798c; color:#f5f1ed; font-size:32px; border:3px solid #f5f1ed;";
pub const LIGHT_ROW_STYLE: &str =
    "background-color:#dad2bc; color:#252323; border:3px solid #f5f1ed";
pub const DARK_ROW_STYLE: &str =
    "background-color:#c2b6a1; color:#252323; border:3px solid #f5f1ed";

/// Column headings of the report table
pub const COLUMNS: [&str; 3] = ["Type", "Count", "Size"];

impl RowStyle {
    /// Inline CSS for rows with this style
    pub fn css(self) -> &'static str {
        match self {
            RowStyle::Light => LIGHT_ROW_STYLE,
            RowStyle::Dark => DARK_ROW_STYLE,
        }
    }
}

/// Build the report page: a head with title and charset, and a body holding
/// one table with a header row followed by one row per report row.
pub fn report_document(rows: &[ReportRow]) -> MarkupTree {
    let mut doc = MarkupTree::new("html");

    let head = doc.add_element(ElementId::ROOT, "head");
    doc.add_text_element(head, "title", TITLE);
    let meta = doc.add_element(head, "meta");
    doc.set_attribute(meta, "charset", "UTF-8");

    let body = doc.add_element(ElementId::ROOT, "body");
    doc.set_attribute(body, "style", BODY_STYLE);

    let table = doc.add_element(body, "table");
    doc.set_attribute(table, "style", TABLE_STYLE);

    let header = doc.add_element(table, "tr");
    doc.set_attribute(header, "style", HEADER_STYLE);
    for column in COLUMNS {
        doc.add_text_element(header, "th", column);
    }

    for row in rows {
        let tr = doc.add_element(table, "tr");
        doc.set_attribute(tr, "style", row.style.css());
        doc.add_text_element(tr, "td", row.extension.as_str());
        doc.add_text_element(tr, "td", row.count.to_string());
        doc.add_text_element(tr, "td", row.size.as_str());
    }

    doc
}

/// Render the report page to markup text
pub fn render_report(rows: &[ReportRow]) -> String {
    render(&report_document(rows))
}
