use super::node::{Child, ElementId};
use super::tree::MarkupTree;

const INDENT: &str = "  ";

/// Serialize the tree as indented markup, one element per line.
///
/// Elements holding only text stay on one line and empty elements are
/// self-closed. No declaration is emitted.
pub fn render(tree: &MarkupTree) -> String {
    let mut out = String::new();
    render_element(tree, ElementId::ROOT, 0, &mut out);
    out
}

fn render_element(tree: &MarkupTree, id: ElementId, depth: usize, out: &mut String) {
    let Some(element) = tree.get(id) else {
        return;
    };

    let indent = INDENT.repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attributes {
        out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }

    if !element.has_children() {
        out.push_str(" />\n");
        return;
    }
    out.push('>');

    if element.is_text_only() {
        out.push_str(&escape_text(&element.text()));
    } else {
        out.push('\n');
        for child in &element.children {
            match child {
                Child::Element(child_id) => render_element(tree, *child_id, depth + 1, out),
                Child::Text(text) => {
                    out.push_str(&INDENT.repeat(depth + 1));
                    out.push_str(&escape_text(text));
                    out.push('\n');
                }
            }
        }
        out.push_str(&indent);
    }

    out.push_str(&format!("</{}>\n", element.tag));
}

/// Escape text content
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape an attribute value for double-quoted output
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
