mod node;
mod render;
mod tree;

pub use node::{Child, Element, ElementId};
pub use render::{escape_attribute, escape_text, render};
pub use tree::MarkupTree;
