/// Unique identifier for an element in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

impl ElementId {
    pub const ROOT: ElementId = ElementId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Content of an element, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Element(ElementId),
    Text(String),
}

/// A tagged element with attributes and children
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    pub tag: String,
    /// Attributes in insertion order
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Child>,
    /// Parent element (None for root)
    pub parent: Option<ElementId>,
}

impl Element {
    pub fn new(id: ElementId, tag: String, parent: Option<ElementId>) -> Self {
        Self {
            id,
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
            parent,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated direct text children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                Child::Text(t) => Some(t.as_str()),
                Child::Element(_) => None,
            })
            .collect()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.children.iter().filter_map(|c| match c {
            Child::Element(id) => Some(*id),
            Child::Text(_) => None,
        })
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when there is content and none of it is an element
    pub fn is_text_only(&self) -> bool {
        self.has_children() && self.children.iter().all(|c| matches!(c, Child::Text(_)))
    }
}
