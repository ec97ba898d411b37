use super::node::{Child, Element, ElementId};

/// Arena-allocated markup document
#[derive(Debug, Clone)]
pub struct MarkupTree {
    elements: Vec<Element>,
}

impl MarkupTree {
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            elements: vec![Element::new(ElementId::ROOT, root_tag.into(), None)],
        }
    }

    /// Append a new element under `parent` and return its ID
    pub fn add_element(&mut self, parent: ElementId, tag: impl Into<String>) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(id, tag.into(), Some(parent)));
        self.elements[parent.index()]
            .children
            .push(Child::Element(id));
        id
    }

    /// Set an attribute, replacing an earlier value of the same name
    pub fn set_attribute(
        &mut self,
        id: ElementId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        let (name, value) = (name.into(), value.into());
        let element = &mut self.elements[id.index()];
        match element.attributes.iter().position(|(n, _)| *n == name) {
            Some(index) => element.attributes[index].1 = value,
            None => element.attributes.push((name, value)),
        }
    }

    /// Append text content to an element
    pub fn push_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.elements[id.index()]
            .children
            .push(Child::Text(text.into()));
    }

    /// Add a child element holding only `text`
    pub fn add_text_element(
        &mut self,
        parent: ElementId,
        tag: impl Into<String>,
        text: impl Into<String>,
    ) -> ElementId {
        let id = self.add_element(parent, tag);
        self.push_text(id, text);
        id
    }

    /// Get a reference to an element
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// Get the root element
    pub fn root(&self) -> &Element {
        &self.elements[0]
    }

    /// Child elements of `id` with the given tag, in document order
    pub fn children_by_tag<'a>(
        &'a self,
        id: ElementId,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.get(id)
            .into_iter()
            .flat_map(|e| e.child_elements())
            .filter_map(move |child| self.get(child))
            .filter(move |e| e.tag == tag)
    }

    /// Get total number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the tree only has its root
    pub fn is_empty(&self) -> bool {
        self.elements.len() <= 1
    }
}
