//! In-memory XML tree.

use sas_pidl_core::errors::CodecError;

/// A child of an element: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with ordered attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First child element named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name == name)
    }

    /// Concatenated direct text content.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn has_elements(&self) -> bool {
        self.elements().next().is_some()
    }
}

/// Whether `name` can be used as an element or attribute name.
pub(crate) fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}

/// A document is its root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parse XML text.
    pub fn from_xml(text: &str) -> Result<Self, CodecError> {
        super::xml::parse(text)
    }

    /// Serialize to XML text without a declaration.
    pub fn to_xml(&self) -> Result<String, CodecError> {
        super::xml::write(self)
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let root = Element::new("order")
            .with_attribute("id", "7")
            .with_child(Element::new("item").with_text("pen"))
            .with_text("tail");
        assert_eq!(root.attribute("id"), Some("7"));
        assert_eq!(root.attribute("missing"), None);
        assert_eq!(root.child("item").map(Element::text), Some("pen".to_string()));
        assert_eq!(root.text(), "tail");
        assert!(root.has_elements());
        assert!(!Element::new("leaf").has_elements());
    }

    #[test]
    fn test_is_xml_name() {
        assert!(is_xml_name("root"));
        assert!(is_xml_name("ns:item-2.b"));
        assert!(is_xml_name("_x"));
        assert!(!is_xml_name(""));
        assert!(!is_xml_name("2fast"));
        assert!(!is_xml_name("has space"));
        assert!(!is_xml_name("@attr"));
    }
}
