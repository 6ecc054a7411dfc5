//! Element tree node definitions

use serde::Serialize;

/// Root of a lowered document: an ordered sequence of top-level children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementTree {
    pub children: Vec<ElementChild>,
}

/// One child position in the element tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ElementChild {
    Element(Element),
    Text(String),
}

/// A tag-named element with a property set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    pub properties: Vec<(String, String)>,
    /// Annotation text mirrored from the block tree during lowering.
    pub annotation: Option<String>,
    pub children: Vec<ElementChild>,
}

impl ElementTree {
    pub fn new(children: Vec<ElementChild>) -> Self {
        ElementTree { children }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            properties: Vec::new(),
            annotation: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(tag: impl Into<String>, children: Vec<ElementChild>) -> Self {
        Element {
            tag: tag.into(),
            properties: Vec::new(),
            annotation: None,
            children,
        }
    }

    /// Append a property, keeping insertion order.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.push((name.into(), value.into()));
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup() {
        let mut element = Element::new("code");
        element.set_property("className", "language-php");
        assert_eq!(element.property("className"), Some("language-php"));
        assert_eq!(element.property("id"), None);
    }
}
