// src/dom/memory.rs
use super::{Document, TargetKind, TextTarget};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            attributes: BTreeMap::new(),
            text: String::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.attribute("placeholder")
    }
}

impl TextTarget for Element {
    fn kind(&self) -> TargetKind {
        TargetKind::classify(
            &self.tag,
            self.attribute("type"),
            self.attributes.contains_key("placeholder"),
        )
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_placeholder(&mut self, text: &str) {
        self.attributes.insert("placeholder".into(), text.to_string());
    }
}

/// Flat list of elements; enough to drive the translator without a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: Vec<Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn with(mut self, element: Element) -> Self {
        self.push(element);
        self
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// First element whose `attribute` equals `key`.
    pub fn find(&self, attribute: &str, key: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.attribute(attribute) == Some(key))
    }
}

impl Document for MemoryDocument {
    fn visit_tagged(&mut self, attribute: &str, visit: &mut dyn FnMut(&str, &mut dyn TextTarget)) {
        for element in &mut self.elements {
            let Some(key) = element.attributes.get(attribute).cloned() else {
                continue;
            };
            visit(&key, element);
        }
    }
}

impl FromIterator<Element> for MemoryDocument {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
