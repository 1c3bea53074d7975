// src/dom/mod.rs
//! Document abstraction used by the translator.
//!
//! A [`Document`] hands every element carrying the key attribute to a
//! visitor as a [`TextTarget`]. Backends: [`MemoryDocument`] (plain data),
//! [`HtmlDocument`] (static HTML strings) and, on wasm32 with the `web`
//! feature, `WebDocument` over the live page.

pub mod html;
pub mod memory;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use html::HtmlDocument;
pub use memory::{Element, MemoryDocument};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebDocument;

/// Where a translation lands on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Visible text content.
    Text,
    /// The `placeholder` attribute of a form field.
    Placeholder,
}

/// Input types that render a placeholder. A missing `type` means `text`.
const PLACEHOLDER_INPUT_TYPES: &[&str] =
    &["text", "search", "email", "tel", "url", "password", "number"];

impl TargetKind {
    /// Text-like inputs have no text content, so they take the placeholder.
    /// Any other element takes it only when it already declares one.
    pub fn classify(tag: &str, input_type: Option<&str>, has_placeholder: bool) -> Self {
        if has_placeholder || (tag.eq_ignore_ascii_case("input") && is_text_like(input_type)) {
            TargetKind::Placeholder
        } else {
            TargetKind::Text
        }
    }
}

fn is_text_like(input_type: Option<&str>) -> bool {
    let kind = input_type.map(str::trim).unwrap_or("text");
    kind.is_empty()
        || PLACEHOLDER_INPUT_TYPES
            .iter()
            .any(|t| t.eq_ignore_ascii_case(kind))
}

/// One tagged element.
pub trait TextTarget {
    fn kind(&self) -> TargetKind;

    fn set_text(&mut self, text: &str);

    fn set_placeholder(&mut self, text: &str);

    fn set(&mut self, text: &str) {
        match self.kind() {
            TargetKind::Text => self.set_text(text),
            TargetKind::Placeholder => self.set_placeholder(text),
        }
    }
}

pub trait Document {
    /// Calls `visit` with the attribute value and the element, once per
    /// element carrying `attribute`, in document order.
    fn visit_tagged(&mut self, attribute: &str, visit: &mut dyn FnMut(&str, &mut dyn TextTarget));
}
