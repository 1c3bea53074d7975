// src/dom/web.rs
use super::{Document, TargetKind, TextTarget};
use crate::core::error::{AppError, Result};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// The live page.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

struct WebTarget {
    element: Element,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
            .ok_or_else(|| AppError::Validation("no document in this context".into()))
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Document for WebDocument {
    fn visit_tagged(&mut self, attribute: &str, visit: &mut dyn FnMut(&str, &mut dyn TextTarget)) {
        let selector = format!("[{}]", attribute);
        let nodes = match self.document.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("querySelectorAll({}) failed: {:?}", selector, e);
                return;
            }
        };

        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let Some(key) = element.get_attribute(attribute) else {
                continue;
            };
            visit(&key, &mut WebTarget { element });
        }
    }
}

impl TextTarget for WebTarget {
    fn kind(&self) -> TargetKind {
        TargetKind::classify(
            &self.element.tag_name(),
            self.element.get_attribute("type").as_deref(),
            self.element.has_attribute("placeholder"),
        )
    }

    fn set_text(&mut self, text: &str) {
        match self.element.dyn_ref::<HtmlElement>() {
            Some(html) => html.set_inner_text(text),
            None => self.element.set_text_content(Some(text)),
        }
    }

    fn set_placeholder(&mut self, text: &str) {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.set_placeholder(text);
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_placeholder(text);
        } else if let Err(e) = self.element.set_attribute("placeholder", text) {
            log::warn!("setAttribute(placeholder) failed: {:?}", e);
        }
    }
}
