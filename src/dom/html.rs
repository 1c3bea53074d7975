// src/dom/html.rs
//! Static HTML backend: rewrites tagged elements inside an HTML string.
//!
//! This is a tag scanner, not a full parser. It understands quoted and bare
//! attributes, nesting of same-named elements, void elements, comments and
//! `<script>`/`<style>` bodies (which are never touched).

use super::{Document, TargetKind, TextTarget};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<([A-Za-z][A-Za-z0-9-]*)((?:\s+[^\s=/>"']+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'<>`]+))?)*)\s*(/?)>"#,
    )
    .expect("open tag regex")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s=/>"']+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'<>`]+)))?"#)
        .expect("attribute regex")
});

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9-]*)\b[^>]*?(/?)>").expect("tag regex")
});

static OPAQUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("opaque section regex")
});

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    source: String,
}

#[derive(Debug)]
struct Edit {
    range: Range<usize>,
    replacement: String,
}

#[derive(Debug)]
struct HtmlTarget {
    kind: TargetKind,
    text: Option<String>,
    placeholder: Option<String>,
}

impl TextTarget for HtmlTarget {
    fn kind(&self) -> TargetKind {
        self.kind
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    fn set_placeholder(&mut self, text: &str) {
        self.placeholder = Some(text.to_string());
    }
}

struct ParsedAttribute<'a> {
    name: &'a str,
    value: &'a str,
    span: Range<usize>,
}

impl HtmlDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }

    fn opaque_ranges(&self) -> Vec<Range<usize>> {
        OPAQUE.find_iter(&self.source).map(|m| m.range()).collect()
    }

    fn parse_attributes(section: &str, offset: usize) -> Vec<ParsedAttribute<'_>> {
        ATTRIBUTE
            .captures_iter(section)
            .filter_map(|cap| {
                let whole = cap.get(0)?;
                let name = cap.get(1)?.as_str();
                let value = cap
                    .get(2)
                    .or_else(|| cap.get(3))
                    .or_else(|| cap.get(4))
                    .map_or("", |m| m.as_str());
                Some(ParsedAttribute {
                    name,
                    value,
                    span: offset + whole.start()..offset + whole.end(),
                })
            })
            .collect()
    }

    /// Start of the close tag matching an element opened just before `from`.
    fn find_close(&self, tag: &str, from: usize, opaque: &[Range<usize>]) -> Option<usize> {
        let mut depth = 0usize;
        for cap in ANY_TAG.captures_iter(&self.source[from..]) {
            let whole = cap.get(0)?;
            let start = from + whole.start();
            if in_any(opaque, start) || !cap[2].eq_ignore_ascii_case(tag) {
                continue;
            }
            let closing = !cap[1].is_empty();
            let self_closing = !cap[3].is_empty();
            match (closing, depth) {
                (true, 0) => return Some(start),
                (true, _) => depth -= 1,
                (false, _) if !self_closing => depth += 1,
                _ => {}
            }
        }
        None
    }

    fn collect_edits(
        &self,
        attribute: &str,
        visit: &mut dyn FnMut(&str, &mut dyn TextTarget),
    ) -> Vec<Edit> {
        let opaque = self.opaque_ranges();
        let mut edits = Vec::new();

        for cap in OPEN_TAG.captures_iter(&self.source) {
            let (Some(whole), Some(tag), Some(section)) = (cap.get(0), cap.get(1), cap.get(2))
            else {
                continue;
            };
            if in_any(&opaque, whole.start()) {
                continue;
            }

            let attributes = Self::parse_attributes(section.as_str(), section.start());
            let Some(key) = attributes
                .iter()
                .find(|a| a.name.eq_ignore_ascii_case(attribute))
                .map(|a| a.value)
            else {
                continue;
            };
            let existing_placeholder = attributes
                .iter()
                .find(|a| a.name.eq_ignore_ascii_case("placeholder"))
                .map(|a| a.span.clone());
            let input_type = attributes
                .iter()
                .find(|a| a.name.eq_ignore_ascii_case("type"))
                .map(|a| a.value);

            let tag = tag.as_str();
            let mut target = HtmlTarget {
                kind: TargetKind::classify(tag, input_type, existing_placeholder.is_some()),
                text: None,
                placeholder: None,
            };
            visit(key, &mut target);

            if let Some(text) = target.text {
                let self_closing = cap.get(3).is_some_and(|m| !m.as_str().is_empty());
                let is_void = VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag));
                if !self_closing && !is_void {
                    if let Some(close) = self.find_close(tag, whole.end(), &opaque) {
                        edits.push(Edit {
                            range: whole.end()..close,
                            replacement: escape_text(&text),
                        });
                    }
                }
            }

            if let Some(placeholder) = target.placeholder {
                let value = escape_attribute(&placeholder);
                edits.push(match existing_placeholder {
                    Some(span) => Edit {
                        range: span,
                        replacement: format!("placeholder=\"{}\"", value),
                    },
                    None => Edit {
                        range: section.end()..section.end(),
                        replacement: format!(" placeholder=\"{}\"", value),
                    },
                });
            }
        }

        edits
    }
}

impl Document for HtmlDocument {
    fn visit_tagged(&mut self, attribute: &str, visit: &mut dyn FnMut(&str, &mut dyn TextTarget)) {
        let mut edits = self.collect_edits(attribute, visit);
        if edits.is_empty() {
            return;
        }
        edits.sort_by_key(|e| (e.range.start, e.range.end));

        // An outer text replacement swallows any edit inside it.
        let mut output = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for edit in edits {
            if edit.range.start < cursor {
                continue;
            }
            output.push_str(&self.source[cursor..edit.range.start]);
            output.push_str(&edit.replacement);
            cursor = edit.range.end;
        }
        output.push_str(&self.source[cursor..]);
        self.source = output;
    }
}

impl From<String> for HtmlDocument {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl std::fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

fn in_any(ranges: &[Range<usize>], pos: usize) -> bool {
    ranges.iter().any(|r| r.contains(&pos))
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
