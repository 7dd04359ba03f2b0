//! # Live Surface Model
//!
//! Owned model of the editable fragment the editor works against.
//! The engine is headless: instead of a browser's live tree this is a
//! plain owned tree with the handful of properties the parser and
//! materializer care about (tag, classes, data attributes, inline
//! text alignment). A host embedding the editor mirrors this tree
//! into its real editing surface.
//!
//! Live nodes are deliberately *not* serializable — only the
//! structured model crosses the editor/renderer boundary.

use std::collections::HashMap;

/// Class marking an inline citation on the live surface. Markers are
/// identified by class, never by tag name.
pub const REFERENCE_MARKER_CLASS: &str = "tc-reference-marker";

/// Class marking an inline image on the live surface.
pub const IMAGE_MARKER_CLASS: &str = "tc-image-marker";

pub const ATTR_REF_ID: &str = "data-ref-id";
pub const ATTR_REF_TYPE: &str = "data-ref-type";
pub const ATTR_REF_CONTENT: &str = "data-ref-content";
pub const ATTR_IMAGE_URL: &str = "data-image-url";
pub const ATTR_IMAGE_ALT: &str = "data-image-alt";

/// A node of the live editable fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum DomNode {
    Element(DomElement),

    /// Plain text run.
    Text { content: String },

    /// Comment (or any other non-content kind a host may produce);
    /// never survives a parse.
    Comment { content: String },
}

impl DomNode {
    pub fn text(content: impl Into<String>) -> Self {
        DomNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        DomNode::Comment {
            content: content.into(),
        }
    }
}

impl From<DomElement> for DomNode {
    fn from(element: DomElement) -> Self {
        DomNode::Element(element)
    }
}

/// An element of the live editable fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    /// Inline `text-align` style, when present.
    pub text_align: Option<String>,
    pub children: Vec<DomNode>,
}

impl DomElement {
    pub fn new(tag: impl Into<String>) -> Self {
        DomElement {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: HashMap::new(),
            text_align: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text_align(mut self, value: impl Into<String>) -> Self {
        self.text_align = Some(value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<DomNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, new_children: Vec<DomNode>) -> Self {
        self.children.extend(new_children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Mount a node at the end of this element's children.
    pub fn append(&mut self, child: impl Into<DomNode>) {
        self.children.push(child.into());
    }

    /// Mount a whole fragment in order.
    pub fn append_fragment(&mut self, fragment: Vec<DomNode>) {
        self.children.extend(fragment);
    }

    /// Drop all children (full rebuild discipline: the surface is
    /// cleared and repopulated, never patched in place).
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Concatenated text of the subtree; handy in tests and for
    /// emptiness checks.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(children: &[DomNode], out: &mut String) {
    for child in children {
        match child {
            DomNode::Text { content } => out.push_str(content),
            DomNode::Element(el) => collect_text(&el.children, out),
            DomNode::Comment { .. } => {}
        }
    }
}
