//! # Structured Content Model
//!
//! The serializable tree representation of rich text, independent of
//! any live editing surface. This is the shape that crosses the
//! editor/renderer boundary; both sides rebuild their own live state
//! from it and never share node identity.

use serde::{Deserialize, Serialize};

/// Inline text alignment captured from a block element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    /// Parse a CSS `text-align` value. Unsupported values yield `None`
    /// and the alignment is simply not captured.
    pub fn from_css(value: &str) -> Option<Alignment> {
        match value.trim() {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// Symbolic name for a bold/italic/underline/strikethrough wrapper.
///
/// Captured *in addition to* the element's tag name. When a node
/// carries both, `format` decides the concrete element on
/// materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl Format {
    /// The concrete element this format materializes as.
    pub fn tag_name(self) -> &'static str {
        match self {
            Format::Bold => "b",
            Format::Italic => "i",
            Format::Underline => "u",
            Format::Strikethrough => "s",
        }
    }

    /// The format equivalent of a formatting element's tag name.
    pub fn from_tag(tag: &str) -> Option<Format> {
        match tag {
            "b" => Some(Format::Bold),
            "i" => Some(Format::Italic),
            "u" => Some(Format::Underline),
            "s" => Some(Format::Strikethrough),
            _ => None,
        }
    }
}

/// Kind of an inline citation's source material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    Bibtex,
    Doi,
    Wikidata,
    Plaintext,
}

impl RefKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RefKind::Bibtex => "bibtex",
            RefKind::Doi => "doi",
            RefKind::Wikidata => "wikidata",
            RefKind::Plaintext => "plaintext",
        }
    }

    pub fn parse(value: &str) -> Option<RefKind> {
        match value {
            "bibtex" => Some(RefKind::Bibtex),
            "doi" => Some(RefKind::Doi),
            "wikidata" => Some(RefKind::Wikidata),
            "plaintext" => Some(RefKind::Plaintext),
            _ => None,
        }
    }
}

/// A node in the structured content tree.
///
/// On the wire every node is a map with a `type` field. The closed
/// kinds use `"root"`, `"text"`, `"reference"` and `"image"`; any
/// other `type` string is an element whose tag name *is* the type
/// (`{"type":"p",...}`, `{"type":"ol",...}`). Because the element tag
/// set is open, (de)serialization goes through an intermediate repr
/// instead of a derived tagged enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NodeRepr", into = "NodeRepr")]
pub enum Node {
    /// Outer wrapper of every tree; children in reading order.
    Root { children: Vec<Node> },

    /// Leaf text run.
    Text { text: String },

    /// Generic formatted/structural element (paragraph, link, list,
    /// formatting wrapper, block container).
    Element {
        tag: String,
        children: Vec<Node>,
        href: Option<String>,
        alignment: Option<Alignment>,
        format: Option<Format>,
    },

    /// Inline citation marker. The same `ref_id` may appear at many
    /// citation points; bibliography rendering de-duplicates by id.
    Reference {
        ref_id: String,
        ref_kind: RefKind,
        ref_content: String,
    },

    /// Embedded image reference.
    Image { url: String, alt: String },
}

impl Default for Node {
    fn default() -> Self {
        Node::Root {
            children: Vec::new(),
        }
    }
}

impl Node {
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into(),
            children: Vec::new(),
            href: None,
            alignment: None,
            format: None,
        }
    }

    pub fn reference(
        ref_id: impl Into<String>,
        ref_kind: RefKind,
        ref_content: impl Into<String>,
    ) -> Self {
        Node::Reference {
            ref_id: ref_id.into(),
            ref_kind,
            ref_content: ref_content.into(),
        }
    }

    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Node::Image {
            url: url.into(),
            alt: alt.into(),
        }
    }

    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Root { children } | Node::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<Node>) -> Self {
        if let Node::Root { children } | Node::Element { children, .. } = &mut self {
            children.extend(new_children);
        }
        self
    }

    pub fn with_href(mut self, value: impl Into<String>) -> Self {
        if let Node::Element { href, .. } = &mut self {
            *href = Some(value.into());
        }
        self
    }

    pub fn with_alignment(mut self, value: Alignment) -> Self {
        if let Node::Element { alignment, .. } = &mut self {
            *alignment = Some(value);
        }
        self
    }

    pub fn with_format(mut self, value: Format) -> Self {
        if let Node::Element { format, .. } = &mut self {
            *format = Some(value);
        }
        self
    }

    /// Children of a root or element node; leaves have none.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root { children } | Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }
}

/// Wire shape shared by every node kind. Field presence decides which
/// fields survive serialization; absence decays to defaults on the way
/// back in, so partial or hand-written documents still load.
#[derive(Serialize, Deserialize)]
struct NodeRepr {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<Format>,
    #[serde(rename = "refId", default, skip_serializing_if = "Option::is_none")]
    ref_id: Option<String>,
    #[serde(rename = "refType", default, skip_serializing_if = "Option::is_none")]
    ref_type: Option<String>,
    #[serde(
        rename = "refContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    ref_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
}

impl NodeRepr {
    fn bare(kind: &str) -> Self {
        NodeRepr {
            kind: kind.to_string(),
            text: None,
            children: None,
            href: None,
            alignment: None,
            format: None,
            ref_id: None,
            ref_type: None,
            ref_content: None,
            url: None,
            alt: None,
        }
    }
}

impl From<NodeRepr> for Node {
    fn from(repr: NodeRepr) -> Self {
        match repr.kind.as_str() {
            "root" => {
                return Node::Root {
                    children: repr.children.unwrap_or_default(),
                }
            }
            "text" => {
                return Node::Text {
                    text: repr.text.unwrap_or_default(),
                }
            }
            "reference" => {
                return Node::Reference {
                    ref_id: repr.ref_id.unwrap_or_default(),
                    // Unknown kinds degrade rather than fail the load.
                    ref_kind: repr
                        .ref_type
                        .as_deref()
                        .and_then(RefKind::parse)
                        .unwrap_or(RefKind::Plaintext),
                    ref_content: repr.ref_content.unwrap_or_default(),
                }
            }
            "image" => {
                return Node::Image {
                    url: repr.url.unwrap_or_default(),
                    alt: repr.alt.unwrap_or_default(),
                }
            }
            _ => {}
        }

        // Any other type string is an element whose tag is the type.
        Node::Element {
            tag: repr.kind,
            children: repr.children.unwrap_or_default(),
            href: repr.href,
            alignment: repr.alignment,
            format: repr.format,
        }
    }
}

impl From<Node> for NodeRepr {
    fn from(node: Node) -> Self {
        match node {
            Node::Root { children } => NodeRepr {
                children: Some(children),
                ..NodeRepr::bare("root")
            },
            Node::Text { text } => NodeRepr {
                text: Some(text),
                ..NodeRepr::bare("text")
            },
            Node::Element {
                tag,
                children,
                href,
                alignment,
                format,
            } => NodeRepr {
                children: Some(children),
                href,
                alignment,
                format,
                ..NodeRepr::bare(&tag)
            },
            Node::Reference {
                ref_id,
                ref_kind,
                ref_content,
            } => NodeRepr {
                ref_id: Some(ref_id),
                ref_type: Some(ref_kind.as_str().to_string()),
                ref_content: Some(ref_content),
                ..NodeRepr::bare("reference")
            },
            Node::Image { url, alt } => NodeRepr {
                url: Some(url),
                alt: Some(alt),
                ..NodeRepr::bare("image")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serializes_tag_as_type() {
        let node = Node::element("ol").with_child(
            Node::element("li").with_child(Node::text("a")),
        );

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "ol");
        assert_eq!(json["children"][0]["type"], "li");
        assert_eq!(json["children"][0]["children"][0]["text"], "a");
    }

    #[test]
    fn test_reference_wire_field_names() {
        let node = Node::reference("r1", RefKind::Doi, "10.1000/x");

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "reference");
        assert_eq!(json["refId"], "r1");
        assert_eq!(json["refType"], "doi");
        assert_eq!(json["refContent"], "10.1000/x");
    }

    #[test]
    fn test_wire_round_trip() {
        let node = Node::root(vec![
            Node::text("hello "),
            Node::element("b")
                .with_format(Format::Bold)
                .with_child(Node::text("world")),
            Node::element("a")
                .with_href("https://example.com")
                .with_child(Node::text("link")),
            Node::reference("r1", RefKind::Bibtex, "@book{}"),
            Node::image("https://example.com/x.png", "an x"),
        ]);

        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }

    #[test]
    fn test_unknown_ref_type_degrades_to_plaintext() {
        let json = r#"{"type":"reference","refId":"r1","refType":"isbn","refContent":"x"}"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert_eq!(node, Node::reference("r1", RefKind::Plaintext, "x"));
    }

    #[test]
    fn test_missing_fields_default() {
        let node: Node = serde_json::from_str(r#"{"type":"text"}"#).unwrap();
        assert_eq!(node, Node::text(""));

        let node: Node = serde_json::from_str(r#"{"type":"root"}"#).unwrap();
        assert_eq!(node, Node::root(vec![]));

        let node: Node = serde_json::from_str(r#"{"type":"p"}"#).unwrap();
        assert_eq!(node, Node::element("p"));
    }

    #[test]
    fn test_alignment_css_values() {
        assert_eq!(Alignment::from_css("center"), Some(Alignment::Center));
        assert_eq!(Alignment::from_css(" right "), Some(Alignment::Right));
        assert_eq!(Alignment::from_css("justify"), None);
    }
}
