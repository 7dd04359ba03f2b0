//! # Content Parser
//!
//! Derives a structured content tree from a live editable fragment.
//! Recursive descent; total — malformed or unrecognized live nodes
//! are dropped locally, never propagated as failures.

use crate::dom::{
    DomElement, DomNode, ATTR_IMAGE_ALT, ATTR_IMAGE_URL, ATTR_REF_CONTENT, ATTR_REF_ID,
    ATTR_REF_TYPE, IMAGE_MARKER_CLASS, REFERENCE_MARKER_CLASS,
};
use crate::node::{Alignment, Format, Node, RefKind};

/// Parse the children of a content area into a structured tree.
///
/// The result is always wrapped in a `Root`, regardless of how many
/// top-level children exist.
pub fn parse_fragment(children: &[DomNode]) -> Node {
    Node::Root {
        children: children.iter().filter_map(parse_node).collect(),
    }
}

fn parse_node(node: &DomNode) -> Option<Node> {
    match node {
        DomNode::Text { content } => Some(Node::text(content.clone())),
        DomNode::Element(el) => Some(parse_element(el)),
        // Comments and other non-content kinds never reach the tree.
        DomNode::Comment { .. } => None,
    }
}

fn parse_element(el: &DomElement) -> Node {
    // Marker classes take precedence over tag dispatch, and markers
    // are terminal: descendants (like the visible "[r1]" label) are
    // presentation, not content.
    if el.has_class(REFERENCE_MARKER_CLASS) {
        return Node::Reference {
            ref_id: el.attr(ATTR_REF_ID).unwrap_or_default().to_string(),
            ref_kind: el
                .attr(ATTR_REF_TYPE)
                .and_then(RefKind::parse)
                .unwrap_or(RefKind::Plaintext),
            ref_content: el.attr(ATTR_REF_CONTENT).unwrap_or_default().to_string(),
        };
    }

    if el.has_class(IMAGE_MARKER_CLASS) {
        return Node::Image {
            url: el.attr(ATTR_IMAGE_URL).unwrap_or_default().to_string(),
            alt: el.attr(ATTR_IMAGE_ALT).unwrap_or_default().to_string(),
        };
    }

    let tag = el.tag.to_ascii_lowercase();

    let href = if tag == "a" {
        el.attr("href").map(str::to_string)
    } else {
        None
    };

    // Format is captured alongside the tag, not instead of it.
    let format = Format::from_tag(&tag);

    let alignment = el.text_align.as_deref().and_then(Alignment::from_css);

    Node::Element {
        children: el.children.iter().filter_map(parse_node).collect(),
        tag,
        href,
        alignment,
        format,
    }
}
