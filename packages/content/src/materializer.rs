//! # Editable Materializer
//!
//! Turns a structured tree back into live nodes for the editable
//! surface. This is a pure tree-to-tree transform; mounting the
//! result into a content area is the caller's separate step, so the
//! construction logic is testable without a live surface.

use crate::dom::{
    DomElement, DomNode, ATTR_IMAGE_ALT, ATTR_IMAGE_URL, ATTR_REF_CONTENT, ATTR_REF_ID,
    ATTR_REF_TYPE, IMAGE_MARKER_CLASS, REFERENCE_MARKER_CLASS,
};
use crate::node::Node;

/// Build live nodes from a structured tree.
///
/// A `Root` yields its materialized children, so the result is the
/// fragment to mount; every other node yields exactly one live node.
pub fn to_editable(node: &Node) -> Vec<DomNode> {
    match node {
        // A root splices like a document fragment, wherever it sits.
        Node::Root { children } => children.iter().flat_map(to_editable).collect(),

        Node::Text { text } => vec![DomNode::text(text.clone())],

        Node::Element {
            tag,
            children,
            href,
            alignment,
            format,
        } => {
            // Format wins over the recorded tag when both are present.
            let name = format.map(|f| f.tag_name()).unwrap_or(tag.as_str());
            let mut el = DomElement::new(name);
            if let Some(href) = href {
                el = el.with_attr("href", href.clone());
            }
            if let Some(alignment) = alignment {
                el = el.with_text_align(alignment.as_str());
            }
            el = el.with_children(children.iter().flat_map(to_editable).collect());
            vec![el.into()]
        }

        Node::Reference {
            ref_id,
            ref_kind,
            ref_content,
        } => vec![DomElement::new("span")
            .with_class(REFERENCE_MARKER_CLASS)
            .with_attr(ATTR_REF_ID, ref_id.clone())
            .with_attr(ATTR_REF_TYPE, ref_kind.as_str())
            .with_attr(ATTR_REF_CONTENT, ref_content.clone())
            .with_child(DomNode::text(format!("[{ref_id}]")))
            .into()],

        Node::Image { url, alt } => vec![DomElement::new("span")
            .with_class(IMAGE_MARKER_CLASS)
            .with_attr(ATTR_IMAGE_URL, url.clone())
            .with_attr(ATTR_IMAGE_ALT, alt.clone())
            .into()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Alignment, Format, RefKind};
    use crate::parser::parse_fragment;

    #[test]
    fn test_root_yields_fragment() {
        let tree = Node::root(vec![Node::text("a"), Node::text("b")]);
        let live = to_editable(&tree);

        assert_eq!(live, vec![DomNode::text("a"), DomNode::text("b")]);
    }

    #[test]
    fn test_format_overrides_tag() {
        let tree = Node::element("span").with_format(Format::Italic);
        let live = to_editable(&tree);

        match &live[0] {
            DomNode::Element(el) => assert_eq!(el.tag, "i"),
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_reference_marker_shape() {
        let tree = Node::reference("r1", RefKind::Wikidata, "Q1");
        let live = to_editable(&tree);

        match &live[0] {
            DomNode::Element(el) => {
                assert_eq!(el.tag, "span");
                assert!(el.has_class(REFERENCE_MARKER_CLASS));
                assert_eq!(el.attr(ATTR_REF_ID), Some("r1"));
                assert_eq!(el.attr(ATTR_REF_TYPE), Some("wikidata"));
                assert_eq!(el.attr(ATTR_REF_CONTENT), Some("Q1"));
                assert_eq!(el.text_content(), "[r1]");
            }
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trip_law() {
        let tree = Node::root(vec![
            Node::element("p")
                .with_alignment(Alignment::Right)
                .with_children(vec![
                    Node::text("see "),
                    Node::element("a")
                        .with_href("https://example.com")
                        .with_child(Node::text("this")),
                    Node::reference("r1", RefKind::Doi, "10.1000/x"),
                ]),
            Node::element("ol").with_child(
                Node::element("li").with_child(Node::text("item")),
            ),
            Node::element("b")
                .with_format(Format::Bold)
                .with_child(Node::text("strong words")),
            Node::image("https://example.com/a.png", "pic"),
            Node::text("  "),
        ]);

        let live = to_editable(&tree);
        assert_eq!(parse_fragment(&live), tree);
    }

    #[test]
    fn test_nested_root_splices() {
        let tree = Node::root(vec![Node::root(vec![
            Node::text("a"),
            Node::text("b"),
        ])]);

        assert_eq!(
            to_editable(&tree),
            vec![DomNode::text("a"), DomNode::text("b")]
        );
    }
}
