//! # Readonly Materializer
//!
//! Renders a structured tree to a static HTML string. Total: every
//! branch has an empty/default fallback, so rendering never fails on
//! well-formed-but-unexpected input — it degrades.
//!
//! Citations are recorded into an explicit [`Bibliography`]
//! accumulator threaded through the call chain; its lifetime is one
//! document render.

use crate::node::{Node, RefKind};

/// Supported output element kinds. Dispatch is closed: anything the
/// table doesn't know is `Unmapped` and renders as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Paragraph,
    Anchor,
    Bold,
    Italic,
    Underline,
    Strike,
    Block,
    OrderedList,
    UnorderedList,
    ListItem,
    Unmapped,
}

impl TagKind {
    pub fn from_name(tag: &str) -> TagKind {
        match tag {
            "p" => TagKind::Paragraph,
            "a" => TagKind::Anchor,
            "b" => TagKind::Bold,
            "i" => TagKind::Italic,
            "u" => TagKind::Underline,
            "s" | "strike" => TagKind::Strike,
            "div" => TagKind::Block,
            "ol" => TagKind::OrderedList,
            "ul" => TagKind::UnorderedList,
            "li" => TagKind::ListItem,
            _ => TagKind::Unmapped,
        }
    }

    /// Concrete output tag; `None` for unmapped kinds.
    pub fn output_tag(self) -> Option<&'static str> {
        match self {
            TagKind::Paragraph => Some("p"),
            TagKind::Anchor => Some("a"),
            TagKind::Bold => Some("strong"),
            TagKind::Italic => Some("em"),
            TagKind::Underline => Some("u"),
            TagKind::Strike => Some("del"),
            TagKind::Block => Some("div"),
            TagKind::OrderedList => Some("ol"),
            TagKind::UnorderedList => Some("ul"),
            TagKind::ListItem => Some("li"),
            TagKind::Unmapped => None,
        }
    }
}

/// One bibliography entry, keyed by citation id.
#[derive(Debug, Clone, PartialEq)]
pub struct BibliographyEntry {
    pub ref_id: String,
    pub ref_kind: RefKind,
    pub ref_content: String,
}

/// Per-render citation accumulator. De-duplicates by `ref_id` while
/// preserving first-seen order; a citation repeated three times in the
/// body yields exactly one entry.
#[derive(Debug, Default)]
pub struct Bibliography {
    entries: Vec<BibliographyEntry>,
}

impl Bibliography {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a citation. First record for an id wins.
    pub fn record(&mut self, ref_id: &str, ref_kind: RefKind, ref_content: &str) {
        if self.entries.iter().any(|e| e.ref_id == ref_id) {
            return;
        }
        self.entries.push(BibliographyEntry {
            ref_id: ref_id.to_string(),
            ref_kind,
            ref_content: ref_content.to_string(),
        });
    }

    pub fn entries(&self) -> &[BibliographyEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Escape free text for inclusion in an HTML document.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a structured tree to HTML, recording citations into `bib`.
pub fn render_html(node: &Node, bib: &mut Bibliography) -> String {
    match node {
        Node::Text { text } => escape_html(text),

        Node::Root { children } => children
            .iter()
            .map(|child| render_html(child, bib))
            .collect(),

        Node::Reference {
            ref_id,
            ref_kind,
            ref_content,
        } => {
            bib.record(ref_id, *ref_kind, ref_content);
            let id = escape_html(ref_id);
            format!("<cite><a href=\"#{id}\">{id}</a></cite>")
        }

        Node::Image { url, alt } => {
            let url = escape_html(url);
            let alt = escape_html(alt);
            format!(
                "<figure><picture><img src=\"{url}\" alt=\"{alt}\" loading=\"lazy\"></picture><figcaption>{alt}</figcaption></figure>"
            )
        }

        Node::Element {
            tag,
            children,
            href,
            alignment,
            format,
        } => {
            let name = format.map(|f| f.tag_name()).unwrap_or(tag.as_str());
            let kind = TagKind::from_name(name);
            let Some(out) = kind.output_tag() else {
                return String::new();
            };

            let rendered: String = children
                .iter()
                .map(|child| render_html(child, bib))
                .collect();

            // Empty wrapper divs collapse entirely; code blocks leave
            // trailing empty line divs behind on the live surface.
            if kind == TagKind::Block && rendered.trim().is_empty() {
                return String::new();
            }

            let mut attributes = String::new();
            if let Some(href) = href {
                attributes.push_str(&format!(" href=\"{}\"", escape_html(href)));
            }
            if let Some(alignment) = alignment {
                attributes.push_str(&format!(
                    " style=\"text-align: {}\"",
                    alignment.as_str()
                ));
            }

            format!("<{out}{attributes}>{rendered}</{out}>")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Alignment, Format};

    fn render(node: &Node) -> String {
        let mut bib = Bibliography::new();
        render_html(node, &mut bib)
    }

    #[test]
    fn test_text_is_escaped() {
        let out = render(&Node::text("<script>alert(1)</script>"));
        assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_ordered_list_round() {
        let tree = Node::element("ol")
            .with_child(Node::element("li").with_child(Node::text("a")));
        assert_eq!(render(&tree), "<ol><li>a</li></ol>");
    }

    #[test]
    fn test_semantic_tag_mapping() {
        assert_eq!(
            render(&Node::element("b").with_child(Node::text("x"))),
            "<strong>x</strong>"
        );
        assert_eq!(
            render(&Node::element("i").with_child(Node::text("x"))),
            "<em>x</em>"
        );
        assert_eq!(
            render(&Node::element("strike").with_child(Node::text("x"))),
            "<del>x</del>"
        );
    }

    #[test]
    fn test_unmapped_tag_renders_empty() {
        let tree = Node::element("script").with_child(Node::text("alert(1)"));
        assert_eq!(render(&tree), "");
    }

    #[test]
    fn test_empty_div_suppressed() {
        let tree = Node::element("div").with_child(Node::text("   "));
        assert_eq!(render(&tree), "");

        let tree = Node::element("div").with_child(Node::text("code line"));
        assert_eq!(render(&tree), "<div>code line</div>");
    }

    #[test]
    fn test_anchor_href_escaped() {
        let tree = Node::element("a")
            .with_href("https://example.com/?a=1&b=\"2\"")
            .with_child(Node::text("x"));
        assert_eq!(
            render(&tree),
            "<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\">x</a>"
        );
    }

    #[test]
    fn test_alignment_style() {
        let tree = Node::element("p")
            .with_alignment(Alignment::Center)
            .with_child(Node::text("x"));
        assert_eq!(render(&tree), "<p style=\"text-align: center\">x</p>");
    }

    #[test]
    fn test_format_takes_priority_over_tag() {
        // A node whose recorded tag is unmapped still renders through
        // its format.
        let tree = Node::element("span")
            .with_format(Format::Bold)
            .with_child(Node::text("x"));
        assert_eq!(render(&tree), "<strong>x</strong>");
    }

    #[test]
    fn test_citation_and_dedup() {
        let tree = Node::root(vec![
            Node::reference("r1", RefKind::Doi, "10.1000/x"),
            Node::text(" and again "),
            Node::reference("r1", RefKind::Doi, "10.1000/x"),
        ]);

        let mut bib = Bibliography::new();
        let out = render_html(&tree, &mut bib);

        assert_eq!(
            out,
            "<cite><a href=\"#r1\">r1</a></cite> and again <cite><a href=\"#r1\">r1</a></cite>"
        );
        assert_eq!(bib.entries().len(), 1);
        assert_eq!(bib.entries()[0].ref_id, "r1");
    }

    #[test]
    fn test_image_figure() {
        let tree = Node::image("https://example.com/a.png", "a \"pic\"");
        assert_eq!(
            render(&tree),
            "<figure><picture><img src=\"https://example.com/a.png\" alt=\"a &quot;pic&quot;\" loading=\"lazy\"></picture><figcaption>a &quot;pic&quot;</figcaption></figure>"
        );
    }
}
