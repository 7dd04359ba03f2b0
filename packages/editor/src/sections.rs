//! Section views: the live scaffolding around one content area.
//!
//! A section view owns the editable content area (a live element the
//! host mirrors into its real surface) plus the section-level
//! metadata that travels with it. Order is never stored here — it is
//! derived from position in the surface at collection time.

use typecase_content::{DomElement, SectionKind};

/// Class carried by every section content area.
pub const SECTION_CONTENT_CLASS: &str = "tc-section-content";

/// Languages the code-section selector offers.
pub const CODE_LANGUAGES: &[&str] = &[
    "html",
    "css",
    "javascript",
    "sql",
    "python",
    "rust",
    "bash",
    "json",
];

/// One live section: typed metadata plus its editable content area.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub kind: SectionKind,
    pub language: Option<String>,
    content: DomElement,
}

impl SectionView {
    /// Section factory: a fresh section of the given kind with an
    /// empty content area.
    pub fn new(kind: SectionKind) -> Self {
        SectionView {
            kind,
            language: None,
            content: DomElement::new("div").with_class(SECTION_CONTENT_CLASS),
        }
    }

    pub fn content(&self) -> &DomElement {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut DomElement {
        &mut self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_produces_empty_content_area() {
        let section = SectionView::new(SectionKind::Quote);

        assert_eq!(section.kind, SectionKind::Quote);
        assert_eq!(section.language, None);
        assert!(section.content().has_class(SECTION_CONTENT_CLASS));
        assert!(section.content().children.is_empty());
    }
}
