//! # Section & Document Model
//!
//! An ordered sequence of typed sections, each wrapping one
//! structured content tree plus section-level metadata. This is the
//! persisted/transmitted shape of a post; every field has a default
//! so partial documents load without error.

use crate::node::Node;
use serde::{Deserialize, Serialize};

/// Section type. `Other` absorbs unknown wire values so a document
/// with an unrecognized section still loads; such sections render as
/// the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKind {
    Paragraph,
    Subheader,
    Quote,
    Code,
    Callout,
    Image,
    Other,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Paragraph => "paragraph",
            SectionKind::Subheader => "subheader",
            SectionKind::Quote => "quote",
            SectionKind::Code => "code",
            SectionKind::Callout => "callout",
            SectionKind::Image => "image",
            SectionKind::Other => "other",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SectionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "paragraph" => SectionKind::Paragraph,
            "subheader" => SectionKind::Subheader,
            "quote" => SectionKind::Quote,
            "code" => SectionKind::Code,
            "callout" => SectionKind::Callout,
            "image" => SectionKind::Image,
            _ => SectionKind::Other,
        }
    }
}

impl From<SectionKind> for String {
    fn from(kind: SectionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One typed block of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Code sections only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub content: Node,

    /// Derived from live position at collection time, never stored as
    /// authoritative state.
    #[serde(default)]
    pub order_index: usize,
}

impl Section {
    pub fn new(kind: SectionKind, content: Node, order_index: usize) -> Self {
        Section {
            kind,
            language: None,
            content,
            order_index,
        }
    }
}

/// A whole post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(
        rename = "publishDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_date: Option<String>,

    #[serde(
        rename = "modifiedDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_date: Option<String>,

    #[serde(default)]
    pub sections: Vec<Section>,
}
