//! # Typecase Content
//!
//! Bidirectional structured-content model for block-structured posts.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ parser: live editable fragment → Node tree   │
//! └──────────────────────────────────────────────┘
//!                      ↕
//! ┌──────────────────────────────────────────────┐
//! │ node: serializable structured content model  │
//! │ document: typed sections + post metadata     │
//! └──────────────────────────────────────────────┘
//!                      ↕
//! ┌──────────────────────────────────────────────┐
//! │ materializer: Node tree → live fragment      │
//! │ html: Node tree → static HTML string         │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The two surfaces (editable view, read-only view) never share live
//! tree identity — only the serialized model crosses the boundary.
//! Parsing and rendering are total: malformed input degrades to
//! defaults or empty output, it never fails.

pub mod document;
pub mod dom;
pub mod html;
pub mod materializer;
pub mod node;
pub mod parser;

pub use document::{Document, Section, SectionKind};
pub use dom::{DomElement, DomNode};
pub use html::{escape_html, render_html, Bibliography, BibliographyEntry, TagKind};
pub use materializer::to_editable;
pub use node::{Alignment, Format, Node, RefKind};
pub use parser::parse_fragment;
