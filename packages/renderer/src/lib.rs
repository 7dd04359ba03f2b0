//! # Typecase Renderer
//!
//! Read-only rendering of a post document to a static HTML string.
//! The renderer never sees the editor's live surface — it consumes
//! the serialized document and produces markup with all free-text
//! fields escaped.

pub mod post;

pub use post::render_post;

// Re-export the document types consumers hand us.
pub use typecase_content::{Document, Section, SectionKind};
