//! # Typecase Editor
//!
//! Headless editable surface for block-structured posts.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host page: real editing surface, toolbars   │
//! └─────────────────────────────────────────────┘
//!                      ↕ mirrors
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorSurface                       │
//! │  - section add/move/remove/edit             │
//! │  - collect (surface → Document, full walk)  │
//! │  - set_document (Document → surface)        │
//! │  - update/save notifications                │
//! │  - citation capture via ReferenceSource     │
//! └─────────────────────────────────────────────┘
//!                      ↕
//! ┌─────────────────────────────────────────────┐
//! │ content: parse / materialize / wire format  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Everything is synchronous and single-threaded: each operation runs
//! to completion within one host event, and the serialized document
//! is re-derived from scratch on every change.

mod commands;
mod errors;
mod events;
mod reference;
mod sections;
mod surface;

pub use commands::{allows, commands_for, FormatCommand};
pub use errors::EditorError;
pub use events::EditorEvent;
pub use reference::{ReferenceInput, ReferenceRejected, ReferenceSource, StaticReferenceSource};
pub use sections::{SectionView, CODE_LANGUAGES, SECTION_CONTENT_CLASS};
pub use surface::EditorSurface;

// Re-export common content types for convenience.
pub use typecase_content::{Document, Node, Section, SectionKind};
