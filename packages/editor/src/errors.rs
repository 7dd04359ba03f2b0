//! Error types for the editor surface.
//!
//! Parsing and materializing are total and never fail; these errors
//! exist for host-programming mistakes (bad section index, command
//! not offered by the section's toolbar) and for rejected citation
//! capture. An operation that errors leaves the surface untouched.

use crate::reference::ReferenceRejected;
use thiserror::Error;
use typecase_content::SectionKind;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("No section at index {0}")]
    SectionOutOfRange(usize),

    #[error("Invalid reference type: {0}")]
    InvalidReferenceKind(String),

    #[error("Reference capture rejected: {0}")]
    ReferenceRejected(#[from] ReferenceRejected),

    #[error("Command {command} is not available for {kind} sections")]
    CommandNotAvailable {
        command: &'static str,
        kind: SectionKind,
    },

    #[error("Unknown code language: {0}")]
    UnknownLanguage(String),

    #[error("Operation requires a {expected} section, found {found}")]
    SectionKindMismatch {
        expected: SectionKind,
        found: SectionKind,
    },
}
