//! Notifications raised by the editable surface.
//!
//! Fire-and-forget: the surface queues events as it mutates and the
//! host drains them synchronously. There is no acknowledgement
//! channel; persistence is the host's responsibility.

use typecase_content::Document;

/// A notification carrying the full current document.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Fired after every structural or content change.
    Update(Document),

    /// Fired on an explicit user save request.
    Save(Document),
}
