//! Citation capture.
//!
//! Hosts collect citations interactively (a prompt sequence or a
//! dialog); the surface sees only this synchronous capability, so
//! citation-insertion logic is testable without simulating user
//! input.

use thiserror::Error;

/// Raw fields supplied by the capture flow. The kind arrives as an
/// uninterpreted string and is validated at insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceInput {
    pub ref_kind: String,
    pub ref_id: String,
    pub ref_content: String,
}

/// The user backed out of the capture flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("capture cancelled")]
pub struct ReferenceRejected;

/// Capability that collects one citation from the user.
pub trait ReferenceSource {
    fn collect_reference(&mut self) -> Result<ReferenceInput, ReferenceRejected>;
}

/// Fixed-answer source, mainly for tests and scripted hosts.
pub struct StaticReferenceSource(pub Option<ReferenceInput>);

impl ReferenceSource for StaticReferenceSource {
    fn collect_reference(&mut self) -> Result<ReferenceInput, ReferenceRejected> {
        self.0.take().ok_or(ReferenceRejected)
    }
}
