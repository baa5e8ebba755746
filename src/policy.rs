//! The regeneration policy: what happens to the stored diagram on each
//! write of the owning record.
//!
//! The policy is a pure decision procedure. It takes the previous and new
//! workflow text and whatever diagram the request supplied, and returns a
//! [`WriteOutcome`] the storage layer applies. It never touches the store
//! itself; image invalidation is reported as a flag because clearing the
//! rendered image is the store's job.

use serde_json::Value;

use crate::diagram::{Diagram, canonicalize};
use crate::error::GenerateError;
use crate::generator::Generator;
use crate::segment::segment_lines;

/// How the diagram field arrived in a write request.
///
/// An absent field and an explicit `null` mean different things: absent
/// defers to the policy, `null` clears the stored diagram.
#[derive(Debug, Clone)]
pub enum SuppliedDiagram {
    /// The request did not mention the diagram field.
    Omitted,
    /// The request set the field to `null`.
    Clear,
    /// The request carried a client-computed diagram payload.
    Payload(Value),
}

impl SuppliedDiagram {
    /// Maps a JSON request field to its supply semantics.
    pub fn from_field(field: Option<Value>) -> Self {
        match field {
            None => SuppliedDiagram::Omitted,
            Some(Value::Null) => SuppliedDiagram::Clear,
            Some(value) => SuppliedDiagram::Payload(value),
        }
    }
}

/// What the storage layer should do with the stored diagram.
#[derive(Debug, Clone)]
pub enum DiagramChange {
    /// Leave the stored diagram untouched.
    Keep,
    /// Discard the stored diagram (set the field to null/absent).
    Clear,
    /// Store this diagram.
    Replace(Diagram),
}

/// The policy's verdict for one write operation.
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    pub diagram: DiagramChange,
    /// When set, the stored rendered-image reference must be cleared: the
    /// image visualized a diagram that no longer exists.
    pub invalidate_image: bool,
}

impl WriteOutcome {
    fn unchanged() -> Self {
        WriteOutcome {
            diagram: DiagramChange::Keep,
            invalidate_image: false,
        }
    }
}

impl Generator {
    /// Decides the diagram for a freshly created record.
    ///
    /// A supplied payload is canonicalized as-is (auto-generation is
    /// skipped); otherwise non-empty text is generated from; otherwise the
    /// diagram is absent.
    pub fn decide_on_create(&self, text: &str, supplied: SuppliedDiagram) -> WriteOutcome {
        match supplied {
            SuppliedDiagram::Payload(raw) => WriteOutcome {
                diagram: DiagramChange::Replace(canonicalize(&raw)),
                invalidate_image: false,
            },
            SuppliedDiagram::Clear => WriteOutcome {
                diagram: DiagramChange::Clear,
                invalidate_image: false,
            },
            SuppliedDiagram::Omitted => {
                if text.trim().is_empty() {
                    WriteOutcome {
                        diagram: DiagramChange::Clear,
                        invalidate_image: false,
                    }
                } else {
                    WriteOutcome {
                        diagram: DiagramChange::Replace(self.build_diagram(segment_lines(text))),
                        invalidate_image: false,
                    }
                }
            }
        }
    }

    /// Decides the diagram for an update of an existing record.
    ///
    /// An explicitly supplied diagram (payload or `null`) wins regardless of
    /// text changes. Otherwise a changed, non-empty text triggers
    /// regeneration and invalidates the rendered image; an unchanged or
    /// emptied text leaves the stored diagram alone.
    pub fn decide_on_write(
        &self,
        previous_text: &str,
        new_text: &str,
        supplied: SuppliedDiagram,
    ) -> WriteOutcome {
        match supplied {
            SuppliedDiagram::Payload(raw) => WriteOutcome {
                diagram: DiagramChange::Replace(canonicalize(&raw)),
                invalidate_image: false,
            },
            SuppliedDiagram::Clear => WriteOutcome {
                diagram: DiagramChange::Clear,
                invalidate_image: false,
            },
            SuppliedDiagram::Omitted => {
                if new_text != previous_text && !new_text.trim().is_empty() {
                    WriteOutcome {
                        diagram: DiagramChange::Replace(
                            self.build_diagram(segment_lines(new_text)),
                        ),
                        invalidate_image: true,
                    }
                } else {
                    WriteOutcome::unchanged()
                }
            }
        }
    }

    /// On-demand regeneration from the currently stored text.
    ///
    /// Unconditionally overwrites the stored diagram; the only failure is
    /// stored text that trims to empty.
    pub fn regenerate(&self, stored_text: &str) -> Result<Diagram, GenerateError> {
        self.generate_from_text(stored_text)
    }
}
