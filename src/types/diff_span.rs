#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Acceptance, OperationId};

/// Describes where the text of a `DiffSpan` comes from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Part of both the original and the updated text
    Unchanged,
    /// The `old_text` of a delete or replace
    Deleted,
    /// The `new_text` of an insert or replace
    Inserted,
}

/// A piece of the original text interleaved with the changes made to it, in
/// document order. Deleted and inserted spans refer to the operation they
/// belong to and carry its current acceptance.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSpan {
    text: String,
    kind: SpanKind,
    operation: Option<OperationId>,
    acceptance: Option<Acceptance>,
}

impl DiffSpan {
    #[must_use]
    pub fn unchanged(text: String) -> Self {
        DiffSpan {
            text,
            kind: SpanKind::Unchanged,
            operation: None,
            acceptance: None,
        }
    }

    #[must_use]
    pub fn changed(
        text: String,
        kind: SpanKind,
        operation: OperationId,
        acceptance: Acceptance,
    ) -> Self {
        debug_assert_ne!(kind, SpanKind::Unchanged);

        DiffSpan {
            text,
            kind,
            operation: Some(operation),
            acceptance: Some(acceptance),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn kind(&self) -> SpanKind { self.kind }

    #[must_use]
    pub fn operation(&self) -> Option<OperationId> { self.operation }

    #[must_use]
    pub fn acceptance(&self) -> Option<Acceptance> { self.acceptance }

    /// Whether the span is part of the text produced by applying the accepted
    /// operations.
    #[must_use]
    pub fn is_visible_in_result(&self) -> bool {
        let accepted = self.acceptance.is_some_and(Acceptance::is_accepted);

        match self.kind {
            SpanKind::Unchanged => true,
            SpanKind::Deleted => !accepted,
            SpanKind::Inserted => accepted,
        }
    }
}
