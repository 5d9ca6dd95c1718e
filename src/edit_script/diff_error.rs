use thiserror::Error;

use super::OperationId;

/// Errors returned by the public entry points. There is no partial result: a
/// call either returns a complete value or one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// An argument was rejected before any work started, e.g. an unknown
    /// granularity or a malformed operation id.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The edit script or the acceptance state doesn't fit the text it is
    /// applied to. Continuing would corrupt the document.
    #[error("Consistency violation: {0}")]
    ConsistencyViolation(#[from] ConsistencyViolation),
}

impl DiffError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Details of a [`DiffError::ConsistencyViolation`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyViolation {
    /// The acceptance state refers to an operation the script doesn't have
    #[error("{operation} is not part of the edit script")]
    UnknownOperation { operation: OperationId },

    /// The operation's fields contradict each other
    #[error("{operation} is malformed: {reason}")]
    MalformedOperation {
        operation: OperationId,
        reason: &'static str,
    },

    /// The operation reaches past the end of the original text
    #[error(
        "{operation} spans {start}..{end} but the original text only has {available} characters"
    )]
    SpanOutOfBounds {
        operation: OperationId,
        start: usize,
        end: usize,
        available: usize,
    },

    /// Two operations touch the same characters of the original text
    #[error("{operation} overlaps with {other}")]
    OverlappingOperations {
        operation: OperationId,
        other: OperationId,
    },

    /// The text recorded in the operation isn't the text found at its span
    #[error("{operation} expects `{expected}` at {start}..{end} but found `{found}`")]
    TextMismatch {
        operation: OperationId,
        start: usize,
        end: usize,
        expected: String,
        found: String,
    },

    /// Operations are not sorted by their start position
    #[error("{operation} starts at {start}, before the preceding {previous} at {previous_start}")]
    OutOfOrder {
        operation: OperationId,
        start: usize,
        previous: OperationId,
        previous_start: usize,
    },
}
