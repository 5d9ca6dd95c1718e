use core::{
    cmp::Reverse,
    fmt::{Debug, Display},
    str::FromStr,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ConsistencyViolation, DiffError, OperationId};

/// The type of an [`EditOperation`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Insert,
    Delete,
    Replace,
}

impl OperationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Insert => "insert",
            OperationKind::Delete => "delete",
            OperationKind::Replace => "replace",
        }
    }

    /// Whether the operation removes a span of the original text.
    #[must_use]
    pub fn is_removing(self) -> bool { matches!(self, Self::Delete | Self::Replace) }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = DiffError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "insert" => Ok(OperationKind::Insert),
            "delete" => Ok(OperationKind::Delete),
            "replace" => Ok(OperationKind::Replace),
            _ => Err(DiffError::invalid_input(format!(
                "`{value}` is not an operation type, expected `insert`, `delete` or `replace`"
            ))),
        }
    }
}

/// A single change to the original text that can be accepted or rejected
/// independently of the others.
///
/// Positions are character indices into the original text. An insert is
/// zero-width (`start_pos == end_pos`), deletes and replaces cover the
/// half-open range `start_pos..end_pos` whose text is `old_text`.
///
/// When serialized, the operation has the shape
/// `{ "type", "start_pos", "end_pos", "old_text", "new_text", "line_number",
/// "token_index" }`, and `word_index` is read as `token_index`. The sequence
/// index is not part of it, it is reassigned from the position when the
/// operations are collected into an `EditScript`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq)]
pub struct EditOperation {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: OperationKind,
    start_pos: usize,
    end_pos: usize,

    #[cfg_attr(feature = "serde", serde(default))]
    old_text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    new_text: String,

    #[cfg_attr(feature = "serde", serde(default = "first_line"))]
    line_number: usize,
    #[cfg_attr(feature = "serde", serde(default, alias = "word_index"))]
    token_index: usize,

    #[cfg_attr(feature = "serde", serde(skip))]
    sequence_index: usize,
}

#[cfg(feature = "serde")]
fn first_line() -> usize { 1 }

impl EditOperation {
    /// Creates an insert operation at the given index. If the text is empty
    /// (meaning that the operation would be a no-op), returns None.
    #[must_use]
    pub fn create_insert(index: usize, new_text: String) -> Option<Self> {
        if new_text.is_empty() {
            return None;
        }

        Some(Self::from_parts(
            OperationKind::Insert,
            index,
            index,
            String::new(),
            new_text,
        ))
    }

    /// Creates a delete operation removing `old_text` from the given index.
    /// If the text is empty, returns None.
    #[must_use]
    pub fn create_delete(index: usize, old_text: String) -> Option<Self> {
        if old_text.is_empty() {
            return None;
        }

        let end = index + old_text.chars().count();
        Some(Self::from_parts(
            OperationKind::Delete,
            index,
            end,
            old_text,
            String::new(),
        ))
    }

    /// Creates an operation turning `old_text` at the given index into
    /// `new_text`. Degrades into an insert or a delete when one of the sides is
    /// empty and returns None when both are.
    #[must_use]
    pub fn create_replace(index: usize, old_text: String, new_text: String) -> Option<Self> {
        match (old_text.is_empty(), new_text.is_empty()) {
            (true, true) => None,
            (true, false) => Self::create_insert(index, new_text),
            (false, true) => Self::create_delete(index, old_text),
            (false, false) => {
                let end = index + old_text.chars().count();
                Some(Self::from_parts(
                    OperationKind::Replace,
                    index,
                    end,
                    old_text,
                    new_text,
                ))
            }
        }
    }

    /// Creates an operation from raw fields, e.g. ones received from a client.
    /// Nothing is checked here; applying the operation reports any
    /// inconsistency.
    #[must_use]
    pub fn from_parts(
        kind: OperationKind,
        start_pos: usize,
        end_pos: usize,
        old_text: String,
        new_text: String,
    ) -> Self {
        Self {
            kind,
            start_pos,
            end_pos,
            old_text,
            new_text,
            line_number: 1,
            token_index: 0,
            sequence_index: 0,
        }
    }

    pub(crate) fn with_location(
        self,
        sequence_index: usize,
        line_number: usize,
        token_index: usize,
    ) -> Self {
        Self {
            sequence_index,
            line_number,
            token_index,
            ..self
        }
    }

    /// Moves the operation by `offset` characters, e.g. to place an operation
    /// computed on an excerpt into the text the excerpt was taken from.
    pub(crate) fn shifted(mut self, offset: usize) -> Self {
        self.start_pos += offset;
        self.end_pos += offset;

        self
    }

    pub(crate) fn with_sequence_index(self, sequence_index: usize) -> Self {
        Self {
            sequence_index,
            ..self
        }
    }

    #[must_use]
    pub fn kind(&self) -> OperationKind { self.kind }

    #[must_use]
    pub fn start_pos(&self) -> usize { self.start_pos }

    #[must_use]
    pub fn end_pos(&self) -> usize { self.end_pos }

    /// Character range of the original text affected by the operation.
    #[must_use]
    pub fn range(&self) -> Range<usize> { self.start_pos..self.end_pos }

    /// Number of original characters removed by the operation.
    #[must_use]
    pub fn len(&self) -> usize { self.end_pos.saturating_sub(self.start_pos) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn old_text(&self) -> &str { &self.old_text }

    #[must_use]
    pub fn new_text(&self) -> &str { &self.new_text }

    /// 1-based line of the original text on which the operation starts.
    #[must_use]
    pub fn line_number(&self) -> usize { self.line_number }

    /// Index of the first affected token of the original text.
    #[must_use]
    pub fn token_index(&self) -> usize { self.token_index }

    #[must_use]
    pub fn sequence_index(&self) -> usize { self.sequence_index }

    #[must_use]
    pub fn id(&self) -> OperationId { OperationId::new(self.sequence_index) }

    /// Sort key for applying operations from the end of the text towards its
    /// start: descending start, removals before insertions at the same start,
    /// then descending sequence index so that inserts sharing a position end
    /// up in emission order.
    pub(crate) fn application_order(&self) -> (Reverse<usize>, u8, Reverse<usize>) {
        (
            Reverse(self.start_pos),
            u8::from(!self.kind.is_removing()),
            Reverse(self.sequence_index),
        )
    }

    /// Sort key for walking the text from its start: the mirror image of
    /// `application_order`.
    pub(crate) fn reading_order(&self) -> (usize, u8, usize) {
        (
            self.start_pos,
            u8::from(self.kind.is_removing()),
            self.sequence_index,
        )
    }

    /// Checks that the fields of the operation don't contradict each other.
    pub(crate) fn check_shape(&self) -> Result<(), ConsistencyViolation> {
        let reason = match self.kind {
            _ if self.end_pos < self.start_pos => Some("end_pos precedes start_pos"),
            OperationKind::Insert if self.start_pos != self.end_pos => {
                Some("insert must be zero-width")
            }
            OperationKind::Insert if !self.old_text.is_empty() => {
                Some("insert must not carry old text")
            }
            OperationKind::Insert if self.new_text.is_empty() => Some("insert without new text"),
            OperationKind::Delete | OperationKind::Replace if self.start_pos == self.end_pos => {
                Some("empty span")
            }
            OperationKind::Delete if !self.new_text.is_empty() => {
                Some("delete must not carry new text")
            }
            OperationKind::Replace if self.new_text.is_empty() => Some("replace without new text"),
            OperationKind::Delete | OperationKind::Replace
                if self.old_text.chars().count() != self.len() =>
            {
                Some("old text length doesn't match the span")
            }
            _ => None,
        };

        reason.map_or(Ok(()), |reason| {
            Err(ConsistencyViolation::MalformedOperation {
                operation: self.id(),
                reason,
            })
        })
    }

    /// Checks that the operation fits into a text of `length` characters.
    pub(crate) fn check_bounds(&self, length: usize) -> Result<(), ConsistencyViolation> {
        if self.end_pos > length {
            return Err(ConsistencyViolation::SpanOutOfBounds {
                operation: self.id(),
                start: self.start_pos,
                end: self.end_pos,
                available: length,
            });
        }

        Ok(())
    }

    /// Checks that `text` holds `old_text` at the operation's span.
    pub(crate) fn check_text(&self, text: &[char]) -> Result<(), ConsistencyViolation> {
        let Some(found) = text.get(self.range()) else {
            return Err(ConsistencyViolation::SpanOutOfBounds {
                operation: self.id(),
                start: self.start_pos,
                end: self.end_pos,
                available: text.len(),
            });
        };

        if found.iter().copied().eq(self.old_text.chars()) {
            Ok(())
        } else {
            Err(ConsistencyViolation::TextMismatch {
                operation: self.id(),
                start: self.start_pos,
                end: self.end_pos,
                expected: self.old_text.clone(),
                found: found.iter().collect(),
            })
        }
    }
}

fn escape(text: &str) -> String { text.replace('\r', "\\r").replace('\n', "\\n") }

impl Display for EditOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            OperationKind::Insert => {
                write!(
                    f,
                    "<insert '{}' at {}>",
                    escape(&self.new_text),
                    self.start_pos
                )
            }
            OperationKind::Delete => write!(
                f,
                "<delete '{}' at {}..{}>",
                escape(&self.old_text),
                self.start_pos,
                self.end_pos
            ),
            OperationKind::Replace => write!(
                f,
                "<replace '{}' with '{}' at {}..{}>",
                escape(&self.old_text),
                escape(&self.new_text),
                self.start_pos,
                self.end_pos
            ),
        }
    }
}

impl Debug for EditOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {self}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("insert", Some(OperationKind::Insert))]
    #[test_case("replace", Some(OperationKind::Replace))]
    #[test_case("Delete", None)]
    #[test_case("", None)]
    fn test_parse_kind(value: &str, expected: Option<OperationKind>) {
        assert_eq!(value.parse::<OperationKind>().ok(), expected);
    }

    #[test]
    fn test_create() {
        assert_eq!(EditOperation::create_insert(3, String::new()), None);
        assert_eq!(EditOperation::create_delete(3, String::new()), None);
        assert_eq!(
            EditOperation::create_replace(3, String::new(), String::new()),
            None
        );

        let replace =
            EditOperation::create_replace(4, "Smärt".to_owned(), "Bright".to_owned()).unwrap();
        assert_eq!(replace.kind(), OperationKind::Replace);
        assert_eq!(replace.range(), 4..9);
        assert_eq!(replace.to_string(), "<replace 'Smärt' with 'Bright' at 4..9>");

        let insert = EditOperation::create_replace(4, String::new(), "new\n".to_owned()).unwrap();
        assert_eq!(insert.kind(), OperationKind::Insert);
        assert_eq!(format!("{insert:?}"), "change-0 <insert 'new\\n' at 4>");

        let delete = EditOperation::create_replace(4, "old".to_owned(), String::new()).unwrap();
        assert_eq!(delete.kind(), OperationKind::Delete);
        assert_eq!(delete.to_string(), "<delete 'old' at 4..7>");
    }

    #[test_case(OperationKind::Insert, 2, 3, "", "x"; "wide insert")]
    #[test_case(OperationKind::Insert, 2, 2, "a", "x"; "insert with old text")]
    #[test_case(OperationKind::Insert, 2, 2, "", ""; "empty insert")]
    #[test_case(OperationKind::Delete, 2, 2, "", ""; "empty delete")]
    #[test_case(OperationKind::Delete, 2, 4, "ab", "x"; "delete with new text")]
    #[test_case(OperationKind::Replace, 2, 4, "ab", ""; "replace without new text")]
    #[test_case(OperationKind::Replace, 2, 4, "abc", "x"; "length mismatch")]
    #[test_case(OperationKind::Delete, 4, 2, "ab", ""; "reversed span")]
    fn test_check_shape_rejects(
        kind: OperationKind,
        start: usize,
        end: usize,
        old_text: &str,
        new_text: &str,
    ) {
        let operation =
            EditOperation::from_parts(kind, start, end, old_text.to_owned(), new_text.to_owned());

        assert!(matches!(
            operation.check_shape(),
            Err(ConsistencyViolation::MalformedOperation { .. })
        ));
    }

    #[test]
    fn test_check_text() {
        let text: Vec<char> = "The Smart City".chars().collect();
        let operation = EditOperation::create_delete(4, "Smart ".to_owned()).unwrap();

        assert_eq!(operation.check_shape(), Ok(()));
        assert_eq!(operation.check_bounds(text.len()), Ok(()));
        assert_eq!(operation.check_text(&text), Ok(()));

        let shifted = EditOperation::create_delete(3, "Smart ".to_owned()).unwrap();
        assert_eq!(
            shifted.check_text(&text),
            Err(ConsistencyViolation::TextMismatch {
                operation: OperationId::new(0),
                start: 3,
                end: 9,
                expected: "Smart ".to_owned(),
                found: " Smart".to_owned(),
            })
        );

        let beyond = EditOperation::create_delete(12, "City".to_owned()).unwrap();
        assert!(matches!(
            beyond.check_bounds(text.len()),
            Err(ConsistencyViolation::SpanOutOfBounds { available: 14, .. })
        ));
    }

    #[test]
    fn test_application_order() {
        let mut operations = [
            EditOperation::create_insert(4, "a".to_owned()).unwrap().with_sequence_index(0),
            EditOperation::create_delete(4, "b".to_owned()).unwrap().with_sequence_index(1),
            EditOperation::create_insert(4, "c".to_owned()).unwrap().with_sequence_index(2),
            EditOperation::create_delete(0, "d".to_owned()).unwrap().with_sequence_index(3),
            EditOperation::create_insert(9, "e".to_owned()).unwrap().with_sequence_index(4),
        ];

        operations.sort_by_key(EditOperation::application_order);
        assert_eq!(
            operations.iter().map(EditOperation::sequence_index).collect::<Vec<_>>(),
            vec![4, 1, 2, 0, 3]
        );

        operations.sort_by_key(EditOperation::reading_order);
        assert_eq!(
            operations.iter().map(EditOperation::sequence_index).collect::<Vec<_>>(),
            vec![3, 0, 2, 1, 4]
        );
    }
}
