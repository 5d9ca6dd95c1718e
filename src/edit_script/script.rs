use core::fmt::Display;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    ConsistencyViolation, DiffError, EditOperation, OperationId, OperationKind,
    utils::{cook_operations::cook_operations, elongate_operations::elongate_operations},
};
use crate::{
    AcceptanceState, DiffSpan, Granularity, raw_operation::RawOperation,
    reconciliation::{apply_accepted, spans::render_spans},
    tokenizer::{Tokenizer, line_tokenizer::line_tokenizer, word_tokenizer::word_tokenizer},
};

/// The ordered list of operations transforming an original (old) text into
/// an updated (new) one. Immutable once produced.
///
/// Operations are sorted by their start position, the spans of deletes and
/// replaces never overlap, and every operation's position in the list is its
/// sequence index and thus its [`OperationId`].
///
/// ```
/// use suggestion_diff::{AcceptanceState, EditScript, OperationId};
///
/// let original = "Merging text is hard!";
/// let script = EditScript::from_strings(original, "Merging text is easy!");
///
/// let mut acceptance = AcceptanceState::new(&script);
/// assert_eq!(script.apply_accepted(original, &acceptance).unwrap(), original);
///
/// acceptance.accept(OperationId::new(0));
/// assert_eq!(
///     script.apply_accepted(original, &acceptance).unwrap(),
///     "Merging text is easy!"
/// );
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<EditOperation>", into = "Vec<EditOperation>")
)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditScript {
    operations: Vec<EditOperation>,
}

impl EditScript {
    /// Create an `EditScript` from the given original (old) and updated (new)
    /// strings, comparing them word by word.
    #[must_use]
    pub fn from_strings(original: &str, updated: &str) -> Self {
        Self::from_strings_with_tokenizer(original, updated, Granularity::Word.tokenizer())
    }

    /// Create an `EditScript` from the given original (old) and updated (new)
    /// strings. The returned script represents the changes from the original
    /// to the updated text: accepting all of its operations and applying them
    /// to the original text results in the updated text. The tokenizer
    /// function decides the units of comparison.
    #[must_use]
    pub fn from_strings_with_tokenizer(
        original: &str,
        updated: &str,
        tokenizer: &Tokenizer,
    ) -> Self {
        let original_tokens = (tokenizer)(original);
        let updated_tokens = (tokenizer)(updated);

        let diff = RawOperation::vec_from(&original_tokens, &updated_tokens);
        let script = Self {
            operations: cook_operations(elongate_operations(diff)),
        };

        debug_assert_eq!(
            script.validate(original),
            Ok(()),
            "Produced edit script doesn't fit the original text"
        );

        debug!(
            "Computed {} operation(s) from {} original and {} updated token(s)",
            script.len(),
            original_tokens.len(),
            updated_tokens.len()
        );

        script
    }

    /// Create an `EditScript` by first aligning the lines of the original
    /// (old) and updated (new) strings, then comparing each replaced block
    /// of lines word by word. Only the changed words of a modified line are
    /// reported, while whole inserted or deleted lines stay single
    /// operations.
    ///
    /// The operations found inside a block keep the block's token index,
    /// which counts line tokens, and get the line number they start on.
    #[must_use]
    pub fn from_strings_by_line(original: &str, updated: &str) -> Self {
        let lines = Self::from_strings_with_tokenizer(original, updated, &line_tokenizer);
        let line_operation_count = lines.len();

        let script = Self::from_operations(
            lines
                .operations
                .into_iter()
                .flat_map(Self::refine_by_word)
                .collect(),
        );

        debug_assert_eq!(
            script.validate(original),
            Ok(()),
            "Produced edit script doesn't fit the original text"
        );

        debug!(
            "Refined {} line level operation(s) into {}",
            line_operation_count,
            script.len()
        );

        script
    }

    fn refine_by_word(operation: EditOperation) -> Vec<EditOperation> {
        if operation.kind() != OperationKind::Replace {
            return vec![operation];
        }

        let block = Self::from_strings_with_tokenizer(
            operation.old_text(),
            operation.new_text(),
            &word_tokenizer,
        );

        block
            .operations
            .into_iter()
            .map(|refined| {
                let line_number = operation.line_number() + refined.line_number() - 1;

                refined.shifted(operation.start_pos()).with_location(
                    0,
                    line_number,
                    operation.token_index(),
                )
            })
            .collect()
    }

    /// Collect operations into a script, e.g. after deserializing them. The
    /// sequence indices are reassigned from the positions in the list; the
    /// operations are otherwise taken as they are.
    #[must_use]
    pub fn from_operations(operations: Vec<EditOperation>) -> Self {
        Self {
            operations: operations
                .into_iter()
                .enumerate()
                .map(|(index, operation)| operation.with_sequence_index(index))
                .collect(),
        }
    }

    #[must_use]
    pub fn operations(&self) -> &[EditOperation] { &self.operations }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOperation> { self.operations.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.operations.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.operations.is_empty() }

    #[must_use]
    pub fn get(&self, id: OperationId) -> Option<&EditOperation> {
        self.operations.get(id.sequence_index())
    }

    #[must_use]
    pub fn contains(&self, id: OperationId) -> bool { self.get(id).is_some() }

    pub fn ids(&self) -> impl Iterator<Item = OperationId> + '_ {
        self.operations.iter().map(EditOperation::id)
    }

    /// Check the script against the text it is meant to be applied to:
    /// every operation is well-formed and within bounds, the operations are
    /// sorted by their start, the deleted and replaced spans are disjoint,
    /// and each `old_text` is found at its span.
    ///
    /// # Errors
    ///
    /// Returns the first `DiffError::ConsistencyViolation` found.
    pub fn validate(&self, original: &str) -> Result<(), DiffError> {
        let text: Vec<char> = original.chars().collect();
        let mut previous: Option<&EditOperation> = None;
        let mut last_removing: Option<&EditOperation> = None;

        for operation in &self.operations {
            operation.check_shape()?;
            operation.check_bounds(text.len())?;

            if let Some(previous) = previous
                && operation.start_pos() < previous.start_pos()
            {
                return Err(ConsistencyViolation::OutOfOrder {
                    operation: operation.id(),
                    start: operation.start_pos(),
                    previous: previous.id(),
                    previous_start: previous.start_pos(),
                }
                .into());
            }

            if let Some(removing) = last_removing
                && operation.start_pos() < removing.end_pos()
                && (operation.kind().is_removing() || operation.start_pos() > removing.start_pos())
            {
                return Err(ConsistencyViolation::OverlappingOperations {
                    operation: operation.id(),
                    other: removing.id(),
                }
                .into());
            }

            operation.check_text(&text)?;

            if operation.kind().is_removing() {
                last_removing = Some(operation);
            }
            previous = Some(operation);
        }

        Ok(())
    }

    /// Apply the accepted operations to `original`. See [`apply_accepted`].
    ///
    /// # Errors
    ///
    /// Returns `DiffError::ConsistencyViolation` if the script or the
    /// acceptance state doesn't fit `original`.
    pub fn apply_accepted(
        &self,
        original: &str,
        acceptance: &AcceptanceState,
    ) -> Result<String, DiffError> {
        apply_accepted(original, self, acceptance)
    }

    /// Apply every operation to `original`, resulting in the updated text the
    /// script was computed from.
    ///
    /// # Errors
    ///
    /// Returns `DiffError::ConsistencyViolation` if the script doesn't fit
    /// `original`.
    pub fn apply_all(&self, original: &str) -> Result<String, DiffError> {
        apply_accepted(original, self, &AcceptanceState::all_accepted(self))
    }

    /// Split `original` into unchanged, deleted and inserted spans for
    /// display. See [`render_spans`].
    ///
    /// # Errors
    ///
    /// Returns `DiffError::ConsistencyViolation` if the script or the
    /// acceptance state doesn't fit `original`.
    pub fn spans(
        &self,
        original: &str,
        acceptance: &AcceptanceState,
    ) -> Result<Vec<DiffSpan>, DiffError> {
        render_spans(original, self, acceptance)
    }
}

impl From<Vec<EditOperation>> for EditScript {
    fn from(operations: Vec<EditOperation>) -> Self { Self::from_operations(operations) }
}

impl From<EditScript> for Vec<EditOperation> {
    fn from(script: EditScript) -> Self { script.operations }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOperation;
    type IntoIter = std::slice::Iter<'a, EditOperation>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// One operation per line, prefixed by its id.
impl Display for EditScript {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for operation in &self.operations {
            writeln!(f, "{} {operation}", operation.id())?;
        }

        Ok(())
    }
}
