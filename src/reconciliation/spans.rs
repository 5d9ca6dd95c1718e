use crate::{
    AcceptanceState, ConsistencyViolation, DiffError, EditOperation, EditScript,
    types::diff_span::{DiffSpan, SpanKind},
    utils::string_builder::StringBuilder,
};

/// Walks `original` from its start, splitting it into the unchanged text
/// between the operations of `script`, the text each of them deletes, and
/// the text each of them inserts. Inserts at the start of a delete or
/// replace come before it.
///
/// Unchanged text is never split into adjacent spans and no span is empty.
/// Concatenating the spans that are visible in the result gives the same
/// text as `apply_accepted`.
///
/// # Errors
///
/// Returns `DiffError::ConsistencyViolation` if `acceptance` refers to an
/// operation not in `script`, or if an operation is malformed, overlaps with
/// another one, or doesn't match `original`.
pub fn render_spans(
    original: &str,
    script: &EditScript,
    acceptance: &AcceptanceState,
) -> Result<Vec<DiffSpan>, DiffError> {
    if let Some(unknown) = acceptance.ids().find(|id| !script.contains(*id)) {
        return Err(ConsistencyViolation::UnknownOperation { operation: unknown }.into());
    }

    let mut operations: Vec<&EditOperation> = script.iter().collect();
    operations.sort_by_key(|operation| operation.reading_order());

    let length = original.chars().count();
    let mut builder = StringBuilder::new(original);
    let mut last_removal: Option<&EditOperation> = None;
    let mut result: Vec<DiffSpan> = Vec::with_capacity(2 * operations.len() + 1);

    for operation in operations {
        operation.check_shape()?;
        operation.check_bounds(length)?;

        if let Some(removal) = last_removal
            && operation.start_pos() < builder.position()
        {
            return Err(ConsistencyViolation::OverlappingOperations {
                operation: operation.id(),
                other: removal.id(),
            }
            .into());
        }

        builder.retain(operation.start_pos() - builder.position());
        push_unchanged(&mut result, builder.take());

        let state = acceptance.get(operation.id());

        if operation.kind().is_removing() {
            let deleted = builder.delete(operation.len());
            if deleted != operation.old_text() {
                return Err(ConsistencyViolation::TextMismatch {
                    operation: operation.id(),
                    start: operation.start_pos(),
                    end: operation.end_pos(),
                    expected: operation.old_text().to_owned(),
                    found: deleted,
                }
                .into());
            }

            result.push(DiffSpan::changed(
                deleted,
                SpanKind::Deleted,
                operation.id(),
                state,
            ));
            last_removal = Some(operation);
        }

        if !operation.new_text().is_empty() {
            result.push(DiffSpan::changed(
                operation.new_text().to_owned(),
                SpanKind::Inserted,
                operation.id(),
                state,
            ));
        }
    }

    builder.retain_rest();
    push_unchanged(&mut result, builder.take());

    Ok(result)
}

fn push_unchanged(spans: &mut Vec<DiffSpan>, text: String) {
    if !text.is_empty() {
        spans.push(DiffSpan::unchanged(text));
    }
}
