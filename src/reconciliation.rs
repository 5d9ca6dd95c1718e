pub mod acceptance;
pub mod review;
pub mod spans;

use log::{debug, trace, warn};

use crate::{AcceptanceState, ConsistencyViolation, DiffError, EditOperation, EditScript};

/// Applies the accepted operations of `script` to `original` and returns the
/// resulting text. Pending and rejected operations are left out, so accepting
/// nothing returns `original` and accepting everything returns the text the
/// script was computed from.
///
/// The operations are spliced into a working copy from the end of the text
/// towards its start, so the positions of the ones not yet applied stay
/// valid. At the same position, a delete or replace is applied before an
/// insert, and inserts end up in the order they were emitted in. The result
/// only depends on which operations are accepted.
///
/// # Errors
///
/// Returns `DiffError::ConsistencyViolation` when
/// - `acceptance` refers to an operation not in `script`,
/// - an accepted operation is malformed or reaches past the end of
///   `original`,
/// - two accepted operations overlap,
/// - an accepted operation's `old_text` isn't found at its span.
pub fn apply_accepted(
    original: &str,
    script: &EditScript,
    acceptance: &AcceptanceState,
) -> Result<String, DiffError> {
    splice_accepted(original, script, acceptance).inspect_err(|error| {
        warn!("Failed to apply the accepted operations: {error}");
    })
}

fn splice_accepted(
    original: &str,
    script: &EditScript,
    acceptance: &AcceptanceState,
) -> Result<String, DiffError> {
    if let Some(unknown) = acceptance.ids().find(|id| !script.contains(*id)) {
        return Err(ConsistencyViolation::UnknownOperation { operation: unknown }.into());
    }

    let mut accepted: Vec<&EditOperation> = script
        .iter()
        .filter(|operation| acceptance.is_accepted(operation.id()))
        .collect();
    accepted.sort_by_key(|operation| operation.application_order());

    debug!(
        "Applying {} of {} operation(s) to a text of {} byte(s)",
        accepted.len(),
        script.len(),
        original.len()
    );

    let mut text: Vec<char> = original.chars().collect();
    let length = text.len();
    let mut previous: Option<&EditOperation> = None;

    for operation in accepted {
        operation.check_shape()?;
        operation.check_bounds(length)?;

        if let Some(previous) = previous
            && operation.end_pos() > previous.start_pos()
        {
            return Err(ConsistencyViolation::OverlappingOperations {
                operation: operation.id(),
                other: previous.id(),
            }
            .into());
        }

        // Everything before the previously applied operation is untouched.
        operation.check_text(&text)?;

        trace!("Applying {operation:?}");
        text.splice(operation.range(), operation.new_text().chars());

        previous = Some(operation);
    }

    Ok(text.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Granularity, OperationId, compute_diff};

    fn script_of(operations: Vec<Option<EditOperation>>) -> EditScript {
        EditScript::from_operations(operations.into_iter().flatten().collect())
    }

    #[test]
    fn test_accept_nothing_or_everything() {
        let old = "Merging text is hard!";
        let new = "Merging text is easy with reconcile!";
        let script = compute_diff(old, new, Granularity::Word);

        assert_eq!(
            apply_accepted(old, &script, &AcceptanceState::new(&script)).unwrap(),
            old
        );
        assert_eq!(
            apply_accepted(old, &script, &AcceptanceState::all_rejected(&script)).unwrap(),
            old
        );
        assert_eq!(
            apply_accepted(old, &script, &AcceptanceState::all_accepted(&script)).unwrap(),
            new
        );
    }

    #[test]
    fn test_inserts_at_the_same_position_keep_their_order() {
        let script = script_of(vec![
            EditOperation::create_insert(3, "1".to_owned()),
            EditOperation::create_replace(3, "def".to_owned(), "D".to_owned()),
            EditOperation::create_insert(3, "2".to_owned()),
            EditOperation::create_insert(6, "3".to_owned()),
        ]);

        assert_eq!(script.apply_all("abcdef").unwrap(), "abc12D3");

        let state: AcceptanceState = [OperationId::new(0), OperationId::new(2)]
            .into_iter()
            .collect();
        assert_eq!(apply_accepted("abcdef", &script, &state).unwrap(), "abc12def");
    }

    #[test]
    fn test_unknown_operation() {
        let script = compute_diff("a", "b", Granularity::Word);
        let state: AcceptanceState = [OperationId::new(7)].into_iter().collect();

        assert_eq!(
            apply_accepted("a", &script, &state),
            Err(ConsistencyViolation::UnknownOperation {
                operation: OperationId::new(7)
            }
            .into())
        );
    }

    #[test]
    fn test_overlapping_operations() {
        let script = script_of(vec![
            EditOperation::create_delete(0, "abc".to_owned()),
            EditOperation::create_replace(2, "cd".to_owned(), "x".to_owned()),
        ]);

        assert_eq!(
            script.apply_all("abcde"),
            Err(ConsistencyViolation::OverlappingOperations {
                operation: OperationId::new(0),
                other: OperationId::new(1),
            }
            .into())
        );

        // Each of them is fine on its own.
        for id in [OperationId::new(0), OperationId::new(1)] {
            let state: AcceptanceState = [id].into_iter().collect();
            assert!(apply_accepted("abcde", &script, &state).is_ok());
        }
    }

    #[test]
    fn test_insert_inside_a_removal() {
        let script = script_of(vec![
            EditOperation::create_delete(0, "abc".to_owned()),
            EditOperation::create_insert(1, "x".to_owned()),
        ]);

        assert!(matches!(
            script.apply_all("abc"),
            Err(DiffError::ConsistencyViolation(
                ConsistencyViolation::OverlappingOperations { .. }
            ))
        ));
    }

    #[test]
    fn test_stale_script() {
        let script = compute_diff("The Smart City", "The City", Granularity::Word);

        assert_eq!(
            script.apply_all("The Quick City").unwrap_err().to_string(),
            "Consistency violation: change-0 expects `Smart ` at 4..10 but found `Quick `"
        );
        assert!(matches!(
            script.apply_all("The"),
            Err(DiffError::ConsistencyViolation(
                ConsistencyViolation::SpanOutOfBounds { .. }
            ))
        ));
    }

    #[test]
    fn test_malformed_operation() {
        let script = EditScript::from_operations(vec![EditOperation::from_parts(
            crate::OperationKind::Delete,
            0,
            2,
            "abc".to_owned(),
            String::new(),
        )]);

        assert!(matches!(
            script.apply_all("abc"),
            Err(DiffError::ConsistencyViolation(
                ConsistencyViolation::MalformedOperation { .. }
            ))
        ));
    }
}
