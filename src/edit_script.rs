mod diff_error;
mod edit_operation;
mod operation_id;
mod script;
mod utils;

pub use diff_error::{ConsistencyViolation, DiffError};
pub use edit_operation::{EditOperation, OperationKind};
pub use operation_id::OperationId;
pub use script::EditScript;

use crate::Granularity;

/// Computes the edit script transforming `old` into `new`, comparing the
/// texts in units of `granularity`. At line granularity, the lines are
/// aligned first and the replaced lines are then compared word by word.
///
/// Total over all pairs of strings: identical inputs result in an empty
/// script, an empty `old` in a single insert at 0 and an empty `new` in a
/// single delete over the whole text.
///
/// ```
/// use suggestion_diff::{Granularity, OperationKind, compute_diff};
///
/// let script = compute_diff("Hello", "", Granularity::Word);
/// let deletion = &script.operations()[0];
///
/// assert_eq!(deletion.kind(), OperationKind::Delete);
/// assert_eq!(deletion.range(), 0..5);
/// ```
#[must_use]
pub fn compute_diff(old: &str, new: &str, granularity: Granularity) -> EditScript {
    match granularity {
        Granularity::Line => EditScript::from_strings_by_line(old, new),
        Granularity::Word | Granularity::Character => {
            EditScript::from_strings_with_tokenizer(old, new, granularity.tokenizer())
        }
    }
}
