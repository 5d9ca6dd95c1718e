use crate::{edit_script::EditOperation, raw_operation::RawOperation};

/// Turn elongated raw operations into edit operations while keeping track of
/// the position in the original text. A delete run directly followed by an
/// insert run becomes a single replace.
pub fn cook_operations<'a, I>(raw_operations: I) -> Vec<EditOperation>
where
    I: IntoIterator<Item = RawOperation<'a>>,
{
    let mut order = 0; // start index of the next operation in the original text
    let mut line_number = 1;
    let mut token_index = 0;

    let mut result: Vec<EditOperation> = Vec::new();
    let mut raw_operations = raw_operations.into_iter().peekable();

    while let Some(raw_operation) = raw_operations.next() {
        let length = raw_operation.text_length();

        let operation = match raw_operation {
            RawOperation::Equal(..) => None,
            RawOperation::Insert(..) => {
                EditOperation::create_insert(order, raw_operation.text())
            }
            RawOperation::Delete(..) => {
                match raw_operations.next_if(|next| matches!(next, RawOperation::Insert(..))) {
                    Some(insert) => {
                        EditOperation::create_replace(order, raw_operation.text(), insert.text())
                    }
                    None => EditOperation::create_delete(order, raw_operation.text()),
                }
            }
        };

        if let Some(operation) = operation {
            result.push(operation.with_location(result.len(), line_number, token_index));
        }

        if !matches!(raw_operation, RawOperation::Insert(..)) {
            order += length;
            line_number += raw_operation.line_feed_count();
            token_index += raw_operation.tokens().len();
        }
    }

    result
}
