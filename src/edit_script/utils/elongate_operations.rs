use crate::raw_operation::RawOperation;

/// Elongates the operations by merging adjacent operations of the same type.
/// Between two equal runs, the inserts and deletes can be interleaved, such
/// as `IDIDID`; these are turned into `DDDIII`, one delete run followed by one
/// insert run.
pub fn elongate_operations<'a, I>(raw_operations: I) -> Vec<RawOperation<'a>>
where
    I: IntoIterator<Item = RawOperation<'a>>,
{
    // Both the last insert and the last delete have to be kept around, not
    // just the last operation.
    let mut maybe_previous_insert: Option<RawOperation<'a>> = None;
    let mut maybe_previous_delete: Option<RawOperation<'a>> = None;
    let mut maybe_previous_equal: Option<RawOperation<'a>> = None;

    let mut result: Vec<RawOperation<'a>> = raw_operations
        .into_iter()
        .flat_map(|next| match next {
            RawOperation::Insert(..) => {
                maybe_previous_insert = Some(match maybe_previous_insert.take() {
                    Some(prev) => prev.join(next),
                    None => next,
                });

                Box::new(maybe_previous_equal.take().into_iter())
                    as Box<dyn Iterator<Item = RawOperation<'a>> + 'a>
            }
            RawOperation::Delete(..) => {
                maybe_previous_delete = Some(match maybe_previous_delete.take() {
                    Some(prev) => prev.join(next),
                    None => next,
                });

                Box::new(maybe_previous_equal.take().into_iter())
            }
            RawOperation::Equal(..) => {
                maybe_previous_equal = Some(match maybe_previous_equal.take() {
                    Some(prev) => prev.join(next),
                    None => next,
                });

                Box::new(
                    maybe_previous_delete
                        .take()
                        .into_iter()
                        .chain(maybe_previous_insert.take()),
                )
            }
        })
        .collect();

    result.extend(
        maybe_previous_equal
            .into_iter()
            .chain(maybe_previous_delete)
            .chain(maybe_previous_insert),
    );

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::token::Token;

    fn insert(text: &str) -> RawOperation<'_> { RawOperation::Insert(vec![Token::new(text, 0)]) }

    fn delete(text: &str) -> RawOperation<'_> { RawOperation::Delete(vec![Token::new(text, 0)]) }

    fn equal(text: &str) -> RawOperation<'_> { RawOperation::Equal(vec![Token::new(text, 0)]) }

    fn describe(operations: &[RawOperation<'_>]) -> Vec<String> {
        operations
            .iter()
            .map(|operation| {
                let kind = match operation {
                    RawOperation::Insert(..) => "I",
                    RawOperation::Delete(..) => "D",
                    RawOperation::Equal(..) => "E",
                };
                format!("{kind}:{}", operation.text())
            })
            .collect()
    }

    #[test]
    fn test_elongate_operations_empty() {
        assert!(elongate_operations(vec![]).is_empty());
    }

    #[test]
    fn test_elongate_operations_interleaved() {
        let result = elongate_operations(vec![insert("a"), delete("b"), insert("c"), delete("d")]);

        assert_eq!(describe(&result), vec!["D:bd", "I:ac"]);
    }

    #[test]
    fn test_elongate_operations_with_equal() {
        let result = elongate_operations(vec![equal("a"), equal("b"), insert("c"), insert("d")]);

        assert_eq!(describe(&result), vec!["E:ab", "I:cd"]);
    }

    #[test]
    fn test_elongate_operations_mixed_sequence() {
        let result = elongate_operations(vec![
            insert("a"),
            equal("b"),
            delete("c"),
            insert("x"),
            delete("y"),
            equal("d"),
            equal("e"),
            delete("f"),
        ]);

        assert_eq!(
            describe(&result),
            vec!["I:a", "E:b", "D:cy", "I:x", "E:de", "D:f"]
        );
    }
}
