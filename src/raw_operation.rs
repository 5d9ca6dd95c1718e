use crate::{tokenizer::token::Token, utils::myers_diff::myers_diff};

/// Alignment step containing the affected `Token`-s.
///
/// `RawOperation`s of the same type can be joined together into longer runs.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOperation<'a> {
    Insert(Vec<Token<'a>>),
    Delete(Vec<Token<'a>>),
    Equal(Vec<Token<'a>>),
}

impl<'a> RawOperation<'a> {
    /// Aligns `left` (old) and `right` (new), returning one operation per
    /// token.
    pub fn vec_from(left: &[Token<'a>], right: &[Token<'a>]) -> Vec<Self> {
        myers_diff(left, right)
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        match self {
            RawOperation::Insert(tokens)
            | RawOperation::Delete(tokens)
            | RawOperation::Equal(tokens) => tokens,
        }
    }

    /// Number of characters covered by the tokens.
    pub fn text_length(&self) -> usize { self.tokens().iter().map(Token::len).sum() }

    pub fn text(&self) -> String { self.tokens().iter().map(Token::text).collect() }

    pub fn line_feed_count(&self) -> usize {
        self.tokens().iter().map(Token::line_feed_count).sum()
    }

    pub fn is_same_type(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Extends the operation with another operation. Only operations of the
    /// same type as self can be used to extend self, otherwise the function
    /// will panic.
    pub fn join(self, other: RawOperation<'a>) -> RawOperation<'a> {
        debug_assert!(
            self.is_same_type(&other),
            "Cannot extend operations of different types. This should have been handled before \
             calling this function."
        );

        match (self, other) {
            (RawOperation::Insert(mut tokens), RawOperation::Insert(other_tokens)) => {
                tokens.extend(other_tokens);
                RawOperation::Insert(tokens)
            }
            (RawOperation::Delete(mut tokens), RawOperation::Delete(other_tokens)) => {
                tokens.extend(other_tokens);
                RawOperation::Delete(tokens)
            }
            (RawOperation::Equal(mut tokens), RawOperation::Equal(other_tokens)) => {
                tokens.extend(other_tokens);
                RawOperation::Equal(tokens)
            }
            _ => unreachable!("Only operations of the same type can be extended"),
        }
    }
}
