use token::Token;

pub mod character_tokenizer;
pub mod granularity;
pub mod line_tokenizer;
pub mod token;
pub mod word_tokenizer;

/// A tokenizer takes a string and returns tokens covering all of it, in
/// order, without gaps or overlaps.
pub type Tokenizer = dyn Fn(&str) -> Vec<Token<'_>>;
