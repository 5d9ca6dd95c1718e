use core::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    Tokenizer, character_tokenizer::character_tokenizer, line_tokenizer::line_tokenizer,
    token::Token, word_tokenizer::word_tokenizer,
};
use crate::DiffError;

/// The comparison unit used when aligning two texts.
///
/// Parses from and displays as `"word"`, `"character"` and `"line"`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    /// Alternating runs of whitespace and non-whitespace.
    #[default]
    Word,

    /// Single Unicode scalar values.
    Character,

    /// Line contents and line endings.
    Line,
}

impl Granularity {
    /// Returns the tokenizer implementing this granularity.
    #[must_use]
    pub fn tokenizer(self) -> &'static Tokenizer {
        match self {
            Granularity::Word => &word_tokenizer,
            Granularity::Character => &character_tokenizer,
            Granularity::Line => &line_tokenizer,
        }
    }

    #[must_use]
    pub fn tokenize(self, text: &str) -> Vec<Token<'_>> { (self.tokenizer())(text) }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Word => "word",
            Granularity::Character => "character",
            Granularity::Line => "line",
        }
    }
}

impl Display for Granularity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = DiffError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "word" => Ok(Granularity::Word),
            "character" | "char" => Ok(Granularity::Character),
            "line" => Ok(Granularity::Line),
            other => Err(DiffError::invalid_input(format!(
                "unknown granularity `{other}`, expected one of `word`, `character` or `line`"
            ))),
        }
    }
}
