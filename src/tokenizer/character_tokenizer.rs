use super::token::Token;

/// Splits text into UTF-8 characters.
///
/// ```not_rust
/// "Hey!" -> ["H", "e", "y", "!"]
/// ```
#[must_use]
pub fn character_tokenizer(text: &str) -> Vec<Token<'_>> {
    text.char_indices()
        .enumerate()
        .map(|(position, (i, c))| Token::new(&text[i..i + c.len_utf8()], position))
        .collect()
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;

    use super::*;

    #[test]
    fn test_with_snapshots() {
        assert_debug_snapshot!(character_tokenizer(""), @"[]");

        assert_debug_snapshot!(character_tokenizer("hé y"), @r"
        [
            'h'@0..1,
            'é'@1..2,
            ' '@2..3,
            'y'@3..4,
        ]
        ");
    }
}
