use super::token::Token;

/// Splits text into lines, preserving line endings as separate tokens.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "\n", "World!"]
/// "Line 1\r\nLine 2" -> ["Line 1", "\r\n", "Line 2"]
/// ```
#[must_use]
pub fn line_tokenizer(text: &str) -> Vec<Token<'_>> {
    let mut result = Vec::new();
    let mut line_start = 0;
    let mut line_start_position = 0;

    let mut chars = text.char_indices().enumerate().peekable();
    while let Some((position, (i, c))) = chars.next() {
        if c == '\n' {
            if i > line_start {
                result.push(Token::new(&text[line_start..i], line_start_position));
            }
            result.push(Token::new("\n", position));
            line_start = i + 1;
            line_start_position = position + 1;
        } else if c == '\r' && chars.peek().is_some_and(|(_, (_, next))| *next == '\n') {
            if i > line_start {
                result.push(Token::new(&text[line_start..i], line_start_position));
            }
            chars.next(); // consume \n
            result.push(Token::new("\r\n", position));
            line_start = i + 2;
            line_start_position = position + 2;
        }
    }

    if line_start < text.len() {
        result.push(Token::new(&text[line_start..], line_start_position));
    }

    result
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;

    use super::*;

    #[test]
    fn test_with_snapshots() {
        assert_debug_snapshot!(line_tokenizer(""), @"[]");

        assert_debug_snapshot!(line_tokenizer("Hello\nWorld\n"), @r"
        [
            'Hello'@0..5,
            '\n'@5..6,
            'World'@6..11,
            '\n'@11..12,
        ]
        ");

        assert_debug_snapshot!(line_tokenizer("Line 1\r\nLine 2"), @r"
        [
            'Line 1'@0..6,
            '\r\n'@6..8,
            'Line 2'@8..14,
        ]
        ");

        assert_debug_snapshot!(line_tokenizer("\n\n"), @r"
        [
            '\n'@0..1,
            '\n'@1..2,
        ]
        ");
    }
}
