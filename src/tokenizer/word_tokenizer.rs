use super::token::Token;

/// Splits text on word boundaries, creating tokens of alternating words and
/// whitespace. Whitespace runs are kept as tokens so that joining the tokens
/// gives back the input.
///
/// ## Example
///
/// ```not_rust
/// "Hi there!" -> ["Hi", " ", "there!"]
/// ```
#[must_use]
pub fn word_tokenizer(text: &str) -> Vec<Token<'_>> {
    let mut result = Vec::new();

    let mut previous_boundary_index = 0;
    let mut previous_boundary_position = 0;
    let mut previous_char_is_whitespace = text.chars().next().is_none_or(char::is_whitespace);

    for (position, (i, c)) in text.char_indices().enumerate() {
        let is_current_char_whitespace = c.is_whitespace();
        if previous_char_is_whitespace != is_current_char_whitespace {
            result.push(Token::new(
                &text[previous_boundary_index..i],
                previous_boundary_position,
            ));
            previous_boundary_index = i;
            previous_boundary_position = position;
        }

        previous_char_is_whitespace = is_current_char_whitespace;
    }

    if previous_boundary_index < text.len() {
        result.push(Token::new(
            &text[previous_boundary_index..],
            previous_boundary_position,
        ));
    }

    result
}
