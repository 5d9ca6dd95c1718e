use std::str::Chars;

/// A helper for walking an original string in-order based on a series of
/// copies and skips applied to it. It is safe to use with UTF-8
/// strings as all operations are based on character indices. The methods must
/// be called in-order.
#[derive(Debug)]
pub struct StringBuilder<'a> {
    original: Chars<'a>,
    buffer: String,
    position: usize,
}

impl<'a> StringBuilder<'a> {
    pub fn new(original: &'a str) -> Self {
        StringBuilder {
            original: original.chars(),
            buffer: String::with_capacity(original.len()),
            position: 0,
        }
    }

    /// Number of characters of the original string consumed so far.
    pub fn position(&self) -> usize { self.position }

    /// Skip copying `length` characters from the original string to the built
    /// buffer, returning the skipped characters.
    pub fn delete(&mut self, length: usize) -> String {
        let deleted: String = self.original.by_ref().take(length).collect();
        self.position += deleted.chars().count();

        deleted
    }

    /// Copy `length` characters from the original string to the built buffer.
    pub fn retain(&mut self, length: usize) {
        let before = self.buffer.len();
        self.buffer.extend(self.original.by_ref().take(length));
        self.position += self.buffer[before..].chars().count();
    }

    /// Copy everything left in the original string to the built buffer.
    pub fn retain_rest(&mut self) {
        let rest = self.original.as_str();
        self.position += rest.chars().count();
        self.buffer.push_str(rest);
        self.original = "".chars();
    }

    /// Returns the currently built buffer and clears it to allow consuming
    /// the result incrementally.
    pub fn take(&mut self) -> String { std::mem::take(&mut self.buffer) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_string_builder() {
        let original = "aaa bbb ccc";
        let mut builder = StringBuilder::new(original);

        assert_eq!(builder.delete(3), "aaa");
        builder.retain(8);

        assert_eq!(builder.take(), " bbb ccc");
        assert_eq!(builder.position(), 11);

        let original = "abcde";
        let mut builder = StringBuilder::new(original);

        builder.retain(1);
        builder.delete(3);
        builder.retain(1);

        assert_eq!(builder.take(), "ae");
    }

    #[test]
    fn test_incremental_take() {
        let mut builder = StringBuilder::new("hello world");

        builder.retain(5);
        assert_eq!(builder.take(), "hello");

        builder.retain_rest();
        assert_eq!(builder.take(), " world");
        assert_eq!(builder.position(), 11);
    }

    #[test]
    fn test_unicode_characters() {
        let original = "こんにちは";
        let mut builder = StringBuilder::new(original);

        builder.retain(3);
        assert_eq!(builder.delete(1), "ち");
        builder.retain(1);

        assert_eq!(builder.take(), "こんには");
        assert_eq!(builder.position(), 5);
    }

    #[test]
    fn test_delete_past_the_end() {
        let mut builder = StringBuilder::new("Hello");

        assert_eq!(builder.delete(10), "Hello");
        assert_eq!(builder.position(), 5);
        assert_eq!(builder.take(), "");
    }
}
