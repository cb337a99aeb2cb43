//! Character cursor over the raw source text.

use crate::Position;

/// Returned by [`Cursor::peek`] once the input is exhausted.
pub const EOF_CHAR: char = '\0';

pub struct Cursor {
    chars: Vec<char>,
    index: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().collect(),
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// The current character, or [`EOF_CHAR`] at the end.
    pub fn peek(&self) -> char {
        self.peek_nth(0)
    }

    /// The character `n` places past the current one, without moving.
    pub fn peek_nth(&self, n: usize) -> char {
        self.chars.get(self.index + n).copied().unwrap_or(EOF_CHAR)
    }

    /// Consumes the current character and returns the next one.
    pub fn advance(&mut self) -> char {
        if let Some(&consumed) = self.chars.get(self.index) {
            self.index += 1;
            if consumed == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.peek()
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cursor, EOF_CHAR};
    use crate::Position;

    #[test]
    fn test_cursor_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\ncd");

        assert_eq!(cursor.position(), Position::new(1, 1));
        assert_eq!(cursor.advance(), 'b');
        assert_eq!(cursor.position(), Position::new(1, 2));
        assert_eq!(cursor.advance(), '\n');
        assert_eq!(cursor.advance(), 'c');
        assert_eq!(cursor.position(), Position::new(2, 1));
        assert_eq!(cursor.advance(), 'd');
        assert_eq!(cursor.position(), Position::new(2, 2));
    }

    #[test]
    fn test_cursor_sentinel_at_end() {
        let mut cursor = Cursor::new("x");

        assert_eq!(cursor.peek_nth(1), EOF_CHAR);
        assert_eq!(cursor.advance(), EOF_CHAR);
        assert!(cursor.at_end());
        assert_eq!(cursor.advance(), EOF_CHAR);
        assert_eq!(cursor.peek(), EOF_CHAR);
        assert_eq!(cursor.position(), Position::new(1, 2));
    }

    #[test]
    fn test_cursor_counts_multibyte_chars_once() {
        let mut cursor = Cursor::new("é=");

        cursor.advance();
        assert_eq!(cursor.peek(), '=');
        assert_eq!(cursor.position(), Position::new(1, 2));
    }

    #[test]
    fn test_empty_cursor() {
        let cursor = Cursor::new("");

        assert!(cursor.at_end());
        assert_eq!(cursor.peek(), EOF_CHAR);
    }
}
