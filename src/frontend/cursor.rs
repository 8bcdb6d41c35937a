use std::str::Chars;

pub const EOF_CHAR: char = '\0';

/// Walks the characters of a file while keeping track of the line and column of the next one.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    len: usize,
    chars: Chars<'a>,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Cursor<'a> {
        Cursor {
            len: input.len(),
            chars: input.chars(),
            line: 1,
            column: 1,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Byte offset of the next character.
    pub fn offset(&self) -> usize {
        self.len - self.chars.as_str().len()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    pub fn peek2(&self) -> char {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next().unwrap_or(EOF_CHAR)
    }

    /// Moves over one character of the current line; does nothing at the end of input. Newlines go
    /// through [`Cursor::new_line`].
    pub fn advance(&mut self) {
        if let Some(c) = self.chars.next() {
            debug_assert_ne!(c, '\n', "advance() must not cross a line break");
            self.column += 1;
        }
    }

    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn new_line(&mut self) {
        let c = self.chars.next();
        debug_assert_eq!(c, Some('\n'));
        self.line += 1;
        self.column = 1;
    }

    /// Advances while `predicate` holds, never past a newline.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_eof() && self.peek() != '\n' && predicate(self.peek()) {
            self.advance();
        }
    }
}
