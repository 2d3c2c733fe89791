//! 1行分の走査カーソル
//!
//! Tracks the byte immediately before the current position as an explicit
//! `prev` field. At the start of a line there is no previous byte, and `None`
//! never matches a lookback check.

/// C-locale `isspace` (includes vertical tab and form feed).
#[must_use]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[derive(Debug)]
pub struct Cursor<'a> {
    line: &'a [u8],
    pos: usize,
    prev: Option<u8>,
}

impl<'a> Cursor<'a> {
    pub const fn new(line: &'a [u8]) -> Self {
        Self {
            line,
            pos: 0,
            prev: None,
        }
    }

    pub fn peek(&self) -> Option<u8> {
        self.line.get(self.pos).copied()
    }

    /// Byte right before the current one on this line.
    pub const fn prev(&self) -> Option<u8> {
        self.prev
    }

    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.prev = Some(byte);
        self.pos += 1;
        Some(byte)
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.bump();
        }
    }

    /// Consumes bytes while `pred` holds and returns them.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &self.line[start..self.pos]
    }

    /// Advances past the next `target`. Returns `false` (cursor at end of
    /// line) when it does not occur.
    pub fn skip_past(&mut self, target: u8) -> bool {
        while let Some(byte) = self.bump() {
            if byte == target {
                return true;
            }
        }
        false
    }
}
