//! 宣言スキャナ
//!
//! Accumulates one selector / class / id clause. The buffer may span several
//! physical lines; it lives exactly as long as one declaration.

use alloc::string::String;

use super::cursor::{Cursor, is_space};
use crate::kind::TagKind;
use crate::state::ScanState;
use crate::tag::Tag;

/// Characters that may appear inside a declaration clause.
///
/// Combinators and pseudo-class punctuation are accepted so that a compound
/// selector such as `a.foo > b` stays a single clause.
#[must_use]
pub const fn is_declaration_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || is_space(byte)
        || matches!(
            byte,
            b'_' | b'-' | b'+' | b'>' | b'.' | b',' | b':' | b'*' | b'#'
        )
}

/// Result of feeding one line's worth of bytes to a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Line exhausted, the clause continues on the next line.
    NeedsLine,
    /// Clause finished; the scanner resumes in the given state.
    Done(ScanState),
}

/// Declaration in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    kind: TagKind,
    buffer: String,
    line: usize,
}

impl Declaration {
    pub const fn new(kind: TagKind, line: usize) -> Self {
        Self {
            kind,
            buffer: String::new(),
            line,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The stripped line terminator counts as one whitespace character.
    pub fn continue_on_next_line(&mut self) {
        if self
            .buffer
            .as_bytes()
            .last()
            .is_some_and(|b| !is_space(*b))
        {
            self.buffer.push(' ');
        }
    }

    /// Consumes declaration bytes from `cursor`.
    ///
    /// `,` and `{` are consumed and end the clause. Any other byte outside the
    /// allowed set ends the clause without being consumed.
    pub fn advance(&mut self, cursor: &mut Cursor<'_>) -> Step {
        loop {
            match cursor.peek() {
                None => return Step::NeedsLine,
                Some(b',') => {
                    cursor.bump();
                    return Step::Done(ScanState::Neutral);
                }
                Some(b'{') => {
                    cursor.bump();
                    return Step::Done(ScanState::InRuleBody);
                }
                Some(byte) if is_declaration_char(byte) => {
                    self.buffer.push(char::from(byte));
                    cursor.bump();
                }
                Some(_) => return Step::Done(ScanState::Neutral),
            }
        }
    }

    /// Finalises the buffer into a tag.
    ///
    /// Class and id names lose trailing whitespace; selectors keep it.
    ///
    /// Only classes were stripped historically, which would turn
    /// `#header {` into `"header "`. Ids are stripped too so that the name
    /// matches what a reader of the stylesheet sees.
    pub fn into_tag(self) -> Tag {
        let Self {
            kind,
            mut buffer,
            line,
        } = self;
        if matches!(kind, TagKind::Class | TagKind::Id) {
            let keep = buffer
                .trim_end_matches(|c: char| u8::try_from(c).is_ok_and(is_space))
                .len();
            buffer.truncate(keep);
        }
        Tag {
            name: buffer,
            kind,
            line,
        }
    }
}
