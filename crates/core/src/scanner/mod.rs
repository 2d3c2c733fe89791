// crates/core/src/scanner/mod.rs
//! # Line dispatcher
//!
//! Drives the [`ScanState`] machine across one physical line at a time and
//! hands declaration starts to the [`Declaration`] scanner.
//!
//! The scanner is push based: callers feed lines with
//! [`Scanner::process_line`] and close the input with [`Scanner::finish`].
//! Everything carried between lines (the state and an open declaration) lives
//! in the [`Scanner`] value itself, so a declaration spanning several lines
//! resumes on the next call without callbacks.
//!
//! | State | Leaves on |
//! |-------|-----------|
//! | `Neutral` | alnum / `.` / `#` (declaration), `@keyword`, `/*` |
//! | `InComment` | `*/` |
//! | `InSingleQuoteString` / `InDoubleQuoteString` | unescaped matching quote → `InRuleBody` |
//! | `InMediaDirective` | `{` → `Neutral` |
//! | `InImportOrNamespaceDirective` | `;` → `Neutral` |
//! | `InRuleBody` | `}` → `Neutral`, quote → string |
//! | `Terminated` | never |

pub mod cursor;
pub mod declaration;


use alloc::vec::Vec;

use self::cursor::{Cursor, is_space};
use self::declaration::{Declaration, Step};
use crate::kind::TagKind;
use crate::sink::TagSink;
use crate::source::{LineSource, StrLines};
use crate::state::{Directive, ScanState};
use crate::tag::Tag;

/// スタイルシート用スキャナ
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    state: ScanState,
    pending: Option<Declaration>,
    line: usize,
}

impl Scanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> ScanState {
        self.state
    }

    /// Whether a declaration is open across the last line boundary.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of lines processed so far.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line
    }

    /// Advances the state machine over one line (terminator already removed).
    ///
    /// Returns the state carried into the next line.
    pub fn process_line<S: TagSink + ?Sized>(&mut self, line: &[u8], sink: &mut S) -> ScanState {
        if self.state.is_terminated() {
            return self.state;
        }
        self.line += 1;
        let mut cursor = Cursor::new(line);

        if let Some(decl) = self.pending.as_mut() {
            decl.continue_on_next_line();
            if !self.drive_declaration(&mut cursor, sink) {
                return self.state;
            }
        }

        loop {
            cursor.skip_whitespace();
            let Some(byte) = cursor.peek() else {
                break;
            };

            match self.state {
                ScanState::Neutral => {
                    if !self.dispatch_neutral(byte, &mut cursor, sink) {
                        break;
                    }
                }
                ScanState::InComment => {
                    if byte == b'/' && cursor.prev() == Some(b'*') {
                        self.state = ScanState::Neutral;
                    }
                    cursor.bump();
                }
                ScanState::InSingleQuoteString => {
                    self.close_string(b'\'', byte, &cursor);
                    cursor.bump();
                }
                ScanState::InDoubleQuoteString => {
                    self.close_string(b'"', byte, &cursor);
                    cursor.bump();
                }
                ScanState::InMediaDirective => {
                    if cursor.skip_past(b'{') {
                        self.state = ScanState::Neutral;
                    }
                }
                ScanState::InImportOrNamespaceDirective => {
                    if cursor.skip_past(b';') {
                        self.state = ScanState::Neutral;
                    }
                }
                ScanState::InRuleBody => {
                    match byte {
                        b'}' => self.state = ScanState::Neutral,
                        b'\'' => self.state = ScanState::InSingleQuoteString,
                        b'"' => self.state = ScanState::InDoubleQuoteString,
                        _ => {}
                    }
                    cursor.bump();
                }
                ScanState::Terminated => break,
            }
        }

        self.state
    }

    /// Signals end of input.
    ///
    /// An open declaration is flushed as a tag and the scanner becomes
    /// [`ScanState::Terminated`]; otherwise the state is left as is.
    pub fn finish<S: TagSink + ?Sized>(&mut self, sink: &mut S) -> ScanState {
        if let Some(decl) = self.pending.take() {
            sink.emit(decl.into_tag());
            self.state = ScanState::Terminated;
        }
        self.state
    }

    /// Returns `false` when the line ran out before a top-level character
    /// could be handled further (an open declaration waits for more input).
    fn dispatch_neutral<S: TagSink + ?Sized>(
        &mut self,
        byte: u8,
        cursor: &mut Cursor<'_>,
        sink: &mut S,
    ) -> bool {
        match byte {
            b if b.is_ascii_alphanumeric() => self.begin_declaration(TagKind::Selector, cursor, sink),
            b'.' => {
                cursor.bump();
                self.begin_declaration(TagKind::Class, cursor, sink)
            }
            b'#' => {
                cursor.bump();
                self.begin_declaration(TagKind::Id, cursor, sink)
            }
            b'@' => {
                cursor.bump();
                let keyword = cursor.take_while(|b| !is_space(b));
                match Directive::from_keyword(keyword) {
                    Some(directive) => {
                        log::trace!("line {}: @{} directive", self.line, directive.keyword());
                        self.state = directive.entry_state();
                    }
                    None => {
                        log::trace!(
                            "line {}: unrecognised directive @{}",
                            self.line,
                            alloc::string::String::from_utf8_lossy(keyword)
                        );
                    }
                }
                true
            }
            b'*' if cursor.prev() == Some(b'/') => {
                self.state = ScanState::InComment;
                cursor.bump();
                true
            }
            _ => {
                cursor.bump();
                true
            }
        }
    }

    fn begin_declaration<S: TagSink + ?Sized>(
        &mut self,
        kind: TagKind,
        cursor: &mut Cursor<'_>,
        sink: &mut S,
    ) -> bool {
        self.pending = Some(Declaration::new(kind, self.line));
        self.drive_declaration(cursor, sink)
    }

    /// Feeds the open declaration. Emits its tag and switches state when the
    /// clause ends on this line; returns `false` when more input is needed.
    fn drive_declaration<S: TagSink + ?Sized>(&mut self, cursor: &mut Cursor<'_>, sink: &mut S) -> bool {
        let Some(decl) = self.pending.as_mut() else {
            return true;
        };
        match decl.advance(cursor) {
            Step::NeedsLine => false,
            Step::Done(next) => {
                if let Some(decl) = self.pending.take() {
                    sink.emit(decl.into_tag());
                }
                self.state = next;
                true
            }
        }
    }

    fn close_string(&mut self, quote: u8, byte: u8, cursor: &Cursor<'_>) {
        if byte == quote && cursor.prev() != Some(b'\\') {
            self.state = ScanState::InRuleBody;
        }
    }
}

/// Scans every line of `source` and returns the final state.
///
/// A declaration still open when the source runs dry is emitted and the
/// result is [`ScanState::Terminated`].
pub fn scan<L, S>(source: &mut L, sink: &mut S) -> ScanState
where
    L: LineSource + ?Sized,
    S: TagSink + ?Sized,
{
    let mut scanner = Scanner::new();
    while let Some(line) = source.next_line() {
        scanner.process_line(line, sink);
    }
    scanner.finish(sink)
}

/// Collects the tags of an in-memory stylesheet.
#[must_use]
pub fn scan_str(text: &str) -> Vec<Tag> {
    let mut tags = Vec::new();
    scan(&mut StrLines::new(text), &mut tags);
    tags
}
