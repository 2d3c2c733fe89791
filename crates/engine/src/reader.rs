use scss_tags_core::{LineSource, trim_line_terminator};
use std::io::{self, BufRead};

/// `BufRead` を行ソースに変換する
///
/// The first read error ends the input; it is kept for the caller because
/// [`LineSource`] itself cannot report failures.
pub struct ReaderLines<R> {
    reader: R,
    buf: Vec<u8>,
    error: Option<io::Error>,
}

impl<R: BufRead> ReaderLines<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            error: None,
        }
    }

    /// Error that cut the input short, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> Option<&[u8]> {
        if self.error.is_some() {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(trim_line_terminator(&self.buf)),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}
