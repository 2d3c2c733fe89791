//! 行入力ソース
//!
//! The scanner pulls one physical line at a time, including in the middle
//! of a declaration that spans several lines.

/// Supplier of physical source lines.
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input.
    ///
    /// The returned slice is only valid until the next call.
    fn next_line(&mut self) -> Option<&[u8]>;
}

impl<L: LineSource + ?Sized> LineSource for &mut L {
    fn next_line(&mut self) -> Option<&[u8]> {
        (**self).next_line()
    }
}

/// Strips a trailing `\n` and then a trailing `\r`.
#[must_use]
pub fn trim_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Lines of an in-memory string split on `\n`.
///
/// A final terminator does not produce an extra empty line.
#[derive(Debug, Clone)]
pub struct StrLines<'a> {
    rest: Option<&'a str>,
}

impl<'a> StrLines<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { rest: Some(text) }
    }
}

impl LineSource for StrLines<'_> {
    fn next_line(&mut self) -> Option<&[u8]> {
        let rest = self.rest.take().filter(|r| !r.is_empty())?;
        let line = match rest.split_once('\n') {
            Some((line, tail)) => {
                self.rest = Some(tail);
                line
            }
            None => rest,
        };
        Some(trim_line_terminator(line.as_bytes()))
    }
}

/// Adapts any iterator of byte-like lines.
pub struct IterLines<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

impl<I: Iterator> IterLines<I>
where
    I::Item: AsRef<[u8]>,
{
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            current: None,
        }
    }
}

impl<I: Iterator> LineSource for IterLines<I>
where
    I::Item: AsRef<[u8]>,
{
    fn next_line(&mut self) -> Option<&[u8]> {
        self.current = self.iter.next();
        self.current
            .as_ref()
            .map(|line| trim_line_terminator(line.as_ref()))
    }
}
