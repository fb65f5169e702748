use std::io::{BufRead, Lines};

use crate::error::{QTreeError, Result};

/// one integer per line, surrounding whitespace and blank lines are ignored
///
/// Yields the 1 based line number alongside each value.
pub(crate) struct IntLines<R> {
    lines: Lines<R>,
    line: usize,
}
impl<R: BufRead> IntLines<R> {
    pub(crate) fn new(read: R) -> Self {
        Self {
            lines: read.lines(),
            line: 0,
        }
    }
}
impl<R: BufRead> Iterator for IntLines<R> {
    type Item = Result<(usize, i64)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let src = match self.lines.next()? {
                Ok(src) => src,
                Err(err) => return Some(Err(err.into())),
            };
            self.line += 1;
            let src = src.trim();
            if src.is_empty() {
                continue;
            }
            let line = self.line;
            return Some(match src.parse() {
                Ok(value) => Ok((line, value)),
                Err(_) => Err(QTreeError::Format {
                    line,
                    content: src.to_owned(),
                }),
            });
        }
    }
}
