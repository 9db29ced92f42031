//!
//! The line cursor over a performance log.
//!

use std::io::BufRead;

///
/// The line cursor over a performance log.
///
/// Shared by the main scan loop and the block parser, so a block consumes
/// exactly the lines it reads.
///
pub struct Cursor<R: BufRead> {
    /// The underlying line iterator.
    lines: std::io::Lines<R>,
    /// The line returned to the cursor to be read again.
    pending: Option<String>,
    /// The 1-based number of the last returned line.
    line_number: usize,
}

impl<R: BufRead> Cursor<R> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: None,
            line_number: 0,
        }
    }

    ///
    /// Returns the next line without its terminator, or `None` at the end of input.
    ///
    pub fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let line = match self.pending.take() {
            Some(line) => Some(line),
            None => self.lines.next().transpose()?,
        };
        if line.is_some() {
            self.line_number += 1;
        }
        Ok(line)
    }

    ///
    /// Returns the last read line so that the next call to `next_line` yields it again.
    ///
    pub fn push_back(&mut self, line: String) {
        debug_assert!(self.pending.is_none(), "Only one line can be pushed back");
        self.pending = Some(line);
        self.line_number -= 1;
    }

    ///
    /// The 1-based number of the last returned line.
    ///
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
