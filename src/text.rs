//! String helpers.

use std::fmt::{self, Display, Write};
use std::iter;

/// The slice of `source` from character `start` up to, not including,
/// character `end`.
///
/// Indexes count `char`s, not bytes. `None` when the range is reversed or out
/// of bounds.
pub fn substring_by_indexes(source: &str, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }

    let mut offsets = source
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(iter::once(source.len()));
    let from = offsets.nth(start)?;
    let to = if end == start { from } else { offsets.nth(end - start - 1)? };
    Some(&source[from..to])
}

/// Returns true if any of the strings is empty.
pub fn is_any_empty<S: AsRef<str>>(strings: &[S]) -> bool {
    strings.iter().any(|s| s.as_ref().is_empty())
}

/// Tab-indented writing for any [`fmt::Write`] sink, `String` included.
pub trait IndentedWrite: Write {
    /// Writes `indent` tab characters.
    fn write_indent(&mut self, indent: usize) -> fmt::Result {
        for _ in 0..indent {
            self.write_char('\t')?;
        }
        Ok(())
    }

    /// Writes `content` after `indent` tabs.
    fn write_indented(&mut self, indent: usize, content: impl Display) -> fmt::Result {
        self.write_indent(indent)?;
        write!(self, "{content}")
    }

    /// Writes `content` after `indent` tabs, followed by a newline.
    fn write_indented_line(&mut self, indent: usize, content: impl Display) -> fmt::Result {
        self.write_indent(indent)?;
        writeln!(self, "{content}")
    }
}

impl<W: Write + ?Sized> IndentedWrite for W {}
