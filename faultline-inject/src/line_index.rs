//! Mapping from token line/column positions to byte offsets.

use proc_macro2::LineColumn;

/// Byte offsets of each line start in a source string.
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Index `source`.
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    /// Byte offset of a position, `line` 1-based and `column` counted in chars.
    ///
    /// The position just past the last character is valid.
    pub fn offset(&self, pos: LineColumn) -> Option<usize> {
        let start = *self.line_starts.get(pos.line.checked_sub(1)?)?;
        let rest = &self.source[start..];
        match rest.char_indices().nth(pos.column) {
            Some((i, _)) => Some(start + i),
            None if rest.chars().count() == pos.column => Some(self.source.len()),
            None => None,
        }
    }
}
