//! Offset to line/column mapping
//!
//! Check results carry zero-based character offsets; humans read 1-based
//! line and column numbers. [`LineIndex`] is built once per document and
//! answers lookups by binary search over the recorded line starts.

/// Precomputed line starts for a document
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Character offset of the first character of each line
    line_starts: Vec<usize>,
}

/// A resolved 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number
    pub line: usize,
    /// 1-based column number
    pub column: usize,
}

impl LineIndex {
    /// Build the index for `document`
    #[must_use]
    pub fn new(document: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in document.chars().enumerate() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Resolve a zero-based character offset to a 1-based line and column.
    ///
    /// Offsets past the end of the document resolve to the last line.
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position {
            line: line + 1,
            column: offset - self.line_starts[line] + 1,
        }
    }
}

/// Extract up to `max_len` characters of `document` starting at `offset`,
/// stopping at the first newline.
#[must_use]
pub fn snippet(document: &str, offset: usize, max_len: usize) -> String {
    document
        .chars()
        .skip(offset)
        .take_while(|&c| c != '\n')
        .take(max_len)
        .collect()
}
