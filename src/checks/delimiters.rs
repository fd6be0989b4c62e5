//! Delimiter balance check
//!
//! Scans a document for the two-character tokens `{{` and `}}` and reports
//! every open marker without a close and every close marker without an open.
//! Matching is most-recent-open-first: a `}}` always resolves the nearest
//! still-open `{{` to its left.
//!
//! This is pure logic with no I/O. Offsets are zero-based character offsets
//! into the document.

/// Result of a delimiter balance scan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    /// Offsets of `{{` markers that were never closed, in the order they
    /// were opened (ascending)
    pub unmatched_opens: Vec<usize>,
    /// Offsets of `}}` markers seen while nothing was open, in encounter
    /// order (ascending)
    pub unmatched_closes: Vec<usize>,
}

impl ScanResult {
    /// Whether the document is fully balanced
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.unmatched_opens.is_empty() && self.unmatched_closes.is_empty()
    }

    /// Total number of unmatched markers
    #[must_use]
    pub fn len(&self) -> usize {
        self.unmatched_opens.len() + self.unmatched_closes.len()
    }

    /// Whether there are no unmatched markers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scan `document` left to right and report unmatched `{{` and `}}` markers.
///
/// Each call allocates its own pending stack, so concurrent calls never
/// interfere. The scan never errors: a lone trailing `{` or `}` is skipped,
/// not treated as a partial marker.
#[must_use]
pub fn check(document: &str) -> ScanResult {
    let chars: Vec<char> = document.chars().collect();
    let mut pending: Vec<usize> = Vec::new();
    let mut unmatched_closes = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '{' && chars.get(i + 1) == Some(&'{') {
            pending.push(i);
            i += 2;
        } else if chars[i] == '}' && chars.get(i + 1) == Some(&'}') {
            if pending.pop().is_none() {
                unmatched_closes.push(i);
            }
            i += 2;
        } else {
            i += 1;
        }
    }

    // Everything still pending was opened but never closed. Push order is
    // ascending, which is the reporting order.
    ScanResult {
        unmatched_opens: pending,
        unmatched_closes,
    }
}
