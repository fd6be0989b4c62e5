//! HTML comment balance check
//!
//! Same scan shape as the delimiter check, but for the four-character opener
//! `<!--` and the three-character closer `-->`. Browsers quietly swallow an
//! unclosed comment along with everything after it, which makes this one of
//! the harder template mistakes to spot by eye.

/// Result of a comment balance scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentResult {
    /// Offsets of `<!--` openers that were never closed, in open order
    pub unclosed: Vec<usize>,
    /// Offsets of `-->` closers with no open comment, in encounter order
    pub stray_closers: Vec<usize>,
}

impl CommentResult {
    /// Whether every comment opener has a closer and vice versa
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.unclosed.is_empty() && self.stray_closers.is_empty()
    }
}

/// Scan `document` for unbalanced HTML comment markers.
///
/// Offsets are zero-based character offsets into the document.
#[must_use]
pub fn check(document: &str) -> CommentResult {
    let chars: Vec<char> = document.chars().collect();
    let mut pending: Vec<usize> = Vec::new();
    let mut stray_closers = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        if starts_with(&chars, i, &['<', '!', '-', '-']) {
            pending.push(i);
            i += 4;
        } else if starts_with(&chars, i, &['-', '-', '>']) {
            if pending.pop().is_none() {
                stray_closers.push(i);
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    CommentResult {
        unclosed: pending,
        stray_closers,
    }
}

fn starts_with(chars: &[char], at: usize, token: &[char]) -> bool {
    chars.len() >= at + token.len() && chars[at..at + token.len()] == *token
}
