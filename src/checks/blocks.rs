//! Template block balance check
//!
//! Go templates open blocks with `{{if}}`, `{{range}}`, `{{with}}`,
//! `{{block}}`, and `{{define}}`, and close every one of them with `{{end}}`.
//! This check walks the document line by line, matches `{{end}}` against the
//! most recently opened block, and reports unclosed blocks and stray ends
//! with their 1-based line numbers.
//!
//! The scan is literal: it does not know about template comments or string
//! literals, so an `{{if}}` inside a `{{/* ... */}}` comment still counts.

use std::fmt;

use regex::Regex;

/// Block-opening keywords plus the closing `end`, with optional trim marker
/// and leading whitespace
const BLOCK_PATTERN: &str = r"\{\{-?\s*(if|range|with|block|define|end)\b";

/// A block-opening keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `{{if ...}}`
    If,
    /// `{{range ...}}`
    Range,
    /// `{{with ...}}`
    With,
    /// `{{block ...}}`
    Block,
    /// `{{define ...}}`
    Define,
}

impl BlockKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "if" => Some(Self::If),
            "range" => Some(Self::Range),
            "with" => Some(Self::With),
            "block" => Some(Self::Block),
            "define" => Some(Self::Define),
            _ => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::If => write!(f, "if"),
            Self::Range => write!(f, "range"),
            Self::With => write!(f, "with"),
            Self::Block => write!(f, "block"),
            Self::Define => write!(f, "define"),
        }
    }
}

/// An opened block that never saw its `{{end}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnclosedBlock {
    /// The opening keyword
    pub kind: BlockKind,
    /// 1-based line the block was opened on
    pub line: usize,
}

/// Result of a block balance scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockResult {
    /// Blocks opened but never closed, in the order they were opened
    pub unclosed: Vec<UnclosedBlock>,
    /// 1-based lines of `{{end}}` tags with no open block
    pub stray_ends: Vec<usize>,
}

impl BlockResult {
    /// Whether every block is closed and every end has an opener
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.unclosed.is_empty() && self.stray_ends.is_empty()
    }
}

/// Scan `document` for template block tags and match them up.
///
/// Tags on the same line are processed left to right; `{{end}}` always closes
/// the most recently opened block.
///
/// # Panics
///
/// Panics if the built-in block pattern fails to compile (should never
/// happen).
#[must_use]
pub fn check(document: &str) -> BlockResult {
    let re = Regex::new(BLOCK_PATTERN).expect("block pattern is valid");

    let mut stack: Vec<UnclosedBlock> = Vec::new();
    let mut stray_ends = Vec::new();

    for (line_no, line) in document.lines().enumerate() {
        let line_no = line_no + 1;
        for captures in re.captures_iter(line) {
            let keyword = &captures[1];
            if keyword == "end" {
                if stack.pop().is_none() {
                    stray_ends.push(line_no);
                }
            } else if let Some(kind) = BlockKind::from_keyword(keyword) {
                stack.push(UnclosedBlock {
                    kind,
                    line: line_no,
                });
            }
        }
    }

    BlockResult {
        unclosed: stack,
        stray_ends,
    }
}
