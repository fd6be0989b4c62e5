//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a check run over one or more files
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether every checked file was balanced
    pub passed: bool,
    /// Number of files checked
    pub files_checked: usize,
    /// Per-file reports, only for files with findings
    pub files: Vec<FileReport>,
}

/// Findings for a single file
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// The file path as given on the command line or discovered
    pub path: String,
    /// Findings in document order per check
    pub findings: Vec<Finding>,
}

/// A single problem found in a file
#[derive(Debug, Serialize)]
pub struct Finding {
    /// The check that produced this finding ("delimiters", "blocks",
    /// "comments")
    pub check: String,
    /// Human-readable description
    pub message: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based column, when the check tracks offsets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    /// Zero-based character offset, when the check tracks offsets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    /// Up to 50 characters of context starting at the offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Result of a file listing operation
#[derive(Debug, Serialize)]
pub struct FileListReport {
    /// Files that would be scanned
    pub files: Vec<String>,
}

impl CheckReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.files_checked == 0 {
            println!("No template files to check.");
            return;
        }

        println!("Checking {} template file(s)...\n", self.files_checked);

        if self.passed {
            println!("{}", "All templates balanced.".green());
            return;
        }

        let mut total = 0;
        for file in &self.files {
            println!("{}", file.path.bold());
            for f in &file.findings {
                total += 1;
                let position = f.column.map_or_else(
                    || format!("{}", f.line),
                    |column| format!("{}:{column}", f.line),
                );
                println!("  {position} [{}] {}", f.check.red(), f.message);
                if let Some(snippet) = &f.snippet {
                    println!("      {snippet}");
                }
            }
            println!();
        }

        println!(
            "{} {} problem(s) in {} file(s)",
            "FAILED:".red().bold(),
            total,
            self.files.len()
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl FileListReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.files.is_empty() {
            println!("No template files found.");
            return;
        }
        for file in &self.files {
            println!("{file}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
