//! Check template files for unbalanced markers

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use tmplcheck::checks::{blocks, comments, delimiters};
use tmplcheck::config::{ChecksConfig, Config};
use tmplcheck::location::{LineIndex, snippet};
use tmplcheck::output::{CheckReport, FileReport, Finding, OutputMode};
use tmplcheck::resolver::Resolver;

/// Characters of context shown after a finding's offset
const SNIPPET_LEN: usize = 50;

/// Run the configured checks over the resolved files and render a report.
///
/// Findings make the run fail: interactively via exit code 1 after the
/// report is printed, under `--ci` via an error so callers see a message on
/// stderr as well.
pub fn check(
    paths: &[PathBuf],
    ci: bool,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let resolver = Resolver::new(&config.scan.extensions);
    let files = resolver.resolve(paths)?;

    let mut file_reports = Vec::new();
    for path in &files {
        // A file we cannot read is the caller's error, reported as such;
        // the checks never see a substitute empty document.
        let document = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;

        let findings = scan_document(&document, &config.checks);
        debug!("{}: {} finding(s)", path.display(), findings.len());
        if !findings.is_empty() {
            file_reports.push(FileReport {
                path: path.display().to_string(),
                findings,
            });
        }
    }

    let passed = file_reports.is_empty();
    let report = CheckReport {
        passed,
        files_checked: files.len(),
        files: file_reports,
    };

    report.render(mode);

    if !passed {
        if !ci {
            std::process::exit(1);
        }
        anyhow::bail!("unbalanced templates");
    }

    Ok(())
}

/// Run the enabled checks over one document
fn scan_document(document: &str, checks: &ChecksConfig) -> Vec<Finding> {
    let index = LineIndex::new(document);
    let mut findings = Vec::new();

    if checks.delimiters {
        let result = delimiters::check(document);
        for offset in result.unmatched_opens {
            findings.push(offset_finding(
                "delimiters",
                "unclosed {{ with no matching }}",
                offset,
                document,
                &index,
            ));
        }
        for offset in result.unmatched_closes {
            findings.push(offset_finding(
                "delimiters",
                "extra }} with no matching {{",
                offset,
                document,
                &index,
            ));
        }
    }

    if checks.blocks {
        let result = blocks::check(document);
        for block in result.unclosed {
            findings.push(Finding {
                check: "blocks".to_string(),
                message: format!("unclosed {{{{{}}}}} block", block.kind),
                line: block.line,
                column: None,
                offset: None,
                snippet: None,
            });
        }
        for line in result.stray_ends {
            findings.push(Finding {
                check: "blocks".to_string(),
                message: "{{end}} with no open block".to_string(),
                line,
                column: None,
                offset: None,
                snippet: None,
            });
        }
    }

    if checks.comments {
        let result = comments::check(document);
        for offset in result.unclosed {
            findings.push(offset_finding(
                "comments",
                "unclosed <!-- comment",
                offset,
                document,
                &index,
            ));
        }
        for offset in result.stray_closers {
            findings.push(offset_finding(
                "comments",
                "stray --> with no open comment",
                offset,
                document,
                &index,
            ));
        }
    }

    findings
}

fn offset_finding(
    check: &str,
    message: &str,
    offset: usize,
    document: &str,
    index: &LineIndex,
) -> Finding {
    let position = index.position(offset);
    Finding {
        check: check.to_string(),
        message: message.to_string(),
        line: position.line,
        column: Some(position.column),
        offset: Some(offset),
        snippet: Some(snippet(document, offset, SNIPPET_LEN)),
    }
}
