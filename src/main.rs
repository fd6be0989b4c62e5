//! tmplcheck - A CLI tool to catch unbalanced delimiters and unclosed blocks
//! in Go HTML templates
//!
//! Templating mistakes like a `{{` without its `}}` or an `{{if}}` without
//! its `{{end}}` render as garbage or blank pages with no useful error.
//! tmplcheck scans template files and reports every unbalanced marker with
//! its location before the template ever reaches the server.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the tmplcheck CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(2);
    }
}
