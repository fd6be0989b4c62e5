//! tmplcheck - A CLI tool to catch unbalanced delimiters and unclosed blocks
//! in Go HTML templates
//!
//! This library provides the scanning logic: delimiter balance checking,
//! template block matching, HTML comment balance, plus the supporting file
//! resolution, configuration, and report rendering.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod checks;
pub mod config;
pub mod location;
pub mod output;
pub mod resolver;
