//! Template checks
//!
//! Each check is a pure function over the document text with no I/O:
//!
//! - [`delimiters`] - `{{` / `}}` balance with offset reporting
//! - [`blocks`] - `{{if}}`/`{{range}}`/... vs `{{end}}` matching
//! - [`comments`] - `<!--` / `-->` balance
//!
//! Callers own input acquisition and output rendering; a check only ever
//! reads the document it is given and returns a result.

pub mod blocks;
pub mod comments;
pub mod delimiters;
