//! Resolver - turns CLI path arguments into the list of files to scan
//!
//! Each argument is tried in order: an existing file is taken as-is (the
//! user named it explicitly, extension filtering does not apply), an
//! existing directory is walked recursively collecting files with a
//! configured template extension, and anything else is treated as a glob
//! pattern.
//!
//! A missing input is a hard error, never an empty scan: the checks must
//! only ever run on text the caller actually obtained.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur during resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Path does not exist and is not a glob pattern that matches anything
    #[error("no such file or directory: {0}")]
    NotFound(PathBuf),

    /// Invalid glob pattern syntax
    #[error("invalid glob pattern {pattern:?}: {source}")]
    InvalidGlob {
        /// The offending pattern
        pattern: String,
        /// The underlying parse error
        source: glob::PatternError,
    },

    /// Error reading a glob match
    #[error("glob error: {0}")]
    Glob(#[from] glob::GlobError),

    /// Error walking a directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Resolver for finding template files
#[derive(Debug)]
pub struct Resolver {
    /// File extensions collected when walking directories
    extensions: Vec<String>,
}

impl Resolver {
    /// Create a resolver that collects files with the given extensions
    #[must_use]
    pub fn new(extensions: &[String]) -> Self {
        Self {
            extensions: extensions.to_vec(),
        }
    }

    /// Resolve path arguments to a sorted, deduplicated file list.
    ///
    /// An empty argument list scans the current directory.
    pub fn resolve(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>, ResolveError> {
        let mut files = Vec::new();

        if paths.is_empty() {
            self.walk(Path::new("."), &mut files)?;
        } else {
            for path in paths {
                if path.is_file() {
                    files.push(path.clone());
                } else if path.is_dir() {
                    self.walk(path, &mut files)?;
                } else {
                    self.expand_glob(path, &mut files)?;
                }
            }
        }

        files.sort();
        files.dedup();
        debug!("resolved {} file(s) to scan", files.len());
        Ok(files)
    }

    fn walk(&self, root: &Path, files: &mut Vec<PathBuf>) -> Result<(), ResolveError> {
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if entry.file_type().is_file() && self.has_template_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(())
    }

    fn expand_glob(&self, path: &Path, files: &mut Vec<PathBuf>) -> Result<(), ResolveError> {
        let pattern = path.to_string_lossy().into_owned();
        let matches = glob::glob(&pattern).map_err(|source| ResolveError::InvalidGlob {
            pattern: pattern.clone(),
            source,
        })?;

        let mut matched_any = false;
        for entry in matches {
            let entry = entry?;
            if entry.is_file() {
                files.push(entry);
            }
            matched_any = true;
        }

        if !matched_any {
            return Err(ResolveError::NotFound(path.to_path_buf()));
        }
        Ok(())
    }

    fn has_template_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}
