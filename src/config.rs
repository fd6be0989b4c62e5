//! Configuration for a scan
//!
//! Settings live in a `tmplcheck.toml` next to the templates they govern:
//!
//! ```toml
//! [scan]
//! extensions = ["html", "tmpl", "gohtml"]
//!
//! [checks]
//! delimiters = true
//! blocks = true
//! comments = true
//! ```
//!
//! Every field has a default, so a missing file or an empty table is fine.
//! A file that exists but fails to parse is an error, not a silent default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file name, discovered in the scan root
pub const CONFIG_FILE: &str = "tmplcheck.toml";

/// Errors that can occur loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// The config file path
        path: PathBuf,
        /// The underlying io error
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("cannot parse config {path}: {source}")]
    Parse {
        /// The config file path
        path: PathBuf,
        /// The underlying TOML error
        source: Box<toml::de::Error>,
    },
}

/// Scan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// File discovery settings
    #[serde(default)]
    pub scan: ScanConfig,
    /// Which checks run
    #[serde(default)]
    pub checks: ChecksConfig,
}

/// File discovery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Extensions collected when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "tmpl".to_string(), "gohtml".to_string()]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

/// Which checks run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChecksConfig {
    /// `{{` / `}}` balance
    #[serde(default = "default_true")]
    pub delimiters: bool,
    /// Block tag matching
    #[serde(default = "default_true")]
    pub blocks: bool,
    /// HTML comment balance
    #[serde(default = "default_true")]
    pub comments: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            delimiters: true,
            blocks: true,
            comments: true,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// `tmplcheck.toml` is looked up in the current directory and defaults
    /// are used when it is absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::read(path)
                } else {
                    Ok(Self::default())
                }
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }
}
