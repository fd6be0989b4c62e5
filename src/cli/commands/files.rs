//! List the files a check would scan

use std::path::{Path, PathBuf};

use tmplcheck::config::Config;
use tmplcheck::output::{FileListReport, OutputMode};
use tmplcheck::resolver::Resolver;

/// Resolve path arguments and print the resulting file list
pub fn files(paths: &[PathBuf], config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let resolver = Resolver::new(&config.scan.extensions);
    let resolved = resolver.resolve(paths)?;

    let report = FileListReport {
        files: resolved.iter().map(|p| p.display().to_string()).collect(),
    };
    report.render(mode);
    Ok(())
}
