//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use tmplcheck::output::OutputMode;

/// tmplcheck - Template balance checks before deploy
#[derive(Parser, Debug)]
#[command(
    name = "tmplcheck",
    version,
    about = "Catch unbalanced delimiters and unclosed blocks in templates",
    long_about = "Scan Go HTML templates for structural mistakes.\n\n\
                  Reports every {{ without a }}, every {{if}} without an {{end}},\n\
                  and every <!-- without a -->, each with its location."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check template files for unbalanced markers
    Check {
        /// Files, directories, or glob patterns to scan (default: current
        /// directory)
        paths: Vec<PathBuf>,

        /// Run in CI mode (findings fail via error instead of exit code)
        #[arg(long)]
        ci: bool,

        /// Config file (default: tmplcheck.toml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the files a check would scan
    Files {
        /// Files, directories, or glob patterns to scan
        paths: Vec<PathBuf>,

        /// Config file (default: tmplcheck.toml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check { paths, ci, config }) => {
            commands::check(&paths, ci, config.as_deref(), output_mode)
        },
        Some(Command::Files { paths, config }) => {
            commands::files(&paths, config.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("tmplcheck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tmplcheck v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'tmplcheck --help' for usage");
                println!("Run 'tmplcheck check <dir>' to scan templates");
            }
            Ok(())
        },
    }
}
