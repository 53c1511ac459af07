// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use crate::report::OutputFormat;

/// commitgate - Conventional commit gate
///
/// Checks a pull-request title and commit messages against the
/// Conventional Commits format.
#[derive(Parser, Debug)]
#[command(name = "commitgate")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit gate for pull requests", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "COMMITGATE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a PR title and commit messages (default command)
    Check(CheckArgs),

    /// Print version information
    Version,

    /// Write an example configuration file
    Init(InitArgs),
}

/// Arguments for the check command.
///
/// With no inputs, a single message is read from stdin.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Pull-request title, checked first
    #[arg(short, long)]
    pub title: Option<String>,

    /// JSON array of {"identity", "message"} objects ("-" for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub batch: Option<PathBuf>,

    /// Commit message text (repeatable)
    #[arg(short = 'm', long = "message", value_name = "TEXT")]
    pub messages: Vec<String>,

    /// File holding one commit message (repeatable, "-" for stdin)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Number of worker threads
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}

impl CheckArgs {
    /// Whether no input was given on the command line.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.batch.is_none() && self.messages.is_empty() && self.files.is_empty()
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            title: None,
            batch: None,
            messages: Vec::new(),
            files: Vec::new(),
            jobs: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from([
            "commitgate",
            "check",
            "--title",
            "feat: add login",
            "-m",
            "feat: add form",
            "-m",
            "test: cover form",
            "--jobs",
            "4",
        ]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.title.as_deref(), Some("feat: add login"));
            assert_eq!(check_args.messages.len(), 2);
            assert_eq!(check_args.jobs, 4);
            assert!(!check_args.is_empty());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_zero_jobs_rejected() {
        assert!(Cli::try_parse_from(["commitgate", "check", "--jobs", "0"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["commitgate", "--format", "github", "--debug", "check"]);
        assert!(args.debug);
        assert_eq!(args.format, OutputFormat::Github);
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["commitgate"]);
        assert!(args.command.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        match args.effective_command() {
            Commands::Check(check_args) => assert!(check_args.is_empty()),
            other => panic!("Expected Check command, got {:?}", other),
        }
    }
}
