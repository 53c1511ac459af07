// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::Config;
use crate::error::{ConfigError, Result, ResultExt};
use crate::report::{self, OutputFormat};
use crate::rules::RuleEngine;

use super::args::{CheckArgs, Cli, Commands, InitArgs};
use super::input::collect_messages;

/// Run the CLI with the given arguments, returning the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    match cli.effective_command() {
        Commands::Check(args) => {
            let config = load_config(&cli)?;
            run_check(cli.format, config, args)
        }
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        Config::load_from(config_path)
    } else {
        Config::load()
    }
}

/// Run the check command.
fn run_check(format: OutputFormat, config: Config, args: CheckArgs) -> Result<i32> {
    tracing::debug!("Running check command with args: {:?}", args);

    // Fail on bad configuration before reading any input.
    let engine = RuleEngine::new(config)?;
    let messages = collect_messages(&args)?;

    let report = if args.jobs > 1 {
        report::validate_all_parallel(&engine, &messages, usize::from(args.jobs))
    } else {
        report::validate_all(&engine, &messages)
    };

    print!("{}", report::render(&report, format));
    Ok(report::exit_code(&report))
}

/// Run the version command.
fn run_version() -> Result<i32> {
    println!("commitgate {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(0)
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<i32> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new(crate::config::CONFIG_FILES[0]);

    if config_path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }
        .into());
    }

    std::fs::write(config_path, example_config()).context("Failed to write configuration")?;

    println!("✓ Created {}", config_path.display());

    Ok(0)
}
