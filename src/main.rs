// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitgate - Conventional commit gate for pull requests.
//!
//! Exits 0 when every message passes, 1 when any fails, 2 on fatal errors.

use clap::Parser;
use commitgate::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit code for configuration and input errors.
const FATAL_EXIT_CODE: i32 = 2;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(FATAL_EXIT_CODE);
        }
    }
}

/// Set up logging/tracing on stderr, keeping stdout for the report.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commitgate=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
