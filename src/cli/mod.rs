// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for commitgate.
//!
//! This module handles command-line argument parsing, input collection and
//! command dispatch. Fetching pull requests from a hosting service is left to
//! the CI glue, which hands messages over as a JSON batch.

pub mod args;
mod dispatch;
pub mod input;

pub use args::{Cli, Commands};
pub use dispatch::run;
