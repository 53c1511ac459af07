// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitgate.
//!
//! This module handles discovering, parsing, and validating the rule
//! configuration. Invalid configuration is a fatal error, reported before
//! any message is checked.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config, CONFIG_FILES};
pub use schema::*;
