// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::Config;

/// Get the default configuration.
pub fn default_config() -> Config {
    Config::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# commitgate configuration

# Commit types accepted in PR titles and commit messages.
allowed_types = ["feat", "fix", "build", "chore", "ci", "docs", "style", "refactor", "perf", "test"]

# Header lines longer than this produce a subject-too-long warning.
max_subject_length = 80

# Warn when the description starts with a word like "added" or "fixing".
enforce_imperative_mood = true

# Extra spellings accepted as one of the allowed types.
[custom_type_aliases]
# feature = "feat"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.max_subject_length, 80);
    }

    #[test]
    fn test_example_config_parseable() {
        let config = crate::config::parse_config(example_config())
            .expect("Example config should parse");
        assert_eq!(config, default_config());
    }
}
