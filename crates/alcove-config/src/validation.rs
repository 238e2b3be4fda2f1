// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths and well-formed URL prefixes.

use crate::diagnostic::ConfigError;
use crate::model::AlcoveConfig;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &AlcoveConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.host.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "host.name must not be empty".to_string(),
        });
    }

    if !VALID_LOG_LEVELS.contains(&config.host.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "host.log_level `{}` is not one of: {}",
                config.host.log_level,
                VALID_LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.host.templates_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "host.templates_dir must not be empty".to_string(),
        });
    }

    if config.engines.root.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "engines.root must not be empty".to_string(),
        });
    }

    if config.storage.data_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.data_dir must not be empty".to_string(),
        });
    }

    if let Some(path) = &config.keystore.path
        && path.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "keystore.path must not be empty when set".to_string(),
        });
    }

    check_url_prefix(&mut errors, "assets.static_url", &config.assets.static_url);
    check_url_prefix(&mut errors, "assets.media_url", &config.assets.media_url);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// URL prefixes are joined with file names on both sides, so they must
/// start and end with `/`.
fn check_url_prefix(errors: &mut Vec<ConfigError>, key: &str, value: &str) {
    if !value.starts_with('/') || !value.ends_with('/') {
        errors.push(ConfigError::Validation {
            message: format!("{key} `{value}` must start and end with `/`"),
        });
    }
}
