// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Alcove engine host.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and diagnostic error rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use alcove_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("engines root: {}", config.engines.root);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::AlcoveConfig;

use std::path::Path;

/// Load configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that:
/// 1. Loads config from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to miette diagnostics with typo suggestions
///
/// Returns either a valid `AlcoveConfig` or a list of diagnostic errors.
pub fn load_and_validate() -> Result<AlcoveConfig, Vec<ConfigError>> {
    finish(loader::load_config())
}

/// Load configuration from a specific TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<AlcoveConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content))
}

/// Load configuration from an explicit file path and validate it.
///
/// Backs the `--config <path>` CLI flag.
pub fn load_and_validate_path(path: &Path) -> Result<AlcoveConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path))
}

fn finish(loaded: Result<AlcoveConfig, figment::Error>) -> Result<AlcoveConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}
