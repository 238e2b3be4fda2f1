// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./alcove.toml` > `~/.config/alcove/alcove.toml`
//! > `/etc/alcove/alcove.toml`, with environment variable overrides via the
//! `ALCOVE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::AlcoveConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/alcove/alcove.toml` (system-wide)
/// 3. `~/.config/alcove/alcove.toml` (user XDG config)
/// 4. `./alcove.toml` (local directory)
/// 5. `ALCOVE_*` environment variables
pub fn load_config() -> Result<AlcoveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AlcoveConfig::default()))
        .merge(Toml::file("/etc/alcove/alcove.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("alcove/alcove.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("alcove.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no file or env lookup).
///
/// Used for testing and explicit inline configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<AlcoveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AlcoveConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// Backs the `--config <path>` CLI flag; the XDG hierarchy is skipped.
pub fn load_config_from_path(path: &Path) -> Result<AlcoveConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AlcoveConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay intact: `ALCOVE_STORAGE_DATA_DIR` must map to
/// `storage.data_dir`, not `storage.data.dir`.
fn env_provider() -> Env {
    Env::prefixed("ALCOVE_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped,
        // e.g. ALCOVE_ENGINES_ROOT -> "engines_root".
        let mapped = key
            .as_str()
            .replacen("host_", "host.", 1)
            .replacen("engines_", "engines.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("keystore_", "keystore.", 1)
            .replacen("assets_", "assets.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_loader_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[engines]
root = "/srv/alcove/engines"
"#,
        )
        .unwrap();
        assert_eq!(config.engines.root, "/srv/alcove/engines");
        // Untouched sections keep their defaults.
        assert_eq!(config.host.name, "alcove");
    }

    #[test]
    fn path_loader_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alcove.toml");
        std::fs::write(&path, "[host]\nname = \"from-file\"\n").unwrap();

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.host.name, "from-file");
    }

    #[test]
    fn missing_path_falls_back_to_defaults() {
        // Figment's Toml::file silently skips absent files.
        let config = load_config_from_path(Path::new("/nonexistent/alcove.toml")).unwrap();
        assert_eq!(config.host.name, "alcove");
    }
}
