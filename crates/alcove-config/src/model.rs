// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Alcove engine host.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use alcove_core::DeploymentMode;
use serde::{Deserialize, Serialize};

/// Top-level Alcove configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AlcoveConfig {
    /// Host identity and runtime settings.
    #[serde(default)]
    pub host: HostConfig,

    /// Engine discovery settings.
    #[serde(default)]
    pub engines: EnginesConfig,

    /// Storage layout settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Keystore settings.
    #[serde(default)]
    pub keystore: KeystoreConfig,

    /// Static and media asset settings surfaced to the host framework.
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Host identity and runtime configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Display name of the host application.
    #[serde(default = "default_host_name")]
    pub name: String,

    /// Deployment mode (`development` or `production`).
    #[serde(default)]
    pub mode: DeploymentMode,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// The host's own template directory, searched before any engine
    /// template directory.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            name: default_host_name(),
            mode: DeploymentMode::default(),
            log_level: default_log_level(),
            templates_dir: default_templates_dir(),
        }
    }
}

fn default_host_name() -> String {
    "alcove".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

/// Engine discovery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EnginesConfig {
    /// Root directory scanned for engine plugin directories.
    #[serde(default = "default_engines_root")]
    pub root: String,
}

impl Default for EnginesConfig {
    fn default() -> Self {
        Self {
            root: default_engines_root(),
        }
    }
}

fn default_engines_root() -> String {
    "engines".to_string()
}

/// Storage layout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding the host database and the per-engine database
    /// subdirectory.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite connections.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("alcove"))
        .unwrap_or_else(|| std::path::PathBuf::from("data"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// Keystore configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KeystoreConfig {
    /// Path to the TOML secrets file. `None` disables the keystore.
    #[serde(default)]
    pub path: Option<String>,
}

/// Static and media asset configuration.
///
/// Alcove only carries these values; serving them is the host framework's
/// concern.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssetsConfig {
    /// Directory collected static files are served from.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// URL prefix for static files. Must start and end with `/`.
    #[serde(default = "default_static_url")]
    pub static_url: String,

    /// Directory uploaded media files are stored in.
    #[serde(default = "default_media_dir")]
    pub media_dir: String,

    /// URL prefix for media files. Must start and end with `/`.
    #[serde(default = "default_media_url")]
    pub media_url: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            static_url: default_static_url(),
            media_dir: default_media_dir(),
            media_url: default_media_url(),
        }
    }
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_static_url() -> String {
    "/static/".to_string()
}

fn default_media_dir() -> String {
    "media".to_string()
}

fn default_media_url() -> String {
    "/media/".to_string()
}
