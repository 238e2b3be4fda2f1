// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host bootstrap: build every startup resource in one explicit step.
//!
//! Initialization order is fixed: keystore, storage layout, engine
//! discovery. Any failure aborts with a structured error; no command ever
//! runs against a partially initialized host.

use std::path::{Path, PathBuf};

use alcove_config::AlcoveConfig;
use alcove_core::AlcoveError;
use alcove_engine::{EngineRegistry, SharedRegistry};
use alcove_keystore::Keystore;
use alcove_storage::StorageLayout;
use tracing::info;

/// Everything a running host carries. Built once by [`bootstrap`] and
/// passed by reference; there is no global state.
#[derive(Debug)]
pub struct Host {
    pub config: AlcoveConfig,
    pub keystore: Option<Keystore>,
    pub layout: StorageLayout,
    pub registry: SharedRegistry,
}

impl Host {
    /// The full template search path: the host's own template directory
    /// first, then each engine's, in registration order.
    pub fn template_search_path(&self) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(&self.config.host.templates_dir)];
        paths.extend(
            self.registry
                .load()
                .template_dirs()
                .iter()
                .map(|p| p.to_path_buf()),
        );
        paths
    }
}

/// Build the [`Host`] from a validated configuration.
pub fn bootstrap(config: AlcoveConfig) -> Result<Host, AlcoveError> {
    let keystore = alcove_keystore::startup_check(&config.keystore)?;

    let layout = StorageLayout::from_config(&config.storage);
    let registry = EngineRegistry::discover(Path::new(&config.engines.root), &layout)?;

    info!(
        host = %config.host.name,
        mode = %config.host.mode,
        engines = registry.len(),
        "host bootstrapped"
    );

    Ok(Host {
        config,
        keystore,
        layout,
        registry: SharedRegistry::new(registry),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(root: &Path, data: &Path) -> AlcoveConfig {
        let mut config = AlcoveConfig::default();
        config.engines.root = root.to_string_lossy().into_owned();
        config.storage.data_dir = data.to_string_lossy().into_owned();
        config
    }

    #[test]
    fn bootstrap_builds_registry_and_layout() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("billing")).unwrap();
        let data = tempfile::tempdir().unwrap();

        let host = bootstrap(config_for(root.path(), data.path())).unwrap();
        assert!(host.keystore.is_none());
        assert_eq!(host.registry.load().len(), 1);
        assert_eq!(host.layout.data_dir(), data.path());
    }

    #[test]
    fn bootstrap_fails_when_engines_root_is_missing() {
        let data = tempfile::tempdir().unwrap();
        let missing = data.path().join("no-engines-here");

        let err = bootstrap(config_for(&missing, data.path())).unwrap_err();
        assert!(matches!(err, AlcoveError::Discovery { .. }), "got: {err}");
    }

    #[test]
    fn bootstrap_fails_when_configured_keystore_is_unreadable() {
        let root = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        let mut config = config_for(root.path(), data.path());
        config.keystore.path = Some("/nonexistent/keystore.toml".to_string());

        let err = bootstrap(config).unwrap_err();
        assert!(matches!(err, AlcoveError::Keystore(_)), "got: {err}");
    }

    #[test]
    fn bootstrap_loads_configured_keystore() {
        let root = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        let secrets = data.path().join("keystore.toml");
        fs::write(&secrets, "secret_key = \"abc\"\n").unwrap();

        let mut config = config_for(root.path(), data.path());
        config.keystore.path = Some(secrets.to_string_lossy().into_owned());

        let host = bootstrap(config).unwrap();
        let keystore = host.keystore.expect("keystore should be loaded");
        assert!(keystore.secret_key().is_some());
    }

    #[test]
    fn template_search_path_puts_host_templates_first() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("billing")).unwrap();
        let data = tempfile::tempdir().unwrap();

        let mut config = config_for(root.path(), data.path());
        config.host.templates_dir = "/srv/host/templates".to_string();

        let host = bootstrap(config).unwrap();
        let paths = host.template_search_path();
        assert_eq!(paths[0], PathBuf::from("/srv/host/templates"));
        assert_eq!(paths[1], root.path().join("billing/templates"));
    }
}
