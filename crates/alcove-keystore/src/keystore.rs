// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keystore lifecycle: open a TOML secrets file and serve its entries.

use std::collections::BTreeMap;
use std::path::Path;

use alcove_config::model::KeystoreConfig;
use alcove_core::AlcoveError;
use secrecy::SecretString;
use tracing::{debug, info, warn};

/// Name of the entry holding the host signing secret.
const SECRET_KEY_ENTRY: &str = "secret_key";

/// In-memory map of named secrets loaded from a TOML file.
///
/// Entries are plain `name = "value"` string pairs; values are wrapped in
/// [`SecretString`] immediately after parsing so they never appear in logs
/// or debug output.
pub struct Keystore {
    entries: BTreeMap<String, SecretString>,
}

impl std::fmt::Debug for Keystore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keystore")
            .field("entries", &self.entries.len())
            .field("values", &"[REDACTED]")
            .finish()
    }
}

impl Keystore {
    /// Read and parse the secrets file at `path`.
    ///
    /// On Unix a group- or world-readable file draws a warning; the file is
    /// still loaded, since tightening permissions is the operator's call.
    pub fn open(path: &Path) -> Result<Self, AlcoveError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AlcoveError::Keystore(format!("cannot read {}: {e}", path.display()))
        })?;

        warn_if_permissive(path);

        let parsed: BTreeMap<String, String> = toml::from_str(&raw).map_err(|e| {
            AlcoveError::Keystore(format!(
                "{} is not a table of string secrets: {e}",
                path.display()
            ))
        })?;

        let entries = parsed
            .into_iter()
            .map(|(name, value)| (name, SecretString::from(value)))
            .collect();

        Ok(Self { entries })
    }

    /// Look up a secret by name.
    pub fn get(&self, name: &str) -> Option<&SecretString> {
        self.entries.get(name)
    }

    /// The host signing secret (the `secret_key` entry), if present.
    pub fn secret_key(&self) -> Option<&SecretString> {
        self.get(SECRET_KEY_ENTRY)
    }

    /// Names of all loaded secrets, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Returns the number of loaded secrets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the file held no secrets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Open the keystore during bootstrap, if one is configured.
///
/// `Ok(None)` when no path is configured (the keystore is optional),
/// `Ok(Some(..))` on a successful load, `Err` when the configured file
/// exists in config but cannot be loaded. The error propagates and aborts
/// startup: a host configured to have secrets must not come up without
/// them.
pub fn startup_check(config: &KeystoreConfig) -> Result<Option<Keystore>, AlcoveError> {
    let Some(path) = &config.path else {
        debug!("no keystore configured -- skipping keystore startup check");
        return Ok(None);
    };

    let keystore = Keystore::open(Path::new(path))?;
    info!(
        entries = keystore.len(),
        path = %path,
        "keystore loaded"
    );
    Ok(Some(keystore))
}

#[cfg(unix)]
fn warn_if_permissive(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(meta) = std::fs::metadata(path) {
        let mode = meta.permissions().mode();
        if mode & 0o077 != 0 {
            warn!(
                path = %path.display(),
                mode = format!("{:o}", mode & 0o777),
                "keystore file is readable by other users -- consider chmod 600"
            );
        }
    }
}

#[cfg(not(unix))]
fn warn_if_permissive(_path: &Path) {}
