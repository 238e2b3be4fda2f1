// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic mapping from names to isolated storage locations.
//!
//! All database naming goes through [`StorageLayout`] so the "one isolated
//! store per engine name" guarantee lives in exactly one place instead of
//! string concatenation scattered across configuration.

use std::path::{Path, PathBuf};

use alcove_config::model::StorageConfig;
use alcove_core::{EngineName, StorageHandle};

/// Namespace the host database registers under.
pub const HOST_NAMESPACE: &str = "default";

/// File name of the host database inside the data directory.
const HOST_DB_FILE: &str = "alcove.db";

/// Subdirectory of the data directory holding per-engine databases.
///
/// Engine databases live in their own subdirectory so no engine name can
/// collide with the host database file.
const ENGINE_DB_DIR: &str = "engines";

/// Authority for deriving storage handles from names.
///
/// The mapping is deterministic and injective: equal names yield equal
/// handles, distinct names yield distinct namespaces and paths. Deriving a
/// handle allocates nothing on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    data_dir: PathBuf,
}

impl StorageLayout {
    /// Create a layout rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create a layout from the `[storage]` config section.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_dir)
    }

    /// Directory holding the host database and the engine subdirectory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory holding all per-engine database files.
    pub fn engine_db_dir(&self) -> PathBuf {
        self.data_dir.join(ENGINE_DB_DIR)
    }

    /// Handle for the shared host database.
    pub fn host_database(&self) -> StorageHandle {
        StorageHandle {
            namespace: HOST_NAMESPACE.to_string(),
            path: self.data_dir.join(HOST_DB_FILE),
        }
    }

    /// Handle for the database exclusively owned by the engine `name`.
    ///
    /// The namespace is `<name>_db` and the file is
    /// `<data_dir>/engines/<name>.db`. Engine names are identifiers, so
    /// appending the fixed suffix keeps distinct names mapped to distinct
    /// namespaces.
    pub fn engine_database(&self, name: &EngineName) -> StorageHandle {
        StorageHandle {
            namespace: format!("{name}_db"),
            path: self.engine_db_dir().join(format!("{name}.db")),
        }
    }
}
