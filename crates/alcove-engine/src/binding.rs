// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-engine resource record produced by discovery.

use std::path::{Path, PathBuf};

use alcove_core::{EngineName, StorageHandle};
use alcove_storage::StorageLayout;
use serde::Serialize;

/// Fixed namespace engines are registered under with the host framework.
pub const REGISTRATION_NAMESPACE: &str = "engines";

/// Name of the template subdirectory inside an engine directory.
const TEMPLATE_DIR: &str = "templates";

/// Resource bindings for one discovered engine.
///
/// Every field is derived deterministically from the engine's directory
/// name: the template search path is computed, not existence-checked, and
/// the storage handle is a deferred reference owned exclusively by this
/// engine. Constructing a binding touches nothing on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineBinding {
    /// Validated engine name, from the directory base name.
    pub name: EngineName,
    /// The engine's own directory, `<root>/<name>`.
    pub dir: PathBuf,
    /// Template search path, `<root>/<name>/templates`. May not exist; the
    /// host treats an absent path as "no templates contributed".
    pub template_dir: PathBuf,
    /// Handle of the database exclusively owned by this engine.
    pub storage: StorageHandle,
    /// Fully-qualified name the host registers the engine under,
    /// `engines.<name>`.
    pub registration: String,
}

impl EngineBinding {
    /// Build the binding for the engine directory `root/<name>`.
    pub(crate) fn for_directory(root: &Path, name: EngineName, layout: &StorageLayout) -> Self {
        let dir = root.join(name.as_str());
        let template_dir = dir.join(TEMPLATE_DIR);
        let storage = layout.engine_database(&name);
        let registration = format!("{REGISTRATION_NAMESPACE}.{name}");
        Self {
            name,
            dir,
            template_dir,
            storage,
            registration,
        }
    }

    /// Whether the engine's template directory currently exists.
    ///
    /// Display-time helper only; discovery never consults it.
    pub fn has_templates(&self) -> bool {
        self.template_dir.is_dir()
    }
}
