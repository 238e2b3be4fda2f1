// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The immutable registry of discovered engines.
//!
//! Built once during bootstrap and read-only afterwards. Picking up new
//! engine directories requires a fresh discovery run; see
//! [`crate::shared::SharedRegistry`] for the wholesale-swap reload path.

use std::path::Path;

use alcove_core::{AlcoveError, EngineName, StorageHandle};
use alcove_storage::StorageLayout;
use tracing::info;

use crate::binding::EngineBinding;
use crate::discover;

/// Ordered, immutable collection of engine bindings.
///
/// Bindings are sorted ascending by name, which makes registration order
/// reproducible and lets lookup use binary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRegistry {
    bindings: Vec<EngineBinding>,
}

impl EngineRegistry {
    /// Run discovery against `root` and build the registry.
    ///
    /// This is the explicit bootstrap step: any failure here aborts
    /// initialization, and no partially populated registry is ever
    /// returned.
    pub fn discover(root: &Path, layout: &StorageLayout) -> Result<Self, AlcoveError> {
        let bindings = discover::discover(root, layout)?;
        info!(
            count = bindings.len(),
            root = %root.display(),
            "engine registry built"
        );
        Ok(Self { bindings })
    }

    /// All bindings, sorted by name.
    pub fn bindings(&self) -> &[EngineBinding] {
        &self.bindings
    }

    /// Look up a binding by engine name.
    pub fn get(&self, name: &str) -> Option<&EngineBinding> {
        self.bindings
            .binary_search_by(|b| b.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.bindings[i])
    }

    /// Returns the number of discovered engines.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no engines were discovered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Registration names for the host's application-unit list, in order.
    pub fn registration_names(&self) -> Vec<&str> {
        self.bindings
            .iter()
            .map(|b| b.registration.as_str())
            .collect()
    }

    /// Template directories for the host's template search path, in order.
    ///
    /// Paths are computed, not existence-checked; the host tolerates
    /// absent ones.
    pub fn template_dirs(&self) -> Vec<&Path> {
        self.bindings
            .iter()
            .map(|b| b.template_dir.as_path())
            .collect()
    }

    /// `(name, storage handle)` pairs for the host's per-namespace storage
    /// configuration, in order.
    pub fn storage_bindings(&self) -> Vec<(&EngineName, &StorageHandle)> {
        self.bindings
            .iter()
            .map(|b| (&b.name, &b.storage))
            .collect()
    }
}
