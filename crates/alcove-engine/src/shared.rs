// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Atomically swappable handle for hosts that reload engines at runtime.

use std::path::Path;
use std::sync::Arc;

use alcove_core::AlcoveError;
use alcove_storage::StorageLayout;
use arc_swap::ArcSwap;
use tracing::info;

use crate::registry::EngineRegistry;

/// Shared handle to the current [`EngineRegistry`].
///
/// Readers take a consistent snapshot via [`SharedRegistry::load`]; a reload
/// re-runs discovery in full and replaces the registry wholesale. The swap is
/// all-or-nothing: if discovery fails the previous registry stays visible,
/// and no reader ever observes a half-populated binding list.
pub struct SharedRegistry {
    inner: ArcSwap<EngineRegistry>,
}

impl SharedRegistry {
    /// Wrap an already-built registry.
    pub fn new(registry: EngineRegistry) -> Self {
        Self {
            inner: ArcSwap::from_pointee(registry),
        }
    }

    /// Snapshot of the current registry.
    ///
    /// The snapshot stays valid across concurrent reloads; it simply keeps
    /// pointing at the registry that was current when it was taken.
    pub fn load(&self) -> Arc<EngineRegistry> {
        self.inner.load_full()
    }

    /// Re-run discovery against `root` and swap in the result.
    ///
    /// There is no incremental update: the whole registry is rebuilt and
    /// replaced in one store. On error the previous registry is untouched
    /// and the error propagates to the caller.
    pub fn reload(
        &self,
        root: &Path,
        layout: &StorageLayout,
    ) -> Result<Arc<EngineRegistry>, AlcoveError> {
        let next = Arc::new(EngineRegistry::discover(root, layout)?);
        self.inner.store(next.clone());
        info!(count = next.len(), "engine registry reloaded");
        Ok(next)
    }
}

impl std::fmt::Debug for SharedRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRegistry")
            .field("engines", &self.inner.load().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reload_picks_up_new_engines() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();
        let layout = StorageLayout::new(root.path().join("data"));

        let shared =
            SharedRegistry::new(EngineRegistry::discover(root.path(), &layout).unwrap());
        assert_eq!(shared.load().len(), 1);

        fs::create_dir(root.path().join("beta")).unwrap();
        shared.reload(root.path(), &layout).unwrap();

        let current = shared.load();
        assert_eq!(current.len(), 2);
        assert!(current.get("beta").is_some());
    }

    #[test]
    fn failed_reload_keeps_previous_registry() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();
        let layout = StorageLayout::new(root.path().join("data"));

        let shared =
            SharedRegistry::new(EngineRegistry::discover(root.path(), &layout).unwrap());

        let err = shared
            .reload(&root.path().join("missing"), &layout)
            .unwrap_err();
        assert!(matches!(err, AlcoveError::Discovery { .. }));

        // The old snapshot is still served.
        let current = shared.load();
        assert_eq!(current.len(), 1);
        assert!(current.get("alpha").is_some());
    }

    #[test]
    fn snapshot_taken_before_reload_stays_consistent() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();
        let layout = StorageLayout::new(root.path().join("data"));

        let shared =
            SharedRegistry::new(EngineRegistry::discover(root.path(), &layout).unwrap());
        let before = shared.load();

        fs::create_dir(root.path().join("beta")).unwrap();
        shared.reload(root.path(), &layout).unwrap();

        assert_eq!(before.len(), 1, "old snapshot must not change");
        assert_eq!(shared.load().len(), 2);
    }
}
