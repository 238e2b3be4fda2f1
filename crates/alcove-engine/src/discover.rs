// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem scan of the engine root directory.

use std::path::Path;

use alcove_core::{AlcoveError, EngineName};
use alcove_storage::StorageLayout;
use tracing::{debug, warn};

use crate::binding::EngineBinding;

/// Scan `root` and return one binding per engine directory, sorted by name.
///
/// Immediate subdirectories of `root` are engines; metadata is taken after
/// following symlinks, so a symlinked directory counts and a symlink to a
/// file does not. Files are skipped silently, as are hidden (dot-prefixed)
/// entries. Directories whose name is not a valid engine identifier are
/// skipped with a warning rather than failing startup: a stray
/// `lost+found` must not take the host down, but the skip stays observable.
///
/// A missing or unreadable root is fatal (`AlcoveError::Discovery`) -- it
/// means the deployment is broken, and no partial result is produced. An
/// empty root is not an error; it yields an empty vector.
///
/// The sort makes registration order reproducible across runs regardless
/// of the order the filesystem lists entries in.
pub fn discover(root: &Path, layout: &StorageLayout) -> Result<Vec<EngineBinding>, AlcoveError> {
    let metadata = std::fs::metadata(root).map_err(|e| AlcoveError::discovery(root, e))?;
    if !metadata.is_dir() {
        return Err(AlcoveError::discovery(
            root,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let mut bindings = Vec::new();
    for entry in std::fs::read_dir(root).map_err(|e| AlcoveError::discovery(root, e))? {
        let entry = entry.map_err(|e| AlcoveError::discovery(root, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(raw) = file_name.to_str() else {
            warn!(
                entry = %file_name.to_string_lossy(),
                "skipping engine directory with non-UTF-8 name"
            );
            continue;
        };
        if raw.starts_with('.') {
            continue;
        }
        let name = match EngineName::parse(raw) {
            Ok(name) => name,
            Err(_) => {
                warn!(entry = raw, "skipping engine directory with invalid name");
                continue;
            }
        };

        let binding = EngineBinding::for_directory(root, name, layout);
        debug!(
            engine = %binding.name,
            registration = %binding.registration,
            "engine discovered"
        );
        bindings.push(binding);
    }

    bindings.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn layout_for(dir: &Path) -> StorageLayout {
        StorageLayout::new(dir.join("data"))
    }

    #[test]
    fn files_are_skipped_and_directories_kept() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();
        fs::create_dir(root.path().join("beta")).unwrap();
        fs::write(root.path().join("README.txt"), "not an engine").unwrap();

        let bindings = discover(root.path(), &layout_for(root.path())).unwrap();
        let names: Vec<&str> = bindings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["alpha", "beta"]);
    }

    #[test]
    fn output_is_sorted_by_name() {
        let root = tempfile::tempdir().unwrap();
        for name in ["zulu", "alpha", "mid"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }

        let bindings = discover(root.path(), &layout_for(root.path())).unwrap();
        let names: Vec<&str> = bindings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["alpha", "mid", "zulu"]);
    }

    #[test]
    fn empty_root_yields_empty_sequence() {
        let root = tempfile::tempdir().unwrap();
        let bindings = discover(root.path(), &layout_for(root.path())).unwrap();
        assert!(bindings.is_empty());
    }

    #[test]
    fn missing_root_is_a_discovery_error() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("does-not-exist");

        let err = discover(&missing, &layout_for(root.path())).unwrap_err();
        match err {
            AlcoveError::Discovery { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Discovery, got: {other}"),
        }
    }

    #[test]
    fn root_that_is_a_file_is_a_discovery_error() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("engines");
        fs::write(&file, "").unwrap();

        let err = discover(&file, &layout_for(root.path())).unwrap_err();
        assert!(matches!(err, AlcoveError::Discovery { .. }), "got: {err}");
    }

    #[test]
    fn hidden_and_invalid_names_are_skipped() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();
        fs::create_dir(root.path().join(".git")).unwrap();
        fs::create_dir(root.path().join("has-dash")).unwrap();
        fs::create_dir(root.path().join("9starts_with_digit")).unwrap();

        let bindings = discover(root.path(), &layout_for(root.path())).unwrap();
        let names: Vec<&str> = bindings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["alpha"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_counts_symlinked_file_does_not() {
        let outside = tempfile::tempdir().unwrap();
        fs::create_dir(outside.path().join("real_engine")).unwrap();
        fs::write(outside.path().join("real_file"), "").unwrap();

        let root = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(
            outside.path().join("real_engine"),
            root.path().join("linked"),
        )
        .unwrap();
        std::os::unix::fs::symlink(
            outside.path().join("real_file"),
            root.path().join("linked_file"),
        )
        .unwrap();

        let bindings = discover(root.path(), &layout_for(root.path())).unwrap();
        let names: Vec<&str> = bindings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["linked"]);
    }

    #[test]
    fn repeated_scans_of_unchanged_root_are_identical() {
        let root = tempfile::tempdir().unwrap();
        for name in ["alpha", "beta", "gamma"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }
        let layout = layout_for(root.path());

        let first = discover(root.path(), &layout).unwrap();
        let second = discover(root.path(), &layout).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn discovery_creates_no_files() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();
        let data = tempfile::tempdir().unwrap();
        let layout = StorageLayout::new(data.path());

        let bindings = discover(root.path(), &layout).unwrap();
        assert_eq!(bindings.len(), 1);
        // The storage handle is deferred; no database file appears.
        assert!(!bindings[0].storage.path.exists());
        let data_entries: Vec<_> = fs::read_dir(data.path()).unwrap().collect();
        assert!(data_entries.is_empty());
    }
}
