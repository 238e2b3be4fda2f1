// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Alcove engine host.
//!
//! This crate provides the error taxonomy and the small set of types shared
//! across the workspace: validated engine names, storage handles, and the
//! host deployment mode. Behavior lives in the sibling crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AlcoveError;
pub use types::{DeploymentMode, EngineName, InvalidEngineName, StorageHandle};

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn alcove_error_has_all_variants() {
        // Verify all 5 error variants exist and can be constructed.
        let _config = AlcoveError::Config("test".into());
        let _discovery = AlcoveError::Discovery {
            path: PathBuf::from("/srv/engines"),
            source: std::io::Error::other("test"),
        };
        let _storage = AlcoveError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _keystore = AlcoveError::Keystore("test".into());
        let _internal = AlcoveError::Internal("test".into());
    }

    #[test]
    fn discovery_error_displays_path_and_cause() {
        let err = AlcoveError::discovery(
            "/srv/engines",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        let rendered = err.to_string();
        assert!(rendered.contains("/srv/engines"), "got: {rendered}");
        assert!(rendered.contains("no such directory"), "got: {rendered}");
    }

    #[test]
    fn discovery_error_exposes_io_source() {
        use std::error::Error;

        let err = AlcoveError::discovery("/srv/engines", std::io::Error::other("boom"));
        let source = err.source().expect("discovery should carry a source");
        assert_eq!(source.to_string(), "boom");
    }

    #[test]
    fn storage_handle_serializes() {
        let handle = StorageHandle {
            namespace: "alpha_db".to_string(),
            path: PathBuf::from("/var/lib/alcove/engines/alpha.db"),
        };
        let json = serde_json::to_string(&handle).unwrap();
        let back: StorageHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, handle);
    }
}
