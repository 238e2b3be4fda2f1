// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Alcove engine host.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type used across Alcove crates.
#[derive(Debug, Error)]
pub enum AlcoveError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Engine discovery failed: the root is missing, not a directory, or
    /// could not be listed. Fatal to startup; a retry cannot fix a missing
    /// deployment directory.
    #[error("engine discovery failed at {path}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Storage backend errors (database open, query failure, checkpointing).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Keystore errors (missing file, unreadable entries, absent secrets).
    #[error("keystore error: {0}")]
    Keystore(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AlcoveError {
    /// Build a `Discovery` error for `path` from an I/O failure.
    pub fn discovery(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Discovery {
            path: path.into(),
            source,
        }
    }
}
