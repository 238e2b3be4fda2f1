// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection lifecycle: open with PRAGMA setup, health check, and
//! checkpointed close.
//!
//! All statements are serialized through tokio-rusqlite's single background
//! thread. The registry never holds one of these; opening a connection is
//! the business of whoever consumes a [`StorageHandle`].

use std::path::{Path, PathBuf};

use alcove_core::{AlcoveError, StorageHandle};
use tokio_rusqlite::Connection;
use tracing::debug;

/// An open SQLite database identified by a [`StorageHandle`].
pub struct Database {
    conn: Connection,
    namespace: String,
    path: PathBuf,
}

impl Database {
    /// Open the database a handle refers to, creating parent directories
    /// and the file as needed.
    ///
    /// With `wal_mode` the connection switches to write-ahead logging;
    /// foreign keys and a busy timeout are applied either way.
    pub async fn open(handle: &StorageHandle, wal_mode: bool) -> Result<Self, AlcoveError> {
        if let Some(parent) = handle.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AlcoveError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = Connection::open(&handle.path)
            .await
            .map_err(|e| AlcoveError::Storage {
                source: Box::new(e),
            })?;

        conn.call(move |conn| -> Result<(), rusqlite::Error> {
            if wal_mode {
                conn.execute_batch("PRAGMA journal_mode=WAL;")?;
            }
            conn.execute_batch(
                "PRAGMA foreign_keys=ON;
                 PRAGMA busy_timeout=5000;",
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(
            namespace = %handle.namespace,
            path = %handle.path.display(),
            wal = wal_mode,
            "database opened"
        );

        Ok(Self {
            conn,
            namespace: handle.namespace.clone(),
            path: handle.path.clone(),
        })
    }

    /// Returns the underlying connection for running statements.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Namespace this database was opened under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Filesystem location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Probe the connection with a trivial query.
    pub async fn health_check(&self) -> Result<(), AlcoveError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    /// Checkpoint the WAL and release the connection.
    pub async fn close(&self) -> Result<(), AlcoveError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!(namespace = %self.namespace, "WAL checkpoint complete");
        Ok(())
    }
}

/// Convert tokio-rusqlite errors to `AlcoveError::Storage`.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> AlcoveError {
    AlcoveError::Storage {
        source: Box::new(e),
    }
}
