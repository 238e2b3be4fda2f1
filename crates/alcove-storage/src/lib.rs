// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage subsystem for the Alcove engine host.
//!
//! Two pieces live here: [`StorageLayout`], the single authority for mapping
//! names to isolated database locations, and [`Database`], the WAL-mode
//! SQLite connection lifecycle built on `tokio-rusqlite`'s single background
//! thread. Handles produced by the layout are deferred references; nothing
//! touches the filesystem until a handle is opened.

pub mod database;
pub mod layout;

pub use database::Database;
pub use layout::{HOST_NAMESPACE, StorageLayout};
