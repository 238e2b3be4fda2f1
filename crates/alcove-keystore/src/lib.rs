// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operator secrets for the Alcove host.
//!
//! The keystore is an explicit resource: it is opened once during bootstrap
//! via [`startup_check`] and handed to whatever needs it by reference. There
//! is no module-level singleton, and a keystore that exists but cannot be
//! read is a structured startup failure, never a swallowed message.

pub mod keystore;

pub use keystore::{Keystore, startup_check};
