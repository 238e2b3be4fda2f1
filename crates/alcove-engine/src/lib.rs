// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine plugin discovery and resource binding.
//!
//! An "engine" is a plugin directory under a configured root. Discovery
//! scans the root once during bootstrap and produces one [`EngineBinding`]
//! per engine: its template search path, its isolated database handle, and
//! the name the host framework registers it under. Bindings are collected
//! into an immutable [`EngineRegistry`]; hosts that support reloading wrap
//! it in a [`SharedRegistry`] and swap the whole registry atomically.
//!
//! Discovery is an explicit function returning a value. It is never run as
//! a side effect of loading configuration, so initialization order stays
//! deterministic and testable.

pub mod binding;
pub mod discover;
pub mod registry;
pub mod shared;

pub use binding::{EngineBinding, REGISTRATION_NAMESPACE};
pub use discover::discover;
pub use registry::EngineRegistry;
pub use shared::SharedRegistry;
