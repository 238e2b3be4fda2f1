// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `alcove engines` command implementation.
//!
//! Prints the registration interface a host framework consumes: per engine
//! the registration name, template path, and isolated storage binding.

use alcove_core::AlcoveError;

use crate::bootstrap::Host;

/// Run the `alcove engines` command.
///
/// With `--json`, emits the binding list as JSON for machine consumption.
pub fn run_engines(host: &Host, json: bool) -> Result<(), AlcoveError> {
    let registry = host.registry.load();

    if json {
        let out = serde_json::to_string_pretty(registry.bindings())
            .map_err(|e| AlcoveError::Internal(format!("binding serialization failed: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    if registry.is_empty() {
        println!(
            "no engines discovered under {}",
            host.config.engines.root
        );
        return Ok(());
    }

    println!();
    println!("  {} engine(s) under {}", registry.len(), host.config.engines.root);
    println!();

    for binding in registry.bindings() {
        let templates = if binding.has_templates() {
            "present"
        } else {
            "absent -- no templates contributed"
        };
        println!("  {}", binding.registration);
        println!("    directory: {}", binding.dir.display());
        println!(
            "    templates: {} ({templates})",
            binding.template_dir.display()
        );
        println!(
            "    storage:   {} -> {}",
            binding.storage.namespace,
            binding.storage.path.display()
        );
        println!();
    }

    Ok(())
}
