// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `alcove doctor` command implementation.
//!
//! Runs diagnostic checks against the host environment to identify
//! configuration defects before a real bootstrap trips over them.

use std::io::IsTerminal;
use std::path::Path;
use std::time::{Duration, Instant};

use alcove_config::AlcoveConfig;
use alcove_core::AlcoveError;
use alcove_engine::discover;
use alcove_storage::{Database, StorageLayout};

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: String, start: Instant) -> Self {
        Self {
            name: name.to_string(),
            status,
            message,
            duration: start.elapsed(),
        }
    }
}

/// Run the `alcove doctor` command.
///
/// With `--plain`, disables colored output. Returns the number of failed
/// checks so the caller can set the exit code.
pub async fn run_doctor(config: &AlcoveConfig, plain: bool) -> Result<usize, AlcoveError> {
    let use_color = !plain && std::io::stdout().is_terminal();
    let layout = StorageLayout::from_config(&config.storage);

    let results = vec![
        check_config(config),
        check_engines_root(config, &layout),
        check_templates(config, &layout),
        check_keystore(config),
        check_host_database(config, &layout).await,
        check_data_dir(&layout),
    ];

    println!();
    println!("  alcove doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        let duration_ms = result.duration.as_millis();
        let line = match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<16} {} ({duration_ms}ms)",
                        "✓".green(),
                        result.name,
                        result.message
                    )
                } else {
                    format!(
                        "    [OK]   {:<16} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<16} {} ({duration_ms}ms)",
                        "!".yellow(),
                        result.name,
                        result.message.yellow()
                    )
                } else {
                    format!(
                        "    [WARN] {:<16} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    format!(
                        "    {} {:<16} {} ({duration_ms}ms)",
                        "✗".red(),
                        result.name,
                        result.message.red()
                    )
                } else {
                    format!(
                        "    [FAIL] {:<16} {} ({duration_ms}ms)",
                        result.name, result.message
                    )
                }
            }
        };
        println!("{line}");
    }

    println!();
    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }
    println!();

    Ok(fail_count)
}

/// Check the configuration validates.
fn check_config(config: &AlcoveConfig) -> CheckResult {
    let start = Instant::now();
    match alcove_config::validation::validate_config(config) {
        Ok(()) => CheckResult::new("Configuration", CheckStatus::Pass, "valid".to_string(), start),
        Err(errors) => CheckResult::new(
            "Configuration",
            CheckStatus::Fail,
            format!("{} error(s)", errors.len()),
            start,
        ),
    }
}

/// Check the engines root exists and discovery runs cleanly.
fn check_engines_root(config: &AlcoveConfig, layout: &StorageLayout) -> CheckResult {
    let start = Instant::now();
    match discover(Path::new(&config.engines.root), layout) {
        Ok(bindings) => CheckResult::new(
            "Engines root",
            CheckStatus::Pass,
            format!("{} engine(s) discovered", bindings.len()),
            start,
        ),
        Err(e) => CheckResult::new("Engines root", CheckStatus::Fail, format!("{e}"), start),
    }
}

/// Check which engines contribute templates. Absence is tolerated, so a
/// missing directory only warns.
fn check_templates(config: &AlcoveConfig, layout: &StorageLayout) -> CheckResult {
    let start = Instant::now();
    let bindings = match discover(Path::new(&config.engines.root), layout) {
        Ok(bindings) => bindings,
        Err(_) => {
            return CheckResult::new(
                "Templates",
                CheckStatus::Warn,
                "engines root unreadable (skipped)".to_string(),
                start,
            );
        }
    };

    if bindings.is_empty() {
        return CheckResult::new(
            "Templates",
            CheckStatus::Pass,
            "no engines".to_string(),
            start,
        );
    }

    let missing: Vec<&str> = bindings
        .iter()
        .filter(|b| !b.has_templates())
        .map(|b| b.name.as_str())
        .collect();

    if missing.is_empty() {
        CheckResult::new(
            "Templates",
            CheckStatus::Pass,
            "all engines contribute templates".to_string(),
            start,
        )
    } else {
        CheckResult::new(
            "Templates",
            CheckStatus::Warn,
            format!("no templates in: {}", missing.join(", ")),
            start,
        )
    }
}

/// Check the keystore loads when one is configured.
fn check_keystore(config: &AlcoveConfig) -> CheckResult {
    let start = Instant::now();
    match alcove_keystore::startup_check(&config.keystore) {
        Ok(None) => CheckResult::new(
            "Keystore",
            CheckStatus::Pass,
            "not configured".to_string(),
            start,
        ),
        Ok(Some(keystore)) => CheckResult::new(
            "Keystore",
            CheckStatus::Pass,
            format!("{} entry(ies) loaded", keystore.len()),
            start,
        ),
        Err(e) => CheckResult::new("Keystore", CheckStatus::Fail, format!("{e}"), start),
    }
}

/// Check the host database opens and answers a probe query.
async fn check_host_database(config: &AlcoveConfig, layout: &StorageLayout) -> CheckResult {
    let start = Instant::now();
    let handle = layout.host_database();

    if !handle.path.exists() {
        return CheckResult::new(
            "Host database",
            CheckStatus::Warn,
            format!(
                "not found: {} (will be created on first open)",
                handle.path.display()
            ),
            start,
        );
    }

    match Database::open(&handle, config.storage.wal_mode).await {
        Ok(db) => match db.health_check().await {
            Ok(()) => {
                let _ = db.close().await;
                CheckResult::new(
                    "Host database",
                    CheckStatus::Pass,
                    "connected".to_string(),
                    start,
                )
            }
            Err(e) => CheckResult::new(
                "Host database",
                CheckStatus::Fail,
                format!("query failed: {e}"),
                start,
            ),
        },
        Err(e) => CheckResult::new(
            "Host database",
            CheckStatus::Fail,
            format!("open failed: {e}"),
            start,
        ),
    }
}

/// Check the data directory exists (or can still be created) and is a
/// directory.
fn check_data_dir(layout: &StorageLayout) -> CheckResult {
    let start = Instant::now();
    let dir = layout.data_dir();

    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => CheckResult::new(
            "Data directory",
            CheckStatus::Pass,
            "accessible".to_string(),
            start,
        ),
        Ok(_) => CheckResult::new(
            "Data directory",
            CheckStatus::Fail,
            format!("{} is not a directory", dir.display()),
            start,
        ),
        Err(_) => CheckResult::new(
            "Data directory",
            CheckStatus::Warn,
            format!("not found: {} (will be created on first open)", dir.display()),
            start,
        ),
    }
}
