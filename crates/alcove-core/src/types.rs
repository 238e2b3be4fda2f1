// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Alcove workspace.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// A directory name was rejected as an engine identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid engine name `{0}`: expected [A-Za-z_][A-Za-z0-9_]*")]
pub struct InvalidEngineName(pub String);

/// Validated name of an engine plugin, derived from its directory base name.
///
/// Engine names double as registration-name and database-name components,
/// so they are restricted to ASCII identifiers: a leading letter or
/// underscore followed by letters, digits, or underscores. Construction
/// goes through [`EngineName::parse`]; serde deserialization routes through
/// the same validation via `try_from`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EngineName(String);

impl EngineName {
    /// Validate `name` as an engine identifier.
    pub fn parse(name: &str) -> Result<Self, InvalidEngineName> {
        let mut chars = name.chars();
        let valid_first = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid_first && valid_rest {
            Ok(Self(name.to_string()))
        } else {
            Err(InvalidEngineName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EngineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EngineName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EngineName {
    type Err = InvalidEngineName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EngineName {
    type Error = InvalidEngineName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EngineName> for String {
    fn from(name: EngineName) -> Self {
        name.0
    }
}

/// Deferred reference to a persistent store owned by exactly one consumer.
///
/// A handle names a database (`namespace`) and locates its file (`path`);
/// it never opens or creates anything. Connection lifecycle belongs to
/// whoever consumes the handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageHandle {
    /// Configuration key the host registers this database under.
    pub namespace: String,
    /// Filesystem location of the database file.
    pub path: PathBuf,
}

/// Deployment mode of the host.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    #[default]
    Development,
    Production,
}

impl DeploymentMode {
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_name_accepts_identifiers() {
        for name in ["alpha", "beta2", "under_score", "_leading", "CamelCase"] {
            assert!(EngineName::parse(name).is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn engine_name_rejects_non_identifiers() {
        for name in ["", "9lives", "has-dash", "has space", "dotted.name", "naïve"] {
            assert!(EngineName::parse(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn engine_name_orders_lexicographically() {
        let mut names = vec![
            EngineName::parse("zulu").unwrap(),
            EngineName::parse("alpha").unwrap(),
            EngineName::parse("mid").unwrap(),
        ];
        names.sort();
        let ordered: Vec<&str> = names.iter().map(EngineName::as_str).collect();
        assert_eq!(ordered, ["alpha", "mid", "zulu"]);
    }

    #[test]
    fn engine_name_serde_round_trip_enforces_validation() {
        let name = EngineName::parse("alpha").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#""alpha""#);
        let back: EngineName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);

        // Deserialization cannot smuggle in an invalid name.
        let bad: Result<EngineName, _> = serde_json::from_str(r#""not valid""#);
        assert!(bad.is_err());
    }

    #[test]
    fn deployment_mode_parses_case_insensitively() {
        assert_eq!(
            "production".parse::<DeploymentMode>().unwrap(),
            DeploymentMode::Production
        );
        assert_eq!(
            "Development".parse::<DeploymentMode>().unwrap(),
            DeploymentMode::Development
        );
        assert!("staging".parse::<DeploymentMode>().is_err());
    }

    #[test]
    fn deployment_mode_defaults_to_development() {
        let mode = DeploymentMode::default();
        assert!(!mode.is_production());
        assert_eq!(mode.to_string(), "development");
    }
}
