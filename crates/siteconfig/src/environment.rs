// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Deployment environments and the `DOCS_ENV` resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable selecting the deployment environment.
pub const ENV_VAR: &str = "DOCS_ENV";

/// Accepted spellings. Keep in sync with `valid_values`.
const ALIASES: &[(&str, Environment)] = &[
    ("local", Environment::Local),
    ("localhost", Environment::Local),
    ("preview", Environment::Preview),
    ("dev", Environment::Dev),
    ("production", Environment::Production),
];

/// Deployment target that determines which URL and path a site is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[serde(alias = "localhost")]
    Local,
    Preview,
    Dev,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Local,
        Environment::Preview,
        Environment::Dev,
        Environment::Production,
    ];

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Preview => "preview",
            Environment::Dev => "dev",
            Environment::Production => "production",
        }
    }

    /// Every accepted spelling, comma separated, for error messages.
    pub fn valid_values() -> &'static str {
        "local, localhost, preview, dev, production"
    }

    /// Only the local environment serves from a dev-server port.
    pub fn has_port(&self) -> bool {
        matches!(self, Environment::Local)
    }

    /// Resolve from `DOCS_ENV`.
    pub fn from_env() -> Result<Self> {
        Self::from_var(ENV_VAR)
    }

    /// Resolve from an arbitrary environment variable.
    pub fn from_var(name: &str) -> Result<Self> {
        match std::env::var(name) {
            Ok(raw) => resolve_environment(Some(raw.as_str())),
            Err(std::env::VarError::NotPresent) => resolve_environment(None),
            Err(std::env::VarError::NotUnicode(raw)) => Err(ConfigError::InvalidEnvironment(
                raw.to_string_lossy().into_owned(),
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == s)
            .map(|(_, env)| *env)
            .ok_or_else(|| ConfigError::InvalidEnvironment(s.to_string()))
    }
}

/// Map a raw environment signal to an [`Environment`].
///
/// Matching is exact and case-sensitive. An absent or empty value is
/// `MissingEnvironment`; there is no fallback environment.
pub fn resolve_environment(raw: Option<&str>) -> Result<Environment> {
    match raw {
        None | Some("") => Err(ConfigError::MissingEnvironment),
        Some(value) => value.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_table() {
        assert_eq!(resolve_environment(Some("local")).ok(), Some(Environment::Local));
        assert_eq!(resolve_environment(Some("localhost")).ok(), Some(Environment::Local));
        assert_eq!(resolve_environment(Some("preview")).ok(), Some(Environment::Preview));
        assert_eq!(resolve_environment(Some("dev")).ok(), Some(Environment::Dev));
        assert_eq!(
            resolve_environment(Some("production")).ok(),
            Some(Environment::Production)
        );
    }

    #[test]
    fn test_missing_and_empty() {
        assert!(matches!(
            resolve_environment(None),
            Err(ConfigError::MissingEnvironment)
        ));
        assert!(matches!(
            resolve_environment(Some("")),
            Err(ConfigError::MissingEnvironment)
        ));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for raw in ["staging", "Production", "LOCAL", " dev", "prod"] {
            match resolve_environment(Some(raw)) {
                Err(ConfigError::InvalidEnvironment(value)) => assert_eq!(value, raw),
                other => panic!("expected InvalidEnvironment for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for env in Environment::ALL {
            assert_eq!(env.as_str().parse::<Environment>().ok(), Some(env));
            assert_eq!(env.to_string(), env.as_str());
        }
    }

    #[test]
    fn test_from_var() {
        let name = "DOCSITES_TEST_ENVIRONMENT_FROM_VAR";
        assert!(matches!(
            Environment::from_var(name),
            Err(ConfigError::MissingEnvironment)
        ));
        unsafe {
            std::env::set_var(name, "dev");
        }
        assert_eq!(Environment::from_var(name).ok(), Some(Environment::Dev));
        unsafe {
            std::env::set_var(name, "qa");
        }
        assert!(matches!(
            Environment::from_var(name),
            Err(ConfigError::InvalidEnvironment(_))
        ));
        unsafe {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_valid_values_match_alias_table() {
        let aliases: Vec<&str> = ALIASES.iter().map(|(alias, _)| *alias).collect();
        assert_eq!(aliases.join(", "), Environment::valid_values());
    }

    #[test]
    fn test_only_local_has_port() {
        let with_port: Vec<_> = Environment::ALL.iter().filter(|e| e.has_port()).collect();
        assert_eq!(with_port, vec![&Environment::Local]);
    }
}
