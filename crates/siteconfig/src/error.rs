// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

use crate::environment::{ENV_VAR, Environment};

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while resolving environments, loading the site registry,
/// or resolving a site's configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "{var} is not set; expected one of: {values}",
        var = ENV_VAR,
        values = Environment::valid_values()
    )]
    MissingEnvironment,

    #[error(
        "Invalid environment '{0}' (from {var}); expected one of: {values}",
        var = ENV_VAR,
        values = Environment::valid_values()
    )]
    InvalidEnvironment(String),

    #[error("Unknown site '{site}'; registered sites: {}", .known.join(", "))]
    UnknownSite { site: String, known: Vec<String> },

    #[error("Site '{site}' has no configuration for environment '{env}'")]
    UnknownSiteEnvironment { site: String, env: Environment },

    #[error("Site '{site}' is missing environments: {}", display_envs(.missing))]
    IncompleteSite {
        site: String,
        missing: Vec<Environment>,
    },

    #[error("Invalid entry for site '{site}' in environment '{env}': {reason}")]
    InvalidEntry {
        site: String,
        env: Environment,
        reason: String,
    },

    #[error(
        "Invalid site identifier '{0}': use ASCII letters, digits, '-' or '_'"
    )]
    InvalidSiteId(String),

    #[error("Site '{0}' is registered more than once")]
    DuplicateSite(String),

    #[error("Site registry is empty")]
    EmptyRegistry,

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid site descriptor {}: {source}", .path.display())]
    Descriptor {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

impl ConfigError {
    pub fn unknown_site<S: AsRef<str>>(site: S, known: Vec<String>) -> Self {
        ConfigError::UnknownSite {
            site: site.as_ref().to_string(),
            known,
        }
    }

    pub fn invalid_entry<S: AsRef<str>, R: Into<String>>(
        site: S,
        env: Environment,
        reason: R,
    ) -> Self {
        ConfigError::InvalidEntry {
            site: site.as_ref().to_string(),
            env,
            reason: reason.into(),
        }
    }

    /// True for lookup misses that a cross-site link may skip.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            ConfigError::UnknownSite { .. } | ConfigError::UnknownSiteEnvironment { .. }
        )
    }
}

fn display_envs(envs: &[Environment]) -> String {
    envs.iter()
        .map(|env| env.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
