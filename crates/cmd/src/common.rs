// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::{Context, Result};
use siteconfig::{ENV_VAR, Environment, SiteRegistry, load_registry_dir, resolve_environment};

/// Global options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// `--env`, taking precedence over DOCS_ENV
    pub env: Option<String>,
    /// `--sites-dir`, replacing the built-in site table
    pub sites_dir: Option<PathBuf>,
}

impl CliContext {
    pub fn new(env: Option<String>, sites_dir: Option<PathBuf>) -> Self {
        Self { env, sites_dir }
    }

    /// Resolve the environment from `--env`, falling back to DOCS_ENV.
    pub fn environment(&self) -> Result<Environment> {
        self.environment_from(ENV_VAR)
    }

    /// Resolve from `--env`, falling back to the variable `var`.
    pub fn environment_from(&self, var: &str) -> Result<Environment> {
        let env = match &self.env {
            Some(raw) => resolve_environment(Some(raw.as_str()))?,
            None => Environment::from_var(var)?,
        };
        diagnostics::log_debug!("Resolved environment {env}", env: env.as_str());
        Ok(env)
    }

    /// Load descriptors from `--sites-dir`, or the built-in table.
    pub fn registry(&self) -> Result<SiteRegistry> {
        match &self.sites_dir {
            Some(dir) => load_registry_dir(dir).with_context(|| {
                format!("Failed to load site descriptors from {}", dir.display())
            }),
            None => SiteRegistry::builtin().context("Built-in site table is invalid"),
        }
    }
}
