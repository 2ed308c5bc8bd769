// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Args;
use siteconfig::{BuildOptions, SiteBuildConfig};

use crate::common::CliContext;

#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Site to build the configuration for
    pub site: String,
    /// Link the site to itself in the cross-site navigation
    #[arg(long)]
    pub include_self: bool,
    /// Leave out the "Resources" footer group
    #[arg(long)]
    pub no_resources: bool,
    /// Only link these sites, in this order (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
    /// Never link these sites (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

impl ConfigArgs {
    pub fn build_options(&self) -> BuildOptions {
        let mut options = BuildOptions::default().excluding(self.exclude.iter().cloned());
        if self.include_self {
            options = options.include_self();
        }
        if self.no_resources {
            options = options.without_resources();
        }
        if !self.only.is_empty() {
            options = options.only(self.only.iter().cloned());
        }
        options
    }
}

/// Build the site configuration for the resolved environment
pub fn resolve_config(ctx: &CliContext, args: &ConfigArgs) -> Result<SiteBuildConfig> {
    let env = ctx.environment()?;
    let registry = ctx.registry()?;
    registry
        .build_site_config(&args.site, env, &args.build_options())
        .with_context(|| format!("Cannot build configuration for site '{}' in {}", args.site, env))
}

/// Print the site configuration as JSON for the site build
#[allow(clippy::print_stdout)]
pub fn config_command(ctx: &CliContext, args: &ConfigArgs) -> Result<()> {
    let config = resolve_config(ctx, args)?;
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize site configuration")?;
    println!("{}", json);
    Ok(())
}
