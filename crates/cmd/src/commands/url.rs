// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};

use crate::common::CliContext;

/// URL of `site` in the resolved environment, with an optional sub-path
pub fn resolve_url(ctx: &CliContext, site: &str, path: Option<&str>) -> Result<String> {
    let env = ctx.environment()?;
    let registry = ctx.registry()?;
    let url = match path {
        Some(path) => registry.build_url(site, env, path),
        None => registry.url(site, env),
    };
    url.with_context(|| format!("Cannot resolve URL for site '{}' in {}", site, env))
}

/// Print the URL of a site
#[allow(clippy::print_stdout)]
pub fn url_command(ctx: &CliContext, site: &str, path: Option<&str>) -> Result<()> {
    println!("{}", resolve_url(ctx, site, path)?);
    Ok(())
}
