// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use siteconfig::SiteRegistry;

use crate::common::CliContext;

/// One line per site: id, then title, in registry order
pub fn site_lines(registry: &SiteRegistry) -> Vec<String> {
    let width = registry
        .sites()
        .map(|id| id.as_str().len())
        .max()
        .unwrap_or(0);
    registry
        .records()
        .iter()
        .map(|record| format!("{:<width$}  {}", record.id().as_str(), record.title(), width = width))
        .collect()
}

/// List registered sites
#[allow(clippy::print_stdout)]
pub fn sites_command(ctx: &CliContext) -> Result<()> {
    let registry = ctx.registry()?;
    for line in site_lines(&registry) {
        println!("{}", line);
    }
    Ok(())
}
