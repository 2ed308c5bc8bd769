// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use siteconfig::{Environment, SiteRegistry};

use crate::common::CliContext;

/// Every site's URL in every environment, one line each
pub fn check_report(registry: &SiteRegistry) -> Result<Vec<String>> {
    let width = registry
        .sites()
        .map(|id| id.as_str().len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(registry.len() * Environment::ALL.len());
    for site in registry.sites() {
        for env in Environment::ALL {
            let url = registry.url(site.as_str(), env)?;
            let port = registry
                .lookup(site.as_str(), env)?
                .port
                .map(|port| format!(" (port {})", port))
                .unwrap_or_default();
            lines.push(format!(
                "{:<width$}  {:<10}  {}{}",
                site.as_str(),
                env.as_str(),
                url,
                port,
                width = width
            ));
        }
    }
    Ok(lines)
}

/// Validate the registry and print the URL table
#[allow(clippy::print_stdout)]
pub fn check_command(ctx: &CliContext) -> Result<()> {
    let registry = ctx.registry()?;
    for line in check_report(&registry)? {
        println!("{}", line);
    }
    println!("{} sites OK", registry.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_covers_every_pair() {
        let registry = SiteRegistry::builtin().expect("builtin");
        let lines = check_report(&registry).expect("report");
        assert_eq!(lines.len(), registry.len() * 4);
        assert!(lines.contains(&"ISBDM     local       http://localhost:3001/ISBDM (port 3001)".to_string()));
        assert!(lines.contains(&"portal    production  https://www.iflastandards.info".to_string()));
    }
}
