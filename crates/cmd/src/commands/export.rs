// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use siteconfig::write_registry_dir;

use crate::common::CliContext;

/// Write one descriptor per site into `dir`, creating it if needed
pub fn export_descriptors(ctx: &CliContext, dir: &Path) -> Result<Vec<PathBuf>> {
    let registry = ctx.registry()?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let written = write_registry_dir(&registry, dir)
        .with_context(|| format!("Failed to export site descriptors to {}", dir.display()))?;
    diagnostics::log_info!("Exported {count} site descriptors", count: written.len());
    Ok(written)
}

/// Export the registry as YAML descriptors
#[allow(clippy::print_stdout)]
pub fn export_command(ctx: &CliContext, dir: &Path) -> Result<()> {
    for path in export_descriptors(ctx, dir)? {
        println!("{}", path.display());
    }
    Ok(())
}
