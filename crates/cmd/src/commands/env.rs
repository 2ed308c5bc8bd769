// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;

use crate::common::CliContext;

/// Print the canonical name of the resolved environment
#[allow(clippy::print_stdout)]
pub fn env_command(ctx: &CliContext) -> Result<()> {
    let env = ctx.environment()?;
    println!("{}", env);
    Ok(())
}
