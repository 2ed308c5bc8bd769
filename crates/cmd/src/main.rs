// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cmd::commands::{
    ConfigArgs, check_command, config_command, env_command, export_command, sites_command,
    url_command,
};
use cmd::common::CliContext;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "docsites")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Deployment environment (local, localhost, preview, dev, production); overrides DOCS_ENV
    #[arg(long, global = true)]
    env: Option<String>,

    /// Directory of per-site YAML descriptors to use instead of the built-in table
    #[arg(long, global = true)]
    sites_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved environment
    Env,
    /// List registered sites
    Sites,
    /// Print a site's URL, optionally with a sub-path
    Url {
        /// Site identifier
        site: String,
        /// Path under the site root
        path: Option<String>,
    },
    /// Print a site's build configuration (navigation and footer) as JSON
    Config(ConfigArgs),
    /// Validate the site registry and print every site's URLs
    Check,
    /// Write the site registry as one YAML descriptor per site
    Export {
        /// Output directory
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    diagnostics::init();

    let cli = Cli::parse();
    let ctx = CliContext::new(cli.env, cli.sites_dir);

    match &cli.command {
        Commands::Env => env_command(&ctx),
        Commands::Sites => sites_command(&ctx),
        Commands::Url { site, path } => url_command(&ctx, site, path.as_deref()),
        Commands::Config(args) => config_command(&ctx, args),
        Commands::Check => check_command(&ctx),
        Commands::Export { dir } => export_command(&ctx, dir),
    }
}
