// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Siteconfig: environment-aware configuration for the documentation sites
//!
//! Resolves a deployment environment and a site identifier to the site's
//! URL and base path, and assembles the cross-site navigation and footer
//! links each site build needs.
//!
//! ```no_run
//! use siteconfig::{BuildOptions, Environment, SiteRegistry};
//!
//! # fn main() -> siteconfig::Result<()> {
//! let env = Environment::from_env()?;
//! let registry = SiteRegistry::builtin()?;
//! let config = registry.build_site_config("ISBDM", env, &BuildOptions::default())?;
//! assert_eq!(config.url, registry.url("ISBDM", env)?);
//! # Ok(())
//! # }
//! ```
//!
//! The registry is immutable once built, and each build returns freshly
//! allocated structures, so several sites can be configured one after
//! another (or concurrently) in the same process.

mod accessor;
mod builder;
mod builtin;
pub mod descriptor;
mod environment;
mod error;
mod registry;

pub use accessor::{append_path, join_url};
pub use builder::{
    BuildOptions, FooterGroup, LinkDescriptor, RESOURCES_GROUP, STANDARDS_GROUP, SiteBuildConfig,
    build,
};
pub use descriptor::{SiteDescriptor, load_registry_dir, write_registry_dir};
pub use environment::{ENV_VAR, Environment, resolve_environment};
pub use error::{ConfigError, Result};
pub use registry::{
    DEFAULT_WEIGHT, RegistryBuilder, SiteConfigEntry, SiteId, SiteRecord, SiteRegistry, SiteSpec,
};
