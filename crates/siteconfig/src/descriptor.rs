// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Per-site YAML descriptors.
//!
//! ```yaml
//! site: ISBDM
//! title: "ISBD for Manifestation"
//! nav_label: ISBDM
//! weight: 10
//! environments:
//!   local:      { base_url: "http://localhost:3001", base_path: "/ISBDM/", port: 3001 }
//!   preview:    { base_url: "https://iflastandards.github.io", base_path: "/standards-dev/ISBDM/" }
//!   dev:        { base_url: "https://jonphipps.github.io", base_path: "/standards-dev/ISBDM/" }
//!   production: { base_url: "https://www.iflastandards.info", base_path: "/ISBDM/" }
//! ```
//!
//! A directory of descriptors loads into one [`SiteRegistry`] with the same
//! validation as the built-in table.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::{ConfigError, Result};
use crate::registry::{DEFAULT_WEIGHT, SiteConfigEntry, SiteRecord, SiteRegistry, SiteSpec};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteDescriptor {
    pub site: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_label: Option<String>,
    #[serde(default = "default_weight")]
    pub weight: i32,
    pub environments: BTreeMap<Environment, SiteConfigEntry>,
}

fn default_weight() -> i32 {
    DEFAULT_WEIGHT
}

impl SiteDescriptor {
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }

    /// Describe a registered site, e.g. to export the built-in table.
    pub fn from_record(record: &SiteRecord) -> Self {
        Self {
            site: record.id().to_string(),
            title: record.title().to_string(),
            nav_label: Some(record.nav_label().to_string()),
            weight: record.weight(),
            environments: record
                .entries()
                .map(|(env, entry)| (env, entry.clone()))
                .collect(),
        }
    }

    /// File name used when writing this descriptor to a directory.
    pub fn file_name(&self) -> String {
        format!("{}.yaml", self.site)
    }
}

impl From<SiteDescriptor> for SiteSpec {
    fn from(descriptor: SiteDescriptor) -> Self {
        SiteSpec {
            id: descriptor.site,
            title: descriptor.title,
            nav_label: descriptor.nav_label,
            weight: descriptor.weight,
            entries: descriptor.environments,
        }
    }
}

/// Read and parse one descriptor file.
pub fn load_descriptor<P: AsRef<Path>>(path: P) -> Result<SiteDescriptor> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SiteDescriptor::from_yaml(&content).map_err(|source| ConfigError::Descriptor {
        path: path.to_path_buf(),
        source,
    })
}

fn is_descriptor_file(path: &Path) -> bool {
    path.is_file()
        && matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        )
}

/// Descriptor files in `dir`, sorted by file name.
pub fn descriptor_paths<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let io_err = |source| ConfigError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if is_descriptor_file(&path) {
            paths.push(path);
        } else {
            let shown = path.display().to_string();
            diagnostics::log_debug!("Ignoring {path}", path: shown.as_str());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Load every descriptor in `dir` into a validated registry.
pub fn load_registry_dir<P: AsRef<Path>>(dir: P) -> Result<SiteRegistry> {
    let dir = dir.as_ref();
    let mut builder = SiteRegistry::builder();
    for path in descriptor_paths(dir)? {
        let descriptor = load_descriptor(&path)?;
        builder = builder.site(descriptor.into());
    }
    let registry = builder.build()?;

    let dir_display = dir.display().to_string();
    diagnostics::log_info!(
        "Loaded {count} site descriptors from {dir}",
        count: registry.len(),
        dir: dir_display.as_str()
    );
    Ok(registry)
}

/// Write one descriptor per registered site into `dir`, returning the paths
/// written. The directory must already exist.
pub fn write_registry_dir<P: AsRef<Path>>(registry: &SiteRegistry, dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut written = Vec::with_capacity(registry.len());
    for record in registry.records() {
        let descriptor = SiteDescriptor::from_record(record);
        let path = dir.join(descriptor.file_name());
        let yaml = descriptor.to_yaml().map_err(|source| ConfigError::Descriptor {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, yaml).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}
