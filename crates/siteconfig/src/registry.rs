// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site registry: (site, environment) → base URL, base path and port.
//!
//! A registry is assembled with [`RegistryBuilder`], validated once in
//! [`RegistryBuilder::build`], and read-only afterwards. Every site must
//! carry all four environments; a gap is reported at load time rather than
//! at lookup time.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::environment::Environment;
use crate::error::{ConfigError, Result};

/// Default ordering weight for sites that do not specify one.
pub const DEFAULT_WEIGHT: i32 = 100;

/// Name of one registered documentation site.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SiteId(String);

impl SiteId {
    /// Site ids appear in URL paths and descriptor file names, so they are
    /// limited to ASCII alphanumerics, '-' and '_'.
    pub fn new<S: Into<String>>(id: S) -> Result<Self> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(SiteId(id))
        } else {
            Err(ConfigError::InvalidSiteId(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for SiteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Where one site is served in one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfigEntry {
    /// Origin: scheme, host and optional port, no path.
    pub base_url: String,
    /// Root-relative path prefix, beginning and ending with '/'.
    pub base_path: String,
    /// Dev-server port; only the local environment has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl SiteConfigEntry {
    pub fn new<U: Into<String>, P: Into<String>>(base_url: U, base_path: P) -> Self {
        Self {
            base_url: base_url.into(),
            base_path: base_path.into(),
            port: None,
        }
    }

    pub fn local<P: Into<String>>(port: u16, base_path: P) -> Self {
        Self {
            base_url: format!("http://localhost:{}", port),
            base_path: base_path.into(),
            port: Some(port),
        }
    }
}

/// Unvalidated input for one site, handed to [`RegistryBuilder::site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSpec {
    pub id: String,
    pub title: String,
    pub nav_label: Option<String>,
    pub weight: i32,
    pub entries: BTreeMap<Environment, SiteConfigEntry>,
}

impl SiteSpec {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, title: T) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            nav_label: None,
            weight: DEFAULT_WEIGHT,
            entries: BTreeMap::new(),
        }
    }

    pub fn nav_label<S: Into<String>>(mut self, label: S) -> Self {
        self.nav_label = Some(label.into());
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn entry(mut self, env: Environment, entry: SiteConfigEntry) -> Self {
        self.entries.insert(env, entry);
        self
    }
}

/// A validated site: identity, labels and one entry per environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRecord {
    id: SiteId,
    title: String,
    nav_label: String,
    weight: i32,
    entries: BTreeMap<Environment, SiteConfigEntry>,
}

impl SiteRecord {
    pub fn id(&self) -> &SiteId {
        &self.id
    }

    /// Human-readable name, used for footer links.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short name, used in the cross-site navigation dropdown.
    pub fn nav_label(&self) -> &str {
        &self.nav_label
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn entry(&self, env: Environment) -> Option<&SiteConfigEntry> {
        self.entries.get(&env)
    }

    pub fn entries(&self) -> impl Iterator<Item = (Environment, &SiteConfigEntry)> {
        self.entries.iter().map(|(env, entry)| (*env, entry))
    }
}

/// Collects site specs and validates them into a [`SiteRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    specs: Vec<SiteSpec>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn site(mut self, spec: SiteSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn sites<I: IntoIterator<Item = SiteSpec>>(mut self, specs: I) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Validate every spec and freeze the registry.
    pub fn build(self) -> Result<SiteRegistry> {
        if self.specs.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }

        let mut seen = BTreeSet::new();
        let mut records = Vec::with_capacity(self.specs.len());

        for spec in self.specs {
            let id = SiteId::new(spec.id)?;
            if !seen.insert(id.clone()) {
                return Err(ConfigError::DuplicateSite(id.0));
            }

            let missing: Vec<Environment> = Environment::ALL
                .into_iter()
                .filter(|env| !spec.entries.contains_key(env))
                .collect();
            if !missing.is_empty() {
                return Err(ConfigError::IncompleteSite {
                    site: id.0,
                    missing,
                });
            }

            let mut entries = BTreeMap::new();
            for (env, entry) in &spec.entries {
                entries.insert(*env, validate_entry(id.as_str(), *env, entry)?);
            }

            let nav_label = spec
                .nav_label
                .filter(|label| !label.trim().is_empty())
                .unwrap_or_else(|| id.0.clone());

            records.push(SiteRecord {
                id,
                title: spec.title,
                nav_label,
                weight: spec.weight,
                entries,
            });
        }

        records.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.id.cmp(&b.id)));

        let index = records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.id.0.clone(), pos))
            .collect();

        diagnostics::log_debug!("Site registry built with {count} sites", count: records.len());

        Ok(SiteRegistry { records, index })
    }
}

/// Check one entry and return its normalized form (origin without a
/// trailing slash).
fn validate_entry(site: &str, env: Environment, entry: &SiteConfigEntry) -> Result<SiteConfigEntry> {
    let parsed = Url::parse(&entry.base_url).map_err(|e| {
        ConfigError::invalid_entry(
            site,
            env,
            format!("base_url '{}' is not an absolute URL: {}", entry.base_url, e),
        )
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::invalid_entry(
            site,
            env,
            format!("base_url '{}' must use http or https", entry.base_url),
        ));
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::invalid_entry(
            site,
            env,
            format!("base_url '{}' has no host", entry.base_url),
        ));
    }
    if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ConfigError::invalid_entry(
            site,
            env,
            format!(
                "base_url '{}' must be an origin; put path prefixes in base_path",
                entry.base_url
            ),
        ));
    }

    let path = &entry.base_path;
    if !path.starts_with('/') || !path.ends_with('/') || path.contains("//") {
        return Err(ConfigError::invalid_entry(
            site,
            env,
            format!(
                "base_path '{}' must start and end with a single '/'",
                path
            ),
        ));
    }

    match (env.has_port(), entry.port) {
        (true, None) => {
            return Err(ConfigError::invalid_entry(
                site,
                env,
                "the local environment requires a port",
            ));
        }
        (false, Some(port)) => {
            return Err(ConfigError::invalid_entry(
                site,
                env,
                format!("port {} is only allowed for the local environment", port),
            ));
        }
        (true, Some(port)) => {
            if let Some(url_port) = parsed.port() {
                if url_port != port {
                    return Err(ConfigError::invalid_entry(
                        site,
                        env,
                        format!("port {} does not match base_url port {}", port, url_port),
                    ));
                }
            }
        }
        (false, None) => {}
    }

    Ok(SiteConfigEntry {
        base_url: entry.base_url.trim_end_matches('/').to_string(),
        base_path: path.clone(),
        port: entry.port,
    })
}

/// Immutable table of every registered site.
///
/// There is no way to change a registry once built, so one instance can
/// back any number of sequential or concurrent site builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRegistry {
    records: Vec<SiteRecord>,
    index: BTreeMap<String, usize>,
}

impl SiteRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up where `site` is served in `env`.
    pub fn lookup(&self, site: &str, env: Environment) -> Result<&SiteConfigEntry> {
        let record = self.record(site)?;
        record
            .entries
            .get(&env)
            .ok_or_else(|| ConfigError::UnknownSiteEnvironment {
                site: site.to_string(),
                env,
            })
    }

    pub fn record(&self, site: &str) -> Result<&SiteRecord> {
        self.index
            .get(site)
            .map(|pos| &self.records[*pos])
            .ok_or_else(|| ConfigError::unknown_site(site, self.site_names()))
    }

    pub fn contains(&self, site: &str) -> bool {
        self.index.contains_key(site)
    }

    /// Registered site ids in registry order (weight, then id).
    pub fn sites(&self) -> impl Iterator<Item = &SiteId> {
        self.records.iter().map(|record| &record.id)
    }

    pub fn records(&self) -> &[SiteRecord] {
        &self.records
    }

    pub fn site_names(&self) -> Vec<String> {
        self.sites().map(|id| id.0.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A registry without the completeness check, for exercising lookup
    /// misses on a known site.
    #[cfg(test)]
    pub(crate) fn from_records_unchecked(records: Vec<(&str, Vec<(Environment, SiteConfigEntry)>)>) -> Self {
        let records: Vec<SiteRecord> = records
            .into_iter()
            .map(|(id, entries)| SiteRecord {
                id: SiteId(id.to_string()),
                title: id.to_string(),
                nav_label: id.to_string(),
                weight: DEFAULT_WEIGHT,
                entries: entries.into_iter().collect(),
            })
            .collect();
        let index = records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.id.0.clone(), pos))
            .collect();
        Self { records, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_spec(id: &str, port: u16) -> SiteSpec {
        let path = format!("/{}/", id);
        SiteSpec::new(id, format!("{} site", id))
            .entry(Environment::Local, SiteConfigEntry::local(port, path.clone()))
            .entry(
                Environment::Preview,
                SiteConfigEntry::new("https://preview.example.org", format!("/staging{}", path)),
            )
            .entry(
                Environment::Dev,
                SiteConfigEntry::new("https://dev.example.org/", path.clone()),
            )
            .entry(
                Environment::Production,
                SiteConfigEntry::new("https://www.example.org", path),
            )
    }

    #[test]
    fn test_build_and_lookup() {
        let registry = SiteRegistry::builder()
            .site(complete_spec("alpha", 4001))
            .build()
            .expect("registry");

        let entry = registry.lookup("alpha", Environment::Dev).expect("dev entry");
        // trailing slash on the origin is normalized away
        assert_eq!(entry.base_url, "https://dev.example.org");
        assert_eq!(entry.base_path, "/alpha/");
        assert_eq!(entry.port, None);

        let local = registry.lookup("alpha", Environment::Local).expect("local entry");
        assert_eq!(local.port, Some(4001));

        assert!(registry.contains("alpha"));
        assert!(!registry.contains("beta"));
    }

    #[test]
    fn test_unknown_site() {
        let registry = SiteRegistry::builder()
            .site(complete_spec("alpha", 4001))
            .build()
            .expect("registry");
        match registry.lookup("beta", Environment::Local) {
            Err(ConfigError::UnknownSite { site, known }) => {
                assert_eq!(site, "beta");
                assert_eq!(known, vec!["alpha".to_string()]);
            }
            other => panic!("expected UnknownSite, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_site_environment_is_distinct() {
        let registry = SiteRegistry::from_records_unchecked(vec![(
            "partial",
            vec![(Environment::Local, SiteConfigEntry::local(4000, "/"))],
        )]);
        assert!(registry.lookup("partial", Environment::Local).is_ok());
        assert!(matches!(
            registry.lookup("partial", Environment::Production),
            Err(ConfigError::UnknownSiteEnvironment { env: Environment::Production, .. })
        ));
    }

    #[test]
    fn test_incomplete_site_fails_at_build() {
        let mut spec = complete_spec("alpha", 4001);
        spec.entries.remove(&Environment::Preview);
        match SiteRegistry::builder().site(spec).build() {
            Err(ConfigError::IncompleteSite { site, missing }) => {
                assert_eq!(site, "alpha");
                assert_eq!(missing, vec![Environment::Preview]);
            }
            other => panic!("expected IncompleteSite, got {other:?}"),
        }
    }

    #[test]
    fn test_port_only_for_local() {
        let mut spec = complete_spec("alpha", 4001);
        spec.entries
            .get_mut(&Environment::Production)
            .expect("production")
            .port = Some(443);
        assert!(matches!(
            SiteRegistry::builder().site(spec).build(),
            Err(ConfigError::InvalidEntry { env: Environment::Production, .. })
        ));

        let mut spec = complete_spec("alpha", 4001);
        spec.entries.get_mut(&Environment::Local).expect("local").port = None;
        assert!(matches!(
            SiteRegistry::builder().site(spec).build(),
            Err(ConfigError::InvalidEntry { env: Environment::Local, .. })
        ));
    }

    #[test]
    fn test_local_port_must_match_url() {
        let mut spec = complete_spec("alpha", 4001);
        spec.entries.get_mut(&Environment::Local).expect("local").port = Some(4999);
        assert!(matches!(
            SiteRegistry::builder().site(spec).build(),
            Err(ConfigError::InvalidEntry { env: Environment::Local, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_urls_and_paths() {
        let cases = [
            SiteConfigEntry::new("www.example.org", "/a/"),
            SiteConfigEntry::new("ftp://example.org", "/a/"),
            SiteConfigEntry::new("https://example.org/docs", "/a/"),
            SiteConfigEntry::new("https://example.org?x=1", "/a/"),
            SiteConfigEntry::new("https://example.org", "a/"),
            SiteConfigEntry::new("https://example.org", "/a"),
            SiteConfigEntry::new("https://example.org", ""),
            SiteConfigEntry::new("https://example.org", "/a//b/"),
        ];
        for entry in cases {
            let spec = complete_spec("alpha", 4001).entry(Environment::Dev, entry.clone());
            assert!(
                matches!(
                    SiteRegistry::builder().site(spec).build(),
                    Err(ConfigError::InvalidEntry { .. })
                ),
                "expected rejection of {entry:?}"
            );
        }
    }

    #[test]
    fn test_duplicate_and_invalid_ids() {
        assert!(matches!(
            SiteRegistry::builder()
                .site(complete_spec("alpha", 4001))
                .site(complete_spec("alpha", 4002))
                .build(),
            Err(ConfigError::DuplicateSite(id)) if id == "alpha"
        ));
        assert!(matches!(
            SiteRegistry::builder().site(complete_spec("al pha", 4001)).build(),
            Err(ConfigError::InvalidSiteId(_))
        ));
        assert!(matches!(
            SiteRegistry::builder().build(),
            Err(ConfigError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_order_by_weight_then_id() {
        let registry = SiteRegistry::builder()
            .site(complete_spec("zeta", 4001).weight(1))
            .site(complete_spec("beta", 4002))
            .site(complete_spec("alpha", 4003))
            .build()
            .expect("registry");
        assert_eq!(registry.site_names(), vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn test_nav_label_defaults_to_id() {
        let registry = SiteRegistry::builder()
            .site(complete_spec("alpha", 4001))
            .site(complete_spec("beta", 4002).nav_label("Beta"))
            .build()
            .expect("registry");
        assert_eq!(registry.record("alpha").expect("alpha").nav_label(), "alpha");
        assert_eq!(registry.record("beta").expect("beta").nav_label(), "Beta");
    }
}
