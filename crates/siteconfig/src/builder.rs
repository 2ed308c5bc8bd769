// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Fresh per-build site configuration: navigation and footer links.
//!
//! Every call to [`build`] allocates its result from scratch: labels and
//! hrefs are copied out of the registry, and caller-supplied links are
//! cloned rather than moved in. Two builds, for the same site or for
//! different sites, never share a container, so a consumer that rewrites
//! one result in place cannot change another.
//!
//! The current site must resolve; sibling sites that do not are logged and
//! left out of the cross-site links.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::Result;
use crate::registry::SiteRegistry;

/// Footer group holding links to the other standards sites.
pub const STANDARDS_GROUP: &str = "Standards";
/// Footer group holding default resource links.
pub const RESOURCES_GROUP: &str = "Resources";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescriptor {
    pub label: String,
    pub href: String,
}

impl LinkDescriptor {
    pub fn new<L: Into<String>, H: Into<String>>(label: L, href: H) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    pub items: Vec<LinkDescriptor>,
}

impl FooterGroup {
    pub fn new<T: Into<String>>(title: T, items: Vec<LinkDescriptor>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// Knobs for [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Leave the current site out of its own cross-site links.
    pub exclude_self: bool,
    /// Sibling sites to link, in order. `None` links every registered site.
    pub sites: Option<Vec<String>>,
    /// Sites never linked.
    pub exclude: Vec<String>,
    /// Add the "Resources" footer group (sitemap).
    pub include_default_resources: bool,
    /// Appended to the navigation items.
    pub extra_navigation: Vec<LinkDescriptor>,
    /// Appended to the footer groups.
    pub extra_footer_groups: Vec<FooterGroup>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            exclude_self: true,
            sites: None,
            exclude: Vec::new(),
            include_default_resources: true,
            extra_navigation: Vec::new(),
            extra_footer_groups: Vec::new(),
        }
    }
}

impl BuildOptions {
    pub fn include_self(mut self) -> Self {
        self.exclude_self = false;
        self
    }

    pub fn only<I, S>(mut self, sites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sites = Some(sites.into_iter().map(Into::into).collect());
        self
    }

    pub fn excluding<I, S>(mut self, sites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(sites.into_iter().map(Into::into));
        self
    }

    pub fn without_resources(mut self) -> Self {
        self.include_default_resources = false;
        self
    }

    pub fn with_navigation_link(mut self, link: LinkDescriptor) -> Self {
        self.extra_navigation.push(link);
        self
    }

    pub fn with_footer_group(mut self, group: FooterGroup) -> Self {
        self.extra_footer_groups.push(group);
        self
    }
}

/// Everything a single site build needs from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBuildConfig {
    pub site: String,
    pub environment: Environment,
    /// Full site URL without trailing slash.
    pub url: String,
    pub base_url: String,
    pub base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub navigation_items: Vec<LinkDescriptor>,
    pub footer_groups: Vec<FooterGroup>,
}

/// A resolved sibling, before it is split into navigation and footer links.
struct SiblingLink {
    nav_label: String,
    title: String,
    href: String,
}

/// Build the navigation and footer configuration for `site` in `env`.
pub fn build(
    registry: &SiteRegistry,
    site: &str,
    env: Environment,
    options: &BuildOptions,
) -> Result<SiteBuildConfig> {
    let current = registry.record(site)?;
    let entry = registry.lookup(site, env)?;
    let url = registry.url(site, env)?;
    let site = current.id().as_str();

    let siblings = resolve_siblings(registry, site, env, options)?;

    let mut navigation_items =
        Vec::with_capacity(siblings.len() + options.extra_navigation.len());
    let mut standards = Vec::with_capacity(siblings.len());
    for sibling in &siblings {
        navigation_items.push(LinkDescriptor::new(
            sibling.nav_label.clone(),
            sibling.href.clone(),
        ));
        standards.push(LinkDescriptor::new(sibling.title.clone(), sibling.href.clone()));
    }
    navigation_items.extend(options.extra_navigation.iter().cloned());

    let mut footer_groups = Vec::with_capacity(2 + options.extra_footer_groups.len());
    if !standards.is_empty() {
        footer_groups.push(FooterGroup::new(STANDARDS_GROUP, standards));
    }
    if options.include_default_resources {
        footer_groups.push(FooterGroup::new(
            RESOURCES_GROUP,
            vec![LinkDescriptor::new(
                "Sitemap",
                registry.build_url(site, env, "sitemap.xml")?,
            )],
        ));
    }
    footer_groups.extend(options.extra_footer_groups.iter().cloned());

    diagnostics::log_info!(
        "Built {site} config for {env}: {nav} navigation items, {groups} footer groups",
        site: site,
        env: env.as_str(),
        nav: navigation_items.len(),
        groups: footer_groups.len()
    );

    Ok(SiteBuildConfig {
        site: site.to_string(),
        environment: env,
        url,
        base_url: entry.base_url.clone(),
        base_path: entry.base_path.clone(),
        port: entry.port,
        navigation_items,
        footer_groups,
    })
}

fn resolve_siblings(
    registry: &SiteRegistry,
    current: &str,
    env: Environment,
    options: &BuildOptions,
) -> Result<Vec<SiblingLink>> {
    let candidates: Vec<String> = match &options.sites {
        Some(sites) => sites.clone(),
        None => registry.site_names(),
    };

    let mut seen = BTreeSet::new();
    let mut links = Vec::with_capacity(candidates.len());

    for name in &candidates {
        if !seen.insert(name.as_str()) {
            continue;
        }
        if options.exclude_self && name == current {
            continue;
        }
        if options.exclude.iter().any(|excluded| excluded == name) {
            continue;
        }

        let resolved = registry
            .record(name)
            .and_then(|record| Ok((record, registry.site_root(name, env)?)));

        match resolved {
            Ok((record, href)) => {
                diagnostics::log_debug!("Linking {sibling} at {href}", sibling: name.as_str(), href: href.as_str());
                links.push(SiblingLink {
                    nav_label: record.nav_label().to_string(),
                    title: record.title().to_string(),
                    href,
                });
            }
            // only lookup misses are recoverable for a cross-site link
            Err(err) if err.is_lookup_miss() => {
                let reason = err.to_string();
                diagnostics::log_warn!(
                    "Skipping sibling site {sibling} while building {site}: {reason}",
                    sibling: name.as_str(),
                    site: current,
                    reason: reason.as_str()
                );
            }
            Err(err) => return Err(err),
        }
    }

    Ok(links)
}

impl SiteRegistry {
    /// See [`build`].
    pub fn build_site_config(
        &self,
        site: &str,
        env: Environment,
        options: &BuildOptions,
    ) -> Result<SiteBuildConfig> {
        build(self, site, env, options)
    }
}
