// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! URL composition over registry entries.
//!
//! Nothing here is cached: every call looks the entry up again and builds a
//! new string.

use crate::environment::Environment;
use crate::error::Result;
use crate::registry::SiteRegistry;

impl SiteRegistry {
    /// Full URL of `site` in `env`: origin plus base path, one slash at the
    /// join and no trailing slash.
    pub fn url(&self, site: &str, env: Environment) -> Result<String> {
        let entry = self.lookup(site, env)?;
        Ok(join_url(&entry.base_url, &entry.base_path))
    }

    /// [`SiteRegistry::url`] with `path` appended. An empty `path` yields
    /// exactly the site URL.
    pub fn build_url(&self, site: &str, env: Environment, path: &str) -> Result<String> {
        let url = self.url(site, env)?;
        Ok(append_path(&url, path))
    }

    /// Root href for links into `site` from elsewhere, ending in '/'.
    pub fn site_root(&self, site: &str, env: Environment) -> Result<String> {
        let url = self.url(site, env)?;
        if url.ends_with('/') {
            Ok(url)
        } else {
            Ok(format!("{}/", url))
        }
    }
}

/// Join an origin and a root-relative path.
///
/// The result has a single '/' between the parts and never ends in '/',
/// except when both parts are empty and the result is the lone root "/".
pub fn join_url(base_url: &str, base_path: &str) -> String {
    let origin = base_url.trim_end_matches('/');
    let collapsed = collapse_slashes(base_path);
    let path = collapsed.trim_matches('/');

    match (origin.is_empty(), path.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", path),
        (false, true) => origin.to_string(),
        (false, false) => format!("{}/{}", origin, path),
    }
}

/// Append a sub-path to a URL produced by [`join_url`].
///
/// Runs of '/' in `path` collapse to one and leading slashes are dropped.
/// A trailing slash supplied by the caller is kept.
pub fn append_path(url: &str, path: &str) -> String {
    let collapsed = collapse_slashes(path);
    let rest = collapsed.trim_start_matches('/');

    if rest.is_empty() {
        url.to_string()
    } else if url.ends_with('/') {
        format!("{}{}", url, rest)
    } else {
        format!("{}/{}", url, rest)
    }
}

fn collapse_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_slash = false;
    for c in s.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::registry::SiteConfigEntry;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:3001", "/ISBDM/"), "http://localhost:3001/ISBDM");
        assert_eq!(join_url("http://localhost:3001/", "/ISBDM/"), "http://localhost:3001/ISBDM");
        assert_eq!(join_url("http://localhost:3000", "/"), "http://localhost:3000");
        assert_eq!(
            join_url("https://iflastandards.github.io", "/standards-dev//LRM/"),
            "https://iflastandards.github.io/standards-dev/LRM"
        );
        assert_eq!(join_url("", "/"), "/");
        assert_eq!(join_url("", "/docs/"), "/docs");
    }

    #[test]
    fn test_append_path() {
        let url = "http://localhost:3001/ISBDM";
        assert_eq!(append_path(url, ""), url);
        assert_eq!(append_path(url, "/"), url);
        assert_eq!(append_path(url, "docs/intro"), "http://localhost:3001/ISBDM/docs/intro");
        assert_eq!(append_path(url, "//docs//intro"), "http://localhost:3001/ISBDM/docs/intro");
        assert_eq!(append_path(url, "docs/"), "http://localhost:3001/ISBDM/docs/");
        assert_eq!(append_path("/", "docs"), "/docs");
    }

    #[test]
    fn test_accessor_on_builtin() {
        let registry = SiteRegistry::builtin().expect("builtin");
        assert_eq!(
            registry.url("ISBDM", Environment::Local).expect("url"),
            "http://localhost:3001/ISBDM"
        );
        assert_eq!(
            registry.url("portal", Environment::Production).expect("url"),
            "https://www.iflastandards.info"
        );
        assert_eq!(
            registry.site_root("portal", Environment::Local).expect("root"),
            "http://localhost:3000/"
        );
        assert_eq!(
            registry.build_url("LRM", Environment::Dev, "docs/elements").expect("url"),
            "https://jonphipps.github.io/standards-dev/LRM/docs/elements"
        );
    }

    #[test]
    fn test_lookup_misses_propagate() {
        let registry = SiteRegistry::from_records_unchecked(vec![(
            "partial",
            vec![(Environment::Local, SiteConfigEntry::local(4000, "/partial/"))],
        )]);
        assert!(matches!(
            registry.url("missing", Environment::Local),
            Err(ConfigError::UnknownSite { .. })
        ));
        assert!(matches!(
            registry.build_url("partial", Environment::Dev, "x"),
            Err(ConfigError::UnknownSiteEnvironment { .. })
        ));
    }
}
