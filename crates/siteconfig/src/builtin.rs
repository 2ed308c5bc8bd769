// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The built-in site table: the portal plus the standards sites.

use crate::environment::Environment;
use crate::error::Result;
use crate::registry::{SiteConfigEntry, SiteRegistry, SiteSpec};

/// GitHub Pages origin for pull-request previews.
const PREVIEW_ORIGIN: &str = "https://iflastandards.github.io";
/// GitHub Pages origin for the development fork.
const DEV_ORIGIN: &str = "https://jonphipps.github.io";
const PRODUCTION_ORIGIN: &str = "https://www.iflastandards.info";
/// Repository name that prefixes every path on GitHub Pages.
const PAGES_PREFIX: &str = "/standards-dev";

struct BuiltinSite {
    id: &'static str,
    title: &'static str,
    nav_label: &'static str,
    weight: i32,
    local_port: u16,
    /// Path segment under the deployment root; empty for the portal.
    segment: &'static str,
}

const BUILTIN_SITES: &[BuiltinSite] = &[
    BuiltinSite {
        id: "portal",
        title: "IFLA Standards Portal",
        nav_label: "Portal",
        weight: 0,
        local_port: 3000,
        segment: "",
    },
    BuiltinSite {
        id: "ISBDM",
        title: "ISBD for Manifestation",
        nav_label: "ISBDM",
        weight: 10,
        local_port: 3001,
        segment: "ISBDM",
    },
    BuiltinSite {
        id: "LRM",
        title: "IFLA Library Reference Model",
        nav_label: "LRM",
        weight: 20,
        local_port: 3002,
        segment: "LRM",
    },
    BuiltinSite {
        id: "FRBR",
        title: "Functional Requirements for Bibliographic Records",
        nav_label: "FRBR",
        weight: 30,
        local_port: 3003,
        segment: "FRBR",
    },
    BuiltinSite {
        id: "isbd",
        title: "International Standard Bibliographic Description",
        nav_label: "ISBD",
        weight: 40,
        local_port: 3004,
        segment: "isbd",
    },
    BuiltinSite {
        id: "muldicat",
        title: "Multilingual Dictionary of Cataloguing Terms",
        nav_label: "MulDiCat",
        weight: 50,
        local_port: 3005,
        segment: "muldicat",
    },
    BuiltinSite {
        id: "unimarc",
        title: "UNIMARC",
        nav_label: "UNIMARC",
        weight: 60,
        local_port: 3006,
        segment: "unimarc",
    },
];

fn path_under(prefix: &str, segment: &str) -> String {
    if segment.is_empty() {
        format!("{}/", prefix)
    } else {
        format!("{}/{}/", prefix, segment)
    }
}

impl BuiltinSite {
    fn spec(&self) -> SiteSpec {
        SiteSpec::new(self.id, self.title)
            .nav_label(self.nav_label)
            .weight(self.weight)
            .entry(
                Environment::Local,
                SiteConfigEntry::local(self.local_port, path_under("", self.segment)),
            )
            .entry(
                Environment::Preview,
                SiteConfigEntry::new(PREVIEW_ORIGIN, path_under(PAGES_PREFIX, self.segment)),
            )
            .entry(
                Environment::Dev,
                SiteConfigEntry::new(DEV_ORIGIN, path_under(PAGES_PREFIX, self.segment)),
            )
            .entry(
                Environment::Production,
                SiteConfigEntry::new(PRODUCTION_ORIGIN, path_under("", self.segment)),
            )
    }
}

impl SiteRegistry {
    /// Build the registry from the built-in site table.
    ///
    /// Each call returns a new registry; the table itself is constant.
    pub fn builtin() -> Result<SiteRegistry> {
        SiteRegistry::builder()
            .sites(BUILTIN_SITES.iter().map(BuiltinSite::spec))
            .build()
    }
}
