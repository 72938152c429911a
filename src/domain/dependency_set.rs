//! Runtime packages required by the selected fragments.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::ServerConfig;

/// An npm package the generated program requires.
///
/// Declaration order is the canonical install order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Package {
    /// Web routing framework.
    Express,
    /// Cross-origin middleware.
    Cors,
    /// HTTP client used by custom proxies. Pinned to v2 for `require()` support.
    NodeFetch,
    /// Gemini SDK.
    GoogleGenerativeAi,
    /// `.env` loader for the Gemini key.
    Dotenv,
}

impl Package {
    pub const BASELINE: [Package; 2] = [Package::Express, Package::Cors];

    /// Requirement string as passed to `npm install`.
    pub fn requirement(self) -> &'static str {
        match self {
            Package::Express => "express",
            Package::Cors => "cors",
            Package::NodeFetch => "node-fetch@2",
            Package::GoogleGenerativeAi => "@google/generative-ai",
            Package::Dotenv => "dotenv",
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.requirement())
    }
}

impl Serialize for Package {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.requirement())
    }
}

/// Duplicate-free, canonically ordered package set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencySet(BTreeSet<Package>);

impl DependencySet {
    /// Derive the packages needed by the fragments `config` selects.
    pub fn resolve(config: &ServerConfig) -> Self {
        let mut set = DependencySet::default();
        set.extend(Package::BASELINE);

        if config.uses_custom_proxy() {
            set.insert(Package::NodeFetch);
        }
        if config.chat.is_managed() {
            set.extend([Package::GoogleGenerativeAi, Package::Dotenv]);
        }

        tracing::debug!(packages = %set.requirements().join(" "), "resolved dependencies");
        set
    }

    pub fn insert(&mut self, package: Package) -> bool {
        self.0.insert(package)
    }

    pub fn contains(&self, package: Package) -> bool {
        self.0.contains(&package)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Package> + '_ {
        self.0.iter().copied()
    }

    pub fn requirements(&self) -> Vec<&'static str> {
        self.iter().map(Package::requirement).collect()
    }

    pub fn install_command(&self) -> String {
        format!("npm install {}", self.requirements().join(" "))
    }
}

impl Extend<Package> for DependencySet {
    fn extend<I: IntoIterator<Item = Package>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<Package> for DependencySet {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
