//! The package record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Metadata extracted from a Debian binary package.
///
/// Every field except [`filename`](Self::filename) starts at its zero value
/// and stays there when the archive has no control member or the control
/// file omits the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebPackage {
    /// Path of the archive this record was read from
    pub filename: PathBuf,

    /// Last modification time of the archive file
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,

    /// Archive format version from `debian-binary` (e.g. "2.0")
    #[serde(default)]
    pub deb_version: String,

    /// Package name (`Package:`)
    #[serde(default)]
    pub name: String,

    /// Package version (`Version:`)
    #[serde(default)]
    pub version: String,

    /// Target architecture (e.g. "amd64", "all")
    #[serde(default)]
    pub architecture: String,

    /// Maintainer name and address
    #[serde(default)]
    pub maintainer: String,

    /// Upstream homepage URL
    #[serde(default)]
    pub homepage: String,

    /// Archive section (e.g. "utils")
    #[serde(default)]
    pub section: String,

    /// Priority (e.g. "optional")
    #[serde(default)]
    pub priority: String,

    /// Synopsis followed by the extended description lines, concatenated as read
    /// with no separator
    #[serde(default)]
    pub description: String,

    /// Declared installed size (`Installed-Size:`), in KiB
    #[serde(default)]
    pub installed_size: i64,

    /// Dependency specifiers in declaration order
    #[serde(default)]
    pub depends: Vec<String>,

    /// Recommended packages in declaration order
    #[serde(default)]
    pub recommends: Vec<String>,

    /// Source packages this binary was built with
    #[serde(default)]
    pub built_using: Vec<String>,
}

impl DebPackage {
    /// Create an empty record for the archive at `filename`.
    pub fn new(filename: impl Into<PathBuf>, modified: Option<DateTime<Utc>>) -> Self {
        Self {
            filename: filename.into(),
            modified,
            ..Self::default()
        }
    }

    /// Path of the source archive.
    pub fn path(&self) -> &Path {
        &self.filename
    }

    /// `name_version_architecture`, the canonical Debian file stem.
    ///
    /// Returns `None` until the control fields have been populated.
    pub fn canonical_stem(&self) -> Option<String> {
        if self.name.is_empty() || self.version.is_empty() {
            return None;
        }
        let mut stem = format!("{}_{}", self.name, self.version);
        if !self.architecture.is_empty() {
            stem.push('_');
            stem.push_str(&self.architecture);
        }
        Some(stem)
    }
}

impl std::fmt::Display for DebPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.canonical_stem() {
            Some(stem) => write!(f, "{stem}"),
            None => write!(f, "{}", self.filename.display()),
        }
    }
}
