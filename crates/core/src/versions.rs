//! Python version discovery from manifest classifiers
//!
//! The supported interpreter versions are declared as trove classifiers in
//! `pyproject.toml` (`Programming Language :: Python :: 3.x`). This module
//! extracts them, sorts them numerically, and reports descriptive errors when
//! the metadata is missing or unusable.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::configs::manifest::parse_manifest;
use crate::types::{NocturnError, NocturnResult};

/// Anchored at the start of the classifier, matching `re.match` semantics:
/// trailing text after the minor version is tolerated.
#[allow(clippy::expect_used)]
static VERSION_CLASSIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Programming Language :: Python :: (\d+)\.(\d+)")
        .expect("version classifier pattern is valid")
});

/// A supported interpreter version as declared in the manifest.
///
/// Ordering is numeric on (major, minor), so 3.9 sorts before 3.10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for PythonVersion {
    type Err = NocturnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            NocturnError::Config(format!(
                "invalid Python version '{}': expected '<major>.<minor>'",
                s
            ))
        };
        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}

/// Discover the supported Python versions declared in a packaging manifest.
///
/// Reads the manifest once, collects every classifier that encodes an
/// interpreter version, and returns them sorted ascending. Classifiers that
/// do not encode a version are skipped on purpose; manifests legitimately
/// carry many unrelated entries. Duplicate version classifiers are kept.
///
/// Errors with [`NocturnError::Config`] when the classifier list is empty or
/// absent, or when no classifier encodes a version. Unreadable or malformed
/// manifests propagate as IO/parse errors.
pub fn discover_python_versions(manifest_path: &Path) -> NocturnResult<Vec<PythonVersion>> {
    let manifest_name = manifest_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("pyproject.toml");

    let content = std::fs::read_to_string(manifest_path)?;
    let manifest = parse_manifest(&content)?;

    let classifiers = manifest
        .project
        .and_then(|project| project.classifiers)
        .unwrap_or_default();

    if classifiers.is_empty() {
        return Err(NocturnError::Config(format!(
            "missing 'project.classifiers' in {}; cannot determine supported Python versions",
            manifest_name
        )));
    }

    // First-seen order here, numeric order after the sort below.
    let mut versions: Vec<PythonVersion> = classifiers
        .iter()
        .filter_map(|classifier| VERSION_CLASSIFIER.captures(classifier))
        .filter_map(|captures| {
            Some(PythonVersion {
                major: captures[1].parse().ok()?,
                minor: captures[2].parse().ok()?,
            })
        })
        .collect();

    if versions.is_empty() {
        return Err(NocturnError::Config(format!(
            "no Python version classifiers found in {}; expected entries like 'Programming Language :: Python :: 3.x'",
            manifest_name
        )));
    }

    versions.sort();
    Ok(versions)
}
