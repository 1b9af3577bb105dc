//! Packaging manifest model
//!
//! Nocturn reads the project's `pyproject.toml` but owns none of it; only the
//! `project.classifiers` list is of interest. Every other key is ignored.

use serde::Deserialize;

use crate::types::NocturnResult;

#[derive(Deserialize, Clone, Debug)]
pub struct PyProjectManifest {
    pub project: Option<ProjectMetadata>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ProjectMetadata {
    pub name: Option<String>,
    pub classifiers: Option<Vec<String>>,
}

pub fn parse_manifest(toml_str: &str) -> NocturnResult<PyProjectManifest> {
    let manifest: PyProjectManifest = toml::from_str(toml_str)?;
    Ok(manifest)
}
