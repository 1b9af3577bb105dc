//! Result types for session manager operations
//!
//! This module contains the output structures returned by session manager
//! operations, kept in one place so the CLI layer only handles presentation.

use std::collections::HashMap;

use colored::Color;
use serde::Serialize;

use crate::sessions::SessionConfig;
use crate::versions::PythonVersion;

/// Information about a registered session
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub name: String,
    pub id: String,
    pub description: String,
    pub python: Option<String>,
    pub requires: Vec<String>,
}

/// Result of listing the available sessions
#[derive(Debug)]
pub struct SessionListResult {
    pub sessions: Vec<SessionInfo>,
    pub session_colors: HashMap<String, Color>,
    pub python_versions: Vec<PythonVersion>,
}

impl From<&SessionConfig> for SessionInfo {
    fn from(session: &SessionConfig) -> Self {
        Self {
            name: session.name.clone(),
            id: session.id.clone(),
            description: session.description.clone(),
            python: session.python.map(|version| version.to_string()),
            requires: session.requires.clone(),
        }
    }
}
