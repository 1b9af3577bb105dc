//! High-level session management interface
//!
//! This module provides the [`SessionManager`], the primary entry point for
//! all operations. It reads the packaging manifest exactly once at
//! construction, derives the supported Python version list from the
//! classifier metadata, and builds the session registry from it.
//!
//! The version list is deliberately not a lazily cached global: it is
//! computed here in the setup phase, stored immutably on the manager, and
//! handed to every consumer by reference. Nothing re-reads the manifest
//! after construction.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nocturn_core::session_manager::{SessionManager, SessionManagerConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> nocturn_core::types::NocturnResult<()> {
//! let manager = SessionManager::new(SessionManagerConfig {
//!     project_root: PathBuf::from("."),
//! })
//! .await?;
//!
//! // List all sessions
//! let sessions = manager.list_sessions();
//!
//! // Get the execution plan for a session
//! let plan = manager.get_session_plan("ruff")?;
//!
//! // Run a session
//! manager.run_session("mypy", &[]).await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use crate::execution::runner::SessionRunner;
use crate::results::{SessionInfo, SessionListResult};
use crate::session_plan::{resolve_session_plan, SessionPlan};
use crate::sessions::{get_session_color, SessionRegistry};
use crate::types::{NocturnError, NocturnResult};
use crate::versions::{discover_python_versions, PythonVersion};

/// File name of the packaging manifest read at startup
pub const MANIFEST_FILE_NAME: &str = "pyproject.toml";

/// High-level session manager that owns the discovered versions and registry
#[derive(Debug)]
pub struct SessionManager {
    pub project_root: PathBuf,
    python_versions: Vec<PythonVersion>,
    registry: SessionRegistry,
}

/// Configuration for initializing a session manager
pub struct SessionManagerConfig {
    pub project_root: PathBuf,
}

impl SessionManager {
    /// Initialize a new session manager from the given project root.
    ///
    /// Discovery runs here and only here; failures abort before any session
    /// could execute.
    pub async fn new(config: SessionManagerConfig) -> NocturnResult<Self> {
        let manifest_path = config.project_root.join(MANIFEST_FILE_NAME);
        let python_versions = discover_python_versions(&manifest_path)?;
        let registry = SessionRegistry::builtin(&python_versions);

        Ok(Self {
            project_root: config.project_root,
            python_versions,
            registry,
        })
    }

    /// The supported Python versions, ascending
    pub fn python_versions(&self) -> &[PythonVersion] {
        &self.python_versions
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// List all registered sessions
    pub fn list_sessions(&self) -> SessionListResult {
        SessionListResult {
            sessions: self
                .registry
                .sessions()
                .iter()
                .map(SessionInfo::from)
                .collect(),
            session_colors: self.get_session_colors(),
            python_versions: self.python_versions.clone(),
        }
    }

    /// Get the execution plan for a session selector
    pub fn get_session_plan(&self, selector: &str) -> NocturnResult<SessionPlan> {
        resolve_session_plan(&self.registry, selector)
    }

    /// Run the sessions matching a selector, required sessions first.
    ///
    /// Extra arguments are passed verbatim to the selected sessions only;
    /// sessions pulled in as requirements run with their fixed arguments.
    pub async fn run_session(&self, selector: &str, extra_args: &[String]) -> NocturnResult<()> {
        let plan = self.get_session_plan(selector)?;
        let runner = SessionRunner::new(&self.project_root);

        for session_id in &plan.session_ids {
            let session = self.registry.get(session_id).ok_or_else(|| {
                NocturnError::Session(format!("Session '{}' not found", session_id))
            })?;

            let selected = session.id == selector || session.name == selector;
            let args: &[String] = if selected { extra_args } else { &[] };

            runner.run_session(session, args).await?;
        }

        Ok(())
    }

    /// Generate consistent color mapping for session ids
    fn get_session_colors(&self) -> HashMap<String, colored::Color> {
        self.registry
            .sessions()
            .iter()
            .map(|session| (session.id.clone(), get_session_color(&session.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_manifest(dir: &std::path::Path, classifiers: &[&str]) {
        let entries = classifiers
            .iter()
            .map(|c| format!("    \"{}\",", c))
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(
            dir.join(MANIFEST_FILE_NAME),
            format!(
                "[project]\nname = \"demo\"\nclassifiers = [\n{}\n]\n",
                entries
            ),
        )
        .unwrap();
    }

    async fn manager_for(dir: &std::path::Path) -> SessionManager {
        SessionManager::new(SessionManagerConfig {
            project_root: dir.to_path_buf(),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn versions_are_discovered_once_at_construction() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_manifest(
            temp_dir.path(),
            &[
                "Programming Language :: Python :: 3.10",
                "Programming Language :: Python :: 3.9",
            ],
        );

        let manager = manager_for(temp_dir.path()).await;

        // Removing the manifest must not matter: the list was computed at
        // construction and is never re-read.
        fs::remove_file(temp_dir.path().join(MANIFEST_FILE_NAME)).unwrap();

        let first: Vec<String> = manager
            .python_versions()
            .iter()
            .map(|v| v.to_string())
            .collect();
        let second: Vec<String> = manager
            .python_versions()
            .iter()
            .map(|v| v.to_string())
            .collect();

        assert_eq!(first, vec!["3.9", "3.10"]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn construction_fails_before_any_session_when_metadata_is_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(MANIFEST_FILE_NAME),
            "[project]\nname = \"demo\"\nclassifiers = []\n",
        )
        .unwrap();

        let err = SessionManager::new(SessionManagerConfig {
            project_root: temp_dir.path().to_path_buf(),
        })
        .await
        .unwrap_err();

        assert!(err.to_string().contains("missing 'project.classifiers'"));
    }

    #[tokio::test]
    async fn listing_includes_parametrized_pytest_sessions() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_manifest(
            temp_dir.path(),
            &[
                "Programming Language :: Python :: 3.9",
                "Programming Language :: Python :: 3.11",
                "Operating System :: OS Independent",
            ],
        );

        let manager = manager_for(temp_dir.path()).await;
        let result = manager.list_sessions();

        let ids: Vec<&str> = result.sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "uv",
                "ruff(check)",
                "ruff(format)",
                "mypy",
                "pytest-3.9",
                "pytest-3.11"
            ]
        );
        assert!(result.session_colors.contains_key("mypy"));

        let pytest = result
            .sessions
            .iter()
            .find(|s| s.id == "pytest-3.11")
            .unwrap();
        assert_eq!(pytest.python.as_deref(), Some("3.11"));
        assert_eq!(pytest.requires, vec!["uv"]);
    }

    #[tokio::test]
    async fn plans_come_from_the_cached_registry() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_manifest(temp_dir.path(), &["Programming Language :: Python :: 3.12"]);

        let manager = manager_for(temp_dir.path()).await;

        let plan = manager.get_session_plan("pytest").unwrap();
        assert_eq!(plan.session_ids, vec!["uv", "pytest-3.12"]);

        assert!(manager.get_session_plan("nope").is_err());
    }
}
