//! Built-in session registry and session color management
//!
//! Sessions are declared here once and parametrized by the Python versions
//! discovered from the manifest. The registry is immutable after
//! construction.

use colored::Color;

use crate::versions::PythonVersion;

/// How a session's virtual environment is populated before the tool runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncSpec {
    /// `uv sync --only-group=<group>`: install just this dependency group
    OnlyGroup(&'static str),
    /// `uv sync --group=<group>`: install the project plus this group
    Group(&'static str),
}

impl SyncSpec {
    pub fn to_arg(&self) -> String {
        match self {
            SyncSpec::OnlyGroup(group) => format!("--only-group={}", group),
            SyncSpec::Group(group) => format!("--group={}", group),
        }
    }
}

/// A single registered session: which tool to run, how, and what it needs.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base name shared by every parametrization, e.g. "ruff"
    pub name: String,
    /// Unique id, e.g. "ruff(check)" or "pytest-3.9"
    pub id: String,
    pub description: String,
    /// Ids of sessions that must run before this one
    pub requires: Vec<String>,
    /// Environment sync step; sessions without one run straight from PATH
    pub sync: Option<SyncSpec>,
    /// Interpreter version the environment is pinned to, if parametrized
    pub python: Option<PythonVersion>,
    pub program: String,
    pub args: Vec<String>,
    /// Appended after any caller-supplied extra arguments
    pub trailing_args: Vec<String>,
}

impl SessionConfig {
    /// Directory name for this session's virtual environment.
    /// "ruff(check)" becomes "ruff-check", "pytest-3.9" becomes "pytest-3-9".
    pub fn venv_dir_name(&self) -> String {
        let sanitized: String = self
            .id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        sanitized.trim_matches('-').to_string()
    }
}

/// The immutable set of sessions available for a project.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: Vec<SessionConfig>,
}

impl SessionRegistry {
    /// Build the built-in registry, with one pytest session per discovered
    /// Python version.
    pub fn builtin(python_versions: &[PythonVersion]) -> Self {
        let mut sessions = vec![
            SessionConfig {
                name: "uv".to_string(),
                id: "uv".to_string(),
                description: "Verify the dependency lock file is up to date".to_string(),
                requires: Vec::new(),
                sync: None,
                python: None,
                program: "uv".to_string(),
                args: vec!["lock".to_string(), "--check".to_string()],
                trailing_args: Vec::new(),
            },
            SessionConfig {
                name: "ruff".to_string(),
                id: "ruff(check)".to_string(),
                description: "Lint the project with ruff".to_string(),
                requires: vec!["uv".to_string()],
                sync: Some(SyncSpec::OnlyGroup("ruff")),
                python: None,
                program: "ruff".to_string(),
                args: vec!["check".to_string()],
                trailing_args: vec![".".to_string()],
            },
            SessionConfig {
                name: "ruff".to_string(),
                id: "ruff(format)".to_string(),
                description: "Check formatting with ruff".to_string(),
                requires: vec!["uv".to_string()],
                sync: Some(SyncSpec::OnlyGroup("ruff")),
                python: None,
                program: "ruff".to_string(),
                args: vec!["format".to_string(), "--diff".to_string()],
                trailing_args: vec![".".to_string()],
            },
            SessionConfig {
                name: "mypy".to_string(),
                id: "mypy".to_string(),
                description: "Type-check the project with mypy".to_string(),
                requires: vec!["uv".to_string()],
                sync: Some(SyncSpec::Group("mypy")),
                python: None,
                program: "mypy".to_string(),
                args: Vec::new(),
                trailing_args: vec![".".to_string()],
            },
        ];

        for version in python_versions {
            sessions.push(SessionConfig {
                name: "pytest".to_string(),
                id: format!("pytest-{}", version),
                description: format!("Run the test suite on Python {}", version),
                requires: vec!["uv".to_string()],
                sync: Some(SyncSpec::Group("pytest")),
                python: Some(*version),
                program: "pytest".to_string(),
                args: Vec::new(),
                trailing_args: Vec::new(),
            });
        }

        Self { sessions }
    }

    pub fn sessions(&self) -> &[SessionConfig] {
        &self.sessions
    }

    /// Sessions matching a selector: an exact id, or a base name matching
    /// every parametrization ("ruff" matches both ruff sessions).
    pub fn select(&self, selector: &str) -> Vec<&SessionConfig> {
        self.sessions
            .iter()
            .filter(|session| session.id == selector || session.name == selector)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&SessionConfig> {
        self.sessions.iter().find(|session| session.id == id)
    }
}

/// Get a consistent color for a session id
pub fn get_session_color(session_id: &str) -> Color {
    let hash = session_id
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    // Label colors distinct from the red/yellow/green used for status output
    let colors = [
        Color::TrueColor {
            r: 147,
            g: 112,
            b: 219,
        }, // medium slate blue
        Color::TrueColor {
            r: 64,
            g: 224,
            b: 208,
        }, // turquoise
        Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        }, // dark orange
        Color::TrueColor {
            r: 199,
            g: 21,
            b: 133,
        }, // medium violet red
        Color::TrueColor {
            r: 138,
            g: 43,
            b: 226,
        }, // blue violet
    ];

    colors[(hash % colors.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(major: u32, minor: u32) -> PythonVersion {
        PythonVersion { major, minor }
    }

    #[test]
    fn builtin_registry_has_one_pytest_session_per_version() {
        let registry = SessionRegistry::builtin(&[version(3, 9), version(3, 10)]);

        let ids: Vec<&str> = registry.sessions().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "uv",
                "ruff(check)",
                "ruff(format)",
                "mypy",
                "pytest-3.9",
                "pytest-3.10"
            ]
        );
    }

    #[test]
    fn session_arguments_match_the_registered_tools() {
        let registry = SessionRegistry::builtin(&[version(3, 9)]);

        let uv = registry.get("uv").unwrap();
        assert_eq!(uv.program, "uv");
        assert_eq!(uv.args, vec!["lock", "--check"]);
        assert!(uv.sync.is_none());
        assert!(uv.requires.is_empty());

        let check = registry.get("ruff(check)").unwrap();
        assert_eq!(check.sync, Some(SyncSpec::OnlyGroup("ruff")));
        assert_eq!(check.args, vec!["check"]);
        assert_eq!(check.trailing_args, vec!["."]);

        let format = registry.get("ruff(format)").unwrap();
        assert_eq!(format.args, vec!["format", "--diff"]);

        let mypy = registry.get("mypy").unwrap();
        assert_eq!(mypy.sync, Some(SyncSpec::Group("mypy")));
        assert_eq!(mypy.trailing_args, vec!["."]);

        let pytest = registry.get("pytest-3.9").unwrap();
        assert_eq!(pytest.sync, Some(SyncSpec::Group("pytest")));
        assert_eq!(pytest.python, Some(version(3, 9)));
        assert!(pytest.trailing_args.is_empty());
    }

    #[test]
    fn base_name_selector_matches_every_parametrization() {
        let registry = SessionRegistry::builtin(&[version(3, 9), version(3, 10)]);

        let ruff: Vec<&str> = registry.select("ruff").iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ruff, vec!["ruff(check)", "ruff(format)"]);

        let pytest: Vec<&str> = registry
            .select("pytest")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(pytest, vec!["pytest-3.9", "pytest-3.10"]);

        let exact = registry.select("ruff(format)");
        assert_eq!(exact.len(), 1);

        assert!(registry.select("black").is_empty());
    }

    #[test]
    fn venv_dir_names_are_filesystem_safe() {
        let registry = SessionRegistry::builtin(&[version(3, 9)]);
        assert_eq!(registry.get("ruff(check)").unwrap().venv_dir_name(), "ruff-check");
        assert_eq!(registry.get("pytest-3.9").unwrap().venv_dir_name(), "pytest-3-9");
        assert_eq!(registry.get("mypy").unwrap().venv_dir_name(), "mypy");
    }

    #[test]
    fn sync_spec_arguments() {
        assert_eq!(SyncSpec::OnlyGroup("ruff").to_arg(), "--only-group=ruff");
        assert_eq!(SyncSpec::Group("pytest").to_arg(), "--group=pytest");
    }
}
