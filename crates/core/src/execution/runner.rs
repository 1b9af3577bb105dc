//! High-level session runner
//!
//! This module coordinates a single session run: syncing the session's
//! virtual environment when it has one, then invoking the tool from inside
//! it with the session's fixed arguments plus any caller-supplied extras.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use colored::*;

use crate::execution::command::CommandExecutor;
use crate::platform::VenvLayout;
use crate::sessions::{get_session_color, SessionConfig, SyncSpec};
use crate::types::{NocturnError, NocturnResult};

/// Directory under the project root holding per-session virtual environments
pub const VENV_ROOT_DIR: &str = ".nocturn";

/// Environment variable that points the sync step at a session's venv
pub const UV_PROJECT_ENVIRONMENT: &str = "UV_PROJECT_ENVIRONMENT";

/// Runs registered sessions against a single project root
pub struct SessionRunner<'a> {
    project_root: &'a Path,
}

impl<'a> SessionRunner<'a> {
    pub fn new(project_root: &'a Path) -> Self {
        Self { project_root }
    }

    /// Run a single session to completion
    pub async fn run_session(
        &self,
        session: &SessionConfig,
        extra_args: &[String],
    ) -> NocturnResult<()> {
        let session_color = get_session_color(&session.id);

        println!();
        println!(
            "┌─ {}",
            format!("Running session '{}'", session.id)
                .color(session_color)
                .bold()
        );
        println!("└─ {} {}", "Tool:".bright_black(), session.program);

        let executor = CommandExecutor::new(self.project_root, &session.id);

        let program: PathBuf = match &session.sync {
            Some(sync) => {
                let venv_dir = self.venv_dir(session);
                self.sync_environment(&executor, session, sync, &venv_dir)?;
                VenvLayout::current().executable(&venv_dir, &session.program)
            }
            // No environment to prepare; the tool is expected on PATH
            None => PathBuf::from(&session.program),
        };

        let mut command = Command::new(&program);
        command
            .args(&session.args)
            .args(extra_args)
            .args(&session.trailing_args);

        executor.execute_command(
            &mut command,
            &format!("Failed to execute '{}'", program.display()),
            &format!("Session '{}' failed with exit code", session.id),
        )?;

        executor.show_completion_message();
        Ok(())
    }

    /// Session venv location: `<project>/.nocturn/<sanitized id>`
    pub fn venv_dir(&self, session: &SessionConfig) -> PathBuf {
        self.project_root
            .join(VENV_ROOT_DIR)
            .join(session.venv_dir_name())
    }

    fn sync_environment(
        &self,
        executor: &CommandExecutor,
        session: &SessionConfig,
        sync: &SyncSpec,
        venv_dir: &Path,
    ) -> NocturnResult<()> {
        if let Some(parent) = venv_dir.parent() {
            fs::create_dir_all(parent).map_err(NocturnError::Io)?;
        }

        let mut command = Command::new("uv");
        command.arg("sync").arg(sync.to_arg()).arg("--frozen");
        if let Some(python) = &session.python {
            command.arg(format!("--python={}", python));
        }
        command.env(UV_PROJECT_ENVIRONMENT, venv_dir);

        executor.execute_silent(
            &mut command,
            "Failed to execute 'uv sync'",
            &format!(
                "Environment sync for session '{}' failed with exit code",
                session.id
            ),
        )
    }
}
