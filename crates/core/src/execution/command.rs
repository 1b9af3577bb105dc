//! Command execution utilities
//!
//! This module provides a unified interface for running external tools with
//! consistent error handling and reporting. Install steps run silently:
//! their output is captured and replayed only when they fail.

use std::path::Path;
use std::process::Command;

use colored::*;

use crate::sessions::get_session_color;
use crate::types::{NocturnError, NocturnResult};

/// Unified command executor that handles common setup and execution patterns
pub struct CommandExecutor<'a> {
    project_root: &'a Path,
    session_id: &'a str,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(project_root: &'a Path, session_id: &'a str) -> Self {
        Self {
            project_root,
            session_id,
        }
    }

    /// Execute a command with common setup and error handling
    pub fn execute_command(
        &self,
        command: &mut Command,
        execution_error_message: &str,
        failure_error_message: &str,
    ) -> NocturnResult<()> {
        command.current_dir(self.project_root);

        let status = command
            .status()
            .map_err(|e| NocturnError::Session(format!("{}: {}", execution_error_message, e)))?;

        if !status.success() {
            return Err(NocturnError::Session(format!(
                "{}: {}",
                failure_error_message,
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }

    /// Execute a command silently, replaying captured stderr only on failure
    pub fn execute_silent(
        &self,
        command: &mut Command,
        execution_error_message: &str,
        failure_error_message: &str,
    ) -> NocturnResult<()> {
        command.current_dir(self.project_root);

        let output = command
            .output()
            .map_err(|e| NocturnError::Session(format!("{}: {}", execution_error_message, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                eprintln!("{}", stderr.trim_end());
            }
            return Err(NocturnError::Session(format!(
                "{}: {}",
                failure_error_message,
                output.status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }

    /// Show completion message for the session
    pub fn show_completion_message(&self) {
        let session_color = get_session_color(self.session_id);
        println!(
            "{} {}",
            "✓".green().bold(),
            format!("Completed {}", self.session_id).color(session_color)
        );
    }
}
