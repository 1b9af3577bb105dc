//! Session execution module
//!
//! This module handles the actual execution of sessions: environment sync,
//! subprocess invocation, and result reporting.

pub mod command;
pub mod runner;

pub use command::CommandExecutor;
pub use runner::SessionRunner;
