//! Nocturn Core Library
//!
//! This is the core library for the Nocturn session runner. It provides all
//! the business logic for Python version discovery, session registration,
//! execution planning, and external tool invocation.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`session_manager`] - High-level session management interface
//! - [`execution`] - Session execution engine (environment sync, subprocesses)
//! - [`versions`] - Python version discovery from manifest classifiers
//! - [`sessions`] - Built-in session registry and selector resolution
//! - [`session_plan`] - Execution planning with requirement ordering
//! - [`configs`] - Packaging manifest parsing
//! - [`platform`] - Virtual environment layout per platform
//! - [`results`] - Result types for session operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`SessionManager`] which provides a
//! high-level interface for all operations:
//!
//! ```rust,no_run
//! use nocturn_core::session_manager::{SessionManager, SessionManagerConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> nocturn_core::types::NocturnResult<()> {
//! let manager = SessionManager::new(SessionManagerConfig {
//!     project_root: PathBuf::from("."),
//! }).await?;
//!
//! let sessions = manager.list_sessions();
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod execution;
pub mod platform;
pub mod results;
pub mod session_manager;
pub mod session_plan;
pub mod sessions;
pub mod types;
pub mod versions;

// Re-export the main types for easier usage
pub use session_manager::{SessionManager, SessionManagerConfig};
pub use types::{NocturnError, NocturnResult};
pub use versions::PythonVersion;
