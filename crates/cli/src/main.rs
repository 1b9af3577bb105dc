use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nocturn_core::session_manager::{SessionManager, SessionManagerConfig};

mod commands;

/// Nocturn - a session runner for Python projects
#[derive(Parser)]
#[command(name = "nocturn")]
#[command(about = "Run lint, type-check, and test sessions for a Python project")]
#[command(version)]
struct Cli {
    /// Path to the project root containing pyproject.toml (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available sessions
    List {
        /// Emit the session list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the Python versions discovered from the manifest classifiers
    Versions,
    /// Show the execution plan for a session without running it
    Plan {
        /// Session id like "ruff(check)" or base name like "pytest"
        session: String,
    },
    /// Run a session
    Run {
        /// Session id like "ruff(check)" or base name like "pytest"
        session: String,
        /// Extra arguments passed verbatim to the underlying tool
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        extra_args: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Discovery happens once here; any manifest problem aborts before a
    // session can run
    let manager = SessionManager::new(SessionManagerConfig {
        project_root: cli.project,
    })
    .await
    .map_err(|e| anyhow::anyhow!("Failed to initialize session runner: {}", e))?;

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::List { json } => commands::list::execute(&manager, json),
        Commands::Versions => commands::versions::execute(&manager),
        Commands::Plan { session } => commands::plan::execute(&manager, &session),
        Commands::Run {
            session,
            extra_args,
        } => commands::run::execute(&manager, &session, &extra_args).await,
    }
}
