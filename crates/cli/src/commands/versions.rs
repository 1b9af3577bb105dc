use anyhow::Result;
use colored::*;
use nocturn_core::session_manager::SessionManager;

pub fn execute(manager: &SessionManager) -> Result<()> {
    println!("{}", "Supported Python versions".bold().underline());

    for version in manager.python_versions() {
        println!("  {}", version.to_string().cyan());
    }

    Ok(())
}
