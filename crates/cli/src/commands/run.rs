use anyhow::Result;
use colored::*;
use nocturn_core::session_manager::SessionManager;

pub async fn execute(manager: &SessionManager, session: &str, extra_args: &[String]) -> Result<()> {
    println!("{} {}", "Running session".bold(), session.cyan());

    manager
        .run_session(session, extra_args)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run session: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        "All sessions completed successfully!".green().bold()
    );

    Ok(())
}
