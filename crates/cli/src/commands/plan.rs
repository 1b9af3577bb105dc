use anyhow::Result;
use colored::*;
use nocturn_core::session_manager::SessionManager;

pub fn execute(manager: &SessionManager, session: &str) -> Result<()> {
    println!("{} {}", "Execution plan for".bold(), session.cyan());

    let plan = manager
        .get_session_plan(session)
        .map_err(|e| anyhow::anyhow!("Failed to get execution plan: {}", e))?;

    println!("\n{}:", "Execution order".bold());
    for (i, session_id) in plan.session_ids.iter().enumerate() {
        println!("  {}. {}", i + 1, session_id);
    }

    Ok(())
}
