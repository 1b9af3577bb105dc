use anyhow::Result;
use colored::*;
use nocturn_core::session_manager::SessionManager;

pub fn execute(manager: &SessionManager, json: bool) -> Result<()> {
    let result = manager.list_sessions();

    if json {
        println!("{}", serde_json::to_string_pretty(&result.sessions)?);
        return Ok(());
    }

    println!("{}", "Sessions".bold().underline());

    if result.sessions.is_empty() {
        println!("  {}", "No sessions available".dimmed());
        return Ok(());
    }

    for session in &result.sessions {
        let color = result
            .session_colors
            .get(&session.id)
            .copied()
            .unwrap_or(Color::White);

        if session.requires.is_empty() {
            println!(
                "{}  {}",
                session.id.color(color).bold(),
                session.description.dimmed()
            );
        } else {
            println!(
                "{}  {} {}",
                session.id.color(color).bold(),
                session.description.dimmed(),
                format!("(requires {})", session.requires.join(", ")).bright_black()
            );
        }
    }

    Ok(())
}
