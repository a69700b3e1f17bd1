//! Terminal output formatting.

use colored::{ColoredString, Colorize};

use crate::model::{Participant, Status};
use crate::queries::stats_queries::CohortStats;

pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

pub fn warning(message: &str) {
    println!("{}", message.yellow().bold());
}

pub fn notice(message: &str) {
    println!("{}", message.dimmed());
}

/// Print the dashboard metric strip.
pub fn print_metrics(stats: &CohortStats) {
    println!(
        "{}: {}    {}: {:.0}% ({} of {})",
        "Active Leaders".bold(),
        stats.active_leaders.to_string().cyan(),
        "Goal Completion".bold(),
        stats.completion_percent(),
        stats.achieved,
        stats.active_leaders
    );
}

/// Print per-status and per-group breakdowns.
pub fn print_breakdown(stats: &CohortStats) {
    println!();
    println!("{}", "By status".bold());
    for (status, count) in &stats.by_status {
        println!("  {:<16} {}", status_colored(*status), count);
    }
    println!();
    println!("{}", "By buddy group".bold());
    for (group, count) in &stats.by_group {
        println!("  {:<16} {}", group.display_name(), count);
    }
}

/// Print participants as a table.
pub fn print_participants_table(participants: &[Participant]) {
    if participants.is_empty() {
        println!("{}", "No participants found.".dimmed());
        return;
    }

    println!(
        "{:<4} {:<11} {:<22} {:<8} {:<16} {}",
        "ID", "Joined", "Name", "Group", "Status", "B-HAG Goal"
    );
    println!("{}", "─".repeat(90));

    for p in participants {
        println!(
            "{:<4} {:<11} {:<22} {:<8} {:<16} {}",
            p.id,
            p.date_joined.to_string(),
            truncate(&p.name, 21),
            p.buddy_group.display_name(),
            status_colored(p.status),
            truncate(&p.goal, 30)
        );
    }
}

/// Print one participant in full.
pub fn print_participant(p: &Participant) {
    println!();
    println!("{} {}", p.name.cyan().bold(), format!("(ID {})", p.id).dimmed());
    println!("{}: {}", "Joined".bold(), p.date_joined);
    println!("{}: {}", "Buddy Group".bold(), p.buddy_group);
    println!("{}: {}", "Status".bold(), status_colored(p.status));
    println!("{}: {}", "B-HAG Goal".bold(), if p.goal.is_empty() { "(none)" } else { p.goal.as_str() });
}

fn status_colored(status: Status) -> ColoredString {
    match status {
        Status::Started => status.display_name().normal(),
        Status::Milestone1 => status.display_name().cyan(),
        Status::Milestone2 => status.display_name().yellow(),
        Status::Achieved => status.display_name().green(),
    }
}

/// Truncate a string to `max` characters, appending an ellipsis when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
