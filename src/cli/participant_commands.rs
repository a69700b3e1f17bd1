use crate::cli::context::CLIContext;
use crate::cli::output;
use crate::error::RosterResult;
use crate::model::*;
use crate::ops::*;
use crate::queries::*;

/// Dashboard: metrics followed by the (optionally filtered) roster.
pub fn list(
    ctx: &CLIContext,
    group: Option<BuddyGroup>,
    status: Option<Status>,
    json: bool,
) -> RosterResult<()> {
    let table = participant_ops::list_all(&ctx.store)?;
    let stats = stats_queries::cohort_stats(&table);

    let mut rows = table;
    if let Some(g) = group {
        rows = participant_queries::by_group(&rows, g);
    }
    if let Some(s) = status {
        rows = participant_queries::by_status(&rows, s);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Cohort Overview");
    output::print_metrics(&stats);
    println!();
    output::print_participants_table(&rows);
    Ok(())
}

pub fn add(ctx: &CLIContext, name: &str, group: BuddyGroup, goal: &str) -> RosterResult<()> {
    let participant = participant_ops::add_participant(&ctx.store, name, group, goal)?;
    output::success(&format!("Successfully onboarded {}!", participant.name));
    Ok(())
}

pub fn add_interactive(ctx: &CLIContext, args: &str) -> RosterResult<()> {
    println!("Register New Leader");
    println!();

    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Full name: ") {
            Some(s) if s.is_empty() => {
                println!("Name is required.");
                return Ok(());
            }
            Some(s) => s,
            None => return Ok(()),
        }
    };

    let group = match ctx.choose("Buddy group assignment:", BuddyGroup::ALL, |g| g.to_string()) {
        Some(g) => g,
        None => return Ok(()),
    };

    let goal = match ctx.prompt("B-HAG (Big Hairy Audacious Goal): ") {
        Some(s) => s,
        None => return Ok(()),
    };

    add(ctx, &name, group, &goal)
}

pub fn update(ctx: &CLIContext, key: &ParticipantKey, status: Status) -> RosterResult<()> {
    let updated = participant_ops::update_progress(&ctx.store, key, status)?;
    if updated.is_empty() {
        output::notice(&format!("No participant matching {}; nothing changed.", key));
    } else {
        output::success(&format!("Status updated for {}!", key));
    }
    Ok(())
}

pub fn update_interactive(ctx: &CLIContext, args: &str) -> RosterResult<()> {
    println!("Modify Milestone Status");
    let table = participant_ops::list_all(&ctx.store)?;
    let name = match select_name(ctx, &table, args, "Select participant:") {
        Some(n) => n,
        None => return Ok(()),
    };

    let status = match ctx.choose("New status:", Status::ALL, |s| s.to_string()) {
        Some(s) => s,
        None => return Ok(()),
    };

    update(ctx, &ParticipantKey::Name(name), status)
}

pub fn archive(ctx: &CLIContext, key: &ParticipantKey) -> RosterResult<()> {
    let removed = participant_ops::archive_participant(&ctx.store, key)?;
    if removed.is_empty() {
        output::notice(&format!("No participant matching {}; nothing archived.", key));
    } else {
        output::warning(&format!("Record for {} has been archived.", key));
    }
    Ok(())
}

pub fn archive_interactive(ctx: &CLIContext, args: &str) -> RosterResult<()> {
    println!("Remove/Archive Participant");
    let table = participant_ops::list_all(&ctx.store)?;
    let name = match select_name(ctx, &table, args, "Select record to archive:") {
        Some(n) => n,
        None => return Ok(()),
    };

    if !ctx.confirm(&format!("Archive {} permanently? This cannot be undone.", name)) {
        println!("Cancelled.");
        return Ok(());
    }

    archive(ctx, &ParticipantKey::Name(name))
}

pub fn show(ctx: &CLIContext, query: &str) -> RosterResult<()> {
    let table = participant_ops::list_all(&ctx.store)?;
    let matches = participant_queries::search_by_name(&table, query);
    if matches.is_empty() {
        println!("No participant found matching '{}'", query.trim());
        return Ok(());
    }
    for p in &matches {
        output::print_participant(p);
    }
    Ok(())
}

pub fn find(ctx: &CLIContext, query: &str) -> RosterResult<()> {
    let table = participant_ops::list_all(&ctx.store)?;
    let matches = participant_queries::search_by_name(&table, query);
    output::print_participants_table(&matches);
    Ok(())
}

pub fn stats(ctx: &CLIContext) -> RosterResult<()> {
    let table = participant_ops::list_all(&ctx.store)?;
    let stats = stats_queries::cohort_stats(&table);
    output::print_metrics(&stats);
    output::print_breakdown(&stats);
    Ok(())
}

/// Use the typed name when given, otherwise offer a menu of every name.
fn select_name(ctx: &CLIContext, table: &[Participant], args: &str, title: &str) -> Option<String> {
    if !args.is_empty() {
        return ctx.find_participant_name(table, args);
    }
    let names = participant_queries::names(table);
    if names.is_empty() {
        println!("No participants yet. Use 'add' to register someone.");
        return None;
    }
    ctx.choose(title, &names, |n| n.clone())
}
