//! In-memory transforms over a loaded roster. None of these touch the data
//! file; callers save the returned table through `ParticipantStore`.

use chrono::{Local, NaiveDate};

use crate::model::{BuddyGroup, Participant, Status, Table};

/// ID the next created participant receives. This is `len + 1`, so after a
/// deletion it can repeat an ID that is still in use.
pub fn next_id(table: &[Participant]) -> u32 {
    u32::try_from(table.len()).map_or(u32::MAX, |n| n.saturating_add(1))
}

/// Appends a new participant joined today.
pub fn create(table: Table, name: &str, group: BuddyGroup, goal: &str) -> Table {
    create_on(table, name, group, goal, Local::now().date_naive())
}

pub fn create_on(
    mut table: Table,
    name: &str,
    group: BuddyGroup,
    goal: &str,
    date_joined: NaiveDate,
) -> Table {
    let participant = Participant::create(
        next_id(&table),
        date_joined,
        name.to_string(),
        group,
        goal.to_string(),
    );
    table.push(participant);
    table
}

/// Sets the status of every participant named exactly `name`.
pub fn update_status(mut table: Table, name: &str, status: Status) -> Table {
    for participant in table.iter_mut().filter(|p| p.name == name) {
        participant.status = status;
    }
    table
}

pub fn update_status_by_id(mut table: Table, id: u32, status: Status) -> Table {
    for participant in table.iter_mut().filter(|p| p.id == id) {
        participant.status = status;
    }
    table
}

/// Removes every participant named exactly `name`.
pub fn delete(mut table: Table, name: &str) -> Table {
    table.retain(|p| p.name != name);
    table
}

pub fn delete_by_id(mut table: Table, id: u32) -> Table {
    table.retain(|p| p.id != id);
    table
}
