use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::db::{participant_repo, ParticipantStore};
use crate::error::{RosterError, RosterResult};
use crate::model::{BuddyGroup, Participant, Status, Table};
use crate::validation::{self, trim_optional};

/// Serializes load-mutate-save cycles within this process.
static ROSTER_LOCK: Mutex<()> = Mutex::new(());

fn lock_roster() -> MutexGuard<'static, ()> {
    ROSTER_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// How the operator picks the participant(s) to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantKey {
    Name(String),
    Id(u32),
}

impl ParticipantKey {
    pub fn matches(&self, participant: &Participant) -> bool {
        match self {
            ParticipantKey::Name(name) => participant.name == *name,
            ParticipantKey::Id(id) => participant.id == *id,
        }
    }
}

impl fmt::Display for ParticipantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantKey::Name(name) => f.write_str(name),
            ParticipantKey::Id(id) => write!(f, "ID {}", id),
        }
    }
}

pub fn add_participant(
    store: &ParticipantStore,
    name: &str,
    group: BuddyGroup,
    goal: &str,
) -> RosterResult<Participant> {
    let valid_name = validation::non_blank(name, "name")?;
    let goal = trim_optional(Some(goal)).unwrap_or_default();

    let _guard = lock_roster();
    let table = store.load()?;
    let table = participant_repo::create(table, &valid_name, group, &goal);
    store.save(&table)?;

    let added = table
        .last()
        .cloned()
        .ok_or_else(|| RosterError::storage(store.path(), "new participant missing after save"))?;
    info!(id = added.id, name = %added.name, group = %added.buddy_group, "onboarded participant");
    Ok(added)
}

pub fn list_all(store: &ParticipantStore) -> RosterResult<Table> {
    let _guard = lock_roster();
    store.load()
}

/// Sets `status` on every participant matching `key`. Returns the updated
/// rows; an empty result means nothing matched and the file is unchanged in
/// content.
pub fn update_progress(
    store: &ParticipantStore,
    key: &ParticipantKey,
    status: Status,
) -> RosterResult<Vec<Participant>> {
    let _guard = lock_roster();
    let table = store.load()?;
    let table = match key {
        ParticipantKey::Name(name) => participant_repo::update_status(table, name, status),
        ParticipantKey::Id(id) => participant_repo::update_status_by_id(table, *id, status),
    };
    store.save(&table)?;

    let updated: Vec<Participant> = table.into_iter().filter(|p| key.matches(p)).collect();
    info!(key = %key, status = %status, rows = updated.len(), "updated progress");
    Ok(updated)
}

/// Permanently removes every participant matching `key` and returns them.
pub fn archive_participant(
    store: &ParticipantStore,
    key: &ParticipantKey,
) -> RosterResult<Vec<Participant>> {
    let _guard = lock_roster();
    let table = store.load()?;
    let removed: Vec<Participant> = table.iter().filter(|p| key.matches(p)).cloned().collect();
    let table = match key {
        ParticipantKey::Name(name) => participant_repo::delete(table, name),
        ParticipantKey::Id(id) => participant_repo::delete_by_id(table, *id),
    };
    store.save(&table)?;

    info!(key = %key, rows = removed.len(), "archived participant");
    Ok(removed)
}
