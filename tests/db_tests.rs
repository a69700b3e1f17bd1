use std::fs;

use chrono::{Local, NaiveDate};
use iron_pulse::db::*;
use iron_pulse::model::*;
use tempfile::TempDir;

fn setup() -> (TempDir, ParticipantStore) {
    let dir = TempDir::new().unwrap();
    let store = ParticipantStore::new(dir.path().join("iron_lady_data.csv"));
    (dir, store)
}

fn write_raw(store: &ParticipantStore, contents: &str) {
    fs::write(store.path(), contents).unwrap();
}

// ==========================================================================
// LOAD TESTS
// ==========================================================================

#[test]
fn load_fresh_store_writes_seed_roster() {
    let (_dir, store) = setup();
    assert!(!store.exists());

    let table = store.load().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].id, 1);
    assert_eq!(table[0].name, "Anjali Sharma");
    assert_eq!(table[0].status, Status::Milestone2);
    assert_eq!(table[1].id, 2);
    assert_eq!(table[1].name, "Priya Nair");
    assert_eq!(table[1].buddy_group, BuddyGroup::Beta);

    assert!(store.exists());
    let contents = fs::read_to_string(store.path()).unwrap();
    assert_eq!(
        contents.lines().next(),
        Some("ID,Date Joined,Name,Buddy Group,B-HAG Goal,Status")
    );
}

#[test]
fn load_is_stable_after_seeding() {
    let (_dir, store) = setup();
    let first = store.load().unwrap();
    let second = store.load().unwrap();
    assert_eq!(first, second);
}

#[test]
fn load_header_only_file_is_empty_table() {
    let (_dir, store) = setup();
    write_raw(&store, "ID,Date Joined,Name,Buddy Group,B-HAG Goal,Status\n");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn load_reads_existing_file() {
    let (_dir, store) = setup();
    write_raw(
        &store,
        "ID,Date Joined,Name,Buddy Group,B-HAG Goal,Status\n\
         1,2026-02-01,Kavya Menon,Delta,Chair a nonprofit,B-HAG Achieved\n\
         2,2026-02-03,Lakshmi Rao,epsilon,Write a book,Achieved\n",
    );

    let table = store.load().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].date_joined, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    assert_eq!(table[0].status, Status::Achieved);
    assert_eq!(table[1].buddy_group, BuddyGroup::Epsilon);
    assert_eq!(table[1].status, Status::Achieved);
}

#[test]
fn load_rejects_wrong_columns() {
    let (_dir, store) = setup();
    write_raw(&store, "ID,Name,Status\n1,Anjali Sharma,Started\n");
    let err = store.load().unwrap_err();
    assert!(err.is_storage_unavailable());
}

#[test]
fn load_rejects_unknown_status() {
    let (_dir, store) = setup();
    write_raw(
        &store,
        "ID,Date Joined,Name,Buddy Group,B-HAG Goal,Status\n\
         1,2026-01-15,Anjali Sharma,Alpha,Launch Tech Startup,Paused\n",
    );
    assert!(store.load().unwrap_err().is_storage_unavailable());
}

#[test]
fn load_rejects_short_row() {
    let (_dir, store) = setup();
    write_raw(
        &store,
        "ID,Date Joined,Name,Buddy Group,B-HAG Goal,Status\n\
         1,2026-01-15,Anjali Sharma\n",
    );
    assert!(store.load().unwrap_err().is_storage_unavailable());
}

#[test]
fn load_rejects_bad_date() {
    let (_dir, store) = setup();
    write_raw(
        &store,
        "ID,Date Joined,Name,Buddy Group,B-HAG Goal,Status\n\
         1,15/01/2026,Anjali Sharma,Alpha,Launch Tech Startup,Started\n",
    );
    assert!(store.load().unwrap_err().is_storage_unavailable());
}

#[test]
fn load_rejects_empty_file() {
    let (_dir, store) = setup();
    write_raw(&store, "");
    assert!(store.load().unwrap_err().is_storage_unavailable());
}

// ==========================================================================
// SAVE TESTS
// ==========================================================================

#[test]
fn save_then_load_round_trips_created_row() {
    let (_dir, store) = setup();
    let table = store.load().unwrap();
    let created = participant_repo::create(table, "Asha Rao", BuddyGroup::Gamma, "Run for office");
    store.save(&created).unwrap();
    assert_eq!(store.load().unwrap(), created);
}

#[test]
fn save_quotes_embedded_delimiters() {
    let (_dir, store) = setup();
    let goal = "Lead a board, then \"scale\" it\nacross two regions";
    let table = participant_repo::create(Vec::new(), "Rao, Asha", BuddyGroup::Gamma, goal);
    store.save(&table).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Rao, Asha");
    assert_eq!(loaded[0].goal, goal);
}

#[test]
fn save_empty_table_keeps_header() {
    let (_dir, store) = setup();
    store.save(&[]).unwrap();
    let contents = fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents.trim_end(), schema::HEADER.join(","));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_leaves_no_temp_file() {
    let (dir, store) = setup();
    store.save(&schema::seed_rows()).unwrap();
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn save_creates_missing_parent_directory() {
    let dir = TempDir::new().unwrap();
    let store = ParticipantStore::new(dir.path().join("data").join("roster.csv"));
    store.save(&schema::seed_rows()).unwrap();
    assert!(store.exists());
}

#[test]
fn save_over_directory_is_storage_unavailable() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("occupied");
    fs::create_dir(&target).unwrap();
    let store = ParticipantStore::new(&target);

    let err = store.save(&schema::seed_rows()).unwrap_err();
    assert!(err.is_storage_unavailable());
}

// ==========================================================================
// SCENARIOS
// ==========================================================================

#[test]
fn onboarding_on_fresh_store_appends_third_row() {
    let (_dir, store) = setup();
    let table = store.load().unwrap();
    let table = participant_repo::create(table, "Asha Rao", BuddyGroup::Gamma, "Run for office");
    store.save(&table).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(
        loaded[2],
        Participant {
            id: 3,
            date_joined: Local::now().date_naive(),
            name: "Asha Rao".into(),
            buddy_group: BuddyGroup::Gamma,
            goal: "Run for office".into(),
            status: Status::Started,
        }
    );
}

#[test]
fn update_status_on_seeds_only_touches_named_row() {
    let (_dir, store) = setup();
    let table = store.load().unwrap();
    let table = participant_repo::update_status(table, "Anjali Sharma", Status::Achieved);
    store.save(&table).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded[0].status, Status::Achieved);
    assert_eq!(loaded[1], schema::seed_rows()[1]);
}

#[test]
fn update_status_without_match_is_noop() {
    let (_dir, store) = setup();
    let table = store.load().unwrap();
    let updated = participant_repo::update_status(table.clone(), "Nobody", Status::Achieved);
    assert_eq!(updated, table);
}

#[test]
fn delete_priya_leaves_only_anjali() {
    let (_dir, store) = setup();
    let table = store.load().unwrap();
    let table = participant_repo::delete(table, "Priya Nair");
    store.save(&table).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 1);
    assert_eq!(loaded[0].name, "Anjali Sharma");
}

#[test]
fn delete_without_match_is_noop() {
    let (_dir, store) = setup();
    let table = store.load().unwrap();
    let deleted = participant_repo::delete(table.clone(), "Nobody");
    assert_eq!(deleted, table);
}

#[test]
fn deleted_rows_never_reload() {
    let (_dir, store) = setup();
    let table = store.load().unwrap();
    let table = participant_repo::create(table, "Anjali Sharma", BuddyGroup::Delta, "Second entry");
    let table = participant_repo::delete(table, "Anjali Sharma");
    store.save(&table).unwrap();

    let loaded = store.load().unwrap();
    assert!(loaded.iter().all(|p| p.name != "Anjali Sharma"));
}

#[test]
fn create_after_delete_can_reuse_id() {
    let (_dir, store) = setup();
    let table = participant_repo::delete(store.load().unwrap(), "Anjali Sharma");
    let table = participant_repo::create(table, "Asha Rao", BuddyGroup::Gamma, "Run for office");
    store.save(&table).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.iter().all(|p| p.id == 2));
}
