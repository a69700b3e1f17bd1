use chrono::NaiveDate;
use csv::StringRecord;

use crate::model::{BuddyGroup, Participant, Status, Table};

/// Column names of the data file, in order.
pub const HEADER: [&str; 6] = [
    "ID",
    "Date Joined",
    "Name",
    "Buddy Group",
    "B-HAG Goal",
    "Status",
];

/// Sample cohort written when the data file does not exist yet.
pub fn seed_rows() -> Table {
    vec![
        Participant {
            id: 1,
            date_joined: seed_date(2026, 1, 15),
            name: "Anjali Sharma".into(),
            buddy_group: BuddyGroup::Alpha,
            goal: "Launch Tech Startup".into(),
            status: Status::Milestone2,
        },
        Participant {
            id: 2,
            date_joined: seed_date(2026, 1, 20),
            name: "Priya Nair".into(),
            buddy_group: BuddyGroup::Beta,
            goal: "Board Member Seat".into(),
            status: Status::Started,
        },
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Checks that a header row names exactly the expected columns in order.
/// Returns a description of the mismatch on failure.
pub fn check_header(headers: &StringRecord) -> Result<(), String> {
    let found: Vec<&str> = headers.iter().map(str::trim).collect();
    if found == HEADER {
        Ok(())
    } else {
        Err(format!(
            "expected columns [{}], found [{}]",
            HEADER.join(", "),
            found.join(", ")
        ))
    }
}
