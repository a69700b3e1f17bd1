use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::buddy_group::BuddyGroup;
use super::status::Status;

/// One cohort member. Field renames are the column names of the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Date Joined")]
    pub date_joined: NaiveDate,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Buddy Group")]
    pub buddy_group: BuddyGroup,
    #[serde(rename = "B-HAG Goal")]
    pub goal: String,
    #[serde(rename = "Status")]
    pub status: Status,
}

impl Participant {
    /// A freshly onboarded participant always starts at `Status::Started`.
    pub fn create(
        id: u32,
        date_joined: NaiveDate,
        name: String,
        buddy_group: BuddyGroup,
        goal: String,
    ) -> Self {
        Self {
            id,
            date_joined,
            name,
            buddy_group,
            goal,
            status: Status::Started,
        }
    }
}
