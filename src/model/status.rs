use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Progress toward a participant's B-HAG. Variants are declared in
/// progression order, so `Ord` follows the milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Status {
    Started,
    Milestone1,
    Milestone2,
    Achieved,
}

impl Status {
    pub const ALL: &'static [Status] = &[
        Status::Started,
        Status::Milestone1,
        Status::Milestone2,
        Status::Achieved,
    ];

    /// Label written to the data file and shown to the operator.
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Started => "Started",
            Status::Milestone1 => "Milestone 1",
            Status::Milestone2 => "Milestone 2",
            Status::Achieved => "B-HAG Achieved",
        }
    }

    /// Parse from the stored label. `Achieved` is accepted as shorthand.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Started" => Some(Status::Started),
            "Milestone 1" => Some(Status::Milestone1),
            "Milestone 2" => Some(Status::Milestone2),
            "B-HAG Achieved" | "Achieved" => Some(Status::Achieved),
            _ => None,
        }
    }

    pub fn is_achieved(&self) -> bool {
        *self == Status::Achieved
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Status {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Status::from_db_str(trimmed).ok_or_else(|| RosterError::UnknownValue {
            field: "status".into(),
            value: trimmed.to_string(),
        })
    }
}

impl TryFrom<String> for Status {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.display_name().to_string()
    }
}
