use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Peer accountability group a participant is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BuddyGroup {
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
}

impl BuddyGroup {
    pub const ALL: &'static [BuddyGroup] = &[
        BuddyGroup::Alpha,
        BuddyGroup::Beta,
        BuddyGroup::Gamma,
        BuddyGroup::Delta,
        BuddyGroup::Epsilon,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BuddyGroup::Alpha => "Alpha",
            BuddyGroup::Beta => "Beta",
            BuddyGroup::Gamma => "Gamma",
            BuddyGroup::Delta => "Delta",
            BuddyGroup::Epsilon => "Epsilon",
        }
    }
}

impl fmt::Display for BuddyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BuddyGroup {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        BuddyGroup::ALL
            .iter()
            .copied()
            .find(|g| g.display_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RosterError::UnknownValue {
                field: "buddy group".into(),
                value: trimmed.to_string(),
            })
    }
}

impl TryFrom<String> for BuddyGroup {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BuddyGroup> for String {
    fn from(group: BuddyGroup) -> Self {
        group.display_name().to_string()
    }
}
