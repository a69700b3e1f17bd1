use crate::model::{BuddyGroup, Participant, Status};

#[derive(Debug, Clone, PartialEq)]
pub struct CohortStats {
    /// Every row in the roster counts as an active leader.
    pub active_leaders: usize,
    pub achieved: usize,
    /// Fraction of participants at `Status::Achieved`, in `0.0..=1.0`.
    pub completion_rate: f64,
    /// One entry per status, in progression order.
    pub by_status: Vec<(Status, usize)>,
    /// One entry per buddy group, in declaration order.
    pub by_group: Vec<(BuddyGroup, usize)>,
}

impl CohortStats {
    pub fn completion_percent(&self) -> f64 {
        self.completion_rate * 100.0
    }
}

pub fn cohort_stats(table: &[Participant]) -> CohortStats {
    let active_leaders = table.len();
    let achieved = table.iter().filter(|p| p.status.is_achieved()).count();
    let completion_rate = if active_leaders == 0 {
        0.0
    } else {
        achieved as f64 / active_leaders as f64
    };

    let by_status = Status::ALL
        .iter()
        .map(|s| (*s, table.iter().filter(|p| p.status == *s).count()))
        .collect();
    let by_group = BuddyGroup::ALL
        .iter()
        .map(|g| (*g, table.iter().filter(|p| p.buddy_group == *g).count()))
        .collect();

    CohortStats {
        active_leaders,
        achieved,
        completion_rate,
        by_status,
        by_group,
    }
}
