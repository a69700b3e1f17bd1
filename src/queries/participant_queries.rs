use crate::model::{BuddyGroup, Participant, Status};

pub fn by_group(table: &[Participant], group: BuddyGroup) -> Vec<Participant> {
    table.iter().filter(|p| p.buddy_group == group).cloned().collect()
}

pub fn by_status(table: &[Participant], status: Status) -> Vec<Participant> {
    table.iter().filter(|p| p.status == status).cloned().collect()
}

/// Case-insensitive substring match on name.
pub fn search_by_name(table: &[Participant], query: &str) -> Vec<Participant> {
    let lower = query.trim().to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }
    table
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&lower))
        .cloned()
        .collect()
}

pub fn find_exact(table: &[Participant], name: &str) -> Vec<Participant> {
    table.iter().filter(|p| p.name == name).cloned().collect()
}

/// Distinct names in roster order, for selection menus.
pub fn names(table: &[Participant]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for p in table {
        if !seen.contains(&p.name) {
            seen.push(p.name.clone());
        }
    }
    seen
}
