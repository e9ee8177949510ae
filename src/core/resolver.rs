use crate::domain::model::{LabelRoster, LabelSet};

/// Every label whose member list contains `author`, in roster order.
pub fn labels_for(roster: &LabelRoster, author: &str) -> Vec<String> {
    roster
        .iter()
        .filter(|(_, members)| members.iter().any(|member| member == author))
        .map(|(label, _)| label.to_string())
        .collect()
}

/// First-match policy: only the earliest matching label is applied.
pub fn pick_label(matches: &[String]) -> LabelSet {
    matches
        .first()
        .map(LabelSet::single)
        .unwrap_or_else(LabelSet::empty)
}

pub fn parity_label(pr_number: u64) -> LabelSet {
    if pr_number % 2 == 0 {
        LabelSet::single("even")
    } else {
        LabelSet::single("odd")
    }
}
