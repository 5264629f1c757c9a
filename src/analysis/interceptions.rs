use std::collections::BTreeMap;

use super::AnnotatedMatch;

/// Interceptions made while the possession team was behind or level, per player
pub fn count_interceptions(matches: &[AnnotatedMatch]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    let relevant = matches
        .iter()
        .flat_map(|m| &m.events)
        .filter(|e| e.event.is_interception() && e.in_context());

    for e in relevant {
        if let Some(player) = e.player() {
            *counts.entry(player.to_string()).or_insert(0) += 1;
        }
    }
    counts
}
