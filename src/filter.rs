use std::collections::HashSet;

use crate::analysis::AnnotatedMatch;
use crate::config::MIDFIELD_KEYWORDS;

/// Whether a position name denotes a midfield role (case-sensitive)
pub fn is_midfield_position(position: &str) -> bool {
    MIDFIELD_KEYWORDS.iter().any(|k| position.contains(k))
}

/// Players recorded in a midfield position at least once
pub fn resolve_midfielders(matches: &[AnnotatedMatch]) -> HashSet<String> {
    matches
        .iter()
        .flat_map(|m| &m.events)
        .filter_map(|e| {
            let position = e.event.position.as_deref()?;
            let player = e.player()?;
            is_midfield_position(position).then(|| player.to_string())
        })
        .collect()
}
