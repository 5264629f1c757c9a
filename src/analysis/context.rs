use std::collections::{BTreeMap, HashSet};

use crate::model::AnnotatedEvent;

/// Season playing time of one player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerMinutes {
    /// Sum over matches of the last minute the player appears in
    pub total: u32,
    /// Distinct minutes with an event while drawing or losing
    pub context: u32,
    /// First team the player was seen with
    pub team: String,
}

/// Per-player playing time accumulated match by match
#[derive(Debug, Clone, Default)]
pub struct PlayingTime {
    players: BTreeMap<String, PlayerMinutes>,
}

#[derive(Default)]
struct MatchTally<'a> {
    last_minute: u32,
    team: &'a str,
    context_minutes: HashSet<u32>,
}

impl PlayingTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one match worth of events
    ///
    /// The minute total is an approximation: it is the latest minute the
    /// player touches the ball, not a substitution-aware playing time.
    pub fn fold_match(mut self, events: &[AnnotatedEvent]) -> Self {
        let mut tallies: BTreeMap<&str, MatchTally> = BTreeMap::new();

        for e in events {
            let Some(player) = e.player() else {
                continue;
            };
            let tally = tallies.entry(player).or_insert_with(|| MatchTally {
                team: &e.event.team,
                ..Default::default()
            });
            tally.last_minute = tally.last_minute.max(e.event.minute);
            if e.in_context() {
                tally.context_minutes.insert(e.event.minute);
            }
        }

        for (player, tally) in tallies {
            let entry = self
                .players
                .entry(player.to_string())
                .or_insert_with(|| PlayerMinutes {
                    team: tally.team.to_string(),
                    ..Default::default()
                });
            entry.total += tally.last_minute;
            entry.context += tally.context_minutes.len() as u32;
        }

        self
    }

    pub fn get(&self, player: &str) -> Option<&PlayerMinutes> {
        self.players.get(player)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerMinutes)> {
        self.players.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
