use std::collections::BTreeMap;

use crate::config::{LOOKBACK_SECONDS, MIN_SHOT_XG, PERIOD_SECONDS, REGULATION_PERIODS};
use crate::model::AnnotatedEvent;

use super::AnnotatedMatch;

/// Open interval of match clock seconds before a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotWindow {
    pub start: u32,
    pub end: u32,
}

impl ShotWindow {
    /// Window ending at a shot, clipped to the start of its period
    pub fn before_shot(shot_seconds: u32, period: u8) -> Self {
        let period_start = u32::from(period.saturating_sub(1)) * PERIOD_SECONDS;
        let start = shot_seconds
            .saturating_sub(LOOKBACK_SECONDS)
            .max(period_start);
        Self {
            start,
            end: shot_seconds,
        }
    }

    pub fn contains(&self, seconds: u32) -> bool {
        self.start < seconds && seconds < self.end
    }
}

/// Completed open-play passes made shortly before a good shot while behind or level
///
/// Checked per regulation period. A pass qualifies if any shot's window holds
/// it; the shot may come from either team.
pub fn danger_passes(events: &[AnnotatedEvent]) -> Vec<&AnnotatedEvent> {
    let mut found = Vec::new();

    for period in REGULATION_PERIODS {
        let windows: Vec<ShotWindow> = in_context_period(events, period)
            .filter(|e| e.event.is_shot_with_xg(MIN_SHOT_XG))
            .map(|e| ShotWindow::before_shot(e.event.clock_seconds(), period))
            .collect();

        if windows.is_empty() {
            continue;
        }

        found.extend(in_context_period(events, period).filter(|e| {
            e.event.is_regular_completed_pass() && {
                let t = e.event.clock_seconds();
                windows.iter().any(|w| w.contains(t))
            }
        }));
    }

    found
}

fn in_context_period(
    events: &[AnnotatedEvent],
    period: u8,
) -> impl Iterator<Item = &AnnotatedEvent> {
    events
        .iter()
        .filter(move |e| e.event.period == period && e.in_context())
}

/// Danger passes per player over all matches
pub fn count_danger_passes(matches: &[AnnotatedMatch]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for m in matches {
        for e in danger_passes(&m.events) {
            if let Some(player) = e.player() {
                *counts.entry(player.to_string()).or_insert(0) += 1;
            }
        }
    }
    counts
}
