use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Competition;
use crate::download::{events_path, matches_path};
use crate::model::{Event, Match};
use crate::parser::{parse_events, parse_matches};
use crate::ui::Ui;

/// Provider of fixtures and their event feeds
pub trait EventSource {
    fn matches(&self, competition: Competition) -> Result<Vec<Match>>;
    fn events(&self, match_id: u64) -> Result<Vec<Event>>;
}

/// A directory in open-data layout (`matches/<comp>/<season>.json`, `events/<id>.json`)
pub struct LocalDataset {
    root: PathBuf,
}

impl LocalDataset {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl EventSource for LocalDataset {
    fn matches(&self, competition: Competition) -> Result<Vec<Match>> {
        let path = matches_path(&self.root, competition);
        let json =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
        parse_matches(&json).with_context(|| format!("Invalid match list {:?}", path))
    }

    fn events(&self, match_id: u64) -> Result<Vec<Event>> {
        let path = events_path(&self.root, match_id);
        let json =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
        parse_events(&json).with_context(|| format!("Invalid event file {:?}", path))
    }
}

/// A fixture with its events in chronological order
#[derive(Debug, Clone)]
pub struct MatchEvents {
    pub fixture: Match,
    pub events: Vec<Event>,
}

/// Sort by period, minute, second; feed index breaks ties
pub fn sort_chronologically(events: &mut [Event]) {
    events.sort_by_key(|e| e.order_key());
}

/// Load every match of a competition, skipping matches without events
pub fn load_competition(
    source: &impl EventSource,
    competition: Competition,
    ui: &mut impl Ui,
) -> Result<Vec<MatchEvents>> {
    let fixtures = source.matches(competition)?;
    let total = fixtures.len() as u64;
    let mut loaded = Vec::with_capacity(fixtures.len());

    for (i, fixture) in fixtures.into_iter().enumerate() {
        ui.set_progress(
            i as u64,
            total,
            format!("{} v {}", fixture.home_team, fixture.away_team),
        );

        let mut events = source
            .events(fixture.id)
            .with_context(|| format!("Failed to load events of match {}", fixture.id))?;

        if events.is_empty() {
            ui.log(format!("Match {} has no events, skipped", fixture.id));
            continue;
        }

        sort_chronologically(&mut events);
        debug!(match_id = fixture.id, events = events.len(), "loaded");
        loaded.push(MatchEvents { fixture, events });
    }

    ui.clear_progress();
    Ok(loaded)
}
