use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::model::{Event, EventKind, PassKind, PassOutcome, ShotOutcome};

/// `{"id": .., "name": ..}` objects used throughout the feed
#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawPass {
    outcome: Option<Named>,
    #[serde(rename = "type")]
    kind: Option<Named>,
}

#[derive(Debug, Deserialize)]
struct RawShot {
    statsbomb_xg: Option<f64>,
    outcome: Option<Named>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    index: u64,
    period: u8,
    minute: u32,
    second: u32,
    #[serde(rename = "type")]
    kind: Named,
    team: Named,
    possession_team: Named,
    player: Option<Named>,
    position: Option<Named>,
    pass: Option<RawPass>,
    shot: Option<RawShot>,
}

/// Parse a match event file (a JSON array of events)
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let raw: Vec<RawEvent> = serde_json::from_str(json).context("Failed to parse event JSON")?;

    raw.into_iter()
        .map(|r| {
            let index = r.index;
            convert_event(r).with_context(|| format!("Invalid event at index {}", index))
        })
        .collect()
}

fn convert_event(raw: RawEvent) -> Result<Event> {
    let kind = match raw.kind.name.as_str() {
        "Pass" => {
            let Some(pass) = raw.pass else {
                bail!("Pass event without pass details");
            };
            EventKind::Pass {
                outcome: match pass.outcome {
                    None => PassOutcome::Completed,
                    Some(o) => PassOutcome::Failed(o.name),
                },
                kind: match pass.kind {
                    None => PassKind::Regular,
                    Some(k) => PassKind::Special(k.name),
                },
            }
        }
        "Shot" => {
            let Some(shot) = raw.shot else {
                bail!("Shot event without shot details");
            };
            EventKind::Shot {
                xg: shot.statsbomb_xg,
                outcome: match shot.outcome {
                    Some(o) if o.name == "Goal" => ShotOutcome::Goal,
                    Some(o) => ShotOutcome::Other(o.name),
                    None => bail!("Shot event without outcome"),
                },
            }
        }
        "Interception" => EventKind::Interception,
        "Own Goal For" => EventKind::OwnGoalFor,
        _ => EventKind::Other(raw.kind.name),
    };

    Ok(Event {
        index: raw.index,
        period: raw.period,
        minute: raw.minute,
        second: raw.second,
        kind,
        team: raw.team.name,
        possession_team: raw.possession_team.name,
        player: raw.player.map(|p| p.name),
        position: raw.position.map(|p| p.name),
    })
}
