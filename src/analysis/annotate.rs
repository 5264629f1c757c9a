use tracing::warn;

use crate::config::SHOOTOUT_PERIOD;
use crate::loader::MatchEvents;
use crate::model::{AnnotatedEvent, Match, Score, Side};

/// A fixture with its annotated events and the tally after the last one
#[derive(Debug, Clone)]
pub struct AnnotatedMatch {
    pub fixture: Match,
    pub events: Vec<AnnotatedEvent>,
    pub final_score: Score,
}

fn side_of(fixture: &Match, team: &str) -> Side {
    if team == fixture.home_team {
        Side::Home
    } else {
        Side::Away
    }
}

/// Label each event with the running score and the possession team's state
///
/// Events must already be in chronological order. The score attached to an
/// event is the tally after it, so a goal already counts on its own row.
/// Shoot-out goals leave the score untouched.
pub fn annotate_match(match_events: MatchEvents) -> AnnotatedMatch {
    let MatchEvents { fixture, events } = match_events;
    let mut score = Score::default();
    let mut annotated = Vec::with_capacity(events.len());

    for event in events {
        let credited = event
            .goal_credit()
            .filter(|_| event.period < SHOOTOUT_PERIOD)
            .map(|team| side_of(&fixture, team));
        if let Some(side) = credited {
            score.add_goal(side);
        }

        let possession_side = side_of(&fixture, &event.possession_team);
        annotated.push(AnnotatedEvent {
            match_id: fixture.id,
            event,
            score,
            possession_side,
            state: score.state_for(possession_side),
        });
    }

    if let Some((home, away)) = fixture.reported_score {
        if (score.home, score.away) != (home, away) {
            warn!(
                match_id = fixture.id,
                computed = %score,
                reported = %Score::new(home, away),
                "running score disagrees with the published result"
            );
        }
    }

    AnnotatedMatch {
        fixture,
        events: annotated,
        final_score: score,
    }
}
