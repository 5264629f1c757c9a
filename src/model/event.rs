/// One fixture of the competition
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: u64,
    pub home_team: String,
    pub away_team: String,
    pub date: Option<String>,
    /// Final score as published with the match list
    pub reported_score: Option<(u32, u32)>,
}

impl Match {
    pub fn new(id: u64, home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            id,
            home_team: home_team.into(),
            away_team: away_team.into(),
            date: None,
            reported_score: None,
        }
    }
}

/// Result of a pass
#[derive(Debug, Clone, PartialEq)]
pub enum PassOutcome {
    Completed,
    /// Incomplete, Out, Pass Offside, Unknown, ...
    Failed(String),
}

/// Pass technique; anything other than a regular open-play pass is special
#[derive(Debug, Clone, PartialEq)]
pub enum PassKind {
    Regular,
    /// Corner, Free Kick, Throw-in, Goal Kick, Kick Off, Recovery, Interception
    Special(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShotOutcome {
    Goal,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Pass {
        outcome: PassOutcome,
        kind: PassKind,
    },
    Shot {
        xg: Option<f64>,
        outcome: ShotOutcome,
    },
    Interception,
    OwnGoalFor,
    Other(String),
}

impl EventKind {
    /// Feed name of the event type
    pub fn type_name(&self) -> &str {
        match self {
            EventKind::Pass { .. } => "Pass",
            EventKind::Shot { .. } => "Shot",
            EventKind::Interception => "Interception",
            EventKind::OwnGoalFor => "Own Goal For",
            EventKind::Other(name) => name,
        }
    }
}

/// A single on-ball action from the event feed
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Position in the feed, used to break ties between simultaneous events
    pub index: u64,
    pub period: u8,
    pub minute: u32,
    pub second: u32,
    pub kind: EventKind,
    pub team: String,
    pub possession_team: String,
    pub player: Option<String>,
    pub position: Option<String>,
}

impl Event {
    /// Absolute match clock in seconds
    pub fn clock_seconds(&self) -> u32 {
        self.minute * 60 + self.second
    }

    /// Team credited with a goal by this event, if any
    pub fn goal_credit(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Shot {
                outcome: ShotOutcome::Goal,
                ..
            }
            | EventKind::OwnGoalFor => Some(&self.team),
            _ => None,
        }
    }

    /// A completed open-play pass
    pub fn is_regular_completed_pass(&self) -> bool {
        matches!(
            self.kind,
            EventKind::Pass {
                outcome: PassOutcome::Completed,
                kind: PassKind::Regular,
            }
        )
    }

    /// A shot at or above the given expected-goals value
    pub fn is_shot_with_xg(&self, min_xg: f64) -> bool {
        match self.kind {
            EventKind::Shot { xg: Some(xg), .. } => xg >= min_xg,
            _ => false,
        }
    }

    pub fn is_interception(&self) -> bool {
        matches!(self.kind, EventKind::Interception)
    }

    /// Chronological sort key
    pub fn order_key(&self) -> (u8, u32, u32, u64) {
        (self.period, self.minute, self.second, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: EventKind) -> Event {
        Event {
            index: 1,
            period: 1,
            minute: 1,
            second: 40,
            kind,
            team: "Uruguay".into(),
            possession_team: "Uruguay".into(),
            player: Some("Federico Valverde".into()),
            position: Some("Right Center Midfield".into()),
        }
    }

    #[test]
    fn test_clock_seconds() {
        let e = event(EventKind::Interception);
        assert_eq!(e.clock_seconds(), 100);
    }

    #[test]
    fn test_goal_credit() {
        let goal = event(EventKind::Shot {
            xg: Some(0.4),
            outcome: ShotOutcome::Goal,
        });
        assert_eq!(goal.goal_credit(), Some("Uruguay"));

        let saved = event(EventKind::Shot {
            xg: Some(0.4),
            outcome: ShotOutcome::Other("Saved".into()),
        });
        assert_eq!(saved.goal_credit(), None);

        assert_eq!(event(EventKind::OwnGoalFor).goal_credit(), Some("Uruguay"));
    }

    #[test]
    fn test_pass_classification() {
        let completed = event(EventKind::Pass {
            outcome: PassOutcome::Completed,
            kind: PassKind::Regular,
        });
        assert!(completed.is_regular_completed_pass());

        let corner = event(EventKind::Pass {
            outcome: PassOutcome::Completed,
            kind: PassKind::Special("Corner".into()),
        });
        assert!(!corner.is_regular_completed_pass());

        let incomplete = event(EventKind::Pass {
            outcome: PassOutcome::Failed("Incomplete".into()),
            kind: PassKind::Regular,
        });
        assert!(!incomplete.is_regular_completed_pass());
    }

    #[test]
    fn test_shot_xg_threshold_is_inclusive() {
        let shot = event(EventKind::Shot {
            xg: Some(0.07),
            outcome: ShotOutcome::Other("Saved".into()),
        });
        assert!(shot.is_shot_with_xg(0.07));
        assert!(!shot.is_shot_with_xg(0.08));

        let no_xg = event(EventKind::Shot {
            xg: None,
            outcome: ShotOutcome::Other("Blocked".into()),
        });
        assert!(!no_xg.is_shot_with_xg(0.0));
    }
}
