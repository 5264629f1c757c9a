use std::cmp::Ordering;

use super::Event;

/// Game state of a team at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    Winning,
    Drawing,
    Losing,
}

impl MatchState {
    pub fn from_goals(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => MatchState::Winning,
            Ordering::Equal => MatchState::Drawing,
            Ordering::Less => MatchState::Losing,
        }
    }

    /// State of the other team at the same moment
    pub fn opposite(self) -> Self {
        match self {
            MatchState::Winning => MatchState::Losing,
            MatchState::Drawing => MatchState::Drawing,
            MatchState::Losing => MatchState::Winning,
        }
    }

    /// Drawing or losing
    pub fn is_behind_or_level(self) -> bool {
        !matches!(self, MatchState::Winning)
    }
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchState::Winning => write!(f, "Winning"),
            MatchState::Drawing => write!(f, "Drawing"),
            MatchState::Losing => write!(f, "Losing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Running goal tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn add_goal(&mut self, side: Side) {
        match side {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
    }

    pub fn state_for(&self, side: Side) -> MatchState {
        match side {
            Side::Home => MatchState::from_goals(self.home, self.away),
            Side::Away => MatchState::from_goals(self.away, self.home),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// An event labelled with the score entering it and the possession team's state
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedEvent {
    pub match_id: u64,
    pub event: Event,
    pub score: Score,
    pub possession_side: Side,
    pub state: MatchState,
}

impl AnnotatedEvent {
    pub fn player(&self) -> Option<&str> {
        self.event.player.as_deref()
    }

    pub fn in_context(&self) -> bool {
        self.state.is_behind_or_level()
    }
}
