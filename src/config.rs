//! Fixed analysis parameters.
//!
//! Only input/output locations are taken from the command line; everything
//! that shapes the metric lives here.

/// A StatsBomb competition season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Competition {
    pub competition_id: u32,
    pub season_id: u32,
}

impl Competition {
    pub const fn new(competition_id: u32, season_id: u32) -> Self {
        Self {
            competition_id,
            season_id,
        }
    }
}

impl std::fmt::Display for Competition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.competition_id, self.season_id)
    }
}

pub const COPA_AMERICA_2024: Competition = Competition::new(223, 282);

/// Shots below this expected-goals value never open a danger window
pub const MIN_SHOT_XG: f64 = 0.07;

/// Seconds before a shot in which a pass counts as a danger pass
pub const LOOKBACK_SECONDS: u32 = 15;

/// Nominal half length used to clip windows at the period start
pub const PERIOD_SECONDS: u32 = 45 * 60;

/// Periods scanned for danger passes
pub const REGULATION_PERIODS: [u8; 2] = [1, 2];

/// Goals scored in this period (penalty shoot-out) leave the score untouched
pub const SHOOTOUT_PERIOD: u8 = 5;

pub const MIN_MINUTES: u32 = 40;
pub const DANGER_PASS_WEIGHT: f64 = 1.2;
pub const TOP_QUANTILE: f64 = 0.95;

pub const MIN_CIRCLE_SIZE: f64 = 40.0;
pub const MAX_CIRCLE_SIZE: f64 = 400.0;

pub const MIDFIELD_KEYWORDS: &[&str] = &["Midfield", "midfield"];

/// Highlighted player, matched case-insensitively as a substring
pub const TARGET_PLAYER: &str = "Valverde";

/// Team code whose markers get the highlight colour
pub const HIGHLIGHT_TEAM_CODE: &str = "URU";

pub const SCATTER_FILE: &str = "weighted_kpi_midfielders_copa2024.png";
pub const BAR_CHART_FILE: &str = "top10_weighted_kpi_midfielders_copa2024.png";

pub const DPI: u32 = 300;
/// Figure size in inches
pub const FIGURE_SIZE: (f64, f64) = (14.0, 7.0);

pub const TOP_N: usize = 10;
