use std::collections::{BTreeMap, HashSet};

use crate::config::{
    DANGER_PASS_WEIGHT, MAX_CIRCLE_SIZE, MIN_CIRCLE_SIZE, MIN_MINUTES, TARGET_PLAYER, TOP_QUANTILE,
};

use super::PlayingTime;

/// One qualifying midfielder
#[derive(Debug, Clone, PartialEq)]
pub struct KpiRow {
    pub player: String,
    pub team: String,
    pub team_code: String,
    pub minutes_total: u32,
    pub minutes_context: u32,
    pub danger_passes: u32,
    pub interceptions: u32,
    pub dp_per90: f64,
    pub int_per90: f64,
    pub kpi: f64,
    pub kpi_weighted: f64,
    /// Marker area for the scatter plot
    pub circle_size: f64,
    pub is_target: bool,
    pub is_top5: bool,
}

impl KpiRow {
    /// "Name (TEAM)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.player, self.team_code)
    }
}

/// Qualifying midfielders ordered by weighted KPI, best first
#[derive(Debug, Clone, Default)]
pub struct KpiTable {
    rows: Vec<KpiRow>,
}

pub fn per90(count: u32, minutes: u32) -> f64 {
    f64::from(count) / (f64::from(minutes) / 90.0)
}

/// Raw composite: danger passes count 20% more than interceptions
pub fn composite_kpi(dp_per90: f64, int_per90: f64) -> f64 {
    dp_per90 * DANGER_PASS_WEIGHT + int_per90
}

/// Scale a per-90 composite by sqrt(minutes / 90) so small samples rank lower
pub fn weight_by_minutes(kpi: f64, minutes: u32) -> f64 {
    kpi * (f64::from(minutes) / 90.0).sqrt()
}

/// Quantile with linear interpolation between closest ranks
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Map `value` from [min, max] onto the marker size range
///
/// A degenerate range maps everything to the middle of the size range.
pub fn circle_size(value: f64, min: f64, max: f64) -> f64 {
    let spread = max - min;
    if spread.abs() < f64::EPSILON {
        return (MIN_CIRCLE_SIZE + MAX_CIRCLE_SIZE) / 2.0;
    }
    (value - min) / spread * (MAX_CIRCLE_SIZE - MIN_CIRCLE_SIZE) + MIN_CIRCLE_SIZE
}

pub fn team_code(team: &str) -> String {
    team.chars().take(3).collect::<String>().to_uppercase()
}

pub fn is_target_player(player: &str) -> bool {
    player
        .to_lowercase()
        .contains(&TARGET_PLAYER.to_lowercase())
}

/// Join playing time with event counts and keep qualifying midfielders
pub fn build_kpi_table(
    playing_time: &PlayingTime,
    danger_passes: &BTreeMap<String, u32>,
    interceptions: &BTreeMap<String, u32>,
    midfielders: &HashSet<String>,
) -> KpiTable {
    let mut rows: Vec<KpiRow> = playing_time
        .iter()
        .filter_map(|(player, minutes)| {
            let dp = danger_passes.get(player).copied().unwrap_or(0);
            let int = interceptions.get(player).copied().unwrap_or(0);

            let qualifies = minutes.total >= MIN_MINUTES
                && dp > 0
                && int > 0
                && midfielders.contains(player);
            if !qualifies {
                return None;
            }

            let dp_per90 = per90(dp, minutes.total);
            let int_per90 = per90(int, minutes.total);
            let kpi = composite_kpi(dp_per90, int_per90);

            Some(KpiRow {
                player: player.to_string(),
                team: minutes.team.clone(),
                team_code: team_code(&minutes.team),
                minutes_total: minutes.total,
                minutes_context: minutes.context,
                danger_passes: dp,
                interceptions: int,
                dp_per90,
                int_per90,
                kpi,
                kpi_weighted: weight_by_minutes(kpi, minutes.total),
                circle_size: 0.0,
                is_target: is_target_player(player),
                is_top5: false,
            })
        })
        .collect();

    let weighted: Vec<f64> = rows.iter().map(|r| r.kpi_weighted).collect();
    if let Some(threshold) = quantile(&weighted, TOP_QUANTILE) {
        let (min, max) = min_max(&weighted);
        for row in &mut rows {
            row.circle_size = circle_size(row.kpi_weighted, min, max);
            row.is_top5 = row.kpi_weighted >= threshold;
        }
    }

    rows.sort_by(|a, b| {
        b.kpi_weighted
            .total_cmp(&a.kpi_weighted)
            .then_with(|| a.player.cmp(&b.player))
    });

    KpiTable { rows }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        })
}

impl KpiTable {
    #[cfg(test)]
    pub(crate) fn from_rows(mut rows: Vec<KpiRow>) -> Self {
        rows.sort_by(|a, b| b.kpi_weighted.total_cmp(&a.kpi_weighted));
        Self { rows }
    }

    pub fn rows(&self) -> &[KpiRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The best `n` rows
    pub fn top(&self, n: usize) -> &[KpiRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn get(&self, player: &str) -> Option<&KpiRow> {
        self.rows.iter().find(|r| r.player == player)
    }

    pub fn targets(&self) -> impl Iterator<Item = &KpiRow> {
        self.rows.iter().filter(|r| r.is_target)
    }

    /// (min, max) of the weighted KPI
    pub fn kpi_range(&self) -> Option<(f64, f64)> {
        if self.rows.is_empty() {
            return None;
        }
        let weighted: Vec<f64> = self.rows.iter().map(|r| r.kpi_weighted).collect();
        Some(min_max(&weighted))
    }

    pub fn max_dp_per90(&self) -> f64 {
        self.rows.iter().map(|r| r.dp_per90).fold(0.0, f64::max)
    }

    pub fn max_int_per90(&self) -> f64 {
        self.rows.iter().map(|r| r.int_per90).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnnotatedEvent, Event, EventKind, MatchState, Score, Side};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    fn playing_time(entries: &[(&str, &str, u32)]) -> PlayingTime {
        // one event at the player's last minute gives exactly that many minutes
        let events: Vec<AnnotatedEvent> = entries
            .iter()
            .map(|(player, team, minute)| AnnotatedEvent {
                match_id: 1,
                event: Event {
                    index: 0,
                    period: 2,
                    minute: *minute,
                    second: 0,
                    kind: EventKind::Other("Carry".into()),
                    team: team.to_string(),
                    possession_team: team.to_string(),
                    player: Some(player.to_string()),
                    position: None,
                },
                score: Score::default(),
                possession_side: Side::Home,
                state: MatchState::Drawing,
            })
            .collect();
        PlayingTime::new().fold_match(&events)
    }

    fn counts(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
        entries.iter().map(|(p, c)| (p.to_string(), *c)).collect()
    }

    fn mids(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_worked_example() {
        let time = playing_time(&[("Federico Valverde", "Uruguay", 90)]);
        let table = build_kpi_table(
            &time,
            &counts(&[("Federico Valverde", 3)]),
            &counts(&[("Federico Valverde", 2)]),
            &mids(&["Federico Valverde"]),
        );

        let row = &table.rows()[0];
        assert_close(row.dp_per90, 3.0);
        assert_close(row.int_per90, 2.0);
        assert_close(row.kpi, 5.6);
        assert_close(row.kpi_weighted, 5.6);
        assert_eq!(row.team_code, "URU");
        assert!(row.is_target);
        assert!(row.is_top5);
        // single row: no spread
        assert_close(row.circle_size, 220.0);
    }

    #[test]
    fn test_qualification_filters() {
        let time = playing_time(&[
            ("Short Stint", "Peru", 39),
            ("No Danger", "Peru", 90),
            ("No Interceptions", "Peru", 90),
            ("Centre Back", "Peru", 90),
            ("Qualifies", "Peru", 40),
        ]);
        let table = build_kpi_table(
            &time,
            &counts(&[
                ("Short Stint", 2),
                ("No Interceptions", 2),
                ("Centre Back", 2),
                ("Qualifies", 1),
            ]),
            &counts(&[
                ("Short Stint", 2),
                ("No Danger", 2),
                ("Centre Back", 2),
                ("Qualifies", 1),
            ]),
            &mids(&["Short Stint", "No Danger", "No Interceptions", "Qualifies"]),
        );

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].player, "Qualifies");
    }

    #[test]
    fn test_sizes_and_top5() {
        let time = playing_time(&[
            ("A", "Argentina", 90),
            ("B", "Brazil", 90),
            ("C", "Chile", 90),
        ]);
        let table = build_kpi_table(
            &time,
            &counts(&[("A", 1), ("B", 2), ("C", 4)]),
            &counts(&[("A", 1), ("B", 1), ("C", 1)]),
            &mids(&["A", "B", "C"]),
        );

        let order: Vec<&str> = table.rows().iter().map(|r| r.player.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);

        assert_close(table.get("C").unwrap().circle_size, MAX_CIRCLE_SIZE);
        assert_close(table.get("A").unwrap().circle_size, MIN_CIRCLE_SIZE);
        assert!(table.get("C").unwrap().is_top5);
        assert!(!table.get("B").unwrap().is_top5);
        let (min, max) = table.kpi_range().unwrap();
        assert_close(min, 2.2);
        assert_close(max, 5.8);
    }

    #[test]
    fn test_quantile() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[3.0], 0.95), Some(3.0));
        assert_close(quantile(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.5).unwrap(), 3.0);
        assert_close(quantile(&[5.0, 1.0, 2.0], 0.95).unwrap(), 4.7);
    }

    #[test]
    fn test_weighting_is_monotone() {
        assert!(composite_kpi(2.0, 1.0) > composite_kpi(1.0, 1.0));
        assert!(composite_kpi(1.0, 2.0) > composite_kpi(1.0, 1.0));
        assert!(weight_by_minutes(3.0, 180) > weight_by_minutes(3.0, 90));
        assert_close(weight_by_minutes(3.0, 90), 3.0);
    }

    #[test]
    fn test_team_code() {
        assert_eq!(team_code("Uruguay"), "URU");
        assert_eq!(team_code("Perú"), "PER");
        assert_eq!(team_code("Ab"), "AB");
    }

    #[test]
    fn test_target_player_match() {
        assert!(is_target_player("Federico Santiago Valverde Dipetta"));
        assert!(is_target_player("VALVERDE"));
        assert!(!is_target_player("Manuel Ugarte"));
    }

    #[test]
    fn test_top() {
        let table = KpiTable::default();
        assert!(table.top(10).is_empty());
        assert_eq!(table.kpi_range(), None);
    }
}
