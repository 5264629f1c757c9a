use anyhow::{bail, Result};
use std::path::Path;

use crate::analysis::{
    annotate_match, build_kpi_table, count_danger_passes, count_interceptions, AnnotatedMatch,
    KpiTable, PlayingTime,
};
use crate::config::Competition;
use crate::filter::resolve_midfielders;
use crate::loader::{load_competition, EventSource};
use crate::ui::{Phase, Ui};
use crate::writer::{render_charts, RenderedCharts};

/// Result of scoring a competition
#[derive(Debug, Clone)]
pub struct Analysis {
    pub matches: usize,
    pub events: usize,
    pub players: usize,
    pub table: KpiTable,
}

impl Analysis {
    /// Short multi-line report for the terminal
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} matches, {} events, {} players; {} qualifying midfielders",
            self.matches,
            self.events,
            self.players,
            self.table.len()
        );
        for (rank, row) in self.table.top(5).iter().enumerate() {
            out.push_str(&format!(
                "\n  {:>2}. {:<32} {:>6.2}",
                rank + 1,
                row.label(),
                row.kpi_weighted
            ));
        }
        for row in self.table.targets() {
            out.push_str(&format!(
                "\n  {}: weighted KPI {:.2} ({} danger passes, {} interceptions in {} min){}",
                row.player,
                row.kpi_weighted,
                row.danger_passes,
                row.interceptions,
                row.minutes_total,
                if row.is_top5 { ", top 5%" } else { "" }
            ));
        }
        out
    }
}

/// Load, annotate and score every match of a competition
pub fn analyze(
    source: &impl EventSource,
    competition: Competition,
    ui: &mut impl Ui,
) -> Result<Analysis> {
    ui.set_phase(Phase::Loading);
    ui.set_info(format!("Competition {}", competition));
    let loaded = load_competition(source, competition, ui)?;
    if loaded.is_empty() {
        bail!("No match events found for competition {}", competition);
    }

    ui.set_phase(Phase::Annotating);
    let mut playing_time = PlayingTime::new();
    let mut annotated: Vec<AnnotatedMatch> = Vec::with_capacity(loaded.len());
    for match_events in loaded {
        let m = annotate_match(match_events);
        playing_time = playing_time.fold_match(&m.events);
        annotated.push(m);
    }
    let events: usize = annotated.iter().map(|m| m.events.len()).sum();
    ui.log(format!(
        "Annotated {} events across {} matches",
        events,
        annotated.len()
    ));

    ui.set_phase(Phase::Scoring);
    let midfielders = resolve_midfielders(&annotated);
    let danger = count_danger_passes(&annotated);
    let interceptions = count_interceptions(&annotated);
    ui.log(format!(
        "{} danger passes, {} interceptions while behind or level",
        danger.values().sum::<u32>(),
        interceptions.values().sum::<u32>()
    ));

    let table = build_kpi_table(&playing_time, &danger, &interceptions, &midfielders);
    ui.log(format!("{} midfielders qualify", table.len()));

    Ok(Analysis {
        matches: annotated.len(),
        events,
        players: playing_time.len(),
        table,
    })
}

/// Analyze a competition and write both charts
pub fn run(
    source: &impl EventSource,
    competition: Competition,
    output_dir: &Path,
    ui: &mut impl Ui,
) -> Result<(Analysis, RenderedCharts)> {
    let analysis = analyze(source, competition, ui)?;

    ui.set_phase(Phase::Rendering);
    let charts = render_charts(&analysis.table, output_dir)?;
    ui.log(format!("Wrote {}", charts.scatter.display()));
    ui.log(format!("Wrote {}", charts.bar_chart.display()));

    ui.set_phase(Phase::Complete);
    Ok((analysis, charts))
}
