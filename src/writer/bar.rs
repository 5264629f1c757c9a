use anyhow::{bail, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use super::style::{canvas_size, pt, pt_px, team_color, text_style, AXIS_INK, FONT, GRID};
use crate::analysis::KpiTable;
use crate::config::TOP_N;

const TITLE: &str = "Top 10 Midfielders by Weighted KPI – Copa América 2024";
const X_DESC: &str = "Weighted KPI (danger passes & interceptions per 90 min adjusted)";

/// Fraction of a row taken by its bar
const BAR_HEIGHT: f64 = 0.6;

/// Vertical band of row `rank` (0 = best) when `n` rows are stacked top-down
pub fn bar_band(rank: usize, n: usize) -> (f64, f64) {
    let top = (n - rank) as f64;
    let pad = (1.0 - BAR_HEIGHT) / 2.0;
    (top - 1.0 + pad, top - pad)
}

/// Horizontal bars of the best weighted KPIs, best on top
pub fn render_top_bars(table: &KpiTable, path: &Path) -> Result<()> {
    let top = table.top(TOP_N);
    let Some(best) = top.first() else {
        bail!("No qualifying midfielders to rank");
    };
    let n = top.len();

    let root = BitMapBackend::new(path, canvas_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, text_style(16.0, true))
        .margin(pt_px(12.0))
        .x_label_area_size(pt_px(36.0))
        .y_label_area_size(pt_px(230.0))
        .build_cartesian_2d(0f64..best.kpi_weighted + 0.5, 0f64..n as f64)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc(X_DESC)
        .axis_desc_style(text_style(13.0, false))
        .x_label_style((FONT, pt(10.0)).into_font().color(&AXIS_INK))
        .bold_line_style(GRID.mix(0.6).stroke_width(pt_px(0.6)))
        .light_line_style(WHITE.stroke_width(0))
        .axis_style(GRID.stroke_width(pt_px(0.8)))
        .draw()?;

    chart.draw_series(top.iter().enumerate().map(|(rank, r)| {
        let (y0, y1) = bar_band(rank, n);
        Rectangle::new(
            [(0.0, y0), (r.kpi_weighted, y1)],
            team_color(&r.team_code).filled(),
        )
    }))?;

    let value_style = text_style(10.0, false).pos(Pos::new(HPos::Left, VPos::Center));
    chart.draw_series(top.iter().enumerate().map(|(rank, r)| {
        let (y0, y1) = bar_band(rank, n);
        Text::new(
            format!("{:.2}", r.kpi_weighted),
            (r.kpi_weighted + 0.05, (y0 + y1) / 2.0),
            value_style.clone(),
        )
    }))?;

    // row labels sit left of the plotting area, outside chart coordinates
    let name_style = (FONT, pt(11.0))
        .into_font()
        .color(&AXIS_INK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    let gap = pt_px(6.0) as i32;
    for (rank, r) in top.iter().enumerate() {
        let (y0, y1) = bar_band(rank, n);
        let (x, y) = chart.backend_coord(&(0.0, (y0 + y1) / 2.0));
        root.draw(&Text::new(r.label(), (x - gap, y), name_style.clone()))?;
    }

    root.present()?;
    Ok(())
}
