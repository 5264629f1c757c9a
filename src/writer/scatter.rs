use anyhow::{bail, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use super::style::{
    canvas_size, marker_fill, marker_outline, marker_radius, pt, pt_px, size_legend,
    text_style, AXIS_INK, FONT, GRID, LEGEND, PANEL,
};
use crate::analysis::KpiTable;

const TITLE: &str = "Weighted KPI – Midfielders, Copa América 2024";
const X_DESC: &str = "Danger passes per 90 min (xG ≥ 0.07)";
const Y_DESC: &str = "Interceptions per 90 min";

/// Danger passes vs interceptions per 90, marker area by weighted KPI
pub fn render_scatter(table: &KpiTable, path: &Path) -> Result<()> {
    if table.is_empty() {
        bail!("No qualifying midfielders to plot");
    }

    let root = BitMapBackend::new(path, canvas_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = table.max_dp_per90() + 0.5;
    let y_max = table.max_int_per90() + 0.6;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, text_style(16.0, true))
        .margin(pt_px(12.0))
        .x_label_area_size(pt_px(40.0))
        .y_label_area_size(pt_px(48.0))
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart.plotting_area().fill(&PANEL)?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .axis_desc_style(text_style(13.0, false))
        .label_style((FONT, pt(11.0)).into_font().color(&AXIS_INK))
        .bold_line_style(GRID.mix(0.5).stroke_width(pt_px(0.6)))
        .light_line_style(PANEL.stroke_width(0))
        .axis_style(GRID.stroke_width(pt_px(0.8)))
        .draw()?;

    let rows = table.rows();

    chart.draw_series(rows.iter().map(|r| {
        Circle::new(
            (r.dp_per90, r.int_per90),
            marker_radius(r.circle_size),
            marker_fill(r),
        )
    }))?;

    chart.draw_series(rows.iter().map(|r| {
        Circle::new(
            (r.dp_per90, r.int_per90),
            marker_radius(r.circle_size),
            marker_outline(r),
        )
    }))?;

    let label_style = text_style(10.0, true).pos(Pos::new(HPos::Left, VPos::Center));
    chart.draw_series(
        rows.iter()
            .filter(|r| r.is_top5)
            .map(|r| Text::new(r.label(), (r.dp_per90 + 0.05, r.int_per90), label_style.clone())),
    )?;

    let legend = size_legend(table);
    let legend_text = (FONT, pt(9.0))
        .into_font()
        .color(&LEGEND)
        .pos(Pos::new(HPos::Left, VPos::Center));

    chart.draw_series(legend.iter().map(|e| {
        Circle::new(
            (e.x, e.y),
            marker_radius(e.size),
            LEGEND.stroke_width(pt_px(1.0)),
        )
    }))?;
    chart.draw_series(
        legend
            .iter()
            .filter(|e| !e.label.is_empty())
            .map(|e| Text::new(e.label, (e.x + 0.3, e.y), legend_text.clone())),
    )?;

    root.present()?;
    Ok(())
}
