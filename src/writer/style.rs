//! Shared chart styling and the geometry helpers behind it
//!
//! Sizes are specified in typographic points, as in print figures, and
//! converted to pixels at [`DPI`].

use plotters::style::{Color, FontStyle, IntoFont, RGBColor, ShapeStyle, TextStyle};

use crate::analysis::{circle_size, KpiRow, KpiTable};
use crate::config::{DPI, FIGURE_SIZE, HIGHLIGHT_TEAM_CODE};

pub const FONT: &str = "sans-serif";

pub const HIGHLIGHT: RGBColor = RGBColor(0x78, 0xB7, 0xE5);
pub const MUTED: RGBColor = RGBColor(0xB0, 0xBE, 0xC5);
pub const GOLD: RGBColor = RGBColor(0xFF, 0xD7, 0x00);
pub const INK: RGBColor = RGBColor(0x21, 0x21, 0x21);
pub const AXIS_INK: RGBColor = RGBColor(0x44, 0x44, 0x44);
pub const PANEL: RGBColor = RGBColor(0xFA, 0xFA, 0xFA);
pub const GRID: RGBColor = RGBColor(0xCC, 0xCC, 0xCC);
pub const LEGEND: RGBColor = RGBColor(0x80, 0x80, 0x80);

pub const MARKER_ALPHA: f64 = 0.85;

/// Pixel size of the output image
pub fn canvas_size() -> (u32, u32) {
    (
        (FIGURE_SIZE.0 * DPI as f64).round() as u32,
        (FIGURE_SIZE.1 * DPI as f64).round() as u32,
    )
}

/// Points to pixels
pub fn pt(points: f64) -> f64 {
    points * DPI as f64 / 72.0
}

pub fn pt_px(points: f64) -> u32 {
    pt(points).round().max(1.0) as u32
}

pub fn text_style(points: f64, bold: bool) -> TextStyle<'static> {
    let font = (FONT, pt(points)).into_font();
    let font = if bold { font.style(FontStyle::Bold) } else { font };
    font.color(&INK)
}

/// Radius in pixels of a marker whose area is `size` square points
pub fn marker_radius(size: f64) -> i32 {
    (pt(size.max(0.0).sqrt()) / 2.0).round() as i32
}

pub fn team_color(team_code: &str) -> RGBColor {
    if team_code == HIGHLIGHT_TEAM_CODE {
        HIGHLIGHT
    } else {
        MUTED
    }
}

/// Outline of a scatter marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub color: RGBColor,
    /// Line width in points
    pub width: f64,
}

pub fn marker_edge(row: &KpiRow) -> Edge {
    if row.is_top5 {
        Edge {
            color: GOLD,
            width: 2.4,
        }
    } else if row.is_target {
        Edge {
            color: GOLD,
            width: 1.5,
        }
    } else {
        Edge {
            color: RGBColor(0xFF, 0xFF, 0xFF),
            width: 1.2,
        }
    }
}

/// Translucent team-coloured fill of a scatter marker
pub fn marker_fill(row: &KpiRow) -> ShapeStyle {
    team_color(&row.team_code).mix(MARKER_ALPHA).filled()
}

/// Outline stroke, blended with the same alpha as the fill
pub fn marker_outline(row: &KpiRow) -> ShapeStyle {
    let edge = marker_edge(row);
    edge.color.mix(MARKER_ALPHA).stroke_width(pt_px(edge.width))
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// One hollow circle of the marker-size legend
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub label: &'static str,
}

const LEGEND_STEPS: usize = 3;
const LEGEND_TOP: f64 = 0.6;
const LEGEND_SPACING: f64 = 0.18;

/// Legend circles from highest to lowest KPI, stacked near the bottom right
pub fn size_legend(table: &KpiTable) -> Vec<LegendEntry> {
    let Some((min, max)) = table.kpi_range() else {
        return Vec::new();
    };
    let x = table.max_dp_per90() - 1.0;

    linspace(max, min, LEGEND_STEPS)
        .into_iter()
        .enumerate()
        .map(|(i, value)| LegendEntry {
            x,
            y: LEGEND_TOP - i as f64 * LEGEND_SPACING,
            size: circle_size(value, min, max),
            label: match i {
                0 => "Higher KPI",
                i if i == LEGEND_STEPS - 1 => "Lower KPI",
                _ => "",
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_CIRCLE_SIZE, MIN_CIRCLE_SIZE};

    fn row(player: &str, team_code: &str, dp: f64, weighted: f64) -> KpiRow {
        KpiRow {
            player: player.into(),
            team: team_code.into(),
            team_code: team_code.into(),
            minutes_total: 90,
            minutes_context: 40,
            danger_passes: 1,
            interceptions: 1,
            dp_per90: dp,
            int_per90: 1.0,
            kpi: weighted,
            kpi_weighted: weighted,
            circle_size: 40.0,
            is_target: false,
            is_top5: false,
        }
    }

    #[test]
    fn test_canvas_size() {
        assert_eq!(canvas_size(), (4200, 2100));
    }

    #[test]
    fn test_marker_radius() {
        // 400 pt² is a 20 pt diameter
        assert_eq!(marker_radius(400.0), 42);
        assert_eq!(marker_radius(0.0), 0);
    }

    #[test]
    fn test_edges() {
        let mut r = row("Federico Valverde", "URU", 1.0, 1.0);
        assert_eq!(marker_edge(&r).width, 1.2);
        r.is_target = true;
        assert_eq!(marker_edge(&r), Edge { color: GOLD, width: 1.5 });
        r.is_top5 = true;
        assert_eq!(marker_edge(&r).width, 2.4);
    }

    #[test]
    fn test_marker_fill_and_outline_share_alpha() {
        let mut r = row("Federico Valverde", "URU", 1.0, 1.0);
        r.is_top5 = true;

        let fill = marker_fill(&r);
        assert!(fill.filled);
        assert_eq!(fill.color.3, MARKER_ALPHA);

        let outline = marker_outline(&r);
        assert!(!outline.filled);
        assert_eq!(outline.color.3, MARKER_ALPHA);
        assert_eq!((outline.color.0, outline.color.1, outline.color.2), (0xFF, 0xD7, 0x00));
        assert_eq!(outline.stroke_width, pt_px(2.4));
    }

    #[test]
    fn test_team_color() {
        assert_eq!(team_color("URU"), HIGHLIGHT);
        assert_eq!(team_color("ARG"), MUTED);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(5.0, 1.0, 3), vec![5.0, 3.0, 1.0]);
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_size_legend() {
        let mut table_rows = vec![
            row("A", "URU", 4.0, 6.0),
            row("B", "ARG", 2.0, 2.0),
        ];
        table_rows.sort_by(|a, b| b.kpi_weighted.total_cmp(&a.kpi_weighted));
        let table = KpiTable::from_rows(table_rows);

        let legend = size_legend(&table);
        assert_eq!(legend.len(), 3);
        assert_eq!(legend[0].label, "Higher KPI");
        assert_eq!(legend[1].label, "");
        assert_eq!(legend[2].label, "Lower KPI");
        assert_eq!(legend[0].size, MAX_CIRCLE_SIZE);
        assert_eq!(legend[1].size, (MAX_CIRCLE_SIZE + MIN_CIRCLE_SIZE) / 2.0);
        assert_eq!(legend[2].size, MIN_CIRCLE_SIZE);
        assert!(legend.iter().all(|e| e.x == 3.0));
        assert!((legend[2].y - 0.24).abs() < 1e-9);
    }

    #[test]
    fn test_empty_legend() {
        assert!(size_legend(&KpiTable::default()).is_empty());
    }
}
