pub mod bar;
pub mod scatter;
pub mod style;

pub use bar::render_top_bars;
pub use scatter::render_scatter;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::analysis::KpiTable;
use crate::config::{BAR_CHART_FILE, SCATTER_FILE};

/// Paths of the written images
#[derive(Debug, Clone)]
pub struct RenderedCharts {
    pub scatter: PathBuf,
    pub bar_chart: PathBuf,
}

/// Write both charts into `output_dir`
pub fn render_charts(table: &KpiTable, output_dir: &Path) -> Result<RenderedCharts> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

    let scatter = output_dir.join(SCATTER_FILE);
    render_scatter(table, &scatter)
        .with_context(|| format!("Failed to render {:?}", scatter))?;

    let bar_chart = output_dir.join(BAR_CHART_FILE);
    render_top_bars(table, &bar_chart)
        .with_context(|| format!("Failed to render {:?}", bar_chart))?;

    Ok(RenderedCharts { scatter, bar_chart })
}
