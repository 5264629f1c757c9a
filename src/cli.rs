use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "midfield-kpi")]
#[command(
    version,
    about = "Weighted danger-pass and interception KPI for Copa América 2024 midfielders"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download (if needed), analyze and render both charts
    Run {
        /// Directory for the PNG charts
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Custom cache directory
        #[arg(short, long)]
        cache_dir: Option<PathBuf>,

        /// Force re-download even if cached
        #[arg(short, long)]
        force: bool,

        /// Full-screen progress view
        #[arg(long)]
        tui: bool,
    },

    /// Download the competition's match list and event files
    Download {
        /// Cache directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force re-download even if cached
        #[arg(short, long)]
        force: bool,
    },

    /// Extract the competition from a StatsBomb open-data zip archive
    Import {
        /// Path to the open-data archive
        archive: PathBuf,

        /// Destination data directory
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Analyze a local data directory and render both charts
    Analyze {
        /// Directory in open-data layout (matches/, events/)
        data_dir: PathBuf,

        /// Directory for the PNG charts
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// List the competition's fixtures
    ListMatches {
        /// Directory in open-data layout; defaults to the cache
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
