use anyhow::Result;
use midfield_kpi::{
    cli::{Cli, Commands},
    config::COPA_AMERICA_2024,
    download::{ensure_competition_downloaded, extract_competition, CacheManager},
    loader::{EventSource, LocalDataset},
    pipeline,
    ui::{ConsoleUi, UiApp},
};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // the full-screen view owns the terminal, so no log subscriber there
    if !matches!(cli.command, Commands::Run { tui: true, .. }) {
        init_logging();
    }

    match cli.command {
        Commands::Run {
            output_dir,
            cache_dir,
            force,
            tui,
        } => {
            let start = Instant::now();

            if tui {
                let mut ui = UiApp::new()?;
                let (data_dir, _) =
                    ensure_competition_downloaded(cache_dir, COPA_AMERICA_2024, force, &mut ui)?;
                let source = LocalDataset::new(data_dir);
                let (analysis, _) =
                    pipeline::run(&source, COPA_AMERICA_2024, &output_dir, &mut ui)?;
                let summary = format!(
                    "{}\nFinished in {:.1}s",
                    analysis.summary(),
                    start.elapsed().as_secs_f64()
                );
                ui.finish(&summary)?;
            } else {
                let mut ui = ConsoleUi::new();
                let (data_dir, _) =
                    ensure_competition_downloaded(cache_dir, COPA_AMERICA_2024, force, &mut ui)?;
                let source = LocalDataset::new(data_dir);
                let (analysis, charts) =
                    pipeline::run(&source, COPA_AMERICA_2024, &output_dir, &mut ui)?;

                println!("\n{}", analysis.summary());
                println!(
                    "\nWrote {:?} and {:?} in {:.1}s",
                    charts.scatter,
                    charts.bar_chart,
                    start.elapsed().as_secs_f64()
                );
            }
        }

        Commands::Download { output, force } => {
            let mut ui = ConsoleUi::new();
            let (path, count) =
                ensure_competition_downloaded(output, COPA_AMERICA_2024, force, &mut ui)?;
            println!(
                "Competition {} ({} matches) downloaded to {:?}",
                COPA_AMERICA_2024, count, path
            );
        }

        Commands::Import { archive, output } => {
            let count = extract_competition(&archive, &output, COPA_AMERICA_2024)?;
            println!("Extracted {} event files to {:?}", count, output);
        }

        Commands::Analyze {
            data_dir,
            output_dir,
        } => {
            let start = Instant::now();
            let mut ui = ConsoleUi::new();
            let source = LocalDataset::new(data_dir);
            let (analysis, charts) =
                pipeline::run(&source, COPA_AMERICA_2024, &output_dir, &mut ui)?;

            println!("\n{}", analysis.summary());
            println!(
                "\nWrote {:?} and {:?} in {:.1}s",
                charts.scatter,
                charts.bar_chart,
                start.elapsed().as_secs_f64()
            );
        }

        Commands::ListMatches { data_dir } => {
            let root = match data_dir {
                Some(dir) => dir,
                None => CacheManager::new(None)?.cache_dir().to_path_buf(),
            };
            let source = LocalDataset::new(root);
            let mut matches = source.matches(COPA_AMERICA_2024)?;
            matches.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

            println!("Copa América 2024 ({} matches):\n", matches.len());
            for m in matches {
                let score = m
                    .reported_score
                    .map(|(h, a)| format!("{}-{}", h, a))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {:>8}  {:<10}  {} {} {}",
                    m.id,
                    m.date.as_deref().unwrap_or(""),
                    m.home_team,
                    score,
                    m.away_team
                );
            }
        }
    }

    Ok(())
}
