pub mod cache;
pub mod client;
pub mod extract;

pub use cache::*;
pub use client::*;
pub use extract::*;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Competition;
use crate::parser::parse_matches;
use crate::ui::{Phase, Ui};

/// Make sure the match list and all event files of a competition are cached
///
/// Returns the data root (usable as a `LocalDataset`) and the number of matches.
pub fn ensure_competition_downloaded(
    cache_dir: Option<PathBuf>,
    competition: Competition,
    force: bool,
    ui: &mut impl Ui,
) -> Result<(PathBuf, usize)> {
    ui.set_phase(Phase::Fetching);
    let cache = CacheManager::new(cache_dir)?;
    ui.set_info(format!("Cache: {}", cache.cache_dir().display()));

    if !force && cache.is_cached(competition) {
        let json = std::fs::read_to_string(cache.matches_path(competition))
            .context("Failed to read cached match list")?;
        let count = parse_matches(&json)?.len();
        ui.log(format!("Using cached data for {} ({} matches)", competition, count));
        return Ok((cache.cache_dir().to_path_buf(), count));
    }

    let client = OpenDataClient::new()?;

    let matches_path = cache.matches_path(competition);
    if force || !matches_path.exists() {
        ui.log(format!("Downloading match list for {}", competition));
        if let Some(parent) = matches_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create cache directory")?;
        }
        let json = client.fetch_matches(competition)?;
        // validate before caching
        parse_matches(&json)?;
        std::fs::write(&matches_path, &json)
            .with_context(|| format!("Failed to write {:?}", matches_path))?;
    }

    let json = std::fs::read_to_string(&matches_path)
        .with_context(|| format!("Failed to read {:?}", matches_path))?;
    let ids: Vec<u64> = parse_matches(&json)?.iter().map(|m| m.id).collect();

    let pending = if force {
        ids.clone()
    } else {
        cache.missing_events(&ids)
    };

    let total = pending.len() as u64;
    for (i, match_id) in pending.iter().enumerate() {
        ui.set_progress(i as u64, total, format!("match {}", match_id));
        let dest = cache.events_path(*match_id);
        let tmp = dest.with_extension("part");
        client.download_to(&client.events_url(*match_id), &tmp, |done, size| {
            ui.set_progress(
                i as u64,
                total,
                format!("match {} ({})", match_id, format_bytes(done, size)),
            )
        })?;
        std::fs::rename(&tmp, &dest)
            .with_context(|| format!("Failed to move {:?} into place", tmp))?;
    }
    ui.clear_progress();
    ui.log(format!("Downloaded {} event files", pending.len()));

    Ok((cache.cache_dir().to_path_buf(), ids.len()))
}
