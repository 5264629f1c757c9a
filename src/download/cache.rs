use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Competition;

/// On-disk copy of the open data, laid out like the repository's `data/` dir
pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    pub fn new(custom_dir: Option<PathBuf>) -> Result<Self> {
        let cache_dir = match custom_dir {
            Some(dir) => dir,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "midfield-kpi")
                    .context("Could not determine cache directory")?;
                proj_dirs.cache_dir().join("open-data")
            }
        };

        fs::create_dir_all(cache_dir.join("events"))
            .with_context(|| format!("Failed to create cache directory {:?}", cache_dir))?;

        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn matches_path(&self, competition: Competition) -> PathBuf {
        matches_path(&self.cache_dir, competition)
    }

    pub fn events_path(&self, match_id: u64) -> PathBuf {
        events_path(&self.cache_dir, match_id)
    }

    /// Match ids whose event file is not cached yet
    pub fn missing_events(&self, match_ids: &[u64]) -> Vec<u64> {
        match_ids
            .iter()
            .copied()
            .filter(|id| !self.events_path(*id).exists())
            .collect()
    }

    /// Check the match list and every listed event file are present
    pub fn is_cached(&self, competition: Competition) -> bool {
        let Ok(json) = fs::read_to_string(self.matches_path(competition)) else {
            return false;
        };
        match crate::parser::parse_matches(&json) {
            Ok(matches) => {
                let ids: Vec<u64> = matches.iter().map(|m| m.id).collect();
                self.missing_events(&ids).is_empty()
            }
            Err(_) => false,
        }
    }
}

pub fn matches_path(root: &Path, competition: Competition) -> PathBuf {
    root.join("matches")
        .join(competition.competition_id.to_string())
        .join(format!("{}.json", competition.season_id))
}

pub fn events_path(root: &Path, match_id: u64) -> PathBuf {
    root.join("events").join(format!("{}.json", match_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COPA_AMERICA_2024;

    #[test]
    fn test_layout() {
        let root = Path::new("/data");
        assert_eq!(
            matches_path(root, COPA_AMERICA_2024),
            PathBuf::from("/data/matches/223/282.json")
        );
        assert_eq!(events_path(root, 7), PathBuf::from("/data/events/7.json"));
    }

    #[test]
    fn test_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CacheManager::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(!cache.is_cached(COPA_AMERICA_2024));

        let matches = cache.matches_path(COPA_AMERICA_2024);
        fs::create_dir_all(matches.parent().unwrap()).unwrap();
        fs::write(
            &matches,
            r#"[{"match_id": 1, "home_team": {"home_team_name": "A"},
                 "away_team": {"away_team_name": "B"}}]"#,
        )
        .unwrap();
        assert!(!cache.is_cached(COPA_AMERICA_2024));
        assert_eq!(cache.missing_events(&[1]), vec![1]);

        fs::write(cache.events_path(1), "[]").unwrap();
        assert!(cache.is_cached(COPA_AMERICA_2024));
    }
}
