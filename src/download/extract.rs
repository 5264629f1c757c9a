use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;
use zip::ZipArchive;

use super::cache::{events_path, matches_path};
use crate::config::Competition;
use crate::parser::parse_matches;

/// Extract one competition season from an open-data repository archive
///
/// The archive is expected to contain the repository's `data/` tree under any
/// prefix (GitHub archives add `open-data-master/`). Returns the number of
/// event files written.
pub fn extract_competition(
    zip_path: &Path,
    dest_dir: &Path,
    competition: Competition,
) -> Result<usize> {
    let file = File::open(zip_path).with_context(|| format!("Failed to open {:?}", zip_path))?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).context("Failed to read zip archive")?;

    let matches_suffix = format!(
        "data/matches/{}/{}.json",
        competition.competition_id, competition.season_id
    );
    let Some(matches_entry) = archive
        .file_names()
        .find(|name| name.ends_with(&matches_suffix))
        .map(str::to_string)
    else {
        bail!("Archive has no match list for competition {}", competition);
    };

    let mut json = String::new();
    archive
        .by_name(&matches_entry)
        .context("Failed to read match list from archive")?
        .read_to_string(&mut json)
        .context("Match list is not valid UTF-8")?;
    let matches = parse_matches(&json)?;

    let dest_matches = matches_path(dest_dir, competition);
    if let Some(parent) = dest_matches.parent() {
        fs::create_dir_all(parent).context("Failed to create destination directory")?;
    }
    fs::write(&dest_matches, &json)
        .with_context(|| format!("Failed to write {:?}", dest_matches))?;
    fs::create_dir_all(dest_dir.join("events"))
        .context("Failed to create destination directory")?;

    let wanted: HashSet<String> = matches
        .iter()
        .map(|m| format!("data/events/{}.json", m.id))
        .collect();

    let pb = ProgressBar::new(wanted.len() as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{msg} [{bar:40.cyan/blue}] {pos}/{len} matches")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb.set_message("Extracting");

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .context("Failed to read file from archive")?;

        let Some(match_id) = wanted_match_id(entry.name(), &wanted) else {
            continue;
        };

        let dest_path = events_path(dest_dir, match_id);
        let mut dest_file = File::create(&dest_path)
            .with_context(|| format!("Failed to create file: {:?}", dest_path))?;
        io::copy(&mut entry, &mut dest_file)
            .with_context(|| format!("Failed to extract events of match {}", match_id))?;

        written += 1;
        pb.inc(1);
    }

    pb.finish_with_message("Extraction complete");

    if written < wanted.len() {
        tracing::warn!(
            expected = wanted.len(),
            found = written,
            "archive is missing some event files"
        );
    }

    Ok(written)
}

/// Match id of an archive entry if it is one of the wanted event files
fn wanted_match_id(entry_name: &str, wanted: &HashSet<String>) -> Option<u64> {
    let idx = entry_name.find("data/events/")?;
    let tail = &entry_name[idx..];
    if !wanted.contains(tail) {
        return None;
    }
    Path::new(tail).file_stem()?.to_str()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COPA_AMERICA_2024;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    #[test]
    fn test_wanted_match_id() {
        let wanted: HashSet<String> = ["data/events/12.json".to_string()].into();
        assert_eq!(
            wanted_match_id("open-data-master/data/events/12.json", &wanted),
            Some(12)
        );
        assert_eq!(wanted_match_id("open-data-master/data/events/13.json", &wanted), None);
        assert_eq!(wanted_match_id("open-data-master/data/lineups/12.json", &wanted), None);
    }

    #[test]
    fn test_extract_competition() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("open-data.zip");

        {
            let mut zip = zip::ZipWriter::new(File::create(&zip_path).unwrap());
            let options = SimpleFileOptions::default();
            zip.start_file("open-data-master/data/matches/223/282.json", options)
                .unwrap();
            zip.write_all(
                br#"[{"match_id": 5, "home_team": {"home_team_name": "Uruguay"},
                      "away_team": {"away_team_name": "Panama"}}]"#,
            )
            .unwrap();
            zip.start_file("open-data-master/data/events/5.json", options)
                .unwrap();
            zip.write_all(b"[]").unwrap();
            zip.start_file("open-data-master/data/events/6.json", options)
                .unwrap();
            zip.write_all(b"[]").unwrap();
            zip.finish().unwrap();
        }

        let dest = dir.path().join("data");
        let written = extract_competition(&zip_path, &dest, COPA_AMERICA_2024).unwrap();
        assert_eq!(written, 1);
        assert!(dest.join("matches/223/282.json").exists());
        assert!(dest.join("events/5.json").exists());
        assert!(!dest.join("events/6.json").exists());
    }

    #[test]
    fn test_missing_match_list() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("empty.zip");
        zip::ZipWriter::new(File::create(&zip_path).unwrap())
            .finish()
            .unwrap();

        let err = extract_competition(&zip_path, dir.path(), COPA_AMERICA_2024).unwrap_err();
        assert!(err.to_string().contains("223/282"));
    }
}
