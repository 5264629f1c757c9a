use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

use crate::config::Competition;

const OPEN_DATA_URL: &str = "https://raw.githubusercontent.com/statsbomb/open-data/master/data";

/// Blocking client for the StatsBomb open-data repository
pub struct OpenDataClient {
    client: Client,
    base_url: String,
}

impl OpenDataClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(OPEN_DATA_URL)
    }

    /// Point the client at a mirror of the `data/` directory
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("midfield-kpi")
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn matches_url(&self, competition: Competition) -> String {
        format!(
            "{}/matches/{}/{}.json",
            self.base_url, competition.competition_id, competition.season_id
        )
    }

    pub fn events_url(&self, match_id: u64) -> String {
        format!("{}/events/{}.json", self.base_url, match_id)
    }

    /// Fetch the match list of a competition season
    pub fn fetch_matches(&self, competition: Competition) -> Result<String> {
        self.fetch_text(&self.matches_url(competition))
    }

    fn fetch_text(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Failed to fetch {}", url))?;

        response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }

    /// Stream a URL to a file, reporting bytes received and the expected size
    pub fn download_to(
        &self,
        url: &str,
        dest: &Path,
        on_progress: impl FnMut(u64, u64),
    ) -> Result<u64> {
        debug!(url, dest = %dest.display(), "download");
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Failed to start download of {}", url))?;

        let total_size = response.content_length().unwrap_or(0);
        let file = File::create(dest)
            .with_context(|| format!("Failed to create {:?}", dest))?;

        stream_to(response, file, total_size, on_progress)
            .with_context(|| format!("Failed to download {} to {:?}", url, dest))
    }
}

/// Copy `reader` into `writer` in chunks, calling `on_progress(done, total)` after each
pub fn stream_to(
    mut reader: impl Read,
    mut writer: impl Write,
    total: u64,
    mut on_progress: impl FnMut(u64, u64),
) -> Result<u64> {
    let mut downloaded: u64 = 0;
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .context("Failed to read from response")?;

        if bytes_read == 0 {
            break;
        }

        writer
            .write_all(&buffer[..bytes_read])
            .context("Failed to write chunk")?;

        downloaded += bytes_read as u64;
        on_progress(downloaded, total);
    }

    writer.flush().context("Failed to flush output")?;
    Ok(downloaded)
}

/// Format bytes as human-readable string
pub fn format_bytes(current: u64, total: u64) -> String {
    fn fmt(bytes: u64) -> String {
        if bytes >= 1_000_000_000 {
            format!("{:.1} GB", bytes as f64 / 1_000_000_000.0)
        } else if bytes >= 1_000_000 {
            format!("{:.1} MB", bytes as f64 / 1_000_000.0)
        } else if bytes >= 1_000 {
            format!("{:.1} KB", bytes as f64 / 1_000.0)
        } else {
            format!("{} B", bytes)
        }
    }
    if total == 0 {
        fmt(current)
    } else {
        format!("{} / {}", fmt(current), fmt(total))
    }
}
