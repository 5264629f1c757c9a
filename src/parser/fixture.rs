use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::Match;

#[derive(Debug, Deserialize)]
struct HomeTeam {
    home_team_name: String,
}

#[derive(Debug, Deserialize)]
struct AwayTeam {
    away_team_name: String,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    match_id: u64,
    match_date: Option<String>,
    home_team: HomeTeam,
    away_team: AwayTeam,
    home_score: Option<u32>,
    away_score: Option<u32>,
}

/// Parse a competition match list
pub fn parse_matches(json: &str) -> Result<Vec<Match>> {
    let raw: Vec<RawMatch> = serde_json::from_str(json).context("Failed to parse match list")?;

    Ok(raw
        .into_iter()
        .map(|m| Match {
            id: m.match_id,
            home_team: m.home_team.home_team_name,
            away_team: m.away_team.away_team_name,
            date: m.match_date,
            reported_score: m.home_score.zip(m.away_score),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches() {
        let json = r#"[
            {"match_id": 3943077, "match_date": "2024-07-14", "kick_off": "20:00:00.000",
             "home_team": {"home_team_id": 779, "home_team_name": "Argentina"},
             "away_team": {"away_team_id": 769, "away_team_name": "Colombia"},
             "home_score": 1, "away_score": 0,
             "competition": {"competition_id": 223, "competition_name": "Copa America"}},
            {"match_id": 42,
             "home_team": {"home_team_name": "Uruguay"},
             "away_team": {"away_team_name": "Brazil"}}
        ]"#;

        let matches = parse_matches(json).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, 3943077);
        assert_eq!(matches[0].home_team, "Argentina");
        assert_eq!(matches[0].away_team, "Colombia");
        assert_eq!(matches[0].date.as_deref(), Some("2024-07-14"));
        assert_eq!(matches[0].reported_score, Some((1, 0)));
        assert_eq!(matches[1].reported_score, None);
    }
}
