#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use nba_box_scores_rust::error::ProviderError;
use nba_box_scores_rust::model::game::GameId;
use nba_box_scores_rust::nba_stats::{ScoreboardQuery, StatsProvider};

pub fn load_box_score() -> String {
    std::fs::read_to_string("tests/box_score_sample.json").expect("failed to read box_score_sample.json")
}

pub fn load_scoreboard() -> String {
    std::fs::read_to_string("tests/scoreboard_sample.json").expect("failed to read scoreboard_sample.json")
}

/// The sample box score with its tip-off replaced.
pub fn box_score_at(game_time_utc: &str) -> String {
    let mut doc: serde_json::Value = serde_json::from_str(&load_box_score()).unwrap();
    doc["game"]["gameTimeUTC"] = serde_json::json!(game_time_utc);
    doc.to_string()
}

/// The sample box score with one statistic removed from the first home player.
pub fn box_score_without_stat(stat: &str) -> String {
    let mut doc: serde_json::Value = serde_json::from_str(&load_box_score()).unwrap();
    doc["game"]["homeTeam"]["players"][0]["statistics"]
        .as_object_mut()
        .unwrap()
        .remove(stat);
    doc.to_string()
}

/// The sample box score with the first home player's minutes replaced.
pub fn box_score_with_minutes(minutes: &str) -> String {
    let mut doc: serde_json::Value = serde_json::from_str(&load_box_score()).unwrap();
    doc["game"]["homeTeam"]["players"][0]["statistics"]["minutes"] = serde_json::json!(minutes);
    doc.to_string()
}

pub enum ScoreboardReply {
    Games(Vec<GameId>),
    Timeout,
    BrokenSchema,
}

/// In-memory provider that records every scoreboard query it receives.
pub struct FakeProvider {
    scoreboard: ScoreboardReply,
    box_scores: HashMap<GameId, String>,
    pub queries: Mutex<Vec<ScoreboardQuery>>,
}

impl FakeProvider {
    pub fn new(scoreboard: ScoreboardReply) -> Self {
        Self {
            scoreboard,
            box_scores: HashMap::new(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_games(games: &[(&str, String)]) -> Self {
        let ids = games.iter().map(|(id, _)| id.to_string()).collect();
        let mut provider = Self::new(ScoreboardReply::Games(ids));
        for (id, body) in games {
            provider.box_scores.insert(id.to_string(), body.clone());
        }
        provider
    }

    pub fn recorded_queries(&self) -> Vec<ScoreboardQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl StatsProvider for FakeProvider {
    fn scoreboard(&self, query: &ScoreboardQuery) -> Result<Vec<GameId>, ProviderError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.scoreboard {
            ScoreboardReply::Games(ids) => Ok(ids.clone()),
            ScoreboardReply::Timeout => Err(ProviderError::Timeout {
                url: "fake://scoreboard".to_string(),
            }),
            ScoreboardReply::BrokenSchema => Err(ProviderError::UnexpectedSchema(
                "missing GameHeader result set".to_string(),
            )),
        }
    }

    fn box_score(&self, game_id: &str) -> Result<String, ProviderError> {
        self.box_scores
            .get(game_id)
            .cloned()
            .ok_or_else(|| ProviderError::UnexpectedSchema(format!("no box score for {}", game_id)))
    }
}
