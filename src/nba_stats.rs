use std::time::Duration;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, error, info, info_span, instrument};
use ureq::Agent;

use crate::error::ProviderError;
use crate::model::game::GameId;
use crate::model::scoreboard::ScoreboardResponse;

pub const NBA_LEAGUE_ID: &str = "00";
pub const DEFAULT_STATS_BASE_URL: &str = "https://stats.nba.com";
pub const DEFAULT_LIVE_BASE_URL: &str = "https://cdn.nba.com/static/json/liveData";

// stats.nba.com drops requests that don't look like they come from its own site.
const STATS_HEADERS: [(&str, &str); 5] = [
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    ),
    ("Accept", "application/json, text/plain, */*"),
    ("Accept-Language", "en-US,en;q=0.9"),
    ("Referer", "https://www.nba.com/"),
    ("Origin", "https://www.nba.com"),
];

/// Which scoreboard to ask for: league, anchor date and a day offset from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreboardQuery {
    pub league_id: String,
    pub game_date: NaiveDate,
    pub day_offset: i64,
    /// Deadline for the whole call. `None` waits as long as the provider takes.
    pub timeout: Option<Duration>,
}

impl ScoreboardQuery {
    pub fn nba(game_date: NaiveDate, day_offset: i64) -> Self {
        Self {
            league_id: NBA_LEAGUE_ID.to_string(),
            game_date,
            day_offset,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The two provider operations the service consumes.
pub trait StatsProvider: Send + Sync {
    /// Game identifiers on the scoreboard, in provider order.
    fn scoreboard(&self, query: &ScoreboardQuery) -> Result<Vec<GameId>, ProviderError>;

    /// Raw box score JSON for one game.
    fn box_score(&self, game_id: &str) -> Result<String, ProviderError>;
}

/// Blocking client for the public NBA stats and live-data hosts.
#[derive(Clone)]
pub struct NbaStats {
    stats_base_url: String,
    live_base_url: String,
    // Shared connection pool for calls without a deadline
    agent: Agent,
}

impl Default for NbaStats {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_BASE_URL, DEFAULT_LIVE_BASE_URL)
    }
}

impl NbaStats {
    pub fn new(stats_base_url: impl Into<String>, live_base_url: impl Into<String>) -> Self {
        Self {
            stats_base_url: stats_base_url.into().trim_end_matches('/').to_string(),
            live_base_url: live_base_url.into().trim_end_matches('/').to_string(),
            agent: Agent::new_with_defaults(),
        }
    }

    fn scoreboard_url(&self) -> String {
        format!("{}/stats/scoreboard", self.stats_base_url)
    }

    fn box_score_url(&self, game_id: &str) -> String {
        format!("{}/boxscore/boxscore_{}.json", self.live_base_url, game_id)
    }

    /// GET `url` and return the body as text.
    fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(&str, &str)],
        timeout: Option<Duration>,
    ) -> Result<String, ProviderError> {
        // Only a call with a deadline needs its own agent; everything else reuses the pool.
        let agent: Agent = match timeout {
            Some(limit) => Agent::config_builder().timeout_global(Some(limit)).build().into(),
            None => self.agent.clone(),
        };
        let mut request = agent.get(url);
        // Query string and headers are appended in the order given
        for (key, value) in query {
            request = request.query(*key, value);
        }
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response_result = {
            let _span = info_span!("provider_fetch", url = %url).entered();
            request.call()
        };
        let response = response_result.map_err(|e| {
            error!(error = %e, url = %url, "Provider request failed");
            ProviderError::from_ureq(url, e)
        })?;

        let mut body_reader = response.into_body();
        body_reader.read_to_string().map_err(|e| {
            error!(error = %e, url = %url, "Failed to read provider response body");
            ProviderError::from_ureq(url, e)
        })
    }
}

impl StatsProvider for NbaStats {
    #[instrument(level = "info", skip(self), fields(date = %query.game_date, offset = query.day_offset))]
    fn scoreboard(&self, query: &ScoreboardQuery) -> Result<Vec<GameId>, ProviderError> {
        let url = self.scoreboard_url();
        // The provider applies the offset itself, relative to GameDate
        let params = [
            ("GameDate", query.game_date.format("%Y-%m-%d").to_string()),
            ("LeagueID", query.league_id.clone()),
            ("DayOffset", query.day_offset.to_string()),
        ];
        let body = self.get(&url, &params, &STATS_HEADERS, query.timeout)?;
        // Decode errors from the parser don't know the URL; fill it in here
        let game_ids = parse_game_ids(&body).map_err(|e| match e {
            ProviderError::Decode { source, .. } => ProviderError::Decode { url: url.clone(), source },
            other => other,
        })?;
        info!(count = game_ids.len(), "Fetched scoreboard");
        Ok(game_ids)
    }

    #[instrument(level = "debug", skip(self))]
    fn box_score(&self, game_id: &str) -> Result<String, ProviderError> {
        let url = self.box_score_url(game_id);
        let body = self.get(&url, &[], &[], None)?;
        debug!(bytes = body.len(), "Fetched box score");
        Ok(body)
    }
}

/// Pull the `GAME_ID` column out of the scoreboard's `GameHeader` result set.
///
/// Repeated identifiers are dropped, keeping the first occurrence.
pub fn parse_game_ids(body: &str) -> Result<Vec<GameId>, ProviderError> {
    let doc: ScoreboardResponse = serde_json::from_str(body).map_err(|source| ProviderError::Decode {
        url: String::from("scoreboard"),
        source,
    })?;
    let header = doc
        .result_set("GameHeader")
        .ok_or_else(|| ProviderError::UnexpectedSchema("missing GameHeader result set".to_string()))?;

    // A scoreboard holds at most a few dozen games
    let mut game_ids: Vec<GameId> = Vec::new();
    for row in header.normalized() {
        let game_id = row
            .get("GAME_ID")
            .and_then(Value::as_str)
            .ok_or_else(|| ProviderError::UnexpectedSchema("GameHeader row without a GAME_ID string".to_string()))?;
        if !game_ids.iter().any(|seen| seen == game_id) {
            game_ids.push(game_id.to_string());
        }
    }
    Ok(game_ids)
}
