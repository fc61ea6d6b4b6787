use serde::{Deserialize, Serialize};

/// Live box score document as published for a single game.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoxScoreDocument {
    pub game: BoxScoreGame,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BoxScoreGame {
    #[serde(rename = "gameTimeUTC")]
    pub game_time_utc: String,
    #[serde(rename = "homeTeam")]
    pub home_team: BoxScoreTeam,
    #[serde(rename = "awayTeam")]
    pub away_team: BoxScoreTeam,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScoreTeam {
    pub team_id: i64,
    pub team_name: String,
    pub score: i64,
    pub players: Vec<BoxScorePlayer>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScorePlayer {
    pub jersey_num: String,
    pub name: String,
    // Absent for bench players in some feeds
    #[serde(default)]
    pub position: Option<String>,
    pub statistics: PlayerStatistics,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub points: i64,
    pub rebounds_total: i64,
    pub assists: i64,
    pub blocks: i64,
    pub field_goals_percentage: f64,
    pub fouls_personal: i64,
    pub turnovers: i64,
    /// ISO-8601 style duration, e.g. `PT34M12.00S`.
    pub minutes: String,
}
