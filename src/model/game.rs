use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Opaque game identifier issued by the provider, e.g. `0022300512`.
pub type GameId = String;

/// Header of a finished game, with the tip-off shown in local time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameRecord {
    pub date: String,
    pub time: String,
    pub away_team: String,
    pub away_score: i64,
    #[serde(rename = "away_logo")]
    pub away_logo_url: String,
    pub home_team: String,
    pub home_score: i64,
    #[serde(rename = "home_logo")]
    pub home_logo_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerStatLine {
    #[serde(rename = "number")]
    pub jersey_number: String,
    pub name: String,
    pub position: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub blocks: i64,
    #[serde(rename = "fgp")]
    pub field_goal_percentage: String,
    pub fouls: i64,
    pub turnovers: i64,
    #[serde(rename = "minutes")]
    pub minutes_played: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameResult {
    #[serde(rename = "score")]
    pub record: GameRecord,
    pub away_stats: Vec<PlayerStatLine>,
    pub home_stats: Vec<PlayerStatLine>,
}

/// Successfully transformed games in provider order.
///
/// Serializes as an object keyed `game1`, `game2`, ... with no gaps, in
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSlate {
    games: Vec<GameResult>,
}

impl GameSlate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, game: GameResult) {
        self.games.push(game);
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Ordinal key and game, starting at `game1`.
    pub fn keyed(&self) -> impl Iterator<Item = (String, &GameResult)> {
        self.games
            .iter()
            .enumerate()
            .map(|(i, game)| (format!("game{}", i + 1), game))
    }
}

impl Serialize for GameSlate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.games.len()))?;
        for (key, game) in self.keyed() {
            map.serialize_entry(&key, game)?;
        }
        map.end()
    }
}
