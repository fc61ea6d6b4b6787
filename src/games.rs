use std::time::Duration;

use chrono::NaiveDate;
use tracing::{error, info, instrument, warn};

use crate::box_score;
use crate::error::ProviderError;
use crate::model::game::{GameId, GameSlate};
use crate::nba_stats::{ScoreboardQuery, StatsProvider};

/// Yesterday's scoreboard.
pub const DEFAULT_DAY_OFFSET: i64 = -1;

pub const NEXT_GAMES_TIMEOUT: Duration = Duration::from_secs(30);

/// Game identifiers for `today` shifted by `day_offset` days.
///
/// Provider errors, timeouts included, are returned to the caller.
#[instrument(level = "info", skip(provider))]
pub fn list_games(
    provider: &dyn StatsProvider,
    today: NaiveDate,
    day_offset: i64,
) -> Result<Vec<GameId>, ProviderError> {
    let game_ids = provider.scoreboard(&ScoreboardQuery::nba(today, day_offset))?;
    info!(count = game_ids.len(), "Resolved game ids");
    Ok(game_ids)
}

/// Game identifiers scheduled for the day after `today`.
///
/// A provider timeout is logged and reported as no games; any other error is returned.
#[instrument(level = "info", skip(provider))]
pub fn list_tomorrows_games(
    provider: &dyn StatsProvider,
    today: NaiveDate,
    timeout: Duration,
) -> Result<Vec<GameId>, ProviderError> {
    // Tomorrow's scoreboard is asked for directly, with no offset
    let tomorrow = today.succ_opt().unwrap_or(today);
    let query = ScoreboardQuery::nba(tomorrow, 0).with_timeout(timeout);
    match provider.scoreboard(&query) {
        Ok(game_ids) => {
            info!(count = game_ids.len(), date = %tomorrow, "Resolved tomorrow's game ids");
            Ok(game_ids)
        }
        // A slow provider means "no games known yet", not a failed request
        Err(e) if e.is_timeout() => {
            warn!(error = %e, "Timeout while fetching game data");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Transform each game in order, skipping the ones that fail.
pub fn collect_slate(provider: &dyn StatsProvider, game_ids: &[GameId]) -> GameSlate {
    let mut slate = GameSlate::new();
    // One provider call at a time per request
    for game_id in game_ids {
        match box_score::transform(provider, game_id) {
            Ok(game) => slate.push(game),
            Err(e) => {
                // Log and move on; one bad game must not sink the rest
                error!(game_id = %game_id, error = %e, "Error processing data for game");
            }
        }
    }
    info!(requested = game_ids.len(), kept = slate.len(), "Collected box scores");
    slate
}
