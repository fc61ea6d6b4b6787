use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::instrument;

use crate::error::TransformError;
use crate::model::box_score::{BoxScoreDocument, BoxScorePlayer, BoxScoreTeam};
use crate::model::game::{GameRecord, GameResult, PlayerStatLine};
use crate::nba_stats::StatsProvider;

/// Game dates and times are reported in Polish local time.
pub const TARGET_TZ: Tz = chrono_tz::Europe::Warsaw;

const DEFAULT_POSITION: &str = "N/A";

/// Logo image for a team. Pure string substitution, nothing is fetched.
pub fn logo_url(team_id: i64) -> String {
    format!("https://cdn.nba.com/logos/nba/{}/global/D/logo.svg", team_id)
}

/// Fetch the box score for `game_id` and reduce it to a [`GameResult`].
#[instrument(level = "debug", skip(provider))]
pub fn transform(provider: &dyn StatsProvider, game_id: &str) -> Result<GameResult, TransformError> {
    let body = provider.box_score(game_id)?;
    transform_body(&body)
}

/// Reduce a raw box score document to a [`GameResult`] (no network).
pub fn transform_body(body: &str) -> Result<GameResult, TransformError> {
    let doc: BoxScoreDocument = serde_json::from_str(body)?;
    let game = doc.game;

    let tip_off = parse_game_time(&game.game_time_utc)?.with_timezone(&TARGET_TZ);

    let BoxScoreTeam {
        team_id: away_id,
        team_name: away_team,
        score: away_score,
        players: away_players,
    } = game.away_team;
    let BoxScoreTeam {
        team_id: home_id,
        team_name: home_team,
        score: home_score,
        players: home_players,
    } = game.home_team;

    let record = GameRecord {
        date: tip_off.format("%Y-%m-%d").to_string(),
        time: tip_off.format("%H:%M:%S").to_string(),
        away_team,
        away_score,
        away_logo_url: logo_url(away_id),
        home_team,
        home_score,
        home_logo_url: logo_url(home_id),
    };

    Ok(GameResult {
        record,
        away_stats: player_stats(away_players)?,
        home_stats: player_stats(home_players)?,
    })
}

fn player_stats(players: Vec<BoxScorePlayer>) -> Result<Vec<PlayerStatLine>, TransformError> {
    players.into_iter().map(player_stat_line).collect()
}

fn player_stat_line(player: BoxScorePlayer) -> Result<PlayerStatLine, TransformError> {
    let stats = player.statistics;
    Ok(PlayerStatLine {
        jersey_number: player.jersey_num,
        name: player.name,
        position: player.position.unwrap_or_else(|| DEFAULT_POSITION.to_string()),
        points: stats.points,
        rebounds: stats.rebounds_total,
        assists: stats.assists,
        blocks: stats.blocks,
        field_goal_percentage: format_field_goal_percentage(stats.field_goals_percentage),
        fouls: stats.fouls_personal,
        turnovers: stats.turnovers,
        minutes_played: format_minutes(&stats.minutes)?,
    })
}

/// Accepts RFC 3339 as well as the bare `2024-01-10T00:30:00Z` form.
fn parse_game_time(value: &str) -> Result<DateTime<Utc>, TransformError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%SZ")
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
        .map_err(|source| TransformError::GameTime {
            value: value.to_string(),
            source,
        })
}

/// Ratio to percentage string rounded to two decimals: `0.456` -> `"45.6%"`, `0.5` -> `"50.0%"`.
pub fn format_field_goal_percentage(ratio: f64) -> String {
    let fixed = format!("{:.2}", ratio * 100.0);
    let trimmed = fixed.trim_end_matches('0');
    // Keep one digit after the point for whole numbers.
    let shown = if trimmed.ends_with('.') {
        &fixed[..trimmed.len() + 1]
    } else {
        trimmed
    };
    format!("{}%", shown)
}

/// `PT12M34.00S` -> `"0:12:34"`. Fractional seconds are dropped.
///
/// Values that don't fit a clock (seconds of a minute or more, totals past `u64`) are rejected.
pub fn format_minutes(raw: &str) -> Result<String, TransformError> {
    let invalid = || TransformError::Minutes(raw.to_string());

    let rest = raw.strip_prefix("PT").ok_or_else(invalid)?;
    let (minutes, rest) = rest.split_once('M').ok_or_else(invalid)?;
    let seconds = rest.strip_suffix('S').ok_or_else(invalid)?;
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: f64 = seconds.parse().map_err(|_| invalid())?;
    if !(0.0..60.0).contains(&seconds) {
        return Err(invalid());
    }
    // Bounded to 0..60 above, so the cast is exact.
    let whole_seconds = seconds.trunc() as u64;
    let total_seconds = minutes
        .checked_mul(60)
        .and_then(|s| s.checked_add(whole_seconds))
        .ok_or_else(invalid)?;

    Ok(format!(
        "{}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    ))
}
