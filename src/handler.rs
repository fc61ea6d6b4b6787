use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::Local;
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::{AppError, ProviderError};
use crate::games::{self, DEFAULT_DAY_OFFSET};
use crate::model::game::{GameId, GameSlate};
use crate::nba_stats::StatsProvider;

/// Shared by every request; holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn StatsProvider>,
    pub next_games_timeout: Duration,
}

impl AppState {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self {
            provider,
            next_games_timeout: games::NEXT_GAMES_TIMEOUT,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(give_stats))
        .route("/next_games", get(next_games))
        .with_state(state)
}

/// Yesterday's box scores keyed `game1..gameK`.
#[instrument(skip(state))]
pub async fn give_stats(State(state): State<AppState>) -> Result<Response, AppError> {
    // The provider client blocks, so the whole lookup runs on the blocking pool.
    // Each spawned task owns its own handle to the provider.
    let provider = Arc::clone(&state.provider);
    let slate = tokio::task::spawn_blocking(move || -> Result<GameSlate, ProviderError> {
        let today = Local::now().date_naive();
        let game_ids = games::list_games(provider.as_ref(), today, DEFAULT_DAY_OFFSET)?;
        Ok(games::collect_slate(provider.as_ref(), &game_ids))
    })
    .await??;

    info!(games = slate.len(), "Serving box scores");
    json_response(&slate)
}

/// Tomorrow's game identifiers, untransformed.
#[instrument(skip(state))]
pub async fn next_games(State(state): State<AppState>) -> Result<Response, AppError> {
    let provider = Arc::clone(&state.provider);
    let timeout = state.next_games_timeout;
    let game_ids: Vec<GameId> = tokio::task::spawn_blocking(move || {
        let today = Local::now().date_naive();
        games::list_tomorrows_games(provider.as_ref(), today, timeout)
    })
    .await??;

    info!(games = game_ids.len(), "Serving next games");
    json_response(&game_ids)
}

/// Pretty JSON with a two-space indent.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

fn json_response<T: Serialize + ?Sized>(value: &T) -> Result<Response, AppError> {
    let body = render_json(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
