use std::sync::Arc;

use nba_box_scores_rust::config::Config;
use nba_box_scores_rust::handler::{self, AppState};
use nba_box_scores_rust::nba_stats::NbaStats;
use tracing::info;
use tracing_subscriber::EnvFilter;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    // Structured JSON logs; RUST_LOG wins over the DEBUG switch when set.
    let default_level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .try_init();

    let provider = NbaStats::new(config.stats_base_url.clone(), config.live_base_url.clone());
    let state = AppState {
        provider: Arc::new(provider),
        next_games_timeout: config.next_games_timeout,
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, debug = config.debug, "Serving NBA box scores");
    axum::serve(listener, handler::router(state)).await?;
    Ok(())
}
