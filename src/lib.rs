pub mod box_score;
pub mod config;
pub mod error;
pub mod games;
pub mod handler;
pub mod model;
pub mod nba_stats;
