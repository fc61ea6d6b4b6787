pub mod box_score;
pub mod game;
pub mod scoreboard;
