pub mod args;
pub mod config;
pub mod error;
pub mod games;
pub mod head_to_head;
pub mod model;
pub mod runner;
pub mod scorecard;
pub mod stats;

pub use config::EngineConfig;
pub use error::GolfError;
pub use games::{GameContext, GameOutcome, GameResult, compute_game, compute_round_games};
pub use head_to_head::{HeadToHead, head_to_head};
pub use scorecard::{merge_round_scorecards, merge_scorecards};
