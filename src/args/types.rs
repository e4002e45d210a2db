use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::EngineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print the merged playable scorecard of a round
    Scorecard,
    /// Compute every game of a round
    Games,
    /// Compare two players across a round history
    #[value(name = "head-to-head")]
    HeadToHead,
    /// Per-player stroke and hole-stat totals for a round
    Summary,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Score golf side games from round snapshots", long_about = None)]
pub struct Args {
    #[arg(long, value_enum, default_value = "games")]
    pub mode: Mode,
    /// A single round document
    #[arg(
        long,
        value_name = "ROUND_JSON",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub round_json: Option<PathBuf>,
    /// An array of round documents, used by head-to-head
    #[arg(
        long,
        value_name = "HISTORY_JSON",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub history_json: Option<PathBuf>,
    /// An array of `{ "id", "name" }` player profiles
    #[arg(
        long,
        value_name = "PLAYERS_JSON",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub players_json: Option<PathBuf>,
    #[arg(long, value_name = "PLAYER_ID")]
    pub player: Option<String>,
    #[arg(long, value_name = "PLAYER_ID")]
    pub opponent: Option<String>,
    /// Evaluation time in RFC 3339; defaults to now
    #[arg(long, value_parser = crate::args::validation::parse_timestamp)]
    pub now: Option<DateTime<Utc>>,
    #[arg(
        long,
        value_name = "CONFIG_TOML",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub config_toml: Option<PathBuf>,
    #[arg(long, value_name = "HOURS")]
    pub finished_after_hours: Option<i64>,
    #[arg(long)]
    pub pretty: bool,
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub mode: Mode,
    pub round_json: Option<PathBuf>,
    pub history_json: Option<PathBuf>,
    pub players_json: Option<PathBuf>,
    pub player: Option<String>,
    pub opponent: Option<String>,
    pub now: DateTime<Utc>,
    pub config: EngineConfig,
    pub pretty: bool,
    pub verbose: bool,
}
