use serde_json::{Value, json};
use std::fs;
use std::path::Path;

use crate::args::{CleanArgs, Mode};
use crate::error::GolfError;
use crate::games::compute_round_games;
use crate::head_to_head::head_to_head;
use crate::model::{PlayerDirectory, PlayerProfile, Round};
use crate::scorecard::merge_round_scorecards;
use crate::stats::round_leaderboard;

fn read(path: &Path) -> Result<String, GolfError> {
    fs::read_to_string(path).map_err(|e| GolfError::Io(format!("read {}: {e}", path.display())))
}

/// # Errors
///
/// Will return `Err` if the file is unreadable or not a round document
pub fn load_round(path: &Path) -> Result<Round, GolfError> {
    Round::from_json_str(&read(path)?)
}

/// # Errors
///
/// Will return `Err` if the file is unreadable or not an array of rounds
pub fn load_history(path: &Path) -> Result<Vec<Round>, GolfError> {
    Round::list_from_json_str(&read(path)?)
}

/// # Errors
///
/// Will return `Err` if the file is unreadable or not an array of profiles
pub fn load_directory(path: Option<&Path>) -> Result<PlayerDirectory, GolfError> {
    let Some(path) = path else {
        return Ok(PlayerDirectory::default());
    };
    let profiles: Vec<PlayerProfile> = serde_json::from_str(&read(path)?)?;
    Ok(PlayerDirectory::new(profiles))
}

fn required<'a, T>(value: Option<&'a T>, what: &str) -> Result<&'a T, GolfError> {
    value.ok_or_else(|| GolfError::NotFound(format!("{what} was not provided")))
}

/// Run the selected mode and return its JSON report.
///
/// # Errors
///
/// Will return `Err` if an input file cannot be loaded
pub fn execute(args: &CleanArgs) -> Result<Value, GolfError> {
    let directory = load_directory(args.players_json.as_deref())?;

    let report = match args.mode {
        Mode::Scorecard => {
            let round = load_round(required(args.round_json.as_ref(), "round json")?)?;
            serde_json::to_value(merge_round_scorecards(&round))?
        }
        Mode::Games => {
            let round = load_round(required(args.round_json.as_ref(), "round json")?)?;
            serde_json::to_value(compute_round_games(&round, &directory, &args.config))?
        }
        Mode::Summary => {
            let round = load_round(required(args.round_json.as_ref(), "round json")?)?;
            let card = merge_round_scorecards(&round);
            json!({
                "roundId": round.id,
                "finished": round.is_finished(&card, args.now, args.config.finished_after()),
                "leaderboard": round_leaderboard(&round, &card, &directory),
            })
        }
        Mode::HeadToHead => {
            let rounds = load_history(required(args.history_json.as_ref(), "history json")?)?;
            let player = required(args.player.as_ref(), "player")?;
            let opponent = required(args.opponent.as_ref(), "opponent")?;
            let record = head_to_head(
                player,
                opponent,
                &rounds,
                &directory,
                args.now,
                &args.config,
            );
            log::info!(
                "compared {player} with {opponent} over {} rounds",
                rounds.len()
            );
            json!({
                "player": directory.display_name(player),
                "opponent": directory.display_name(opponent),
                "hasAnyGames": record.has_any_games(),
                "record": record,
            })
        }
    };
    Ok(report)
}
