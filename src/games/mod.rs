pub mod common;
pub mod horse;
pub mod match_play;
pub mod olympic;
pub mod skins;

pub use common::*;
pub use horse::*;
pub use match_play::*;
pub use olympic::*;
pub use skins::*;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::model::{GameType, MergedScorecard, PlayerDirectory, Round, RoundGame};
use crate::scorecard::merge_round_scorecards;

/// Participant counts for a game type the engine does not score.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PassthroughGame {
    pub game_type: String,
    pub player_count: usize,
    pub red_count: usize,
    pub blue_count: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "format", rename_all = "camelCase")]
pub enum GameOutcome {
    Match(MatchStanding),
    Skins(SkinsStanding),
    Olympic(OlympicStanding),
    Horse(HorseStanding),
    Passthrough(PassthroughGame),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub game_id: String,
    pub game_type: GameType,
    pub outcome: GameOutcome,
}

/// Standing of one game. Reads the round and game, never changes them.
#[must_use]
pub fn compute_game(ctx: &GameContext<'_>, game: &RoundGame) -> GameResult {
    let outcome = match &game.game_type {
        GameType::OneVsOne | GameType::TeamVs => GameOutcome::Match(compute_match(ctx, game)),
        GameType::Skins => GameOutcome::Skins(compute_skins(ctx, game)),
        GameType::Olympic => GameOutcome::Olympic(compute_olympic(ctx, game)),
        GameType::Horse => GameOutcome::Horse(compute_horse(ctx, game)),
        GameType::Other(tag) => {
            log::debug!("game {}: type {tag:?} is not scored", game.id);
            let (red, blue) = game.sides(ctx.members());
            GameOutcome::Passthrough(PassthroughGame {
                game_type: tag.clone(),
                player_count: game.participants(ctx.members()).len(),
                red_count: red.len(),
                blue_count: blue.len(),
            })
        }
    };
    GameResult {
        game_id: game.id.clone(),
        game_type: game.game_type.clone(),
        outcome,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoundGames {
    pub round_id: String,
    pub scorecard: MergedScorecard,
    pub games: Vec<GameResult>,
}

/// Merge the round's card and compute every game on it, in game order.
#[must_use]
pub fn compute_round_games(
    round: &Round,
    directory: &PlayerDirectory,
    config: &EngineConfig,
) -> RoundGames {
    let scorecard = merge_round_scorecards(round);
    let ctx = GameContext::new(round, &scorecard, directory, config);
    let games = round.games.iter().map(|g| compute_game(&ctx, g)).collect();
    RoundGames {
        round_id: round.id.clone(),
        scorecard,
        games,
    }
}
