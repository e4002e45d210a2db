use serde::{Deserialize, Serialize};

use super::common::{GameContext, PlayerTotal, player_totals};
use crate::model::RoundGame;

/// Olympic points are entered per hole by the players themselves; the
/// standing only totals them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OlympicStanding {
    pub players: Vec<PlayerTotal>,
}

#[must_use]
pub fn compute_olympic(ctx: &GameContext<'_>, game: &RoundGame) -> OlympicStanding {
    let players = game.participants(ctx.members());
    let holes = ctx.holes_from(game.starting_hole());
    let totals: Vec<i32> = players
        .iter()
        .map(|player| {
            holes
                .iter()
                .map(|hole| ctx.round.olympic(&hole.label, player))
                .sum()
        })
        .collect();

    OlympicStanding {
        players: player_totals(&players, &totals, ctx.directory),
    }
}
