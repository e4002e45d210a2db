use serde::{Deserialize, Serialize};

use super::common::{GameContext, PlayerTotal, player_totals};
use crate::model::{PlayerId, RoundGame};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum SkinsHoleResult {
    /// Not every player has strokes on the hole; the pot is untouched.
    Skipped,
    #[serde(rename_all = "camelCase")]
    Won { player_id: PlayerId, skins: u32 },
    /// No single eligible winner; `pot` is the value carried to the next hole.
    Carried { pot: u32 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkinsHole {
    pub hole: String,
    #[serde(flatten)]
    pub result: SkinsHoleResult,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkinsStanding {
    pub players: Vec<PlayerTotal>,
    pub holes: Vec<SkinsHole>,
    /// Value of the pot after the last visited hole.
    pub pot: u32,
}

#[must_use]
pub fn compute_skins(ctx: &GameContext<'_>, game: &RoundGame) -> SkinsStanding {
    let players = game.participants(ctx.members());
    let max_skins = game.skins_cap(ctx.config.default_max_skins);
    let mut totals = vec![0i32; players.len()];
    let mut holes = Vec::new();
    let mut pot = 1u32;

    for hole in ctx.holes_from(game.starting_hole()) {
        if players.is_empty() {
            break;
        }
        let label = &hole.label;
        let raws: Option<Vec<u32>> = players
            .iter()
            .map(|p| ctx.round.strokes(label, p))
            .collect();
        let Some(raws) = raws else {
            holes.push(SkinsHole {
                hole: label.clone(),
                result: SkinsHoleResult::Skipped,
            });
            continue;
        };

        let nets: Vec<f64> = players
            .iter()
            .zip(&raws)
            .map(|(p, &raw)| f64::from(raw) - game.handicap(label, p))
            .collect();
        let threshold = game.skins_mode.threshold(game.hole_par(label, hole.par));
        let eligible: Vec<usize> = (0..players.len())
            .filter(|&i| threshold.is_none_or(|t| nets[i] <= t))
            .collect();
        let best = eligible
            .iter()
            .map(|&i| nets[i])
            .min_by(f64::total_cmp);
        let winners: Vec<usize> = match best {
            Some(best) => eligible.into_iter().filter(|&i| nets[i] == best).collect(),
            None => Vec::new(),
        };

        let result = if let &[winner] = winners.as_slice() {
            totals[winner] += i32::try_from(pot).unwrap_or(i32::MAX);
            let won = SkinsHoleResult::Won {
                player_id: players[winner].clone(),
                skins: pot,
            };
            pot = 1;
            won
        } else {
            pot = match max_skins {
                Some(max) => (pot + 1).min(max),
                None => pot + 1,
            };
            log::debug!("game {} hole {label}: no single winner, pot now {pot}", game.id);
            SkinsHoleResult::Carried { pot }
        };
        holes.push(SkinsHole {
            hole: label.clone(),
            result,
        });
    }

    SkinsStanding {
        players: player_totals(&players, &totals, ctx.directory),
        holes,
        pot,
    }
}
