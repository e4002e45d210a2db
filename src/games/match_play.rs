use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::common::GameContext;
use crate::model::{GameType, PlayerId, RoundGame, Side};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchHole {
    pub hole: String,
    pub red_points: i32,
    pub blue_points: i32,
}

/// Head-to-head standing of a one-vs-one or team game. `net` is red minus
/// blue: positive favors red, negative favors blue.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchStanding {
    pub red: Vec<PlayerId>,
    pub blue: Vec<PlayerId>,
    pub red_points: i32,
    pub blue_points: i32,
    pub net: i32,
    pub holes: Vec<MatchHole>,
}

impl MatchStanding {
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.net.cmp(&0) {
            Ordering::Greater => Some(Side::Red),
            Ordering::Less => Some(Side::Blue),
            Ordering::Equal => None,
        }
    }

    /// The differential seen from one side.
    #[must_use]
    pub fn net_for(&self, side: Side) -> i32 {
        match side {
            Side::Red => self.net,
            Side::Blue => -self.net,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Ranked {
    raw: u32,
    adjusted: f64,
}

/// Scored players of one side on a hole, best raw score first.
fn ranked_scores(
    ctx: &GameContext<'_>,
    game: &RoundGame,
    hole: &str,
    side: &[PlayerId],
) -> Vec<Ranked> {
    let mut scores: Vec<(Ranked, &PlayerId)> = side
        .iter()
        .filter_map(|player| {
            let raw = ctx.round.strokes(hole, player)?;
            let adjusted = f64::from(raw) + game.handicap(hole, player);
            Some((Ranked { raw, adjusted }, player))
        })
        .collect();
    scores.sort_by(|(a, a_id), (b, b_id)| {
        a.raw
            .cmp(&b.raw)
            .then_with(|| a.adjusted.total_cmp(&b.adjusted))
            .then_with(|| a_id.cmp(b_id))
    });
    scores.into_iter().map(|(r, _)| r).collect()
}

#[must_use]
pub fn compute_match(ctx: &GameContext<'_>, game: &RoundGame) -> MatchStanding {
    let (red, blue) = game.sides(ctx.members());
    let count = if game.game_type == GameType::OneVsOne {
        1
    } else {
        game.count_mode()
    };
    let multipliers = game.multipliers.resolve(&ctx.config.default_multipliers);

    let mut standing = MatchStanding {
        red,
        blue,
        red_points: 0,
        blue_points: 0,
        net: 0,
        holes: Vec::new(),
    };

    for hole in &ctx.holes {
        let red_scores = ranked_scores(ctx, game, &hole.label, &standing.red);
        let blue_scores = ranked_scores(ctx, game, &hole.label, &standing.blue);
        if red_scores.is_empty() || blue_scores.is_empty() {
            continue;
        }

        let par = game.hole_par(&hole.label, hole.par);
        let weight = game.hole_point(&hole.label);
        let mut result = MatchHole {
            hole: hole.label.clone(),
            red_points: 0,
            blue_points: 0,
        };

        for rank in 0..count {
            let (Some(r), Some(b)) = (red_scores.get(rank), blue_scores.get(rank)) else {
                continue;
            };
            match r.adjusted.total_cmp(&b.adjusted) {
                Ordering::Less => {
                    result.red_points += weight * multipliers.for_score(r.raw, par);
                }
                Ordering::Greater => {
                    result.blue_points += weight * multipliers.for_score(b.raw, par);
                }
                Ordering::Equal => {}
            }
        }

        log::trace!(
            "game {} hole {}: red {} blue {}",
            game.id,
            hole.label,
            result.red_points,
            result.blue_points
        );
        standing.red_points += result.red_points;
        standing.blue_points += result.blue_points;
        standing.net += result.red_points - result.blue_points;
        standing.holes.push(result);
    }

    standing
}
