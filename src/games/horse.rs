use serde::{Deserialize, Serialize};

use super::common::{GameContext, round_robin_net};
use crate::model::{HorseSegment, PlayableHole, PlayerId, RoundGame};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HorseOutcome {
    Pending,
    Win,
    Lose,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HorseSegmentResult {
    pub segment: HorseSegment,
    pub target: i32,
    pub strokes: u32,
    /// `target - strokes`; positive means under the target.
    pub diff: i32,
    pub outcome: HorseOutcome,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HorsePlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub segments: Vec<HorseSegmentResult>,
    pub wins: i32,
    pub net: i32,
}

impl HorsePlayer {
    #[must_use]
    pub fn segment(&self, segment: HorseSegment) -> Option<&HorseSegmentResult> {
        self.segments.iter().find(|s| s.segment == segment)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HorseStanding {
    pub players: Vec<HorsePlayer>,
}

impl HorseStanding {
    #[must_use]
    pub fn player(&self, player: &str) -> Option<&HorsePlayer> {
        self.players.iter().find(|p| p.player_id == player)
    }
}

/// Split the card into front and back nines. Numbered holes go by number;
/// unnumbered ones by position, the first nine being the front.
#[must_use]
pub fn segment_holes(holes: &[PlayableHole], segment: HorseSegment) -> Vec<&PlayableHole> {
    holes
        .iter()
        .enumerate()
        .filter(|(idx, hole)| {
            let front = hole.number.map_or(*idx < 9, |n| n <= 9);
            match segment {
                HorseSegment::Front => front,
                HorseSegment::Back => !front,
                HorseSegment::Total => true,
            }
        })
        .map(|(_, hole)| hole)
        .collect()
}

fn segment_result(
    ctx: &GameContext<'_>,
    game: &RoundGame,
    player: &str,
    segment: HorseSegment,
) -> HorseSegmentResult {
    let holes = segment_holes(&ctx.holes, segment);
    let target = game
        .horse_target(segment, player)
        .unwrap_or_else(|| holes.iter().map(|h| game.hole_par(&h.label, h.par)).sum());

    let strokes: Vec<Option<u32>> = holes
        .iter()
        .map(|h| ctx.round.strokes(&h.label, player))
        .collect();
    let sum: u32 = strokes.iter().flatten().sum();
    let complete = !holes.is_empty() && strokes.iter().all(Option::is_some);

    let outcome = if !complete {
        HorseOutcome::Pending
    } else if target > 0 && i64::from(sum) <= i64::from(target) {
        HorseOutcome::Win
    } else {
        HorseOutcome::Lose
    };

    HorseSegmentResult {
        segment,
        target,
        strokes: sum,
        diff: target - i32::try_from(sum).unwrap_or(i32::MAX),
        outcome,
    }
}

#[must_use]
pub fn compute_horse(ctx: &GameContext<'_>, game: &RoundGame) -> HorseStanding {
    let players = game.participants(ctx.members());
    let mut rows: Vec<HorsePlayer> = players
        .iter()
        .map(|player| {
            let segments: Vec<HorseSegmentResult> = HorseSegment::ALL
                .iter()
                .map(|&segment| segment_result(ctx, game, player, segment))
                .collect();
            let wins = i32::try_from(
                segments
                    .iter()
                    .filter(|s| s.outcome == HorseOutcome::Win)
                    .count(),
            )
            .unwrap_or(0);
            HorsePlayer {
                player_id: player.clone(),
                name: ctx.directory.display_name(player),
                segments,
                wins,
                net: 0,
            }
        })
        .collect();

    let wins: Vec<i32> = rows.iter().map(|r| r.wins).collect();
    for (row, net) in rows.iter_mut().zip(round_robin_net(&wins)) {
        row.net = net;
    }
    HorseStanding { players: rows }
}
