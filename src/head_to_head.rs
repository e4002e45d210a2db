use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::games::{
    GameContext, HorseOutcome, HorseSegmentResult, compute_horse, compute_match,
    compute_olympic, compute_skins, find_total,
};
use crate::model::{GameType, HorseSegment, PlayerDirectory, Round, RoundGame};
use crate::scorecard::merge_round_scorecards;

/// Record for formats settled in points (one-vs-one and team games).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub net_points: i32,
}

impl PointRecord {
    pub fn record(&mut self, value: i32) {
        self.games += 1;
        match value.signum() {
            1 => self.wins += 1,
            -1 => self.losses += 1,
            _ => self.ties += 1,
        }
        self.net_points += value;
    }
}

/// Record for formats settled by score totals (skins, olympic, horse).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub net_score: i32,
}

impl ScoreRecord {
    pub fn record(&mut self, value: i32) {
        self.games += 1;
        if value == 0 {
            self.ties += 1;
            return;
        }
        self.net_score += value;
        if value > 0 {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}

/// Lifetime comparison of one player against another, from the first
/// player's side.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHead {
    pub one_v_one: PointRecord,
    pub same_team: PointRecord,
    pub opposite_team: PointRecord,
    pub skins: ScoreRecord,
    pub olympic: ScoreRecord,
    pub horse: ScoreRecord,
}

impl HeadToHead {
    #[must_use]
    pub fn has_any_games(&self) -> bool {
        [self.one_v_one, self.same_team, self.opposite_team]
            .iter()
            .any(|r| r.games > 0)
            || [self.skins, self.olympic, self.horse]
                .iter()
                .any(|r| r.games > 0)
    }
}

/// Fold `me`'s round history into records against `other`.
///
/// Only rounds that are not deleted, are finished as of `now`, and have
/// both players as members count.
#[must_use]
pub fn head_to_head(
    me: &str,
    other: &str,
    rounds: &[Round],
    directory: &PlayerDirectory,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> HeadToHead {
    let mut record = HeadToHead::default();

    for round in rounds {
        if round.is_deleted() || !round.is_member(me) || !round.is_member(other) {
            continue;
        }
        let card = merge_round_scorecards(round);
        if !round.is_finished(&card, now, config.finished_after()) {
            log::debug!("round {} is not finished yet, skipped", round.id);
            continue;
        }
        let ctx = GameContext::new(round, &card, directory, config);
        for game in &round.games {
            fold_game(&mut record, &ctx, game, me, other);
        }
    }

    record
}

fn fold_game(
    record: &mut HeadToHead,
    ctx: &GameContext<'_>,
    game: &RoundGame,
    me: &str,
    other: &str,
) {
    match &game.game_type {
        GameType::OneVsOne | GameType::TeamVs => {
            let members = ctx.members();
            let (Some(my_side), Some(other_side)) =
                (game.side_of(me, members), game.side_of(other, members))
            else {
                return;
            };
            let value = compute_match(ctx, game).net_for(my_side);
            if game.game_type == GameType::OneVsOne {
                record.one_v_one.record(value);
            }
            if my_side == other_side {
                record.same_team.record(value);
            } else if game.game_type == GameType::TeamVs {
                record.opposite_team.record(value);
            }
        }
        GameType::Skins => {
            let standing = compute_skins(ctx, game);
            if let (Some(mine), Some(theirs)) =
                (find_total(&standing.players, me), find_total(&standing.players, other))
            {
                record.skins.record(mine.total - theirs.total);
            }
        }
        GameType::Olympic => {
            let standing = compute_olympic(ctx, game);
            if let (Some(mine), Some(theirs)) =
                (find_total(&standing.players, me), find_total(&standing.players, other))
            {
                record.olympic.record(mine.total - theirs.total);
            }
        }
        GameType::Horse => {
            if let Some(value) = horse_differential(ctx, game, me, other) {
                record.horse.record(value);
            }
        }
        GameType::Other(_) => {}
    }
}

/// Segment wins of `me` minus those of `other`, over segments both players
/// have settled against a positive target. `None` when no segment qualifies.
fn horse_differential(
    ctx: &GameContext<'_>,
    game: &RoundGame,
    me: &str,
    other: &str,
) -> Option<i32> {
    let standing = compute_horse(ctx, game);
    let mine = standing.player(me)?;
    let theirs = standing.player(other)?;

    let mut counted = false;
    let (mut my_wins, mut other_wins) = (0, 0);
    for segment in HorseSegment::ALL {
        let (Some(a), Some(b)) = (mine.segment(segment), theirs.segment(segment)) else {
            continue;
        };
        let settled =
            |s: &HorseSegmentResult| s.outcome != HorseOutcome::Pending && s.target > 0;
        if !settled(a) || !settled(b) {
            continue;
        }
        counted = true;
        if a.outcome == HorseOutcome::Win {
            my_wins += 1;
        }
        if b.outcome == HorseOutcome::Win {
            other_wins += 1;
        }
    }
    counted.then_some(my_wins - other_wins)
}
