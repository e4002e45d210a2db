use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{
    FairwayResult, MergedScorecard, PlayerDirectory, PlayerId, Round, ScoreDisplay, Stroke,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundSummary {
    pub player_id: PlayerId,
    pub name: String,
    pub strokes: u32,
    /// Par of the holes actually scored, so partial rounds compare fairly.
    pub par_played: i32,
    pub to_par: i32,
    pub holes_played: u32,
    pub holes_skipped: u32,
    pub distribution: BTreeMap<String, u32>,
    pub putts: u32,
    pub fairways_hit: u32,
    pub fairway_attempts: u32,
    pub bunkers: u32,
    pub hazards: u32,
}

/// Negative counts are bad entries and contribute nothing.
fn count(value: Option<i32>) -> u32 {
    value.and_then(|v| u32::try_from(v).ok()).unwrap_or(0)
}

/// Stroke and hole-stat totals for one player on the round's card.
#[must_use]
pub fn summarize_player(
    round: &Round,
    card: &MergedScorecard,
    player: &str,
    directory: &PlayerDirectory,
) -> PlayerRoundSummary {
    let mut summary = PlayerRoundSummary {
        player_id: player.to_string(),
        name: directory.display_name(player),
        ..PlayerRoundSummary::default()
    };

    for hole in card.playable_holes() {
        match round.stroke(&hole.label, player) {
            Stroke::Taken(strokes) => {
                summary.strokes += strokes;
                summary.par_played += hole.par;
                summary.holes_played += 1;
                *summary
                    .distribution
                    .entry(ScoreDisplay::classify(strokes, hole.par).label())
                    .or_insert(0) += 1;
            }
            Stroke::Skipped => summary.holes_skipped += 1,
            Stroke::NotScored => {}
        }

        let Some(stats) = round.stats(&hole.label, player) else {
            continue;
        };
        summary.putts += count(stats.putts);
        summary.bunkers += count(stats.bunkers);
        summary.hazards += count(stats.hazards);
        if hole.par > 3 {
            match stats.fairway {
                Some(FairwayResult::Hit) => {
                    summary.fairways_hit += 1;
                    summary.fairway_attempts += 1;
                }
                Some(FairwayResult::Unknown) | None => {}
                Some(_) => summary.fairway_attempts += 1,
            }
        }
    }

    summary.to_par = i32::try_from(summary.strokes).unwrap_or(i32::MAX) - summary.par_played;
    summary
}

/// Every member's summary, best score to par first.
#[must_use]
pub fn round_leaderboard(
    round: &Round,
    card: &MergedScorecard,
    directory: &PlayerDirectory,
) -> Vec<PlayerRoundSummary> {
    let mut board: Vec<PlayerRoundSummary> = round
        .member_ids
        .iter()
        .map(|player| summarize_player(round, card, player, directory))
        .collect();
    board.sort_by(|a, b| {
        a.to_par
            .cmp(&b.to_par)
            .then_with(|| b.holes_played.cmp(&a.holes_played))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    board
}
