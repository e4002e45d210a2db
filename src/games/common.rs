use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::model::{MergedScorecard, PlayableHole, PlayerDirectory, PlayerId, Round};

/// Everything a game computation reads. Built once per round.
#[derive(Debug, Clone)]
pub struct GameContext<'a> {
    pub round: &'a Round,
    pub holes: Vec<PlayableHole>,
    pub directory: &'a PlayerDirectory,
    pub config: &'a EngineConfig,
}

impl<'a> GameContext<'a> {
    #[must_use]
    pub fn new(
        round: &'a Round,
        card: &MergedScorecard,
        directory: &'a PlayerDirectory,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            round,
            holes: card.playable_holes(),
            directory,
            config,
        }
    }

    #[must_use]
    pub fn members(&self) -> &[PlayerId] {
        &self.round.member_ids
    }

    /// Holes starting at the given hole number and wrapping around. An
    /// unknown start keeps card order.
    #[must_use]
    pub fn holes_from(&self, start: Option<u32>) -> Vec<&PlayableHole> {
        let start = start.unwrap_or(1);
        let first = self
            .holes
            .iter()
            .position(|h| h.number == Some(start))
            .unwrap_or(0);
        self.holes[first..]
            .iter()
            .chain(&self.holes[..first])
            .collect()
    }
}

/// A player's total in a points format and the round-robin differential
/// against everyone else in the game.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTotal {
    pub player_id: PlayerId,
    pub name: String,
    pub total: i32,
    pub net: i32,
}

/// `net_i = sum over j != i of (total_i - total_j)`
#[must_use]
pub fn round_robin_net(totals: &[i32]) -> Vec<i32> {
    let n = i32::try_from(totals.len()).unwrap_or(0);
    let sum: i32 = totals.iter().sum();
    totals.iter().map(|t| n * t - sum).collect()
}

#[must_use]
pub fn player_totals(
    players: &[PlayerId],
    totals: &[i32],
    directory: &PlayerDirectory,
) -> Vec<PlayerTotal> {
    players
        .iter()
        .zip(totals)
        .zip(round_robin_net(totals))
        .map(|((id, &total), net)| PlayerTotal {
            player_id: id.clone(),
            name: directory.display_name(id),
            total,
            net,
        })
        .collect()
}

#[must_use]
pub fn find_total<'a>(players: &'a [PlayerTotal], player: &str) -> Option<&'a PlayerTotal> {
    players.iter().find(|p| p.player_id == player)
}
