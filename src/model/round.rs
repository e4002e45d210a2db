use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::game::RoundGame;
use super::player::PlayerId;
use super::score::Stroke;
use super::scorecard::{MergedScorecard, Scorecard};
use crate::error::GolfError;

/// `hole label -> player id -> value`
pub type HoleTable<T> = BTreeMap<String, BTreeMap<PlayerId, T>>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FairwayResult {
    Hit,
    Left,
    Right,
    Short,
    Long,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HoleStats {
    pub fairway: Option<FairwayResult>,
    pub putts: Option<i32>,
    pub bunkers: Option<i32>,
    pub hazards: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub admin_id: PlayerId,
    #[serde(default)]
    pub member_ids: Vec<PlayerId>,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub selected_scorecard_ids: Vec<String>,
    #[serde(default)]
    pub scorecards: Vec<Scorecard>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub score: HoleTable<i32>,
    #[serde(default)]
    pub olympic_points: HoleTable<i32>,
    #[serde(default)]
    pub hole_stats: HoleTable<HoleStats>,
    #[serde(default)]
    pub games: Vec<RoundGame>,
}

impl Round {
    /// A freshly started round: the admin is its only member.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        admin_id: impl Into<PlayerId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let admin_id = admin_id.into();
        Self {
            id: id.into(),
            member_ids: vec![admin_id.clone()],
            admin_id,
            course_name: String::new(),
            selected_scorecard_ids: Vec::new(),
            scorecards: Vec::new(),
            created_at,
            ended_at: None,
            deleted_at: None,
            score: BTreeMap::new(),
            olympic_points: BTreeMap::new(),
            hole_stats: BTreeMap::new(),
            games: Vec::new(),
        }
    }

    /// Parse a stored round snapshot and normalize its games.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the json is not a valid round document
    pub fn from_json_str(json: &str) -> Result<Self, GolfError> {
        let mut round: Round = serde_json::from_str(json)?;
        round.normalize();
        Ok(round)
    }

    /// Parse a list of stored rounds, normalizing each.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the json is not an array of round documents
    pub fn list_from_json_str(json: &str) -> Result<Vec<Self>, GolfError> {
        let mut rounds: Vec<Round> = serde_json::from_str(json)?;
        for round in &mut rounds {
            round.normalize();
        }
        Ok(rounds)
    }

    pub fn normalize(&mut self) {
        if !self.member_ids.contains(&self.admin_id) && !self.admin_id.is_empty() {
            self.member_ids.insert(0, self.admin_id.clone());
        }
        let mut seen: Vec<PlayerId> = Vec::with_capacity(self.member_ids.len());
        self.member_ids.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(id.clone());
                true
            }
        });
        let members = self.member_ids.clone();
        for game in &mut self.games {
            game.normalize(&members);
        }
    }

    #[must_use]
    pub fn is_member(&self, player: &str) -> bool {
        self.member_ids.iter().any(|m| m == player)
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    #[must_use]
    pub fn stroke(&self, hole: &str, player: &str) -> Stroke {
        Stroke::from(self.score.get(hole).and_then(|m| m.get(player)).copied())
    }

    /// Strokes taken on a hole, `None` when unscored or skipped.
    #[must_use]
    pub fn strokes(&self, hole: &str, player: &str) -> Option<u32> {
        self.stroke(hole, player).taken()
    }

    #[must_use]
    pub fn olympic(&self, hole: &str, player: &str) -> i32 {
        self.olympic_points
            .get(hole)
            .and_then(|m| m.get(player))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn stats(&self, hole: &str, player: &str) -> Option<&HoleStats> {
        self.hole_stats.get(hole).and_then(|m| m.get(player))
    }

    /// The scorecards selected for play, in selection order. Falls back to
    /// every attached card when nothing is selected.
    #[must_use]
    pub fn selected_scorecards(&self) -> Vec<&Scorecard> {
        if self.selected_scorecard_ids.is_empty() {
            return self.scorecards.iter().collect();
        }
        self.selected_scorecard_ids
            .iter()
            .filter_map(|id| {
                let found = self.scorecards.iter().find(|s| &s.id == id);
                if found.is_none() {
                    log::debug!("round {}: selected scorecard {id} is not attached", self.id);
                }
                found
            })
            .collect()
    }

    /// Ended explicitly, older than the configured window, or every member
    /// has strokes on every playable hole.
    #[must_use]
    pub fn is_finished(
        &self,
        card: &MergedScorecard,
        now: DateTime<Utc>,
        finished_after: Duration,
    ) -> bool {
        if self.ended_at.is_some() {
            return true;
        }
        if now - self.created_at > finished_after {
            return true;
        }
        let holes = card.playable_holes();
        !holes.is_empty()
            && !self.member_ids.is_empty()
            && holes.iter().all(|hole| {
                self.member_ids
                    .iter()
                    .all(|player| self.strokes(&hole.label, player).is_some())
            })
    }
}
