use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::player::PlayerId;
use super::score::ScoreDisplay;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameType {
    OneVsOne,
    TeamVs,
    Skins,
    Olympic,
    Horse,
    /// A type this engine does not score; the tag is kept as stored.
    Other(String),
}

impl From<String> for GameType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "oneVsOne" => GameType::OneVsOne,
            "teamVs" => GameType::TeamVs,
            "skins" => GameType::Skins,
            "olympic" => GameType::Olympic,
            "horse" => GameType::Horse,
            _ => GameType::Other(value),
        }
    }
}

impl From<GameType> for String {
    fn from(value: GameType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameType::OneVsOne => "oneVsOne",
            GameType::TeamVs => "teamVs",
            GameType::Skins => "skins",
            GameType::Olympic => "olympic",
            GameType::Horse => "horse",
            GameType::Other(tag) => tag.as_str(),
        };
        write!(f, "{s}")
    }
}

/// Which net scores qualify for a skin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum SkinsMode {
    BirdieOrBetter,
    ParOrBetter,
    BogeyOrBetter,
    #[default]
    LowestStroke,
}

impl SkinsMode {
    /// Highest net score still eligible on a hole of the given par.
    /// `None` means any score is eligible.
    #[must_use]
    pub fn threshold(self, par: i32) -> Option<f64> {
        match self {
            SkinsMode::BirdieOrBetter => Some(f64::from(par - 1)),
            SkinsMode::ParOrBetter => Some(f64::from(par)),
            SkinsMode::BogeyOrBetter => Some(f64::from(par + 1)),
            SkinsMode::LowestStroke => None,
        }
    }
}

impl From<i32> for SkinsMode {
    fn from(value: i32) -> Self {
        match value {
            -1 => SkinsMode::BirdieOrBetter,
            0 => SkinsMode::ParOrBetter,
            1 => SkinsMode::BogeyOrBetter,
            _ => SkinsMode::LowestStroke,
        }
    }
}

impl From<SkinsMode> for i32 {
    fn from(value: SkinsMode) -> Self {
        match value {
            SkinsMode::BirdieOrBetter => -1,
            SkinsMode::ParOrBetter => 0,
            SkinsMode::BogeyOrBetter => 1,
            SkinsMode::LowestStroke => 100,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorseSegment {
    Front,
    Back,
    Total,
}

impl HorseSegment {
    pub const ALL: [HorseSegment; 3] = [
        HorseSegment::Front,
        HorseSegment::Back,
        HorseSegment::Total,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            HorseSegment::Front => "front",
            HorseSegment::Back => "back",
            HorseSegment::Total => "total",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Red,
    Blue,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HolePoints {
    pub par: Option<i32>,
    #[serde(alias = "pointValue")]
    pub point: Option<i32>,
}

/// Multipliers as configured on a game; unset values fall back to the
/// engine defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreMultipliers {
    pub hole_in_one: Option<i32>,
    pub albatross: Option<i32>,
    pub eagle: Option<i32>,
    pub birdie: Option<i32>,
}

impl ScoreMultipliers {
    #[must_use]
    pub fn resolve(&self, defaults: &Multipliers) -> Multipliers {
        Multipliers {
            hole_in_one: self.hole_in_one.unwrap_or(defaults.hole_in_one),
            albatross: self.albatross.unwrap_or(defaults.albatross),
            eagle: self.eagle.unwrap_or(defaults.eagle),
            birdie: self.birdie.unwrap_or(defaults.birdie),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Multipliers {
    pub hole_in_one: i32,
    pub albatross: i32,
    pub eagle: i32,
    pub birdie: i32,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            hole_in_one: 20,
            albatross: 10,
            eagle: 5,
            birdie: 2,
        }
    }
}

impl Multipliers {
    #[must_use]
    pub fn for_score(&self, strokes: u32, par: i32) -> i32 {
        match ScoreDisplay::classify(strokes, par) {
            ScoreDisplay::HoleInOne => self.hole_in_one,
            ScoreDisplay::Albatross => self.albatross,
            ScoreDisplay::Eagle => self.eagle,
            ScoreDisplay::Birdie => self.birdie,
            _ => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundGame {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub game_type: GameType,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub red_team_ids: Vec<PlayerId>,
    #[serde(default)]
    pub blue_team_ids: Vec<PlayerId>,
    #[serde(default)]
    pub handicap_strokes: BTreeMap<String, BTreeMap<PlayerId, f64>>,
    #[serde(default)]
    pub hole_points: BTreeMap<String, HolePoints>,
    #[serde(default)]
    pub multipliers: ScoreMultipliers,
    /// Stored as entered; zero or negative values fall back to one.
    #[serde(default)]
    pub score_count_mode: Option<i64>,
    #[serde(default)]
    pub skins_mode: SkinsMode,
    /// Zero or negative means an uncapped pot.
    #[serde(default)]
    pub max_skins: Option<i64>,
    #[serde(default)]
    pub skins_starting_hole: Option<i64>,
    #[serde(default)]
    pub horse_settings: BTreeMap<String, BTreeMap<PlayerId, i32>>,
}

impl RoundGame {
    #[must_use]
    pub fn new(id: impl Into<String>, game_type: GameType) -> Self {
        Self {
            id: id.into(),
            game_type,
            name: None,
            player_ids: Vec::new(),
            red_team_ids: Vec::new(),
            blue_team_ids: Vec::new(),
            handicap_strokes: BTreeMap::new(),
            hole_points: BTreeMap::new(),
            multipliers: ScoreMultipliers::default(),
            score_count_mode: None,
            skins_mode: SkinsMode::default(),
            max_skins: None,
            skins_starting_hole: None,
            horse_settings: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn handicap(&self, hole: &str, player: &str) -> f64 {
        self.handicap_strokes
            .get(hole)
            .and_then(|m| m.get(player))
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn hole_point(&self, hole: &str) -> i32 {
        self.hole_points
            .get(hole)
            .and_then(|p| p.point)
            .unwrap_or(1)
    }

    #[must_use]
    pub fn hole_par(&self, hole: &str, card_par: i32) -> i32 {
        self.hole_points
            .get(hole)
            .and_then(|p| p.par)
            .filter(|p| *p > 0)
            .unwrap_or(card_par)
    }

    /// How many ranked scores per side count on a hole.
    #[must_use]
    pub fn count_mode(&self) -> usize {
        self.score_count_mode
            .and_then(|k| usize::try_from(k).ok())
            .unwrap_or(1)
            .max(1)
    }

    /// Cap on the skins pot, `None` when uncapped. Falls back to the engine
    /// default only when the game leaves it unset.
    #[must_use]
    pub fn skins_cap(&self, default: Option<u32>) -> Option<u32> {
        self.max_skins
            .or(default.map(i64::from))
            .and_then(|m| u32::try_from(m).ok())
            .filter(|m| *m > 0)
    }

    /// First hole visited by skins and olympic; unusable values mean hole 1.
    #[must_use]
    pub fn starting_hole(&self) -> Option<u32> {
        self.skins_starting_hole
            .and_then(|h| u32::try_from(h).ok())
            .filter(|h| *h > 0)
    }

    #[must_use]
    pub fn horse_target(&self, segment: HorseSegment, player: &str) -> Option<i32> {
        self.horse_settings
            .get(segment.key())
            .and_then(|m| m.get(player))
            .copied()
    }

    /// Configured players that are members of the round, first occurrence wins.
    #[must_use]
    pub fn participants(&self, members: &[PlayerId]) -> Vec<PlayerId> {
        only_members(&self.player_ids, members)
    }

    /// Red and blue sides restricted to round members. A one-vs-one game with
    /// no explicit teams pits its first two players against each other.
    #[must_use]
    pub fn sides(&self, members: &[PlayerId]) -> (Vec<PlayerId>, Vec<PlayerId>) {
        let red = only_members(&self.red_team_ids, members);
        let blue = only_members(&self.blue_team_ids, members);
        if red.is_empty() && blue.is_empty() && self.game_type == GameType::OneVsOne {
            let players = self.participants(members);
            if let [first, second, ..] = players.as_slice() {
                return (vec![first.clone()], vec![second.clone()]);
            }
        }
        (red, blue)
    }

    #[must_use]
    pub fn side_of(&self, player: &str, members: &[PlayerId]) -> Option<Side> {
        let (red, blue) = self.sides(members);
        if red.iter().any(|p| p == player) {
            Some(Side::Red)
        } else if blue.iter().any(|p| p == player) {
            Some(Side::Blue)
        } else {
            None
        }
    }

    /// Drop ids that are not round members, duplicates, and empty handicap
    /// entries. Meant to run once when a round is loaded.
    pub fn normalize(&mut self, members: &[PlayerId]) {
        self.player_ids = only_members(&self.player_ids, members);
        self.red_team_ids = only_members(&self.red_team_ids, members);
        self.blue_team_ids = only_members(&self.blue_team_ids, members);
        for per_player in self.handicap_strokes.values_mut() {
            per_player.retain(|id, strokes| members.contains(id) && strokes.is_finite());
        }
        self.handicap_strokes.retain(|_, per_player| !per_player.is_empty());
    }
}

fn only_members(ids: &[PlayerId], members: &[PlayerId]) -> Vec<PlayerId> {
    let mut out: Vec<PlayerId> = Vec::with_capacity(ids.len());
    for id in ids {
        if members.contains(id) && !out.contains(id) {
            out.push(id.clone());
        }
    }
    out
}
