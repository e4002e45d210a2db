#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rusty_golf_games::EngineConfig;
use rusty_golf_games::model::{
    GameType, MergedScorecard, PlayerDirectory, PlayerProfile, Round, RoundGame, ScoreCell,
    Scorecard, ScorecardSide,
};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).single().unwrap()
}

/// Two hours before `now()`, so a round started then is not yet stale.
pub fn recent() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 16, 0, 0).single().unwrap()
}

pub fn config() -> EngineConfig {
    EngineConfig::default()
}

pub fn directory() -> PlayerDirectory {
    PlayerDirectory::new([
        PlayerProfile {
            id: "alice".to_string(),
            name: "Alice Aces".to_string(),
        },
        PlayerProfile {
            id: "bob".to_string(),
            name: "Bob Bogey".to_string(),
        },
    ])
}

/// Hole cells `1..=pars.len()` with par and stroke index rows on the back tees.
pub fn card(id: &str, name: &str, pars: &[i32], handicaps: &[i32]) -> Scorecard {
    Scorecard {
        id: id.to_string(),
        name: name.to_string(),
        course_name: "Pine Valley".to_string(),
        holes: (1..=pars.len()).map(|n| ScoreCell::hole(n.to_string())).collect(),
        back_tee: Some(ScorecardSide {
            par: pars.iter().map(|p| ScoreCell::hole_value(p.to_string())).collect(),
            handicap: handicaps
                .iter()
                .map(|h| ScoreCell::hole_value(h.to_string()))
                .collect(),
            tees: Vec::new(),
        }),
        forward_tee: None,
    }
}

/// A nine with `Out` and `Total` columns after the holes.
pub fn nine_with_sides(id: &str, name: &str, handicaps: &[i32; 9]) -> Scorecard {
    let mut sc = card(id, name, &[4; 9], handicaps);
    sc.holes.push(ScoreCell::side("Out"));
    sc.holes.push(ScoreCell::side("Total"));
    let side = sc.back_tee.as_mut().unwrap();
    side.par.push(ScoreCell::side_value("36"));
    side.par.push(ScoreCell::side_value("36"));
    side.handicap.push(ScoreCell::side_value(""));
    side.handicap.push(ScoreCell::side_value(""));
    sc
}

pub fn round_on(cards: Vec<Scorecard>, members: &[&str]) -> Round {
    let mut round = Round::new("r1", members[0], recent());
    round.member_ids = members.iter().map(|m| m.to_string()).collect();
    round.selected_scorecard_ids = cards.iter().map(|c| c.id.clone()).collect();
    round.scorecards = cards;
    round
}

/// Record strokes hole by hole starting at hole 1.
pub fn score(round: &mut Round, player: &str, strokes: &[i32]) {
    for (idx, s) in strokes.iter().enumerate() {
        round
            .score
            .entry((idx + 1).to_string())
            .or_default()
            .insert(player.to_string(), *s);
    }
}

pub fn game(kind: GameType, players: &[&str]) -> RoundGame {
    let mut game = RoundGame::new("g1", kind);
    game.player_ids = players.iter().map(|p| p.to_string()).collect();
    game
}

pub fn ids(players: &[&str]) -> Vec<String> {
    players.iter().map(|p| p.to_string()).collect()
}

pub fn merged(round: &Round) -> MergedScorecard {
    rusty_golf_games::merge_round_scorecards(round)
}
