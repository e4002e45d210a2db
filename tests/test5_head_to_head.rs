mod common;

use chrono::Duration;
use crate::common::{card, config, directory, game, ids, now, round_on, score};
use pretty_assertions::assert_eq;
use rusty_golf_games::head_to_head::{HeadToHead, PointRecord, ScoreRecord};
use rusty_golf_games::model::{GameType, Round, SkinsMode};
use rusty_golf_games::{EngineConfig, head_to_head};

fn ended(mut round: Round, id: &str) -> Round {
    round.id = id.to_string();
    round.ended_at = Some(now());
    round
}

fn one_v_one_round() -> Round {
    let mut round = round_on(vec![card("a", "Short", &[4, 4, 4], &[1, 2, 3])], &["alice", "bob"]);
    score(&mut round, "alice", &[4, 4, 3]);
    score(&mut round, "bob", &[5, 4, 4]);
    round.games.push(game(GameType::OneVsOne, &["alice", "bob"]));
    round
}

fn team_round(red: &[&str], blue: &[&str], strokes: &[(&str, i32)]) -> Round {
    let mut round = round_on(
        vec![card("a", "Short", &[4], &[1])],
        &["alice", "bob", "carol", "dave"],
    );
    for (player, s) in strokes {
        score(&mut round, player, &[*s]);
    }
    let mut g = game(GameType::TeamVs, &["alice", "bob", "carol", "dave"]);
    g.red_team_ids = ids(red);
    g.blue_team_ids = ids(blue);
    round.games.push(g);
    round
}

fn skins_and_friends_round() -> Round {
    let mut round = round_on(
        vec![card("a", "Nine", &[4; 9], &[1, 2, 3, 4, 5, 6, 7, 8, 9])],
        &["alice", "bob"],
    );
    score(&mut round, "alice", &[3, 4, 4, 4, 4, 4, 4, 4, 5]);
    score(&mut round, "bob", &[4, 3, 4, 4, 4, 4, 4, 4, 6]);

    let mut skins = game(GameType::Skins, &["alice", "bob"]);
    skins.id = "skins".to_string();
    skins.skins_mode = SkinsMode::ParOrBetter;

    let mut olympic = game(GameType::Olympic, &["alice", "bob"]);
    olympic.id = "olympic".to_string();
    let row = round.olympic_points.entry("1".to_string()).or_default();
    row.insert("alice".to_string(), 3);
    row.insert("bob".to_string(), 1);

    let mut horse = game(GameType::Horse, &["alice", "bob"]);
    horse.id = "horse".to_string();

    round.games.extend([skins, olympic, horse]);
    round
}

fn history() -> Vec<Round> {
    let mut deleted = ended(one_v_one_round(), "deleted");
    deleted.deleted_at = Some(now());

    // bob never scored the last hole and the round is only two hours old
    let mut unfinished = one_v_one_round();
    unfinished.id = "unfinished".to_string();
    unfinished.score.get_mut("3").unwrap().remove("bob");

    let mut without_bob = round_on(vec![card("a", "Short", &[4], &[1])], &["alice", "carol"]);
    without_bob.id = "without-bob".to_string();
    score(&mut without_bob, "alice", &[2]);
    score(&mut without_bob, "carol", &[4]);
    without_bob.games.push(game(GameType::OneVsOne, &["alice", "carol"]));

    vec![
        ended(one_v_one_round(), "match"),
        ended(
            team_round(
                &["alice", "bob"],
                &["carol", "dave"],
                &[("alice", 3), ("bob", 5), ("carol", 4), ("dave", 4)],
            ),
            "same-side",
        ),
        ended(
            team_round(
                &["alice", "carol"],
                &["bob", "dave"],
                &[("alice", 4), ("carol", 5), ("bob", 3), ("dave", 5)],
            ),
            "opposite-sides",
        ),
        ended(skins_and_friends_round(), "side-games"),
        deleted,
        unfinished,
        without_bob,
    ]
}

#[test]
fn every_format_lands_in_its_own_record() {
    let record = head_to_head("alice", "bob", &history(), &directory(), now(), &config());

    assert_eq!(
        record,
        HeadToHead {
            one_v_one: PointRecord {
                games: 1,
                wins: 1,
                losses: 0,
                ties: 0,
                net_points: 3,
            },
            same_team: PointRecord {
                games: 1,
                wins: 1,
                losses: 0,
                ties: 0,
                net_points: 2,
            },
            opposite_team: PointRecord {
                games: 1,
                wins: 0,
                losses: 1,
                ties: 0,
                net_points: -2,
            },
            skins: ScoreRecord {
                games: 1,
                wins: 0,
                losses: 0,
                ties: 1,
                net_score: 0,
            },
            olympic: ScoreRecord {
                games: 1,
                wins: 1,
                losses: 0,
                ties: 0,
                net_score: 2,
            },
            horse: ScoreRecord {
                games: 1,
                wins: 1,
                losses: 0,
                ties: 0,
                net_score: 2,
            },
        }
    );
    assert!(record.has_any_games());
}

#[test]
fn other_player_sees_the_mirror_image() {
    let record = head_to_head("bob", "alice", &history(), &directory(), now(), &config());

    assert_eq!(record.one_v_one.net_points, -3);
    assert_eq!(record.one_v_one.losses, 1);
    // teammates share the same result
    assert_eq!(record.same_team.net_points, 2);
    assert_eq!(record.opposite_team.net_points, 2);
    assert_eq!(record.horse.net_score, -2);
    assert_eq!(record.skins.ties, 1);
}

#[test]
fn empty_history_has_no_games() {
    let record = head_to_head("alice", "bob", &[], &directory(), now(), &config());
    assert_eq!(record, HeadToHead::default());
    assert!(!record.has_any_games());
}

#[test]
fn stale_rounds_count_once_the_window_passes() {
    let mut round = round_on(vec![card("a", "Short", &[4, 4], &[1, 2])], &["alice", "bob"]);
    round.created_at = now() - Duration::hours(30);
    score(&mut round, "alice", &[3, 0]);
    score(&mut round, "bob", &[4, 0]);
    round.games.push(game(GameType::OneVsOne, &["alice", "bob"]));
    let rounds = vec![round];

    let record = head_to_head("alice", "bob", &rounds, &directory(), now(), &config());
    assert_eq!(record.one_v_one.net_points, 2);

    let patient = EngineConfig {
        finished_after_hours: 48,
        ..EngineConfig::default()
    };
    let record = head_to_head("alice", "bob", &rounds, &directory(), now(), &patient);
    assert!(!record.has_any_games());
}

#[test]
fn fully_scored_round_counts_without_an_end_time() {
    let round = one_v_one_round();
    assert!(round.ended_at.is_none());

    let record = head_to_head("alice", "bob", &[round], &directory(), now(), &config());
    assert_eq!(record.one_v_one.games, 1);
}

#[test]
fn horse_without_settled_segments_is_not_recorded() {
    let mut round = ended(skins_and_friends_round(), "horse-only");
    round.games.retain(|g| g.game_type == GameType::Horse);
    // alice skipped a hole, so none of her segments settle
    round.score.get_mut("4").unwrap().insert("alice".to_string(), -1);

    let record = head_to_head("alice", "bob", &[round], &directory(), now(), &config());
    assert_eq!(record.horse, ScoreRecord::default());
    assert!(!record.has_any_games());
}
