mod common;

use crate::common::{card, nine_with_sides};
use pretty_assertions::assert_eq;
use rusty_golf_games::merge_scorecards;
use rusty_golf_games::model::{MergedScorecard, ScoreCell, ScorecardSide};

fn values(row: &[ScoreCell]) -> Vec<String> {
    row.iter().map(|c| c.value.clone().unwrap_or_default()).collect()
}

fn labels(card: &MergedScorecard) -> Vec<String> {
    card.holes
        .iter()
        .map(|c| c.label.clone().unwrap_or_default())
        .collect()
}

fn assert_every_hole_has_par(card: &MergedScorecard) {
    assert!(card.is_aligned());
    for (idx, cell) in card.holes.iter().enumerate() {
        if cell.is_hole() {
            assert!(card.par[idx].has_value(), "hole at {idx} lost its par");
        }
    }
}

#[test]
fn single_card_drops_holes_without_par() {
    let mut sc = card("a", "Front", &[4, 3, 5], &[2, 3, 1]);
    sc.back_tee.as_mut().unwrap().par[1].value = Some("  ".to_string());
    sc.holes.push(ScoreCell::side("Out"));
    sc.back_tee.as_mut().unwrap().par.push(ScoreCell::side_value("12"));

    let merged = merge_scorecards(&[&sc], "Pine Valley");

    assert_eq!(merged.name, "Front");
    assert_eq!(labels(&merged), vec!["1", "3", "Out"]);
    assert_eq!(values(&merged.par), vec!["4", "5", "12"]);
    assert_eq!(values(&merged.handicap), vec!["2", "1", ""]);
    assert_every_hole_has_par(&merged);
}

#[test]
fn short_rows_are_padded_not_fatal() {
    let mut sc = card("a", "Front", &[4, 4, 4], &[1, 2, 3]);
    let side = sc.back_tee.as_mut().unwrap();
    side.par.truncate(2);
    side.handicap.truncate(1);

    let merged = merge_scorecards(&[&sc], "");

    assert_eq!(labels(&merged), vec!["1", "2"]);
    assert_eq!(values(&merged.handicap), vec!["1", ""]);
    assert_every_hole_has_par(&merged);
}

#[test]
fn forward_tees_used_when_back_tees_missing() {
    let mut sc = card("a", "", &[3, 4], &[2, 1]);
    sc.forward_tee = sc.back_tee.take();
    sc.back_tee = Some(ScorecardSide::default());

    let merged = merge_scorecards(&[&sc], "Pine Valley");

    assert_eq!(merged.name, "Pine Valley");
    assert_eq!(merged.total_par(), 7);
    let holes = merged.playable_holes();
    assert_eq!(holes[0].handicap, 2);
    assert_eq!(holes[1].number, Some(2));
}

#[test]
fn two_nines_become_one_eighteen_hole_card() {
    let front = nine_with_sides("a", "Red", &[5, 1, 7, 3, 9, 2, 8, 4, 6]);
    let back = nine_with_sides("b", "White", &[1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let merged = merge_scorecards(&[&front, &back], "Pine Valley");

    assert_eq!(merged.name, "Red / White");
    let expected_labels: Vec<String> = (1..=9)
        .map(|n| n.to_string())
        .chain(["Out".to_string()])
        .chain((10..=18).map(|n| n.to_string()))
        .chain(["In".to_string(), "Total".to_string()])
        .collect();
    assert_eq!(labels(&merged), expected_labels);

    // one Total column left, carrying both nines
    assert_eq!(merged.holes.iter().filter(|c| c.label_is("Total")).count(), 1);
    assert_eq!(merged.par.last().and_then(ScoreCell::parsed_value), Some(72));

    let holes = merged.playable_holes();
    let front_idx: Vec<i32> = holes[..9].iter().map(|h| h.handicap).collect();
    let back_idx: Vec<i32> = holes[9..].iter().map(|h| h.handicap).collect();
    assert_eq!(front_idx, vec![9, 1, 13, 5, 17, 3, 15, 7, 11]);
    assert_eq!(back_idx, vec![2, 4, 6, 8, 10, 12, 14, 16, 18]);

    let mut all: Vec<i32> = holes.iter().map(|h| h.handicap).collect();
    all.sort_unstable();
    assert_eq!(all, (1..=18).collect::<Vec<i32>>());
    assert_every_hole_has_par(&merged);
}

#[test]
fn two_uneven_cards_still_get_unique_indices() {
    let front = card("a", "Nine", &[4; 9], &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let back = card("b", "Loop", &[3, 3, 3], &[3, 1, 2]);

    let merged = merge_scorecards(&[&front, &back], "");

    let holes = merged.playable_holes();
    assert_eq!(holes.len(), 12);
    assert_eq!(holes[9].label, "10");
    assert_eq!(holes[11].number, Some(12));
    let mut all: Vec<i32> = holes.iter().map(|h| h.handicap).collect();
    all.sort_unstable();
    assert_eq!(all, (1..=12).collect::<Vec<i32>>());
    // hardest hole of the loop is its second
    assert_eq!(holes[10].handicap, 2);
}

#[test]
fn back_card_labels_keep_their_text_when_renumbered() {
    let front = card("a", "Front", &[4, 4], &[1, 2]);
    let mut back = card("b", "Back", &[4, 4, 3], &[1, 2, 3]);
    back.holes[0].label = Some("Hole 1".to_string());
    back.holes[1].label = Some("No. 2".to_string());
    back.holes[2].label = Some("Lake".to_string());

    let merged = merge_scorecards(&[&front, &back], "");

    assert_eq!(labels(&merged), vec!["1", "2", "Hole 3", "No. 4", "5"]);
    let numbers: Vec<Option<u32>> = merged.playable_holes().iter().map(|h| h.number).collect();
    assert_eq!(numbers, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
}

#[test]
fn three_cards_are_concatenated_without_renumbering() {
    let a = card("a", "A", &[4, 4], &[1, 2]);
    let b = card("b", "B", &[3, 3], &[1, 2]);
    let c = card("c", "", &[5], &[1]);

    let merged = merge_scorecards(&[&a, &b, &c], "");

    assert_eq!(merged.name, "A / B");
    assert_eq!(labels(&merged), vec!["1", "2", "1", "2", "1"]);
    assert_eq!(values(&merged.handicap), vec!["1", "2", "1", "2", "1"]);
}

#[test]
fn no_cards_yields_an_empty_named_card() {
    let merged = merge_scorecards(&[], "Pine Valley");
    assert_eq!(merged.name, "Pine Valley");
    assert!(merged.holes.is_empty());
    assert!(merged.is_aligned());
}
