use super::handicap::interleave;
use crate::model::{CellKind, MergedScorecard, Round, ScoreCell, Scorecard, offset_hole_label};

#[derive(Debug, Clone, Default)]
struct Rows {
    holes: Vec<ScoreCell>,
    par: Vec<ScoreCell>,
    handicap: Vec<ScoreCell>,
}

impl Rows {
    fn extend(&mut self, other: Rows) {
        self.holes.extend(other.holes);
        self.par.extend(other.par);
        self.handicap.extend(other.handicap);
    }

    fn remove(&mut self, idx: usize) {
        self.holes.remove(idx);
        self.par.remove(idx);
        self.handicap.remove(idx);
    }

    fn hole_positions(&self) -> Vec<usize> {
        self.holes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_hole())
            .map(|(i, _)| i)
            .collect()
    }

    fn into_card(self, name: String) -> MergedScorecard {
        let card = MergedScorecard {
            name,
            holes: self.holes,
            par: self.par,
            handicap: self.handicap,
        };
        debug_assert!(card.is_aligned(), "merged rows out of alignment");
        card
    }
}

/// Keep side columns and every column whose par is filled in. Short par or
/// handicap rows are padded with unknown cells.
fn playable_rows(card: &Scorecard) -> Rows {
    let par_row = card.par_row();
    let handicap_row = card.handicap_row();
    let mut rows = Rows::default();

    for (idx, cell) in card.holes.iter().enumerate() {
        let par = par_row.get(idx).cloned().unwrap_or_else(ScoreCell::unknown);
        let handicap = handicap_row
            .get(idx)
            .cloned()
            .unwrap_or_else(ScoreCell::unknown);
        if cell.is_side() || par.has_value() {
            rows.holes.push(cell.clone());
            rows.par.push(par);
            rows.handicap.push(handicap);
        }
    }
    rows
}

fn display_name(cards: &[&Scorecard], course_name: &str) -> String {
    let names: Vec<&str> = cards
        .iter()
        .map(|c| c.name.trim())
        .filter(|n| !n.is_empty())
        .collect();
    if !names.is_empty() {
        return names.join(" / ");
    }
    if !course_name.trim().is_empty() {
        return course_name.trim().to_string();
    }
    cards
        .iter()
        .map(|c| c.course_name.trim())
        .find(|n| !n.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Merge the selected scorecards of a round into its playable card.
#[must_use]
pub fn merge_round_scorecards(round: &Round) -> MergedScorecard {
    merge_scorecards(&round.selected_scorecards(), &round.course_name)
}

/// Combine one or more scorecards into a single ordered card.
///
/// Exactly two cards are treated as a front and back nine: the second card's
/// holes are renumbered after the first, the stroke index is interleaved
/// across both, duplicate `Total` columns are folded into one and `Out`/`In`
/// columns are relabelled in order. Any other count is concatenated as is.
#[must_use]
pub fn merge_scorecards(cards: &[&Scorecard], course_name: &str) -> MergedScorecard {
    let name = display_name(cards, course_name);
    match cards {
        [first, second] => merge_pair(first, second).into_card(name),
        _ => {
            let mut rows = Rows::default();
            for card in cards {
                rows.extend(playable_rows(card));
            }
            rows.into_card(name)
        }
    }
}

fn merge_pair(first: &Scorecard, second: &Scorecard) -> Rows {
    let mut front = playable_rows(first);
    let mut back = playable_rows(second);

    let offset = u32::try_from(front.hole_positions().len()).unwrap_or(0);
    renumber(&mut back, offset);
    reassign_handicaps(&mut front, &mut back);

    let mut rows = front;
    rows.extend(back);
    fold_totals(&mut rows);
    relabel_out_in(&mut rows);
    rows
}

fn renumber(rows: &mut Rows, offset: u32) {
    let mut ordinal = 0u32;
    for cell in rows.holes.iter_mut().filter(|c| c.is_hole()) {
        ordinal += 1;
        let label = cell
            .label
            .as_deref()
            .and_then(|l| offset_hole_label(l, offset))
            .unwrap_or_else(|| (ordinal + offset).to_string());
        cell.label = Some(label);
    }
}

fn reassign_handicaps(front: &mut Rows, back: &mut Rows) {
    let front_pos = front.hole_positions();
    let back_pos = back.hole_positions();
    let existing = |rows: &Rows, positions: &[usize]| -> Vec<Option<i32>> {
        positions
            .iter()
            .map(|&p| rows.handicap[p].parsed_value())
            .collect()
    };
    let (front_idx, back_idx) = interleave(
        &existing(&*front, &front_pos),
        &existing(&*back, &back_pos),
    );

    for (rows, positions, indices) in [(front, front_pos, front_idx), (back, back_pos, back_idx)] {
        for (pos, index) in positions.into_iter().zip(indices) {
            let cell = &mut rows.handicap[pos];
            cell.kind = CellKind::Hole;
            cell.value = Some(index.to_string());
        }
    }
}

/// Two `Total` columns: the second keeps the summed par, the first is removed.
fn fold_totals(rows: &mut Rows) {
    let totals: Vec<usize> = rows
        .holes
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_side() && c.label_is("Total"))
        .map(|(i, _)| i)
        .collect();
    if let &[first, second, ..] = totals.as_slice() {
        let sum = rows.par[first].value_or_zero() + rows.par[second].value_or_zero();
        rows.par[second].value = Some(sum.to_string());
        rows.remove(first);
    }
}

fn relabel_out_in(rows: &mut Rows) {
    let mut halves: Vec<&mut ScoreCell> = rows
        .holes
        .iter_mut()
        .filter(|c| c.is_side() && (c.label_is("Out") || c.label_is("In")))
        .collect();
    if halves.len() < 2 {
        return;
    }
    for (i, cell) in halves.iter_mut().enumerate() {
        cell.label = Some(if i % 2 == 0 { "Out" } else { "In" }.to_string());
    }
}
