use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn number_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\d+").expect("Invalid regex pattern - this is a programming error")
    })
}

/// Numeric part of a hole label such as `"7"` or `"Hole 7"`.
///
/// # Panics
///
/// Will panic if the regex is invalid
#[must_use]
pub fn hole_number(label: &str) -> Option<u32> {
    number_regex()
        .find(label)
        .and_then(|m| m.as_str().parse().ok())
        .filter(|n| *n > 0)
}

/// Shift the numeric part of a hole label, keeping the text around it:
/// `"Hole 3"` with an offset of 9 becomes `"Hole 12"`. `None` when the label
/// carries no usable number.
///
/// # Panics
///
/// Will panic if the regex is invalid
#[must_use]
pub fn offset_hole_label(label: &str, offset: u32) -> Option<String> {
    let m = number_regex().find(label)?;
    let number: u32 = m.as_str().parse().ok().filter(|n| *n > 0)?;
    Some(format!(
        "{}{}{}",
        &label[..m.start()],
        number.saturating_add(offset),
        &label[m.end()..]
    ))
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    Hole,
    Side,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One column of a scorecard row. The same index in the hole, par and handicap
/// rows describes the same column.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreCell {
    pub kind: CellKind,
    pub label: Option<String>,
    pub value: Option<String>,
    pub yardage: Option<i32>,
}

impl ScoreCell {
    #[must_use]
    pub fn hole(label: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Hole,
            label: Some(label.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn side(label: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Side,
            label: Some(label.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn hole_value(value: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Hole,
            value: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn side_value(value: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Side,
            value: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_hole(&self) -> bool {
        self.kind == CellKind::Hole
    }

    #[must_use]
    pub fn is_side(&self) -> bool {
        self.kind == CellKind::Side
    }

    #[must_use]
    pub fn label_is(&self, name: &str) -> bool {
        self.label
            .as_deref()
            .is_some_and(|l| l.trim().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    /// Numeric content of the cell, `None` when empty or malformed.
    #[must_use]
    pub fn parsed_value(&self) -> Option<i32> {
        self.value.as_deref().and_then(|v| v.trim().parse().ok())
    }

    #[must_use]
    pub fn value_or_zero(&self) -> i32 {
        self.parsed_value().unwrap_or(0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TeeRow {
    pub name: String,
    pub color: Option<String>,
    pub cells: Vec<ScoreCell>,
}

/// The rows printed for one set of tees: par, stroke index and yardages.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ScorecardSide {
    pub par: Vec<ScoreCell>,
    pub handicap: Vec<ScoreCell>,
    pub tees: Vec<TeeRow>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Scorecard {
    pub id: String,
    pub name: String,
    pub course_name: String,
    pub holes: Vec<ScoreCell>,
    pub back_tee: Option<ScorecardSide>,
    pub forward_tee: Option<ScorecardSide>,
}

impl Scorecard {
    /// Par row, preferring the back tees.
    #[must_use]
    pub fn par_row(&self) -> &[ScoreCell] {
        Self::prefer_back(&self.back_tee, &self.forward_tee, |s| &s.par)
    }

    /// Stroke index row, preferring the back tees.
    #[must_use]
    pub fn handicap_row(&self) -> &[ScoreCell] {
        Self::prefer_back(&self.back_tee, &self.forward_tee, |s| &s.handicap)
    }

    fn prefer_back<'a>(
        back: &'a Option<ScorecardSide>,
        forward: &'a Option<ScorecardSide>,
        row: impl Fn(&'a ScorecardSide) -> &'a Vec<ScoreCell>,
    ) -> &'a [ScoreCell] {
        back.as_ref()
            .map(&row)
            .filter(|r| !r.is_empty())
            .or_else(|| forward.as_ref().map(&row))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.holes.iter().filter(|c| c.is_hole()).count()
    }
}

/// A hole of the canonical card with its par and stroke index resolved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayableHole {
    pub label: String,
    pub number: Option<u32>,
    pub par: i32,
    pub handicap: i32,
}

/// The single ordered card a round is played on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MergedScorecard {
    pub name: String,
    pub holes: Vec<ScoreCell>,
    pub par: Vec<ScoreCell>,
    pub handicap: Vec<ScoreCell>,
}

impl MergedScorecard {
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.holes.len() == self.par.len() && self.holes.len() == self.handicap.len()
    }

    /// Hole columns in card order. Side and unknown columns are skipped.
    #[must_use]
    pub fn playable_holes(&self) -> Vec<PlayableHole> {
        self.holes
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_hole())
            .map(|(idx, cell)| {
                let label = cell.label.clone().unwrap_or_else(|| (idx + 1).to_string());
                PlayableHole {
                    number: hole_number(&label),
                    label,
                    par: self.par.get(idx).map_or(0, ScoreCell::value_or_zero),
                    handicap: self.handicap.get(idx).map_or(0, ScoreCell::value_or_zero),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn find_hole(&self, label: &str) -> Option<PlayableHole> {
        self.playable_holes().into_iter().find(|h| h.label == label)
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.playable_holes().iter().map(|h| h.par).sum()
    }
}
