use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw value stored in the stroke table meaning the hole was deliberately skipped.
pub const SKIPPED_SENTINEL: i32 = -1;

/// A stroke table entry decoded from its raw integer.
///
/// Only `Taken` ever counts as strokes. `Skipped` behaves like `NotScored` for
/// every aggregate and only differs for display.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Stroke {
    NotScored,
    Skipped,
    Taken(u32),
}

impl Stroke {
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            SKIPPED_SENTINEL => Stroke::Skipped,
            n if n > 0 => Stroke::Taken(n.unsigned_abs()),
            _ => Stroke::NotScored,
        }
    }

    #[must_use]
    pub fn taken(self) -> Option<u32> {
        match self {
            Stroke::Taken(n) => Some(n),
            Stroke::NotScored | Stroke::Skipped => None,
        }
    }
}

impl From<Option<i32>> for Stroke {
    fn from(value: Option<i32>) -> Self {
        value.map_or(Stroke::NotScored, Stroke::from_raw)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    HoleInOne,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    /// Three or more over par; carries the difference.
    Over(i32),
    /// Better than albatross without being an ace, e.g. a two on a par 6.
    Under(i32),
}

impl ScoreDisplay {
    /// Classify a score by its strokes and the hole's par.
    #[must_use]
    pub fn classify(strokes: u32, par: i32) -> Self {
        if strokes == 1 {
            return ScoreDisplay::HoleInOne;
        }
        let diff = i32::try_from(strokes).unwrap_or(i32::MAX) - par;
        Self::from_diff(diff)
    }

    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            -3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            d if d >= 3 => ScoreDisplay::Over(d),
            d => ScoreDisplay::Under(d),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        match self {
            ScoreDisplay::HoleInOne => "Hole-in-One".to_string(),
            ScoreDisplay::Albatross => "Albatross".to_string(),
            ScoreDisplay::Eagle => "Eagle".to_string(),
            ScoreDisplay::Birdie => "Birdie".to_string(),
            ScoreDisplay::Par => "Par".to_string(),
            ScoreDisplay::Bogey => "Bogey".to_string(),
            ScoreDisplay::DoubleBogey => "Double Bogey".to_string(),
            ScoreDisplay::Over(d) => format!("+{d}"),
            ScoreDisplay::Under(d) => format!("{d}"),
        }
    }
}

impl fmt::Display for ScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_strokes() {
        assert_eq!(Stroke::from_raw(-1), Stroke::Skipped);
        assert_eq!(Stroke::from_raw(0), Stroke::NotScored);
        assert_eq!(Stroke::from_raw(-4), Stroke::NotScored);
        assert_eq!(Stroke::from_raw(5).taken(), Some(5));
        assert_eq!(Stroke::Skipped.taken(), None);
    }

    #[test]
    fn classify_by_par_difference() {
        assert_eq!(ScoreDisplay::classify(1, 3), ScoreDisplay::HoleInOne);
        assert_eq!(ScoreDisplay::classify(2, 5), ScoreDisplay::Albatross);
        assert_eq!(ScoreDisplay::classify(3, 5), ScoreDisplay::Eagle);
        assert_eq!(ScoreDisplay::classify(3, 4), ScoreDisplay::Birdie);
        assert_eq!(ScoreDisplay::classify(4, 4), ScoreDisplay::Par);
        assert_eq!(ScoreDisplay::classify(6, 4), ScoreDisplay::DoubleBogey);
        assert_eq!(ScoreDisplay::classify(8, 4).label(), "+4");
    }
}
