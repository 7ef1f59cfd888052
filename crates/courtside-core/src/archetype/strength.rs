// Percentile strength labels and league percentile ranks.

use serde::{Deserialize, Serialize};

use crate::archetype::{Family, Side};

// ---------------------------------------------------------------------------
// Strength labels
// ---------------------------------------------------------------------------

/// Qualitative bucket for a 0-100 percentile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    /// 80 and up.
    Elite,
    /// 60 up to 80.
    AboveAverage,
    /// 40 up to 60.
    Average,
    /// 20 up to 40.
    BelowAverage,
    /// Below 20. NaN also lands here.
    Poor,
}

impl StrengthLabel {
    pub const ALL: [StrengthLabel; 5] = [
        StrengthLabel::Elite,
        StrengthLabel::AboveAverage,
        StrengthLabel::Average,
        StrengthLabel::BelowAverage,
        StrengthLabel::Poor,
    ];

    /// Return a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLabel::Elite => "Elite",
            StrengthLabel::AboveAverage => "Above Average",
            StrengthLabel::Average => "Average",
            StrengthLabel::BelowAverage => "Below Average",
            StrengthLabel::Poor => "Poor",
        }
    }
}

/// Map a percentile onto its strength band. Lower bounds are inclusive and
/// every input, including negatives and values above 100, gets a label.
pub fn classify_strength(percentile: f64) -> StrengthLabel {
    if percentile >= 80.0 {
        StrengthLabel::Elite
    } else if percentile >= 60.0 {
        StrengthLabel::AboveAverage
    } else if percentile >= 40.0 {
        StrengthLabel::Average
    } else if percentile >= 20.0 {
        StrengthLabel::BelowAverage
    } else {
        StrengthLabel::Poor
    }
}

// ---------------------------------------------------------------------------
// League percentile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatDirection {
    HigherBetter,
    LowerBetter,
}

impl StatDirection {
    /// Which way is good for a family/side.
    ///
    /// Offense wants more of everything except turnovers. Defensive stats are
    /// what the opponent gets, so lower is better except forced turnovers.
    pub fn for_family(family: Family, side: Side) -> Self {
        match (side, family) {
            (Side::Offensive, Family::Turnovers) => StatDirection::LowerBetter,
            (Side::Offensive, _) => StatDirection::HigherBetter,
            (Side::Defensive, Family::Turnovers) => StatDirection::HigherBetter,
            (Side::Defensive, _) => StatDirection::LowerBetter,
        }
    }
}

/// Percentile rank (0-100) of `value` within `league`.
///
/// Mid-rank convention: teams strictly worse count fully, ties count half.
/// Non-finite league entries are ignored. Returns `None` when `value` is
/// non-finite or no finite league values remain.
pub fn league_percentile(value: f64, league: &[f64], direction: StatDirection) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let mut n = 0usize;
    let mut worse = 0usize;
    let mut tied = 0usize;
    for &v in league.iter().filter(|v| v.is_finite()) {
        n += 1;
        let is_worse = match direction {
            StatDirection::HigherBetter => v < value,
            StatDirection::LowerBetter => v > value,
        };
        if is_worse {
            worse += 1;
        } else if v == value {
            tied += 1;
        }
    }
    if n == 0 {
        return None;
    }
    Some((worse as f64 + 0.5 * tied as f64) / n as f64 * 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
