// Step 1: classify the possession-efficiency signal of a matchup.
//
// Gap-driven edges (one side dominating) are checked before combined-driven
// edges (both sides high or both sides low). A NaN score fails every
// comparison and lands in `Balanced`.

use serde::{Deserialize, Serialize};

use crate::config::PossessionThresholds;
use crate::format::fmt_score;
use crate::possession::{TeamMeta, Venue};

// ---------------------------------------------------------------------------
// Edge types
// ---------------------------------------------------------------------------

/// First-stage classification of a matchup's possession signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// The away side's blended score leads by at least `large_gap`.
    AwayDominant,
    /// The home side's blended score leads by at least `large_gap`.
    HomeDominant,
    /// Combined score below `low_combined`: a low-efficiency game.
    LowCombined,
    /// Combined score at or above `high_combined` with a small gap.
    HighCombined,
    /// No qualifying signal.
    Balanced,
}

impl EdgeType {
    pub const ALL: [EdgeType; 5] = [
        EdgeType::AwayDominant,
        EdgeType::HomeDominant,
        EdgeType::LowCombined,
        EdgeType::HighCombined,
        EdgeType::Balanced,
    ];

    /// Classify a `(gap, combined)` pair.
    ///
    /// `away_leads` picks the favored side when the gap qualifies. Gap-driven
    /// edges take priority over combined-driven ones. A zero gap is never
    /// gap-driven, whatever `large_gap` is set to.
    pub fn classify(
        gap: f64,
        combined: f64,
        away_leads: bool,
        thresholds: &PossessionThresholds,
    ) -> Self {
        if gap > 0.0 && gap >= thresholds.large_gap {
            if away_leads {
                EdgeType::AwayDominant
            } else {
                EdgeType::HomeDominant
            }
        } else if combined < thresholds.low_combined {
            EdgeType::LowCombined
        } else if combined >= thresholds.high_combined {
            EdgeType::HighCombined
        } else {
            EdgeType::Balanced
        }
    }

    /// Return a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EdgeType::AwayDominant => "Away Possession Edge",
            EdgeType::HomeDominant => "Home Possession Edge",
            EdgeType::LowCombined => "Low Combined Efficiency",
            EdgeType::HighCombined => "High Combined Efficiency",
            EdgeType::Balanced => "No Clear Edge",
        }
    }

    /// Whether this edge comes from the gap rather than the combined total.
    pub fn is_gap_driven(&self) -> bool {
        matches!(self, EdgeType::AwayDominant | EdgeType::HomeDominant)
    }

    /// The side a gap-driven edge favors; `None` for every other edge.
    pub fn favored_venue(&self) -> Option<Venue> {
        match self {
            EdgeType::AwayDominant => Some(Venue::Away),
            EdgeType::HomeDominant => Some(Venue::Home),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Step 1 result
// ---------------------------------------------------------------------------

/// Output of Step 1. The team metadata rides along so later steps can name
/// teams without recomputing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step1Result {
    pub edge_type: EdgeType,
    /// `|away - home|`
    pub gap: f64,
    /// `away + home`
    pub combined: f64,
    pub summary: String,
    pub away: TeamMeta,
    pub home: TeamMeta,
}

impl Step1Result {
    /// The favored team for gap-driven edges.
    pub fn favored(&self) -> Option<&TeamMeta> {
        self.edge_type.favored_venue().map(|v| self.team(v))
    }

    /// The trailing team for gap-driven edges.
    pub fn trailing(&self) -> Option<&TeamMeta> {
        self.edge_type
            .favored_venue()
            .map(|v| self.team(v.opposite()))
    }

    pub fn team(&self, venue: Venue) -> &TeamMeta {
        match venue {
            Venue::Away => &self.away,
            Venue::Home => &self.home,
        }
    }
}

/// Run Step 1 against an explicit threshold set.
pub fn compute_step1_with(
    away_score: f64,
    home_score: f64,
    away: &TeamMeta,
    home: &TeamMeta,
    thresholds: &PossessionThresholds,
) -> Step1Result {
    let gap = (away_score - home_score).abs();
    let combined = away_score + home_score;
    let edge_type = EdgeType::classify(gap, combined, away_score > home_score, thresholds);
    let summary = summarize(edge_type, gap, combined, &away.abbreviation, &home.abbreviation);

    Step1Result {
        edge_type,
        gap,
        combined,
        summary,
        away: away.clone(),
        home: home.clone(),
    }
}

/// Templated one-line summary. Depends only on the edge type, the two
/// metrics, and the abbreviations.
pub fn summarize(edge_type: EdgeType, gap: f64, combined: f64, away: &str, home: &str) -> String {
    let gap = fmt_score(gap);
    let combined = fmt_score(combined);
    match edge_type {
        EdgeType::AwayDominant => format!(
            "{away} holds a {gap}-point possession-efficiency edge over {home}."
        ),
        EdgeType::HomeDominant => format!(
            "{home} holds a {gap}-point possession-efficiency edge over {away}."
        ),
        EdgeType::LowCombined => format!(
            "{away} and {home} combine for a possession score of {combined}, \
             projecting a low-efficiency game."
        ),
        EdgeType::HighCombined => format!(
            "{away} and {home} combine for a possession score of {combined} \
             with only a {gap}-point gap; both sides convert efficiently."
        ),
        EdgeType::Balanced => format!(
            "No clear possession edge between {away} and {home} \
             (gap {gap}, combined {combined})."
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
