// Step 2: map an edge type onto a betting-market category.

use serde::{Deserialize, Serialize};

use crate::format::fmt_score;
use crate::possession::edge::{EdgeType, Step1Result};

/// Text used when a team-total market has no favored team to name.
const FAVORED_FALLBACK: &str = "the favored team";

// ---------------------------------------------------------------------------
// Market types
// ---------------------------------------------------------------------------

/// Second-stage classification: which market the possession signal points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketType {
    /// The favored team's own points total.
    TeamTotal,
    GameTotalOver,
    GameTotalUnder,
    NoMarket,
}

impl MarketType {
    pub const ALL: [MarketType; 4] = [
        MarketType::TeamTotal,
        MarketType::GameTotalOver,
        MarketType::GameTotalUnder,
        MarketType::NoMarket,
    ];

    /// Lookup from edge type. Total over `EdgeType`.
    pub fn from_edge(edge: EdgeType) -> Self {
        match edge {
            EdgeType::AwayDominant | EdgeType::HomeDominant => MarketType::TeamTotal,
            EdgeType::LowCombined => MarketType::GameTotalUnder,
            EdgeType::HighCombined => MarketType::GameTotalOver,
            EdgeType::Balanced => MarketType::NoMarket,
        }
    }

    /// Return a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MarketType::TeamTotal => "Team Total",
            MarketType::GameTotalOver => "Game Total Over",
            MarketType::GameTotalUnder => "Game Total Under",
            MarketType::NoMarket => "No Clear Market",
        }
    }
}

// ---------------------------------------------------------------------------
// Step 2 result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step2Result {
    pub market_type: MarketType,
    /// Short market label, e.g. "BOS Team Total Over".
    pub primary_market: String,
    /// Longer templated recommendation sentence.
    pub recommendation: String,
    pub step1: Step1Result,
}

impl Step2Result {
    /// Abbreviation of the favored team, or a generic phrase when the market
    /// has no favored side.
    pub fn favored_abbreviation(&self) -> &str {
        self.step1
            .favored()
            .map(|t| t.abbreviation.as_str())
            .unwrap_or(FAVORED_FALLBACK)
    }
}

/// Run Step 2. Pure lookup on the edge type; gap and combined are read from
/// the Step 1 result, never recomputed.
pub fn compute_step2(step1: &Step1Result) -> Step2Result {
    let market_type = MarketType::from_edge(step1.edge_type);
    let favored = step1
        .favored()
        .map(|t| t.abbreviation.as_str())
        .unwrap_or(FAVORED_FALLBACK);
    let trailing = step1
        .trailing()
        .map(|t| t.abbreviation.as_str())
        .unwrap_or("their opponent");
    let away = step1.away.abbreviation.as_str();
    let home = step1.home.abbreviation.as_str();
    let gap = fmt_score(step1.gap);
    let combined = fmt_score(step1.combined);

    let (primary_market, recommendation) = match market_type {
        MarketType::TeamTotal => (
            format!("{favored} Team Total Over"),
            format!(
                "{favored} should win the possession battle against {trailing} by {gap} points. \
                 Extra possessions mean extra shots: look at the {favored} team total over \
                 before the line adjusts."
            ),
        ),
        MarketType::GameTotalUnder => (
            "Game Total Under".to_string(),
            format!(
                "{away} and {home} combine for only {combined} in possession efficiency. \
                 Empty trips and wasted possessions suppress scoring: look at the game total under."
            ),
        ),
        MarketType::GameTotalOver => (
            "Game Total Over".to_string(),
            format!(
                "{away} and {home} combine for {combined} in possession efficiency with a {gap}-point gap. \
                 Both sides should convert their trips: look at the game total over."
            ),
        ),
        MarketType::NoMarket => (
            "No Clear Market".to_string(),
            format!(
                "The possession profiles of {away} and {home} do not point at a market \
                 (gap {gap}, combined {combined}). Pass unless another signal agrees."
            ),
        ),
    };

    Step2Result {
        market_type,
        primary_market,
        recommendation,
        step1: step1.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PossessionThresholds;
    use crate::possession::edge::compute_step1_with;
    use crate::possession::TeamMeta;

    fn meta(abbr: &str) -> TeamMeta {
        TeamMeta {
            abbreviation: abbr.into(),
            full_name: format!("{abbr} Full Name"),
        }
    }

    fn step1(away: f64, home: f64) -> Step1Result {
        compute_step1_with(
            away,
            home,
            &meta("MIA"),
            &meta("DEN"),
            &PossessionThresholds::default(),
        )
    }

    /// Step 1 result with a forced edge type, for exhaustive mapping tests.
    fn forced(edge_type: EdgeType) -> Step1Result {
        Step1Result {
            edge_type,
            ..step1(50.0, 50.0)
        }
    }

    #[test]
    fn every_edge_type_maps_to_a_market() {
        for edge in EdgeType::ALL {
            let r = compute_step2(&forced(edge));
            assert_eq!(r.market_type, MarketType::from_edge(edge));
            assert!(!r.primary_market.is_empty(), "{edge:?}");
            assert!(!r.recommendation.is_empty(), "{edge:?}");
        }
    }

    #[test]
    fn edge_to_market_table() {
        assert_eq!(MarketType::from_edge(EdgeType::AwayDominant), MarketType::TeamTotal);
        assert_eq!(MarketType::from_edge(EdgeType::HomeDominant), MarketType::TeamTotal);
        assert_eq!(MarketType::from_edge(EdgeType::LowCombined), MarketType::GameTotalUnder);
        assert_eq!(MarketType::from_edge(EdgeType::HighCombined), MarketType::GameTotalOver);
        assert_eq!(MarketType::from_edge(EdgeType::Balanced), MarketType::NoMarket);
    }

    #[test]
    fn every_market_is_reachable() {
        for market in MarketType::ALL {
            assert!(
                EdgeType::ALL.iter().any(|e| MarketType::from_edge(*e) == market),
                "{market:?} has no edge type"
            );
        }
    }

    #[test]
    fn team_total_names_favored_team() {
        let r = compute_step2(&step1(30.0, 90.0));
        assert_eq!(r.market_type, MarketType::TeamTotal);
        assert_eq!(r.primary_market, "DEN Team Total Over");
        assert!(r.recommendation.contains("DEN should win the possession battle against MIA"));
        assert!(r.recommendation.contains("60.0 points"));
        assert_eq!(r.favored_abbreviation(), "DEN");
    }

    #[test]
    fn low_combined_is_under() {
        let r = compute_step2(&step1(40.0, 45.0));
        assert_eq!(r.market_type, MarketType::GameTotalUnder);
        assert_eq!(r.primary_market, "Game Total Under");
        assert!(r.recommendation.contains("85.0"));
    }

    #[test]
    fn high_combined_is_over() {
        let r = compute_step2(&step1(70.0, 75.0));
        assert_eq!(r.market_type, MarketType::GameTotalOver);
        assert!(r.recommendation.contains("145.0"));
    }

    #[test]
    fn non_gap_edge_has_no_favored_abbreviation() {
        let r = compute_step2(&forced(EdgeType::Balanced));
        assert_eq!(r.favored_abbreviation(), FAVORED_FALLBACK);
    }

    #[test]
    fn carries_step1_forward_unchanged() {
        let s1 = step1(30.0, 90.0);
        let r = compute_step2(&s1);
        assert_eq!(r.step1, s1);
    }
}
