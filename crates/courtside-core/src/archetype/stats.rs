// Raw stat resolution from loosely-shaped stats objects.
//
// Upstream payloads name the same stat differently depending on the source
// endpoint, so each family has an ordered list of candidate keys. Every key
// in one family's list carries the same unit, since the resolved value is
// ranked against a single league distribution.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::archetype::Family;

/// A loosely-shaped stats object as delivered by the stats API.
pub type StatsBlob = Map<String, Value>;

/// Candidate keys per family, highest priority first.
///
/// Threes is a rate (share of attempts from three); every other family is a
/// per-game count.
pub fn candidate_fields(family: Family) -> &'static [&'static str] {
    match family {
        Family::Scoring => &["points_per_game", "ppg", "avg_points", "points", "pts"],
        Family::Threes => &["three_point_rate", "three_pa_rate", "fg3a_rate"],
        Family::Turnovers => &["turnovers_per_game", "tov_per_game", "turnovers", "tov"],
        Family::Assists => &["assists_per_game", "apg", "assists", "ast"],
        Family::Rebounds => &["rebounds_per_game", "rpg", "total_rebounds", "rebounds", "reb"],
    }
}

/// Which candidate key supplied the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedStat {
    pub field: &'static str,
    pub value: f64,
}

/// Resolve a family's stat: the first candidate key holding a JSON number
/// wins. Missing keys, `null`, and non-numeric values are skipped. `None`
/// means no candidate resolved (stat unavailable).
pub fn resolve_stat(stats: &StatsBlob, family: Family) -> Option<ResolvedStat> {
    candidate_fields(family).iter().find_map(|&field| {
        stats
            .get(field)
            .and_then(Value::as_f64)
            .map(|value| ResolvedStat { field, value })
    })
}

/// Resolve a family's stat, falling back to `0.0` when nothing resolves.
pub fn extract_stat(stats: &StatsBlob, family: Family) -> f64 {
    resolve_stat(stats, family).map_or(0.0, |r| r.value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
