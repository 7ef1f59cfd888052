// Matchup evaluation: runs the possession classifier and the archetype ranker
// over one away/home pair and assembles a report for the rendering layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::archetype::{
    describe_assignment, highlight_opponent_archetype, league_percentile, resolve_stat,
    ArchetypeAssignment, ArchetypeBadge, Family, ResolvedStat, Side, StatDirection, StatsBlob,
    Window,
};
use crate::config::PossessionThresholds;
use crate::possession::{PossessionBand, PossessionClassifier, PossessionReport, TeamPossessionProfile};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One matchup as delivered by the stats API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupInput {
    pub away: TeamInput,
    pub home: TeamInput,
    /// League-wide raw values per family, used for stat percentiles.
    #[serde(default)]
    pub league: BTreeMap<Family, Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInput {
    #[serde(flatten)]
    pub profile: TeamPossessionProfile,
    #[serde(default)]
    pub archetypes: Vec<ArchetypeEntry>,
    #[serde(default)]
    pub stats: StatsBlob,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeEntry {
    pub family: Family,
    pub side: Side,
    pub window: Window,
    #[serde(flatten)]
    pub assignment: ArchetypeAssignment,
}

impl TeamInput {
    /// First assignment for a family/side/window.
    fn assignment(&self, family: Family, side: Side, window: Window) -> Option<&ArchetypeAssignment> {
        let mut matches = self
            .archetypes
            .iter()
            .filter(|e| e.family == family && e.side == side && e.window == window);
        let first = matches.next()?;
        if matches.next().is_some() {
            warn!(
                team = %self.profile.meta.abbreviation,
                family = family.as_str(),
                side = side.as_str(),
                window = window.as_str(),
                "duplicate archetype assignment, using the first"
            );
        }
        Some(&first.assignment)
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupReport {
    pub possession: PossessionReport,
    pub away_band: PossessionBand,
    pub home_band: PossessionBand,
    pub archetypes: Vec<ArchetypeRow>,
    pub stats: Vec<StatLine>,
}

/// Both teams' archetypes for one family/side/window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeRow {
    pub family: Family,
    pub side: Side,
    pub window: Window,
    pub away: Option<ArchetypeBadge>,
    pub home: Option<ArchetypeBadge>,
    /// Both teams carry the same archetype id.
    pub shared: bool,
}

/// Raw per-family stat for both teams. `None` means unavailable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub family: Family,
    pub away: Option<ResolvedStat>,
    pub home: Option<ResolvedStat>,
    pub away_percentile: Option<f64>,
    pub home_percentile: Option<f64>,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate a matchup. Never fails: unknown archetype ids and missing stats
/// come back as sentinels in the report.
pub fn evaluate_matchup(input: &MatchupInput, thresholds: &PossessionThresholds) -> MatchupReport {
    let away = &input.away;
    let home = &input.home;
    debug!(
        away = %away.profile.meta.abbreviation,
        home = %home.profile.meta.abbreviation,
        away_score = away.profile.blended_score,
        home_score = home.profile.blended_score,
        "evaluating matchup"
    );

    let classifier = PossessionClassifier::new(*thresholds);
    let possession = classifier.evaluate(&away.profile, &home.profile);
    debug!(
        edge = ?possession.step1.edge_type,
        market = ?possession.step2.market_type,
        gap = possession.step1.gap,
        combined = possession.step1.combined,
        "possession classified"
    );

    MatchupReport {
        away_band: classifier.band(away.profile.blended_score),
        home_band: classifier.band(home.profile.blended_score),
        possession,
        archetypes: archetype_rows(away, home),
        stats: stat_lines(away, home, &input.league),
    }
}

fn archetype_rows(away: &TeamInput, home: &TeamInput) -> Vec<ArchetypeRow> {
    let mut rows = Vec::new();
    for family in Family::ALL {
        for side in Side::ALL {
            for window in Window::ALL {
                let away_assignment = away.assignment(family, side, window);
                let home_assignment = home.assignment(family, side, window);
                if away_assignment.is_none() && home_assignment.is_none() {
                    continue;
                }

                let away_badge = away_assignment.map(|a| badge(away, family, side, window, a));
                let home_badge = home_assignment.map(|a| badge(home, family, side, window, a));
                let shared = match (away_assignment, home_assignment) {
                    (Some(a), Some(h)) => {
                        highlight_opponent_archetype(&a.archetype_id, &h.archetype_id).is_both
                    }
                    _ => false,
                };

                rows.push(ArchetypeRow {
                    family,
                    side,
                    window,
                    away: away_badge,
                    home: home_badge,
                    shared,
                });
            }
        }
    }
    rows
}

fn badge(
    team: &TeamInput,
    family: Family,
    side: Side,
    window: Window,
    assignment: &ArchetypeAssignment,
) -> ArchetypeBadge {
    let badge = describe_assignment(family, side, window, assignment);
    if !badge.known {
        warn!(
            team = %team.profile.meta.abbreviation,
            family = family.as_str(),
            side = side.as_str(),
            archetype_id = %assignment.archetype_id,
            "archetype id not in catalogue"
        );
    }
    badge
}

fn stat_lines(away: &TeamInput, home: &TeamInput, league: &BTreeMap<Family, Vec<f64>>) -> Vec<StatLine> {
    Family::ALL
        .iter()
        .map(|&family| {
            let away_stat = team_stat(away, family);
            let home_stat = team_stat(home, family);
            let direction = StatDirection::for_family(family, Side::Offensive);
            let percentile = |stat: Option<ResolvedStat>| {
                let values = league.get(&family)?;
                league_percentile(stat?.value, values, direction)
            };
            StatLine {
                family,
                away: away_stat,
                home: home_stat,
                away_percentile: percentile(away_stat),
                home_percentile: percentile(home_stat),
            }
        })
        .collect()
}

fn team_stat(team: &TeamInput, family: Family) -> Option<ResolvedStat> {
    let resolved = resolve_stat(&team.stats, family);
    if resolved.is_none() && !team.stats.is_empty() {
        debug!(
            team = %team.profile.meta.abbreviation,
            family = family.as_str(),
            "no candidate field resolved"
        );
    }
    resolved
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
