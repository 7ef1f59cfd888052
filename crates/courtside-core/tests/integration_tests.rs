// Integration tests for the classification core.
//
// These exercise the public API end to end: the three-step possession
// pipeline, the archetype ranker, and full matchup evaluation from a JSON
// fixture.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use courtside_core::archetype::*;
use courtside_core::config::PossessionThresholds;
use courtside_core::format;
use courtside_core::matchup::{evaluate_matchup, MatchupInput};
use courtside_core::possession::*;

// ===========================================================================
// Test helpers
// ===========================================================================

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn meta(abbr: &str, name: &str) -> TeamMeta {
    TeamMeta {
        abbreviation: abbr.into(),
        full_name: name.into(),
    }
}

fn knicks() -> TeamMeta {
    meta("NYK", "New York Knicks")
}

fn celtics() -> TeamMeta {
    meta("BOS", "Boston Celtics")
}

/// Run the three free-function steps for an away/home score pair.
fn pipeline(away: f64, home: f64) -> (Step1Result, Step2Result, Step3Content) {
    let s1 = compute_step1(away, home, &knicks(), &celtics());
    let s2 = compute_step2(&s1);
    let s3 = step3_content(&s2);
    (s1, s2, s3)
}

// ===========================================================================
// Possession pipeline
// ===========================================================================

#[test]
fn lopsided_matchup_points_at_favored_team_total() {
    let (s1, s2, s3) = pipeline(30.0, 90.0);

    assert_eq!(s1.gap, 60.0);
    assert_eq!(s1.combined, 120.0);
    assert!(s1.edge_type.is_gap_driven());
    assert_eq!(s1.edge_type, EdgeType::HomeDominant);

    assert_eq!(s2.market_type, MarketType::TeamTotal);
    assert!(s2.primary_market.contains("BOS"));

    assert!(!s3.instructions.is_empty());
    assert!(s3.instructions.iter().any(|i| i.contains("BOS")));
}

#[test]
fn low_efficiency_matchup_points_at_under() {
    let (s1, s2, s3) = pipeline(40.0, 45.0);

    assert_eq!(s1.gap, 5.0);
    assert_eq!(s1.combined, 85.0);
    assert!(85.0 < PossessionThresholds::default().low_combined);
    assert_eq!(s1.edge_type, EdgeType::LowCombined);
    assert_eq!(s2.market_type, MarketType::GameTotalUnder);
    assert!(!s3.instructions.is_empty());
}

#[test]
fn every_edge_type_reaches_non_empty_instructions() {
    for edge in EdgeType::ALL {
        let s1 = Step1Result {
            edge_type: edge,
            ..compute_step1(50.0, 50.0, &knicks(), &celtics())
        };
        let s2 = compute_step2(&s1);
        let s3 = step3_content(&s2);
        assert!(!s3.instructions.is_empty(), "{edge:?} -> {:?}", s2.market_type);
        // Always safe to take the length of the optional lists.
        let _ = s3.examples.len() + s3.warnings.len();
    }
}

#[test]
fn step1_is_deterministic() {
    let a = compute_step1(63.7, 21.9, &knicks(), &celtics());
    let b = compute_step1(63.7, 21.9, &knicks(), &celtics());
    assert_eq!(a, b);
    assert_eq!(a.gap.to_bits(), b.gap.to_bits());
    assert_eq!(a.summary, b.summary);
}

#[test]
fn gap_symmetry_across_argument_order() {
    let scores = [(0.0, 100.0), (33.3, 66.7), (12.5, 12.5), (88.8, 11.1)];
    for (a, b) in scores {
        let forward = compute_step1(a, b, &knicks(), &celtics());
        let reverse = compute_step1(b, a, &celtics(), &knicks());
        assert_eq!(forward.gap, reverse.gap);
        assert_eq!(forward.combined, reverse.combined);
    }
}

#[test]
fn gap_threshold_boundary_is_at_or_above() {
    let t = PossessionThresholds::default();
    let eps = 1e-9;
    // Combined held in the balanced band so only the gap decides.
    let home = 50.0;
    let at = compute_step1(home + t.large_gap, home, &knicks(), &celtics());
    let below = compute_step1(home + t.large_gap - eps, home, &knicks(), &celtics());
    let above = compute_step1(home + t.large_gap + eps, home, &knicks(), &celtics());
    assert_eq!(at.edge_type, EdgeType::AwayDominant);
    assert_eq!(below.edge_type, EdgeType::Balanced);
    assert_eq!(above.edge_type, EdgeType::AwayDominant);
}

#[test]
fn nan_input_is_consistently_balanced() {
    let (s1, s2, s3) = pipeline(f64::NAN, 70.0);
    assert_eq!(s1.edge_type, EdgeType::Balanced);
    assert_eq!(s2.market_type, MarketType::NoMarket);
    assert!(!s3.instructions.is_empty());
    assert!(!s1.summary.contains("NaN"));
}

#[test]
fn classifier_with_custom_thresholds() {
    let loose = PossessionThresholds {
        large_gap: 50.0,
        low_combined: 60.0,
        high_combined: 100.0,
        ..PossessionThresholds::default()
    };
    let classifier = PossessionClassifier::new(loose);
    let away = TeamPossessionProfile {
        blended_score: 45.0,
        meta: knicks(),
    };
    let home = TeamPossessionProfile {
        blended_score: 60.0,
        meta: celtics(),
    };
    let report = classifier.evaluate(&away, &home);
    assert_eq!(report.step1.edge_type, EdgeType::HighCombined);
    assert_eq!(report.step2.market_type, MarketType::GameTotalOver);
}

#[test]
fn numbered_instructions_render_in_order() {
    let (_, _, s3) = pipeline(90.0, 30.0);
    let lines = format::numbered(&s3.instructions);
    assert_eq!(lines.len(), s3.instructions.len());
    assert!(lines[0].starts_with("1. "));
    assert!(lines.last().unwrap().starts_with(&format!("{}. ", lines.len())));
}

// ===========================================================================
// Archetype ranker
// ===========================================================================

#[test]
fn strength_percentile_boundaries() {
    assert_eq!(classify_strength(80.0).label(), "Elite");
    assert_eq!(classify_strength(79.999).label(), "Above Average");
    assert_eq!(classify_strength(-1.0).label(), "Poor");
    assert_eq!(classify_strength(101.0).label(), "Elite");
}

#[test]
fn strength_is_total_over_a_sweep() {
    let mut x = -50.0;
    while x <= 150.0 {
        let label = classify_strength(x);
        assert!(StrengthLabel::ALL.contains(&label));
        x += 0.25;
    }
}

#[test]
fn stat_fallback_prefers_earlier_candidate() {
    let stats: StatsBlob = serde_json::from_str(r#"{"rebounds": 41.0, "rebounds_per_game": 45.5}"#).unwrap();
    assert_eq!(extract_stat(&stats, Family::Rebounds), 45.5);
}

#[test]
fn opponent_cross_highlight() {
    let same = highlight_opponent_archetype("x", "x");
    assert!(same.is_both);
    let different = highlight_opponent_archetype("x", "y");
    assert!(!different.is_both);
    assert!(!different.is_opponent);
}

#[test]
fn catalogue_ids_resolve_and_strangers_do_not() {
    for family in Family::ALL {
        for side in Side::ALL {
            for def in catalogue::catalogue(family, side) {
                assert!(lookup_archetype(family, side, def.id).is_known());
            }
            assert_eq!(
                lookup_archetype(family, side, "not_an_archetype").display_name(),
                UNKNOWN_ARCHETYPE_LABEL
            );
        }
    }
}

// ===========================================================================
// Full matchup from fixture
// ===========================================================================

#[test]
fn fixture_matchup_end_to_end() {
    let input: MatchupInput =
        serde_json::from_str(&read_fixture("matchup_knicks_celtics.json")).expect("fixture should parse");
    let report = evaluate_matchup(&input, &PossessionThresholds::default());

    // Possession
    assert_eq!(report.possession.step1.edge_type, EdgeType::HomeDominant);
    assert_eq!(report.possession.step2.primary_market, "BOS Team Total Over");
    assert_eq!(report.away_band, PossessionBand::Weak);
    assert_eq!(report.home_band, PossessionBand::Strong);

    // Archetype rows come out in family/side/window order.
    let keys: Vec<(Family, Side, Window)> =
        report.archetypes.iter().map(|r| (r.family, r.side, r.window)).collect();
    assert_eq!(
        keys,
        vec![
            (Family::Scoring, Side::Offensive, Window::Season),
            (Family::Scoring, Side::Offensive, Window::Last10),
            (Family::Threes, Side::Offensive, Window::Season),
            (Family::Turnovers, Side::Defensive, Window::Season),
            (Family::Rebounds, Side::Offensive, Window::Season),
        ]
    );

    let rebounds = &report.archetypes[4];
    assert!(rebounds.shared);
    assert_eq!(rebounds.away.as_ref().unwrap().strength, StrengthLabel::Elite);
    assert_eq!(rebounds.home.as_ref().unwrap().strength, StrengthLabel::AboveAverage);

    let turnovers = &report.archetypes[3];
    let unknown = turnovers.away.as_ref().unwrap();
    assert!(!unknown.known);
    assert_eq!(unknown.name, "Unknown archetype");
    assert!(turnovers.home.is_none());

    // Stats: priority order and league percentiles.
    let by_family: BTreeMap<Family, _> = report.stats.iter().map(|s| (s.family, s)).collect();
    let scoring = by_family[&Family::Scoring];
    assert_eq!(scoring.away.unwrap().field, "points_per_game");
    assert_eq!(scoring.away.unwrap().value, 113.2);
    assert!((scoring.home_percentile.unwrap() - 100.0 * 5.5 / 6.0).abs() < 1e-9);

    let assists = by_family[&Family::Assists];
    assert_eq!(assists.away.unwrap().field, "assists");
    assert_eq!(assists.home.unwrap().field, "ast");
    assert!(assists.away_percentile.is_none());

    let turnovers = by_family[&Family::Turnovers];
    // 12.4 turnovers: four teams commit more.
    assert!((turnovers.away_percentile.unwrap() - 100.0 * 4.5 / 6.0).abs() < 1e-9);
    // The percentage field is skipped; the per-game count is ranked.
    assert_eq!(turnovers.home.unwrap().field, "tov");
    assert!((turnovers.home_percentile.unwrap() - 100.0 * 5.5 / 6.0).abs() < 1e-9);

    // A three-point count never stands in for the rate.
    let threes = by_family[&Family::Threes];
    assert_eq!(threes.away.unwrap().field, "three_pa_rate");
    assert!((threes.away_percentile.unwrap() - 100.0 * 2.5 / 6.0).abs() < 1e-9);
}
