// Plain-text rendering of reports for the terminal.

use std::fmt::Write;

use courtside_core::archetype::{
    classify_strength, ArchetypeBadge, ArchetypeDef, ArchetypeHighlight, Family, Side,
};
use courtside_core::format::{fmt_percentile, fmt_score, numbered, NOT_AVAILABLE};
use courtside_core::matchup::{ArchetypeRow, MatchupReport, StatLine};
use courtside_core::possession::PossessionReport;

/// Step 1 through Step 3 as text.
pub fn possession_text(report: &PossessionReport) -> String {
    let mut out = String::new();
    let s1 = &report.step1;
    let s2 = &report.step2;
    let s3 = &report.step3;

    let _ = writeln!(out, "Step 1: {}", s1.edge_type.label());
    let _ = writeln!(out, "  gap {}  combined {}", fmt_score(s1.gap), fmt_score(s1.combined));
    let _ = writeln!(out, "  {}", s1.summary);
    let _ = writeln!(out, "Step 2: {}", s2.primary_market);
    let _ = writeln!(out, "  {}", s2.recommendation);
    let _ = writeln!(out, "Step 3: {}", s3.title);
    for line in numbered(&s3.instructions) {
        let _ = writeln!(out, "  {line}");
    }
    for example in &s3.examples {
        let _ = writeln!(out, "  Example: {example}");
    }
    for warning in &s3.warnings {
        let _ = writeln!(out, "  Warning: {warning}");
    }
    out
}

/// Full matchup report as text.
pub fn matchup_text(report: &MatchupReport) -> String {
    let mut out = String::new();
    let away = &report.possession.step1.away;
    let home = &report.possession.step1.home;

    let _ = writeln!(out, "{} @ {}", away.full_name, home.full_name);
    let _ = writeln!(
        out,
        "Possession gauge: {} {}, {} {}",
        away.abbreviation,
        report.away_band.label(),
        home.abbreviation,
        report.home_band.label()
    );
    out.push('\n');
    out.push_str(&possession_text(&report.possession));

    if !report.archetypes.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Archetypes ({} / {})", away.abbreviation, home.abbreviation);
        for row in &report.archetypes {
            let _ = writeln!(out, "{}", archetype_line(row));
        }
    }

    let stats: Vec<&StatLine> = report
        .stats
        .iter()
        .filter(|s| s.away.is_some() || s.home.is_some())
        .collect();
    if !stats.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Stats ({} / {})", away.abbreviation, home.abbreviation);
        for line in stats {
            let _ = writeln!(out, "{}", stat_line(line));
        }
    }
    out
}

fn archetype_line(row: &ArchetypeRow) -> String {
    let shared = if row.shared { "  [shared]" } else { "" };
    format!(
        "  {:<10} {:<9} {:<6}  {}  |  {}{}",
        row.family.label(),
        row.side.as_str(),
        row.window.as_str(),
        badge_text(row.away.as_ref()),
        badge_text(row.home.as_ref()),
        shared
    )
}

fn badge_text(badge: Option<&ArchetypeBadge>) -> String {
    match badge {
        Some(b) => format!(
            "{} ({}, {})",
            b.name,
            b.strength.label(),
            fmt_percentile(b.percentile)
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn stat_line(line: &StatLine) -> String {
    let side = |value: Option<f64>, percentile: Option<f64>| match (value, percentile) {
        (Some(v), Some(p)) => format!("{} ({})", fmt_score(v), fmt_percentile(p)),
        (Some(v), None) => fmt_score(v),
        (None, _) => NOT_AVAILABLE.to_string(),
    };
    format!(
        "  {:<10} {}  |  {}",
        line.family.label(),
        side(line.away.map(|s| s.value), line.away_percentile),
        side(line.home.map(|s| s.value), line.home_percentile)
    )
}

/// One-line strength label for a percentile.
pub fn strength_line(percentile: f64) -> String {
    format!(
        "{}: {}",
        fmt_percentile(percentile),
        classify_strength(percentile).label()
    )
}

/// Catalogue listing for one family/side, marking the team's and the
/// opponent's archetypes.
pub fn catalogue_text(
    family: Family,
    side: Side,
    cells: &[(&ArchetypeDef, ArchetypeHighlight)],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", family.label(), side.as_str());
    for (def, highlight) in cells {
        let _ = writeln!(
            out,
            "  {:<4} {:<22} {:<22} {}",
            highlight_mark(highlight),
            def.id,
            def.name,
            def.description
        );
    }
    out
}

fn highlight_mark(highlight: &ArchetypeHighlight) -> &'static str {
    if highlight.is_both {
        "both"
    } else if highlight.is_current {
        "team"
    } else if highlight.is_opponent {
        "opp"
    } else {
        ""
    }
}
