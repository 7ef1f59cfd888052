// Archetype percentile ranker: strength labels, catalogue lookup, stat
// resolution, and opponent cross-highlighting.

pub mod catalogue;
pub mod highlight;
pub mod stats;
pub mod strength;

use serde::{Deserialize, Serialize};

pub use catalogue::{lookup_archetype, ArchetypeDef, ArchetypeLookup, UNKNOWN_ARCHETYPE_LABEL};
pub use highlight::{
    highlight_archetype_cell, highlight_grid, highlight_opponent_archetype, ArchetypeHighlight,
};
pub use stats::{extract_stat, resolve_stat, ResolvedStat, StatsBlob};
pub use strength::{classify_strength, league_percentile, StatDirection, StrengthLabel};

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

/// Stat family an archetype describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Scoring,
    Threes,
    Turnovers,
    Assists,
    Rebounds,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::Scoring,
        Family::Threes,
        Family::Turnovers,
        Family::Assists,
        Family::Rebounds,
    ];

    /// Parse a family tag. Case-insensitive.
    pub fn from_str_family(s: &str) -> Option<Family> {
        match s.to_ascii_lowercase().as_str() {
            "scoring" => Some(Family::Scoring),
            "threes" => Some(Family::Threes),
            "turnovers" => Some(Family::Turnovers),
            "assists" => Some(Family::Assists),
            "rebounds" => Some(Family::Rebounds),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Scoring => "scoring",
            Family::Threes => "threes",
            Family::Turnovers => "turnovers",
            Family::Assists => "assists",
            Family::Rebounds => "rebounds",
        }
    }

    /// Return a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Family::Scoring => "Scoring",
            Family::Threes => "Three-Point",
            Family::Turnovers => "Turnovers",
            Family::Assists => "Assists",
            Family::Rebounds => "Rebounding",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Offensive,
    Defensive,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Offensive, Side::Defensive];

    pub fn from_str_side(s: &str) -> Option<Side> {
        match s.to_ascii_lowercase().as_str() {
            "offensive" | "offense" | "off" => Some(Side::Offensive),
            "defensive" | "defense" | "def" => Some(Side::Defensive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Offensive => "offensive",
            Side::Defensive => "defensive",
        }
    }
}

/// Sample window the percentile was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Window {
    #[serde(rename = "season")]
    Season,
    #[serde(rename = "last10")]
    Last10,
}

impl Window {
    pub const ALL: [Window; 2] = [Window::Season, Window::Last10];

    pub fn as_str(&self) -> &'static str {
        match self {
            Window::Season => "season",
            Window::Last10 => "last10",
        }
    }
}

// ---------------------------------------------------------------------------
// Assignments and badges
// ---------------------------------------------------------------------------

/// Upstream archetype assignment for one team/family/side/window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeAssignment {
    pub archetype_id: String,
    /// League percentile, 0-100.
    pub percentile: f64,
}

/// Display-ready view of an assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeBadge {
    pub family: Family,
    pub side: Side,
    pub window: Window,
    pub archetype_id: String,
    /// Catalogue name, or "Unknown archetype".
    pub name: String,
    /// False when the id is outside the catalogue for this family/side.
    pub known: bool,
    pub percentile: f64,
    pub strength: StrengthLabel,
}

/// Interpret an upstream assignment: catalogue name plus strength label.
pub fn describe_assignment(
    family: Family,
    side: Side,
    window: Window,
    assignment: &ArchetypeAssignment,
) -> ArchetypeBadge {
    let lookup = lookup_archetype(family, side, &assignment.archetype_id);
    ArchetypeBadge {
        family,
        side,
        window,
        archetype_id: assignment.archetype_id.clone(),
        name: lookup.display_name().to_string(),
        known: lookup.is_known(),
        percentile: assignment.percentile,
        strength: classify_strength(assignment.percentile),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
