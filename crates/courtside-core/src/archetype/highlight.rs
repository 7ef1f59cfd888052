// Cross-team archetype highlighting for the catalogue grid.

use serde::{Deserialize, Serialize};

use crate::archetype::catalogue::{catalogue, ArchetypeDef};
use crate::archetype::{Family, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeHighlight {
    /// The cell is the team's own archetype.
    pub is_current: bool,
    /// The cell is the opponent's archetype.
    pub is_opponent: bool,
    /// Both teams share this archetype.
    pub is_both: bool,
}

/// Highlight state of one grid cell. Empty ids never match.
pub fn highlight_archetype_cell(cell_id: &str, team_id: &str, opponent_id: &str) -> ArchetypeHighlight {
    let is_current = !cell_id.is_empty() && cell_id == team_id;
    let is_opponent = !cell_id.is_empty() && cell_id == opponent_id;
    ArchetypeHighlight {
        is_current,
        is_opponent,
        is_both: is_current && is_opponent,
    }
}

/// Highlight state of the team's own cell: `is_both` (and `is_opponent`)
/// hold iff the opponent shares the team's archetype.
pub fn highlight_opponent_archetype(team_id: &str, opponent_id: &str) -> ArchetypeHighlight {
    highlight_archetype_cell(team_id, team_id, opponent_id)
}

/// Every catalogue cell of a family/side with its highlight state.
pub fn highlight_grid(
    family: Family,
    side: Side,
    team_id: &str,
    opponent_id: &str,
) -> Vec<(&'static ArchetypeDef, ArchetypeHighlight)> {
    catalogue(family, side)
        .iter()
        .map(|def| (def, highlight_archetype_cell(def.id, team_id, opponent_id)))
        .collect()
}
