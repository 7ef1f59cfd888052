// Closed archetype catalogue: five families, two sides, four or five ids each.
//
// Ids are assigned upstream. Anything not listed here for its family/side is
// reported as `ArchetypeLookup::Unknown`.

use crate::archetype::{Family, Side};

/// Display text for ids outside the catalogue.
pub const UNKNOWN_ARCHETYPE_LABEL: &str = "Unknown archetype";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn def(id: &'static str, name: &'static str, description: &'static str) -> ArchetypeDef {
    ArchetypeDef {
        id,
        name,
        description,
    }
}

// ---------------------------------------------------------------------------
// Catalogue tables
// ---------------------------------------------------------------------------

const SCORING_OFFENSE: &[ArchetypeDef] = &[
    def("paint_dominant", "Paint Dominant", "Most points come at the rim and in the lane."),
    def("perimeter_oriented", "Perimeter Oriented", "Leans on jumpers and threes for its points."),
    def("balanced_attack", "Balanced Attack", "Scores evenly from the paint, midrange, and arc."),
    def("transition_heavy", "Transition Heavy", "Gets a large share of points on the break."),
    def("isolation_heavy", "Isolation Heavy", "Half-court offense runs through one-on-one creators."),
];

const SCORING_DEFENSE: &[ArchetypeDef] = &[
    def("rim_protector", "Rim Protector", "Shuts down the paint and forces outside shots."),
    def("perimeter_lockdown", "Perimeter Lockdown", "Runs shooters off the line and contests jumpers."),
    def("balanced_defense", "Balanced Defense", "No glaring weakness by shot zone."),
    def("transition_vulnerable", "Transition Vulnerable", "Gives up easy points on the break."),
    def("porous", "Porous", "Allows efficient scoring from every zone."),
];

const THREES_OFFENSE: &[ArchetypeDef] = &[
    def("volume_shooter", "Volume Shooter", "Takes a high share of its shots from three."),
    def("efficient_shooter", "Efficient Shooter", "Moderate volume at a high conversion rate."),
    def("selective_shooter", "Selective Shooter", "Shoots threes only when open."),
    def("arc_averse", "Arc Averse", "Rarely attempts threes."),
];

const THREES_DEFENSE: &[ArchetypeDef] = &[
    def("arc_denial", "Arc Denial", "Limits three-point attempts."),
    def("contest_heavy", "Contest Heavy", "Allows attempts but contests them hard."),
    def("average_perimeter", "Average Perimeter", "League-average three-point defense."),
    def("perimeter_leaky", "Perimeter Leaky", "Gives up open threes."),
];

const TURNOVERS_OFFENSE: &[ArchetypeDef] = &[
    def("ball_secure", "Ball Secure", "Rarely turns the ball over."),
    def("average_security", "Average Security", "League-average turnover rate."),
    def("careless", "Careless", "Loose passes and live-ball turnovers."),
    def("high_risk", "High Risk", "Aggressive playmaking that trades turnovers for assists."),
];

const TURNOVERS_DEFENSE: &[ArchetypeDef] = &[
    def("ball_hawk", "Ball Hawk", "Jumps passing lanes and forces live-ball turnovers."),
    def("disruptive", "Disruptive", "Pressure defense that forces mistakes."),
    def("conservative", "Conservative", "Stays home and rarely gambles."),
    def("passive", "Passive", "Forces very few turnovers."),
];

const ASSISTS_OFFENSE: &[ArchetypeDef] = &[
    def("ball_movement", "Ball Movement", "High assist rate from constant swings and cuts."),
    def("balanced_creation", "Balanced Creation", "Mix of assisted and self-created shots."),
    def("isolation_creation", "Isolation Creation", "Most shots are unassisted."),
    def("low_creation", "Low Creation", "Struggles to generate assisted looks."),
];

const ASSISTS_DEFENSE: &[ArchetypeDef] = &[
    def("help_denial", "Help Denial", "Rotations cut off the extra pass."),
    def("switching", "Switching", "Switches everything to stay in front."),
    def("average_rotation", "Average Rotation", "League-average help defense."),
    def("scramble_prone", "Scramble Prone", "Late rotations allow easy assisted shots."),
];

const REBOUNDS_OFFENSE: &[ArchetypeDef] = &[
    def("crash_boards", "Crash Boards", "Sends bodies to the offensive glass."),
    def("selective_crash", "Selective Crash", "Crashes with bigs only."),
    def("get_back", "Get Back", "Gives up the glass to defend in transition."),
    def("undersized", "Undersized", "Lacks size to compete on the glass."),
];

const REBOUNDS_DEFENSE: &[ArchetypeDef] = &[
    def("glass_cleaner", "Glass Cleaner", "Ends possessions with a defensive rebound."),
    def("solid_boxout", "Solid Boxout", "Consistently boxes out."),
    def("average_boxout", "Average Boxout", "League-average defensive rebounding."),
    def("board_vulnerable", "Board Vulnerable", "Allows second-chance points."),
];

/// The catalogue entries for one family/side, in display order.
pub fn catalogue(family: Family, side: Side) -> &'static [ArchetypeDef] {
    match (family, side) {
        (Family::Scoring, Side::Offensive) => SCORING_OFFENSE,
        (Family::Scoring, Side::Defensive) => SCORING_DEFENSE,
        (Family::Threes, Side::Offensive) => THREES_OFFENSE,
        (Family::Threes, Side::Defensive) => THREES_DEFENSE,
        (Family::Turnovers, Side::Offensive) => TURNOVERS_OFFENSE,
        (Family::Turnovers, Side::Defensive) => TURNOVERS_DEFENSE,
        (Family::Assists, Side::Offensive) => ASSISTS_OFFENSE,
        (Family::Assists, Side::Defensive) => ASSISTS_DEFENSE,
        (Family::Rebounds, Side::Offensive) => REBOUNDS_OFFENSE,
        (Family::Rebounds, Side::Defensive) => REBOUNDS_DEFENSE,
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchetypeLookup<'a> {
    Known(&'static ArchetypeDef),
    /// Id outside the catalogue for its family/side (a data-contract violation).
    Unknown(&'a str),
}

impl ArchetypeLookup<'_> {
    pub fn is_known(&self) -> bool {
        matches!(self, ArchetypeLookup::Known(_))
    }

    /// Display name, or "Unknown archetype" for ids outside the catalogue.
    pub fn display_name(&self) -> &'static str {
        match self {
            ArchetypeLookup::Known(def) => def.name,
            ArchetypeLookup::Unknown(_) => UNKNOWN_ARCHETYPE_LABEL,
        }
    }
}

/// Resolve an archetype id against the catalogue for its family/side.
/// Matching is exact; an id valid for another family is still unknown here.
pub fn lookup_archetype(family: Family, side: Side, id: &str) -> ArchetypeLookup<'_> {
    match catalogue(family, side).iter().find(|d| d.id == id) {
        Some(def) => ArchetypeLookup::Known(def),
        None => ArchetypeLookup::Unknown(id),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
