// Step 3: manual line-check instructions for each market type.
//
// Every market returns at least one instruction. `examples` and `warnings`
// are always present, possibly empty.

use serde::{Deserialize, Serialize};

use crate::possession::market::{MarketType, Step2Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step3Content {
    pub title: String,
    /// Ordered steps. Render with `format::numbered` for display.
    pub instructions: Vec<String>,
    pub examples: Vec<String>,
    pub warnings: Vec<String>,
}

/// Look up the line-check bundle for a Step 2 result.
pub fn step3_content(step2: &Step2Result) -> Step3Content {
    let away = step2.step1.away.abbreviation.as_str();
    let home = step2.step1.home.abbreviation.as_str();

    match step2.market_type {
        MarketType::TeamTotal => team_total(step2.favored_abbreviation(), away, home),
        MarketType::GameTotalOver => game_total_over(away, home),
        MarketType::GameTotalUnder => game_total_under(away, home),
        MarketType::NoMarket => no_market(away, home),
    }
}

fn team_total(favored: &str, away: &str, home: &str) -> Step3Content {
    Step3Content {
        title: format!("Check the {favored} Team Total"),
        instructions: vec![
            format!("Open the {away} @ {home} game and find the {favored} team total market."),
            format!("Compare the posted {favored} team total to their season scoring average."),
            format!(
                "If the line sits at or below that average, the possession edge is not priced in: \
                 consider the {favored} team total over."
            ),
            "If the line is already well above the average, the market has moved; pass.".to_string(),
        ],
        examples: vec![format!(
            "{favored} averages 115.0 points and the team total is 112.5: the over has room."
        )],
        warnings: vec![
            "Confirm the starting lineups; a missing rebounder erases an offensive-rebound edge."
                .to_string(),
        ],
    }
}

fn game_total_over(away: &str, home: &str) -> Step3Content {
    Step3Content {
        title: "Check the Game Total Over".to_string(),
        instructions: vec![
            format!("Open the {away} @ {home} game total market."),
            format!("Add the season scoring averages of {away} and {home}."),
            "If the posted total is below that sum, consider the over.".to_string(),
        ],
        examples: vec![
            "Averages of 116.0 and 114.0 sum to 230.0; a total of 226.5 leaves room for the over."
                .to_string(),
        ],
        warnings: vec![
            "Pace matters: two efficient but slow teams can still stay under.".to_string(),
        ],
    }
}

fn game_total_under(away: &str, home: &str) -> Step3Content {
    Step3Content {
        title: "Check the Game Total Under".to_string(),
        instructions: vec![
            format!("Open the {away} @ {home} game total market."),
            format!("Add the season scoring averages of {away} and {home}."),
            "If the posted total is above that sum, consider the under.".to_string(),
        ],
        examples: vec![
            "Averages of 108.0 and 110.0 sum to 218.0; a total of 222.5 leaves room for the under."
                .to_string(),
        ],
        warnings: Vec::new(),
    }
}

fn no_market(away: &str, home: &str) -> Step3Content {
    Step3Content {
        title: "No Line to Check".to_string(),
        instructions: vec![
            format!(
                "The possession profiles of {away} and {home} do not favor a market; \
                 skip this game unless another signal points somewhere."
            ),
        ],
        examples: Vec::new(),
        warnings: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PossessionThresholds;
    use crate::possession::edge::{compute_step1_with, EdgeType, Step1Result};
    use crate::possession::market::compute_step2;
    use crate::possession::TeamMeta;

    fn meta(abbr: &str) -> TeamMeta {
        TeamMeta {
            abbreviation: abbr.into(),
            full_name: format!("{abbr} Full Name"),
        }
    }

    fn step2(away: f64, home: f64) -> Step2Result {
        let s1 = compute_step1_with(
            away,
            home,
            &meta("LAL"),
            &meta("PHX"),
            &PossessionThresholds::default(),
        );
        compute_step2(&s1)
    }

    #[test]
    fn every_market_has_instructions() {
        for edge in EdgeType::ALL {
            let s1 = Step1Result {
                edge_type: edge,
                ..compute_step1_with(
                    50.0,
                    50.0,
                    &meta("LAL"),
                    &meta("PHX"),
                    &PossessionThresholds::default(),
                )
            };
            let content = step3_content(&compute_step2(&s1));
            assert!(!content.title.is_empty(), "{edge:?}");
            assert!(!content.instructions.is_empty(), "{edge:?}");
            assert!(content.instructions.iter().all(|i| !i.is_empty()));
        }
    }

    #[test]
    fn team_total_mentions_favored_team() {
        let content = step3_content(&step2(90.0, 30.0));
        assert_eq!(content.title, "Check the LAL Team Total");
        assert!(content.instructions.iter().any(|i| i.contains("LAL team total")));
        assert!(!content.examples.is_empty());
        assert!(!content.warnings.is_empty());
    }

    #[test]
    fn under_has_no_warnings_but_an_example() {
        let content = step3_content(&step2(40.0, 45.0));
        assert_eq!(content.title, "Check the Game Total Under");
        assert!(content.warnings.is_empty());
        assert_eq!(content.examples.len(), 1);
    }

    #[test]
    fn no_market_names_both_teams() {
        let content = step3_content(&step2(50.0, 55.0));
        assert_eq!(content.instructions.len(), 1);
        assert!(content.instructions[0].contains("LAL"));
        assert!(content.instructions[0].contains("PHX"));
        assert!(content.examples.is_empty());
    }

    #[test]
    fn content_is_deterministic() {
        assert_eq!(step3_content(&step2(68.0, 72.0)), step3_content(&step2(68.0, 72.0)));
    }
}
