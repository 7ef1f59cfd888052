// Possession-efficiency classifier: blended scores -> edge -> market -> line check.

pub mod edge;
pub mod line_check;
pub mod market;

use serde::{Deserialize, Serialize};

use crate::config::PossessionThresholds;

pub use edge::{EdgeType, Step1Result};
pub use line_check::{step3_content, Step3Content};
pub use market::{compute_step2, MarketType, Step2Result};

// ---------------------------------------------------------------------------
// Team inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMeta {
    pub abbreviation: String,
    pub full_name: String,
}

/// One team's possession input: a 0-100 composite of turnover rate,
/// offensive-rebound rate, and free-throw rate, blended upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPossessionProfile {
    pub blended_score: f64,
    #[serde(flatten)]
    pub meta: TeamMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Venue {
    Away,
    Home,
}

impl Venue {
    pub fn opposite(self) -> Venue {
        match self {
            Venue::Away => Venue::Home,
            Venue::Home => Venue::Away,
        }
    }
}

// ---------------------------------------------------------------------------
// Single-team gauge bands
// ---------------------------------------------------------------------------

/// Gauge reading for one team's blended score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PossessionBand {
    /// At or above `strong_band` (67 by default).
    Strong,
    /// Between the two bands.
    Neutral,
    /// Below `weak_band` (33 by default). NaN also lands here.
    Weak,
}

impl PossessionBand {
    pub fn from_score(score: f64, thresholds: &PossessionThresholds) -> Self {
        if score >= thresholds.strong_band {
            PossessionBand::Strong
        } else if score >= thresholds.weak_band {
            PossessionBand::Neutral
        } else {
            PossessionBand::Weak
        }
    }

    /// Return a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PossessionBand::Strong => "Strong",
            PossessionBand::Neutral => "Neutral",
            PossessionBand::Weak => "Weak",
        }
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// All three steps for one matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PossessionReport {
    pub step1: Step1Result,
    pub step2: Step2Result,
    pub step3: Step3Content,
}

/// A possession classifier bound to one threshold set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PossessionClassifier {
    pub thresholds: PossessionThresholds,
}

impl PossessionClassifier {
    pub fn new(thresholds: PossessionThresholds) -> Self {
        PossessionClassifier { thresholds }
    }

    pub fn step1(
        &self,
        away_score: f64,
        home_score: f64,
        away: &TeamMeta,
        home: &TeamMeta,
    ) -> Step1Result {
        edge::compute_step1_with(away_score, home_score, away, home, &self.thresholds)
    }

    /// Run Step 1 through Step 3 for an away/home pair.
    pub fn evaluate(
        &self,
        away: &TeamPossessionProfile,
        home: &TeamPossessionProfile,
    ) -> PossessionReport {
        let step1 = self.step1(away.blended_score, home.blended_score, &away.meta, &home.meta);
        let step2 = compute_step2(&step1);
        let step3 = step3_content(&step2);
        PossessionReport {
            step1,
            step2,
            step3,
        }
    }

    pub fn band(&self, score: f64) -> PossessionBand {
        PossessionBand::from_score(score, &self.thresholds)
    }
}

/// Step 1 with the default thresholds.
pub fn compute_step1(
    away_score: f64,
    home_score: f64,
    away: &TeamMeta,
    home: &TeamMeta,
) -> Step1Result {
    PossessionClassifier::default().step1(away_score, home_score, away, home)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
