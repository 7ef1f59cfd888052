// Courtside command-line entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout stays clean for reports)
// 2. Parse arguments
// 3. Load config (copying defaults/ into config/ when missing)
// 4. Run the requested subcommand and print its report

mod render;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::info;

use courtside_core::archetype::{self, Family, Side};
use courtside_core::config;
use courtside_core::matchup::{self, MatchupInput};
use courtside_core::possession::{PossessionClassifier, TeamMeta, TeamPossessionProfile};

#[derive(Parser)]
#[command(name = "courtside")]
#[command(about = "Possession-efficiency and archetype reports for basketball matchups", long_about = None)]
struct Cli {
    /// Directory holding config/ and defaults/ (defaults to the working directory)
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a matchup JSON file
    Matchup {
        /// Matchup JSON file path
        path: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Classify two blended possession scores
    Classify {
        /// Away team blended score (0-100)
        #[arg(long)]
        away: f64,

        /// Home team blended score (0-100)
        #[arg(long)]
        home: f64,

        /// Away team abbreviation
        #[arg(long, default_value = "AWAY")]
        away_team: String,

        /// Home team abbreviation
        #[arg(long, default_value = "HOME")]
        home_team: String,

        /// Print the report as JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Label a percentile with its strength band
    Strength {
        /// Percentile (0-100)
        #[arg(allow_hyphen_values = true)]
        percentile: f64,
    },

    /// List archetype catalogue entries
    Catalogue {
        /// Stat family (scoring, threes, turnovers, assists, rebounds)
        #[arg(long)]
        family: Option<String>,

        /// Side (offensive, defensive)
        #[arg(long)]
        side: Option<String>,

        /// Mark this archetype id as the team's own
        #[arg(long)]
        team: Option<String>,

        /// Mark this archetype id as the opponent's
        #[arg(long)]
        opponent: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Matchup { path, json } => {
            let config = load_config(cli.base_dir.as_deref())?;
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read matchup file {}", path.display()))?;
            let input: MatchupInput = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse matchup file {}", path.display()))?;
            info!(
                "Evaluating {} @ {}",
                input.away.profile.meta.abbreviation, input.home.profile.meta.abbreviation
            );

            let report = matchup::evaluate_matchup(&input, &config.possession);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::matchup_text(&report));
            }
        }
        Commands::Classify {
            away,
            home,
            away_team,
            home_team,
            json,
        } => {
            let config = load_config(cli.base_dir.as_deref())?;
            let classifier = PossessionClassifier::new(config.possession);
            let report = classifier.evaluate(&profile(away_team, away), &profile(home_team, home));
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::possession_text(&report));
            }
        }
        Commands::Strength { percentile } => {
            println!("{}", render::strength_line(percentile));
        }
        Commands::Catalogue {
            family,
            side,
            team,
            opponent,
        } => {
            let families = match family {
                Some(f) => vec![Family::from_str_family(&f)
                    .ok_or_else(|| anyhow!("unknown stat family `{f}`"))?],
                None => Family::ALL.to_vec(),
            };
            let sides = match side {
                Some(s) => {
                    vec![Side::from_str_side(&s).ok_or_else(|| anyhow!("unknown side `{s}`"))?]
                }
                None => Side::ALL.to_vec(),
            };
            let team = team.as_deref().unwrap_or_default();
            let opponent = opponent.as_deref().unwrap_or_default();
            for family in families {
                for &side in &sides {
                    let cells = archetype::highlight_grid(family, side, team, opponent);
                    print!("{}", render::catalogue_text(family, side, &cells));
                }
            }
        }
    }

    Ok(())
}

fn load_config(base_dir: Option<&Path>) -> anyhow::Result<config::Config> {
    let config = match base_dir {
        Some(dir) => config::load_config_in(dir),
        None => config::load_config(),
    }
    .context("failed to load configuration")?;
    info!(
        "Config loaded: large_gap={}, low_combined={}, high_combined={}",
        config.possession.large_gap, config.possession.low_combined, config.possession.high_combined
    );
    Ok(config)
}

fn profile(abbreviation: String, blended_score: f64) -> TeamPossessionProfile {
    TeamPossessionProfile {
        blended_score,
        meta: TeamMeta {
            full_name: abbreviation.clone(),
            abbreviation,
        },
    }
}

/// Initialize tracing to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("courtside=info,courtside_core=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
