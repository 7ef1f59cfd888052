// Configuration loading and parsing (thresholds.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub possession: PossessionThresholds,
}

// ---------------------------------------------------------------------------
// thresholds.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire thresholds.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ThresholdsFile {
    possession: PossessionSection,
    bands: BandSection,
}

#[derive(Debug, Clone, Deserialize)]
struct PossessionSection {
    large_gap: f64,
    low_combined: f64,
    high_combined: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct BandSection {
    strong: f64,
    weak: f64,
}

/// Policy cut points for the possession classifier, assembled from the
/// `[possession]` and `[bands]` sections of thresholds.toml.
///
/// High-side thresholds (`large_gap`, `high_combined`, `strong_band`) are
/// inclusive (`>=`); low-side thresholds (`low_combined`, `weak_band`) are
/// strict (`<`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PossessionThresholds {
    /// Minimum |away - home| for a gap-driven edge.
    pub large_gap: f64,
    /// Combined score below which the game projects as low-efficiency.
    pub low_combined: f64,
    /// Combined score at or above which the game projects as high-efficiency.
    pub high_combined: f64,
    /// Single-team score at or above which the gauge reads "strong".
    pub strong_band: f64,
    /// Single-team score below which the gauge reads "weak".
    pub weak_band: f64,
}

impl Default for PossessionThresholds {
    fn default() -> Self {
        PossessionThresholds {
            large_gap: 20.0,
            low_combined: 90.0,
            high_combined: 130.0,
            strong_band: 67.0,
            weak_band: 33.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

const THRESHOLDS_FILE: &str = "thresholds.toml";

/// Load and validate configuration from `config/thresholds.toml` relative to
/// the given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let thresholds_path = base_dir.join("config").join(THRESHOLDS_FILE);
    let text = read_file(&thresholds_path)?;
    let file: ThresholdsFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: thresholds_path.clone(),
        source: e,
    })?;

    let config = Config {
        possession: PossessionThresholds {
            large_gap: file.possession.large_gap,
            low_combined: file.possession.low_combined,
            high_combined: file.possession.high_combined,
            strong_band: file.bands.strong,
            weak_band: file.bands.weak,
        },
    };

    validate(&config)?;
    debug!(thresholds = ?config.possession, "loaded {}", thresholds_path.display());

    Ok(config)
}

/// Seed `config/thresholds.toml` from `defaults/` when it is missing.
///
/// Returns the path written, or `None` when a config file is already in
/// place (an edited copy is never overwritten).
pub fn ensure_thresholds_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(THRESHOLDS_FILE);
    if target.is_file() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(THRESHOLDS_FILE);
    if !source.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "no {THRESHOLDS_FILE} in {}/config or {}/defaults",
                base_dir.display(),
                base_dir.display()
            ),
        });
    }

    let copy_err = |e: std::io::Error| ConfigError::DefaultsCopyError {
        message: format!("failed to seed {}: {e}", target.display()),
    };
    std::fs::create_dir_all(base_dir.join("config")).map_err(copy_err)?;
    std::fs::copy(&source, &target).map_err(copy_err)?;
    debug!("seeded {} from {}", target.display(), source.display());

    Ok(Some(target))
}

/// Load config relative to `base_dir`, copying defaults into `config/` first.
pub fn load_config_in(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_thresholds_file(base_dir)?;
    load_config_from(base_dir)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    load_config_in(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let t = &config.possession;

    let positive_fields: &[(&str, f64)] = &[
        ("possession.large_gap", t.large_gap),
        ("possession.low_combined", t.low_combined),
        ("possession.high_combined", t.high_combined),
        ("bands.strong", t.strong_band),
        ("bands.weak", t.weak_band),
    ];
    for (name, val) in positive_fields {
        if !val.is_finite() || *val <= 0.0 {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("must be a finite number > 0, got {val}"),
            });
        }
    }

    if t.high_combined <= t.low_combined {
        return Err(ConfigError::ValidationError {
            field: "possession.high_combined".into(),
            message: format!(
                "must be greater than possession.low_combined ({}), got {}",
                t.low_combined, t.high_combined
            ),
        });
    }

    if t.strong_band > 100.0 {
        return Err(ConfigError::ValidationError {
            field: "bands.strong".into(),
            message: format!("must be at most 100, got {}", t.strong_band),
        });
    }

    if t.weak_band >= t.strong_band {
        return Err(ConfigError::ValidationError {
            field: "bands.weak".into(),
            message: format!(
                "must be less than bands.strong ({}), got {}",
                t.strong_band, t.weak_band
            ),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
