//! Application configuration read from the environment.

use std::path::PathBuf;

use ecosort_i18n::Language;
use ecosort_scoring::{ScoringRules, StreakBonus};
use ecosort_session::GameConfig;

use crate::error::AppError;
use crate::telemetry::LogFormat;

/// Optional features of the presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Emit sound cues.
    pub sound: bool,
    /// Let the player pick an item difficulty.
    pub difficulty_selection: bool,
    /// Load and store lifetime statistics.
    pub persistence: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            sound: true,
            difficulty_selection: true,
            persistence: true,
        }
    }
}

/// Complete configuration of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Initial display language.
    pub language: Language,
    /// Enabled features.
    pub capabilities: Capabilities,
    /// Round limit and scoring rules for new games.
    pub game: GameConfig,
    /// Seed for a reproducible RNG; entropy-seeded when absent.
    pub rng_seed: Option<u64>,
    /// Directory of the file-backed stats store; in-memory when absent.
    pub stats_dir: Option<PathBuf>,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            capabilities: Capabilities::default(),
            game: GameConfig::default(),
            rng_seed: None,
            stats_dir: None,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let language = match var("ECOSORT_LANGUAGE") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("ECOSORT_LANGUAGE: {e}")))?,
            None => defaults.language,
        };

        let capabilities = Capabilities {
            sound: parse_bool("ECOSORT_SOUND", var("ECOSORT_SOUND"), true)?,
            difficulty_selection: parse_bool(
                "ECOSORT_DIFFICULTY_SELECTION",
                var("ECOSORT_DIFFICULTY_SELECTION"),
                true,
            )?,
            persistence: parse_bool("ECOSORT_PERSISTENCE", var("ECOSORT_PERSISTENCE"), true)?,
        };

        let round_limit = match var("ECOSORT_ROUND_LIMIT") {
            Some(raw) => {
                let limit: u32 = raw.trim().parse().map_err(|e| {
                    AppError::Config(format!("ECOSORT_ROUND_LIMIT must be a valid u32: {e}"))
                })?;
                (limit > 0).then_some(limit)
            }
            None => defaults.game.round_limit,
        };

        let streak_bonus = match var("ECOSORT_STREAK_BONUS") {
            Some(raw) => raw
                .parse::<StreakBonus>()
                .map_err(|e| AppError::Config(format!("ECOSORT_STREAK_BONUS: {e}")))?,
            None => StreakBonus::default(),
        };

        let rng_seed = var("ECOSORT_RNG_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!("ECOSORT_RNG_SEED must be a valid u64: {e}"))
                })
            })
            .transpose()?;

        let log_format = match var("ECOSORT_LOG_FORMAT") {
            Some(raw) => raw
                .parse()
                .map_err(|e: String| AppError::Config(format!("ECOSORT_LOG_FORMAT: {e}")))?,
            None => defaults.log_format,
        };

        Ok(Self {
            language,
            capabilities,
            game: GameConfig {
                round_limit,
                rules: ScoringRules {
                    streak_bonus,
                    ..ScoringRules::default()
                },
            },
            rng_seed,
            stats_dir: var("ECOSORT_STATS_DIR").map(PathBuf::from),
            log_format,
        })
    }
}

fn parse_bool(name: &str, raw: Option<String>, default: bool) -> Result<bool, AppError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{name} must be a boolean, got {other:?}"
        ))),
    }
}
