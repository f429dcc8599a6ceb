use indexmap::IndexMap;
use saat_bot::BotDifficulty;
use saat_core::game::snapshot::DecisionSnapshot;
use saat_core::model::hand::Hand;
use saat_core::model::played::{PlayedRange, PlayedRanges};
use saat_core::model::rank::Rank;
use saat_core::model::suite::Suite;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

use crate::demo;

/// One decision point loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DecisionConfig {
    #[serde(flatten)]
    pub deal: DecisionSnapshot,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DecisionConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_path_with(path, None)
    }

    /// Load configuration, letting `difficulty` replace the file's own entry
    /// before validation.
    pub fn from_path_with(
        path: impl AsRef<Path>,
        difficulty: Option<BotDifficulty>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let cfg: DecisionConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        let mut cfg = cfg.with_difficulty(difficulty);
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// The built-in late-game deal used when no file is given.
    pub fn demo() -> Self {
        Self {
            deal: demo::demo_snapshot(),
            difficulty: default_difficulty(),
            logging: LoggingConfig::default(),
        }
    }

    /// Replace the configured difficulty when an override is present.
    pub fn with_difficulty(mut self, difficulty: Option<BotDifficulty>) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty.as_str().to_string();
        }
        self
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_played(&self.deal.played)?;
        validate_hand(&self.deal.hand)?;
        self.difficulty()?;
        self.logging.normalize();
        if self.logging.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!("unknown tracing level '{}'", self.logging.tracing_level),
            });
        }
        Ok(())
    }

    pub fn difficulty(&self) -> Result<BotDifficulty, ValidationError> {
        self.difficulty
            .parse()
            .map_err(|message| ValidationError::InvalidField {
                field: "difficulty".to_string(),
                message,
            })
    }

    /// Typed table and hand for the selector.
    pub fn deal(&self) -> Result<(PlayedRanges, Hand), ValidationError> {
        self.deal
            .clone()
            .into_parts()
            .map_err(|err| ValidationError::InvalidField {
                field: "deal".to_string(),
                message: err.to_string(),
            })
    }
}

fn default_difficulty() -> String {
    BotDifficulty::default().as_str().to_string()
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default)]
    pub telemetry_path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            telemetry_path: None,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_played(played: &IndexMap<Suite, [u8; 2]>) -> Result<(), ValidationError> {
    for (suite, [low, high]) in played {
        PlayedRange::new(*suite, *low, *high).map_err(|err| ValidationError::InvalidField {
            field: format!("played.{}", suite.code()),
            message: err.to_string(),
        })?;
    }
    Ok(())
}

fn validate_hand(hand: &IndexMap<Suite, Vec<u8>>) -> Result<(), ValidationError> {
    for (suite, values) in hand {
        let field = format!("hand.{}", suite.code());
        if values.is_empty() {
            return Err(ValidationError::InvalidField {
                field,
                message: "suite is listed but holds no cards".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for &value in values {
            if Rank::from_value(value).is_none() {
                return Err(ValidationError::InvalidField {
                    field,
                    message: format!("rank {value} is outside 1..=13"),
                });
            }
            if !seen.insert(value) {
                return Err(ValidationError::InvalidField {
                    field,
                    message: format!("rank {value} listed more than once"),
                });
            }
        }
    }
    Ok(())
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
