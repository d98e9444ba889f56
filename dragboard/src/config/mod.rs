//! Configuration system for the `Dragboard` terminal host.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/dragboard/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

use crate::board::{IdGenerator, RandomIds, SequentialIds};
use crate::controller::BoardController;

/// Narrowest column that still fits a title and a count badge.
pub const MIN_COLUMN_WIDTH: u16 = 12;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// A value parsed but is outside its allowed range.
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// Dotted key, e.g. `ui.column_width`.
        key: &'static str,
        /// The rejected value, rendered.
        value: String,
    },
}

/// How new column and task identifiers are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Time-ordered random UUIDs (v7).
    #[default]
    Random,
    /// A counter starting at 1; reproducible between runs.
    Sequential,
}

impl IdStrategy {
    /// Builds the generator for this strategy.
    #[must_use]
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Random => Box::new(RandomIds),
            Self::Sequential => Box::new(SequentialIds::new()),
        }
    }
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    board: BoardFileConfig,
    ui: UiFileConfig,
}

/// `[board]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct BoardFileConfig {
    id_strategy: Option<IdStrategy>,
    initial_columns: Option<usize>,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    poll_timeout_ms: Option<u64>,
    column_width: Option<u16>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    // -- Board --
    /// Identifier strategy for new entities.
    pub id_strategy: IdStrategy,
    /// Columns created with default names at startup.
    pub initial_columns: usize,

    // -- UI --
    /// Poll timeout for the terminal event loop.
    pub poll_timeout: Duration,
    /// Rendered width of one column, in cells.
    pub column_width: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Random,
            initial_columns: 0,
            poll_timeout: Duration::from_millis(50),
            column_width: 28,
        }
    }
}

impl BoardConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an
    /// error. Otherwise the default path
    /// (`~/.config/dragboard/config.toml`) is tried and silently ignored if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a config file cannot be read or parsed,
    /// or if a resolved value is out of range.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file).validate()
    }

    /// Resolve a `BoardConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            id_strategy: cli
                .id_strategy
                .or(file.board.id_strategy)
                .unwrap_or(defaults.id_strategy),
            initial_columns: cli
                .initial_columns
                .or(file.board.initial_columns)
                .unwrap_or(defaults.initial_columns),
            poll_timeout: file
                .ui
                .poll_timeout_ms
                .map_or(defaults.poll_timeout, Duration::from_millis),
            column_width: file.ui.column_width.unwrap_or(defaults.column_width),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.column_width < MIN_COLUMN_WIDTH {
            return Err(ConfigError::InvalidValue {
                key: "ui.column_width",
                value: self.column_width.to_string(),
            });
        }
        if self.poll_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "ui.poll_timeout_ms",
                value: "0".to_string(),
            });
        }
        Ok(self)
    }

    /// Builds a board controller with this configuration's identifier
    /// strategy and starting columns.
    #[must_use]
    pub fn build_controller(&self) -> BoardController {
        let mut controller = BoardController::with_id_generator(self.id_strategy.generator());
        for _ in 0..self.initial_columns {
            controller.add_column();
        }
        controller
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal kanban board with drag-and-drop reordering")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/dragboard/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How identifiers for new columns and tasks are drawn.
    #[arg(long, value_enum, env = "DRAGBOARD_ID_STRATEGY")]
    pub id_strategy: Option<IdStrategy>,

    /// Number of columns to create at startup.
    #[arg(long)]
    pub initial_columns: Option<usize>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "DRAGBOARD_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/dragboard.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ConfigFile::default());
        };
        config_dir.join("dragboard").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
