//! Configuration read from `Blokus.toml`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ConfigError;

/// File read when no path is given on the command line or in the environment.
pub const DEFAULT_CONFIG_PATH: &str = "Blokus.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "BLOKUS_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

/// Search limits for a single decision.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock allowance per decision, in seconds.
    pub time_budget_secs: f64,
    /// Hard cap on iterative deepening.
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget_secs: 10.0,
            max_depth: 64,
        }
    }
}

impl SearchConfig {
    /// The per-decision budget as a [`Duration`].
    ///
    /// Saturates for values too large to represent; negative or NaN budgets
    /// become zero.
    pub fn time_budget(&self) -> Duration {
        match Duration::try_from_secs_f64(self.time_budget_secs) {
            Ok(budget) => budget,
            Err(_) if self.time_budget_secs > 0.0 => Duration::MAX,
            Err(_) => Duration::ZERO,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_budget_secs.is_finite() || self.time_budget_secs <= 0.0 {
            return Err(ConfigError::InvalidBudget {
                value: self.time_budget_secs,
            });
        }
        if Duration::try_from_secs_f64(self.time_budget_secs).is_err() {
            return Err(ConfigError::BudgetTooLarge {
                value: self.time_budget_secs,
            });
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.search.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load `Blokus.toml` from the working directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_CONFIG_PATH)
    }

    /// Attempt to load `path`, falling back to built-in defaults on error.
    ///
    /// A missing file is expected and only logged at debug level.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "could not load config, using defaults");
                Self::default()
            }
        }
    }
}
