//! CLI configuration.
//!
//! Settings are read from `--config <path>` when given, otherwise from
//! `<config_dir>/symph/config.json` if that file exists, otherwise defaults
//! are used. `SYMPH_TOKEN_ADDRESS` and `SYMPH_TRANSACTIONS` override the
//! file, and the merged result is validated before any command runs.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use symph_backend_audio::{DEFAULT_MASTER_GAIN, DEFAULT_STEP_SECONDS};
use symph_backend_music::note::DEFAULT_BASE_FREQUENCY;
use symph_spec::{validate_address, JsonFileSource};

/// Token whose transactions are listed when no address is given.
pub const DEFAULT_TOKEN_ADDRESS: &str = "7omp98JBaH3a9okQwwPCtGfHaZh4m4TRKqNuZAdBpump";

/// Origin used to build share links.
pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:3000";

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Environment variable overriding [`SymphConfig::token_address`].
pub const ENV_TOKEN_ADDRESS: &str = "SYMPH_TOKEN_ADDRESS";

/// Environment variable overriding [`SymphConfig::transactions_path`].
pub const ENV_TRANSACTIONS: &str = "SYMPH_TRANSACTIONS";

/// Resolved settings shared by every command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymphConfig {
    /// Address listed by `list` and shown by the terminal.
    pub token_address: String,
    /// Enhanced-transaction JSON file backing `lookup`, `list` and `--lookup`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions_path: Option<PathBuf>,
    pub share_origin: String,
    pub sample_rate: u32,
    /// Session volume in [0, 1].
    pub master_gain: f64,
    /// Seconds between consecutive notes.
    pub step_seconds: f64,
    /// Root of the equal-tempered note mapping, in Hz.
    pub base_frequency: f64,
    pub list_limit: usize,
}

impl Default for SymphConfig {
    fn default() -> Self {
        Self {
            token_address: DEFAULT_TOKEN_ADDRESS.to_string(),
            transactions_path: None,
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            master_gain: DEFAULT_MASTER_GAIN,
            step_seconds: DEFAULT_STEP_SECONDS,
            base_frequency: DEFAULT_BASE_FREQUENCY,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Location of the per-user config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("symph").join("config.json"))
}

impl SymphConfig {
    /// Loads, overrides from the process environment, and validates.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: SymphConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Applies environment overrides through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(address) = lookup(ENV_TOKEN_ADDRESS).filter(|v| !v.trim().is_empty()) {
            self.token_address = address.trim().to_string();
        }
        if let Some(path) = lookup(ENV_TRANSACTIONS).filter(|v| !v.trim().is_empty()) {
            self.transactions_path = Some(PathBuf::from(path));
        }
    }

    /// Rejects settings no command could run with.
    pub fn validate(&self) -> Result<()> {
        validate_address(&self.token_address).context("Invalid token_address in config")?;
        if self.sample_rate == 0 {
            bail!("sample_rate must be positive");
        }
        if !(0.0..=1.0).contains(&self.master_gain) {
            bail!("master_gain must be in [0, 1], got {}", self.master_gain);
        }
        if !(self.step_seconds.is_finite() && self.step_seconds > 0.0) {
            bail!("step_seconds must be positive, got {}", self.step_seconds);
        }
        if !(self.base_frequency.is_finite() && self.base_frequency > 0.0) {
            bail!("base_frequency must be positive, got {}", self.base_frequency);
        }
        if self.list_limit == 0 {
            bail!("list_limit must be positive");
        }
        Ok(())
    }

    /// The configured transaction source, if any.
    pub fn transaction_source(&self) -> Option<JsonFileSource> {
        self.transactions_path.as_deref().map(JsonFileSource::new)
    }
}
