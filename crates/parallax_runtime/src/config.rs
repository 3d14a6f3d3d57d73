//! Boot configuration
//!
//! Resolution order:
//!
//! 1. Environment variables: `PARALLAX_MODE`, `PARALLAX_SEED`
//! 2. Config file: `parallax.toml` in the working directory
//! 3. Built-in defaults
//!
//! # Example config file
//!
//! ```toml
//! [engine]
//! mode = "discrete"   # discrete, continuous
//! seed = 24277
//!
//! [display]
//! width = 1280
//! height = 720
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use parallax_engine::EngineMode;

/// Boot configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Engine section
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSection {
    pub mode: EngineMode,
    /// Particle field layout seed
    pub seed: u32,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            mode: EngineMode::Discrete,
            seed: 0x5eed,
        }
    }
}

/// Display section
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub width: u32,
    pub height: u32,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Complete boot configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    pub engine: EngineSection,
    pub display: DisplaySection,
}

impl BootConfig {
    /// Load from `parallax.toml` if present, then apply env overrides.
    /// A broken config file is logged and ignored rather than fatal.
    pub fn load() -> Self {
        let mut config = match Self::from_file("parallax.toml") {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring parallax.toml: {}", e);
                Self::default()
            }
        };
        config.apply_env();
        config
    }

    /// Parse a config file. `Ok(None)` when the file does not exist.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&text)?))
    }

    fn apply_env(&mut self) {
        if let Ok(mode) = std::env::var("PARALLAX_MODE") {
            match mode.parse::<EngineMode>() {
                Ok(mode) => self.engine.mode = mode,
                Err(e) => log::warn!("Ignoring PARALLAX_MODE: {}", e),
            }
        }
        if let Ok(seed) = std::env::var("PARALLAX_SEED") {
            match seed.parse::<u32>() {
                Ok(seed) => self.engine.seed = seed,
                Err(_) => log::warn!("Ignoring PARALLAX_SEED: not a u32"),
            }
        }
    }

    pub fn print_summary(&self) {
        log::info!("Boot config:");
        log::info!("  mode:    {}", self.engine.mode);
        log::info!("  seed:    {:#x}", self.engine.seed);
        log::info!("  display: {}x{}", self.display.width, self.display.height);
    }
}
