//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.sapling/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::state::{MAX_SIZE, MIN_SIZE};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SaplingConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Growth level at startup, 1..=50.
    pub initial_size: Option<u16>,
    /// Frame pacing interval in milliseconds.
    pub tick_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_INITIAL_SIZE: u16 = 1;
pub const DEFAULT_TICK_MS: u64 = 144;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub initial_size: u16,
    pub tick: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sapling/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sapling").join("config.toml"))
}

/// Load config from `~/.sapling/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SaplingConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SaplingConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SaplingConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SaplingConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SaplingConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Sapling Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# initial_size = 1     # Growth level at startup (1-50)
# tick_ms = 144        # Frame pacing interval in milliseconds
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &SaplingConfig) -> ResolvedConfig {
    // Initial size: env → config → default, clamped to the state bounds.
    let initial_size = std::env::var("SAPLING_INITIAL_SIZE")
        .ok()
        .and_then(|s| s.parse().ok())
        .or(config.general.initial_size)
        .unwrap_or(DEFAULT_INITIAL_SIZE)
        .clamp(MIN_SIZE, MAX_SIZE);

    // Tick interval: env → config → default.
    let tick_ms = std::env::var("SAPLING_TICK_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .or(config.general.tick_ms)
        .unwrap_or(DEFAULT_TICK_MS);

    ResolvedConfig {
        initial_size,
        tick: Duration::from_millis(tick_ms),
    }
}
