//! Game configuration
//!
//! Settings are read from `assets/config/game.json` when that file exists.
//! Every field has a default, so a partial file (or no file at all) still
//! produces a playable setup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Where the game looks for its configuration file
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub fps: u32,
    /// Root directory for images, animation frames and sounds
    pub asset_root: PathBuf,
    /// Overrides the per-user save directory
    pub save_directory: Option<PathBuf>,
    pub autosave_interval_secs: f32,
    /// 0.0 - 1.0
    pub sound_volume: f32,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "Click Tycoon".to_string(),
            window_width: 1000,
            window_height: 800,
            fps: 60,
            asset_root: PathBuf::from("assets"),
            save_directory: None,
            autosave_interval_secs: 5.0,
            sound_volume: 0.3,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the config if the file is present.
    ///
    /// Returns `Ok(None)` when there is no file, so callers can tell "use the
    /// defaults" apart from "the file is broken".
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_file(path).map(Some)
    }

    /// Directory holding `save.json`
    ///
    /// Defaults to `~/.click_tycoon`, or `./saves` when no home directory
    /// can be found.
    pub fn resolve_save_directory(&self) -> PathBuf {
        if let Some(dir) = &self.save_directory {
            return dir.clone();
        }
        dirs::home_dir()
            .map(|p| p.join(".click_tycoon"))
            .unwrap_or_else(|| PathBuf::from("./saves"))
    }

    pub fn asset_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.asset_root.join(relative)
    }

    /// Time budget for one frame at the configured FPS
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// Out-of-range values fall back to the default interval
    pub fn autosave_interval(&self) -> Duration {
        match Duration::try_from_secs_f32(self.autosave_interval_secs.max(0.0)) {
            Ok(interval) => interval,
            Err(e) => {
                let fallback = Self::default().autosave_interval_secs;
                warn!(
                    value = self.autosave_interval_secs,
                    "autosave interval out of range ({}), using {}s", e, fallback
                );
                Duration::from_secs_f32(fallback)
            }
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::INFO)
    }
}
