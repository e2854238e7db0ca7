//! App configuration and data paths

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides the directory holding `config.json` and `preferences.json`.
pub const DATA_DIR_ENV: &str = "RESTART_DATA_DIR";

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Directory for config and persisted flags.
/// `RESTART_DATA_DIR` wins, then the platform config dir, then `.`.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    directories::ProjectDirs::from("", "", "restart")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Layout and feedback settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Diameter of the draggable handle
    pub handle_width: f32,
    /// Horizontal space left outside the slide track
    pub track_margin: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub sound_enabled: bool,
    /// Where `chimeup.mp3` and friends live; defaults to `sounds/` next to the exe
    pub sounds_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            handle_width: 80.0,
            track_margin: 80.0,
            window_width: 390.0,
            window_height: 760.0,
            sound_enabled: true,
            sounds_dir: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> PathBuf {
        data_dir().join(CONFIG_FILE)
    }

    /// Load from `config.json`, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`. A missing file silently means defaults; any other
    /// read or parse failure is logged first.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("could not read {}, using defaults: {e}", path.display());
                return Self::default();
            }
        };
        Self::from_json(&contents).unwrap_or_else(|e| {
            log::warn!("ignoring {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    /// Usable slide track width for a given available width.
    pub fn track_width(&self, available_width: f32) -> f32 {
        available_width - self.track_margin
    }
}
