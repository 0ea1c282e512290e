use crate::error::{Result, VidsweepError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CONFIG_FILE: &str = "config.toml";
pub const SEEN_FILE: &str = "seen_videos.json";

/// Choices remembered between runs. Every key is optional so a fresh or
/// partially written file still loads.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_default_player: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| VidsweepError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Unreadable config is treated as a first run.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("Config file corrupted ({}). Recreating.", e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)
            .map_err(|e| VidsweepError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml_content)
            .map_err(|e| VidsweepError::Config(format!("Failed to write config: {}", e)))
    }
}

/// Where the config and seen list live.
#[derive(Debug, Clone)]
pub struct StatePaths {
    pub config_file: PathBuf,
    pub seen_file: PathBuf,
}

impl StatePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            config_file: dir.join(CONFIG_FILE),
            seen_file: dir.join(SEEN_FILE),
        }
    }

    /// `<config dir>/vidsweep`, or the working directory when the platform
    /// has no config dir.
    pub fn default_location() -> Self {
        let dir = dirs::config_dir()
            .map(|d| d.join("vidsweep"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::in_dir(&dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            use_default_player: Some(false),
            player_path: Some(PathBuf::from("/usr/bin/mpv")),
            root_folder: Some(PathBuf::from("/media/videos")),
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "use_default_player = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.use_default_player, Some(true));
        assert!(config.player_path.is_none());
        assert!(config.root_folder.is_none());
    }

    #[test]
    fn test_corrupt_config_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "this is = = not toml [").unwrap();

        assert!(Config::load(&path).is_err());
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_state_paths() {
        let paths = StatePaths::in_dir(Path::new("/tmp/state"));
        assert_eq!(paths.config_file, Path::new("/tmp/state/config.toml"));
        assert_eq!(paths.seen_file, Path::new("/tmp/state/seen_videos.json"));
    }
}
