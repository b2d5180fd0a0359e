use std::fs;
use std::path::Path;

use anyhow::{Context, anyhow, ensure};
use log::LevelFilter;
use serde::Deserialize;

use crate::game::Difficulty;
use crate::utils::GRID_SIZE;

/// environment variable naming an optional JSON settings file
pub const SETTINGS_ENV: &str = "SNAKE_SETTINGS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub window_title: String,
    /// logical window side in pixels
    pub window_size: u32,
    pub difficulty: Difficulty,
    pub log_level: String,
    /// fixed seed for food placement
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Snake Game".to_string(),
            window_size: 600,
            difficulty: Difficulty::Medium,
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl Settings {
    /// Defaults, or the file named by `SNAKE_SETTINGS` when it is set.
    pub fn load() -> anyhow::Result<Settings> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Settings::default()),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Settings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read settings from {}", path.display()))?;
        let settings = Self::from_json(&content)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        Ok(settings)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Settings> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn level_filter(&self) -> anyhow::Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("unknown log level {:?}", self.log_level))
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.window_size >= GRID_SIZE as u32,
            "window_size {} is smaller than the {} cell grid",
            self.window_size,
            GRID_SIZE
        );
        self.level_filter()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn partial_override() {
        let settings = Settings::from_json(r#"{ "difficulty": "hard", "seed": 7, "log_level": "debug" }"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(settings.window_size, 600);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Settings::from_json(r#"{ "speed": 3 }"#).is_err());
        assert!(Settings::from_json(r#"{ "difficulty": "insane" }"#).is_err());
        assert!(Settings::from_json(r#"{ "log_level": "loud" }"#).is_err());
        assert!(Settings::from_json(r#"{ "window_size": 4 }"#).is_err());
    }

    #[test]
    fn reads_file() {
        let path = std::env::temp_dir().join(format!("grid_snake_settings_{}.json", std::process::id()));
        fs::write(&path, r#"{ "window_title": "Test" }"#).unwrap();
        let settings = Settings::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(settings.window_title, "Test");

        assert!(Settings::from_file(&path).is_err());
    }
}
