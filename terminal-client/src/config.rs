use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::puzzle2048::Puzzle2048Settings;
use serde::{Deserialize, Serialize};

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: &str) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: Puzzle2048Settings,
    pub render: RenderConfig,
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.render.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Drawn between cells and at both ends of each row.
    pub separator: String,
    pub empty_cell: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: "|".to_string(),
            empty_cell: ".".to_string(),
        }
    }
}

impl Validate for RenderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.separator.is_empty() || self.separator.contains('\n') {
            return Err(format!(
                "Separator must be non-empty and single-line, got {:?}",
                self.separator
            ));
        }
        if self.empty_cell.is_empty() || self.empty_cell.contains('\n') {
            return Err(format!(
                "Empty cell marker must be non-empty and single-line, got {:?}",
                self.empty_cell
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log to this file instead of stdout.
    pub file: Option<String>,
}
