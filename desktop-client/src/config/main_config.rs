use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::GameMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::WindowConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_desktop_config.yaml";

pub type AppConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(custom_path: Option<PathBuf>) -> AppConfigManager {
    ConfigManager::from_yaml_file(custom_path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub window: WindowConfig,
    pub start_mode: GameMode,
    #[serde(default = "default_remember_mode")]
    pub remember_mode: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_remember_mode() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            start_mode: GameMode::HumanVsHuman,
            remember_mode: default_remember_mode(),
            seed: None,
        }
    }
}
