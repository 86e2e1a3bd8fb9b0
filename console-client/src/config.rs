use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::GameSettings;

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";
pub const MAX_PLAYER_NAME_LEN: usize = 32;

pub fn get_default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub game: GameSettings,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.player_name {
            if name.trim().is_empty() {
                return Err("player_name must not be blank".to_string());
            }
            if name.chars().count() > MAX_PLAYER_NAME_LEN {
                return Err(format!(
                    "player_name must be at most {} characters",
                    MAX_PLAYER_NAME_LEN
                ));
            }
        }
        self.game.validate()
    }
}
