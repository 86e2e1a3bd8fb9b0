use std::net::SocketAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::GameSettings;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "tictactoe_server_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    #[serde(default)]
    pub static_files_path: Option<String>,
    pub inactivity_timeout_secs: u64,
    pub cleanup_interval_secs: u64,
    #[serde(default)]
    pub game: GameSettings,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.bind_address
            .parse()
            .map_err(|e| format!("Invalid bind_address '{}': {}", self.bind_address, e))
    }

    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_secs)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;
        if self.inactivity_timeout_secs == 0 {
            return Err("inactivity_timeout_secs must be positive".to_string());
        }
        if self.cleanup_interval_secs == 0 {
            return Err("cleanup_interval_secs must be positive".to_string());
        }
        self.game.validate()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            static_files_path: None,
            inactivity_timeout_secs: 3600,
            cleanup_interval_secs: 300,
            game: GameSettings::default(),
        }
    }
}
