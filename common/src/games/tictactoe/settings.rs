use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::FirstPlayerMode;

pub const MAX_AI_MOVE_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub first_player: FirstPlayerMode,
    #[serde(default = "default_ai_move_delay_ms")]
    pub ai_move_delay_ms: u64,
}

fn default_ai_move_delay_ms() -> u64 {
    1000
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Human,
            ai_move_delay_ms: default_ai_move_delay_ms(),
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.ai_move_delay_ms > MAX_AI_MOVE_DELAY_MS {
            return Err(format!(
                "ai_move_delay_ms ({}) must not exceed {}",
                self.ai_move_delay_ms, MAX_AI_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}
