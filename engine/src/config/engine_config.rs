use serde::{Deserialize, Serialize};

use super::Validate;
use crate::games::tictactoe::{
    BOARD_SIZE, DepthLimit, FirstPlayerMode, Mark, TicTacToeSessionSettings, TreeStrategy,
};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl EngineConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            ai_mark: self.session.ai_mark,
            first_player: self.session.first_player,
            tree_strategy: self.search.tree_strategy,
            depth_limit: self.search.depth_limit(),
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        self.search.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SearchConfig {
    pub tree_strategy: TreeStrategy,
    /// Plies to search below the current board; `None` searches to the end.
    pub depth_limit: Option<usize>,
}

impl SearchConfig {
    pub fn depth_limit(&self) -> DepthLimit {
        DepthLimit::from(self.depth_limit)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<(), String> {
        let Some(limit) = self.depth_limit else {
            return Ok(());
        };
        if limit > BOARD_SIZE * BOARD_SIZE {
            return Err(format!(
                "depth_limit must not exceed {}",
                BOARD_SIZE * BOARD_SIZE
            ));
        }
        if self.tree_strategy == TreeStrategy::WholeGame {
            return Err("depth_limit requires the per_turn tree strategy".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    pub ai_mark: Mark,
    pub first_player: FirstPlayerMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai_mark: Mark::X,
            first_player: FirstPlayerMode::Random,
        }
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_mark == Mark::Empty {
            return Err("ai_mark must be X or O".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub prefix: Option<String>,
    pub verbose: bool,
}
