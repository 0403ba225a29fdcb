use super::types::{DepthLimit, FirstPlayerMode, Mark, TreeStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub ai_mark: Mark,
    pub first_player: FirstPlayerMode,
    pub tree_strategy: TreeStrategy,
    pub depth_limit: DepthLimit,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            ai_mark: Mark::X,
            first_player: FirstPlayerMode::Random,
            tree_strategy: TreeStrategy::PerTurn,
            depth_limit: DepthLimit::Unbounded,
        }
    }
}

impl TicTacToeSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.ai_mark == Mark::Empty {
            return Err("AI mark must be X or O".to_string());
        }
        if self.tree_strategy == TreeStrategy::WholeGame
            && self.depth_limit != DepthLimit::Unbounded
        {
            return Err("A depth limit requires the per_turn tree strategy".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(TicTacToeSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_whole_game_rejects_depth_limit() {
        let settings = TicTacToeSessionSettings {
            tree_strategy: TreeStrategy::WholeGame,
            depth_limit: DepthLimit::Plies(3),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_empty_ai_mark_rejected() {
        let settings = TicTacToeSessionSettings {
            ai_mark: Mark::Empty,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
