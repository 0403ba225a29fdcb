use crate::games::SessionRng;
use crate::{debug_log, log};
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move, select_from_tree};
use super::game_tree::{GameTree, NodeId, build_tree};
use super::settings::TicTacToeSessionSettings;
use super::types::{DepthLimit, FirstPlayerMode, GameStatus, Mark, Position, TreeStrategy};

/// Tree built once from the empty board, walked down as moves are played.
struct WholeGameTree {
    tree: GameTree,
    cursor: NodeId,
}

impl WholeGameTree {
    fn advance(&mut self, pos: Position) -> Result<(), String> {
        self.cursor = self
            .tree
            .child_for_move(self.cursor, pos)
            .ok_or_else(|| format!("Move {} is missing from the game tree", pos))?;
        Ok(())
    }
}

pub struct TicTacToeGameState {
    pub board: Board,
    pub ai_mark: Mark,
    pub human_mark: Mark,
    pub first_mark: Mark,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub depth_limit: DepthLimit,
    pub history: Vec<(Mark, Position)>,
    whole_game: Option<WholeGameTree>,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSessionSettings, rng: &mut SessionRng) -> Result<Self, String> {
        settings.validate()?;

        let ai_mark = settings.ai_mark;
        let human_mark = ai_mark
            .opponent()
            .ok_or_else(|| "AI mark must be X or O".to_string())?;

        let ai_first = match settings.first_player {
            FirstPlayerMode::Random => rng.random_bool(),
            FirstPlayerMode::Ai => true,
            FirstPlayerMode::Human => false,
        };
        let first_mark = if ai_first { ai_mark } else { human_mark };

        let whole_game = match settings.tree_strategy {
            TreeStrategy::WholeGame => {
                let tree = build_tree(Board::new(), first_mark, DepthLimit::Unbounded);
                log!("Built whole-game tree with {} nodes", tree.len());
                let cursor = tree.root();
                Some(WholeGameTree { tree, cursor })
            }
            TreeStrategy::PerTurn => None,
        };

        Ok(Self {
            board: Board::new(),
            ai_mark,
            human_mark,
            first_mark,
            current_mark: first_mark,
            status: GameStatus::InProgress,
            depth_limit: settings.depth_limit,
            history: Vec::new(),
            whole_game,
        })
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.human_mark
    }

    pub fn is_ai_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.ai_mark
    }

    pub fn place_human_mark(&mut self, pos: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        if self.current_mark != self.human_mark {
            return Err("Not your turn".to_string());
        }
        self.place_mark(pos)
    }

    /// Lets the AI choose and play its move. `Ok(None)` means the selector
    /// found nothing to play, which only happens on a finished board.
    pub fn play_ai_turn(&mut self) -> Result<Option<Position>, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        if self.current_mark != self.ai_mark {
            return Err("Not the AI's turn".to_string());
        }

        let chosen = match &self.whole_game {
            Some(whole_game) => select_from_tree(&whole_game.tree, whole_game.cursor),
            None => calculate_move(&BotInput::from_game_state(self)),
        };

        let Some(pos) = chosen else {
            return Ok(None);
        };
        debug_log!("AI ({}) plays {}", self.ai_mark, pos);
        self.place_mark(pos)?;
        Ok(Some(pos))
    }

    fn place_mark(&mut self, pos: Position) -> Result<(), String> {
        self.board = self
            .board
            .place(pos, self.current_mark)
            .map_err(|e| e.to_string())?;
        if let Some(whole_game) = self.whole_game.as_mut() {
            whole_game.advance(pos)?;
        }
        self.history.push((self.current_mark, pos));

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        self.status = match self.board.check_winner() {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty if self.board.is_full() => GameStatus::Draw,
            Mark::Empty => GameStatus::InProgress,
        };
    }

    pub fn get_winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}
