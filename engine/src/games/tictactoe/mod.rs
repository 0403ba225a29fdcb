mod board;
mod bot_controller;
mod game_state;
mod game_tree;
mod minimax;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, check_winner, is_full, is_terminal, legal_moves};
pub use bot_controller::{
    BotInput, best_ranked_move, calculate_move, rank_moves, select_best_move,
    select_best_move_for, select_from_tree,
};
pub use game_state::TicTacToeGameState;
pub use game_tree::{GameTree, NodeId, TreeNode, TreeStats, build_tree};
pub use minimax::evaluate;
pub use settings::TicTacToeSessionSettings;
pub use types::{
    BOARD_SIZE, BoardError, DepthLimit, FirstPlayerMode, GameStatus, Mark, Position, Score,
    TreeStrategy, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
