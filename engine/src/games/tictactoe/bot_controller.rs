use crate::debug_log;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::game_tree::{GameTree, NodeId, build_tree};
use super::minimax::evaluate;
use super::types::{DepthLimit, Mark, Position, Score};

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub depth_limit: DepthLimit,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.ai_mark,
            depth_limit: state.depth_limit,
        }
    }
}

pub fn calculate_move(input: &BotInput) -> Option<Position> {
    select_best_move_for(input.board, input.bot_mark, input.depth_limit)
}

/// Best move for X on `board` with a full-depth search. `None` only when no
/// cell is free.
pub fn select_best_move(board: Board) -> Option<Position> {
    select_best_move_for(board, Mark::X, DepthLimit::Unbounded)
}

pub fn select_best_move_for(board: Board, mark: Mark, depth_limit: DepthLimit) -> Option<Position> {
    best_ranked_move(mark, &rank_moves(board, mark, depth_limit))
}

/// Every legal move of `mark` with its minimax score, in row-major order.
///
/// Each move is scored on its own subtree, so the root is expanded even when
/// the board already has a winner.
pub fn rank_moves(board: Board, mark: Mark, depth_limit: DepthLimit) -> Vec<(Position, Score)> {
    let Some(opponent) = mark.opponent() else {
        return Vec::new();
    };
    board
        .legal_moves()
        .into_iter()
        .map(|pos| {
            let subtree = build_tree(board.with_mark(pos, mark), opponent, depth_limit.below());
            let score = evaluate(&subtree, subtree.root(), opponent.is_maximizer());
            (pos, score)
        })
        .collect()
}

/// Scores the children of `node`, which must belong to `tree`.
pub fn rank_tree_moves(tree: &GameTree, node: NodeId) -> Vec<(Position, Score)> {
    tree.children(node)
        .iter()
        .filter_map(|&child_id| {
            let child = tree.node(child_id);
            let pos = child.last_move?;
            let score = evaluate(tree, child_id, child.to_move.is_maximizer());
            Some((pos, score))
        })
        .collect()
}

/// Picks among the children of `node` for the mark to move there.
pub fn select_from_tree(tree: &GameTree, node: NodeId) -> Option<Position> {
    let mover = tree.node(node).to_move;
    best_ranked_move(mover, &rank_tree_moves(tree, node))
}

/// The first move with a strictly better score for `mover` wins, so ties go
/// to row-major order.
pub fn best_ranked_move(mover: Mark, ranked: &[(Position, Score)]) -> Option<Position> {
    let mut best_move = None;
    let mut best_score = Score::MIN;

    for &(pos, score) in ranked {
        let score_for_mover = if mover.is_maximizer() { score } else { -score };
        debug_log!("{} at {} scores {}", mover, pos, score);

        if score_for_mover > best_score {
            best_score = score_for_mover;
            best_move = Some(pos);
        }
    }

    best_move
}
