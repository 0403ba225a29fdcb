use super::game_tree::{GameTree, NodeId};
use super::types::Score;

/// Backward induction over an already-built tree.
///
/// `maximizing` says whether `node` is a maximizing ply; it flips at every
/// level below. Leaves score as their winner (+1 X, -1 O, 0 otherwise), which
/// also makes depth-capped non-terminal leaves count as draws.
pub fn evaluate(tree: &GameTree, node: NodeId, maximizing: bool) -> Score {
    let current = tree.node(node);
    if current.is_leaf() {
        return current.board.check_winner().score();
    }

    if maximizing {
        let mut best_score = Score::MIN;
        for &child in &current.children {
            best_score = best_score.max(evaluate(tree, child, false));
        }
        best_score
    } else {
        let mut best_score = Score::MAX;
        for &child in &current.children {
            best_score = best_score.min(evaluate(tree, child, true));
        }
        best_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::Board;
    use crate::games::tictactoe::game_tree::build_tree;
    use crate::games::tictactoe::types::{DepthLimit, Mark};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let tree = build_tree(Board::new(), Mark::X, DepthLimit::Unbounded);
        assert_eq!(evaluate(&tree, tree.root(), true), 0);
    }

    #[test]
    fn test_terminal_leaves_score_their_winner() {
        for (s, expected) in [("XXX/OO./...", 1), ("OOO/XX./X..", -1), ("XOX/XOO/OXX", 0)] {
            let tree = build_tree(board(s), Mark::O, DepthLimit::Unbounded);
            assert_eq!(evaluate(&tree, tree.root(), true), expected, "{}", s);
            assert_eq!(evaluate(&tree, tree.root(), false), expected, "{}", s);
        }
    }

    #[test]
    fn test_forced_win_for_x() {
        let tree = build_tree(board("XX./OO./..."), Mark::X, DepthLimit::Unbounded);
        assert_eq!(evaluate(&tree, tree.root(), true), 1);
    }

    #[test]
    fn test_o_to_move_wins_when_minimizing() {
        let tree = build_tree(board("XX./OO./X.."), Mark::O, DepthLimit::Unbounded);
        assert_eq!(evaluate(&tree, tree.root(), false), -1);
    }

    #[test]
    fn test_depth_capped_leaves_score_as_draw() {
        let tree = build_tree(Board::new(), Mark::X, DepthLimit::Plies(1));
        for &child in tree.children(tree.root()) {
            assert_eq!(evaluate(&tree, child, false), 0);
        }
        assert_eq!(evaluate(&tree, tree.root(), true), 0);
    }

    #[test]
    fn test_depth_zero_root_scores_as_draw() {
        let tree = build_tree(board("XX./OO./..."), Mark::X, DepthLimit::Plies(0));
        assert_eq!(evaluate(&tree, tree.root(), true), 0);
    }

    #[test]
    fn test_capped_search_misses_deeper_win() {
        // An edge reply to a corner opening loses for O, but only a full
        // search sees it.
        let start = board("XO./.../...");
        let shallow = build_tree(start, Mark::X, DepthLimit::Plies(1));
        let deep = build_tree(start, Mark::X, DepthLimit::Unbounded);
        assert_eq!(evaluate(&shallow, shallow.root(), true), 0);
        assert_eq!(evaluate(&deep, deep.root(), true), 1);
    }
}
