use std::fmt;

use super::board::Board;
use super::types::{DepthLimit, Mark, Position};
use crate::debug_log;

/// Handle into a `GameTree` arena. Ids are handed out in creation order and
/// never reused, so two nodes never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: NodeId,
    pub board: Board,
    /// Plies below the root of the build call.
    pub depth: usize,
    pub to_move: Mark,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Move that produced this node from its parent; `None` for the root.
    pub last_move: Option<Position>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub terminal_leaves: usize,
    pub max_depth: usize,
}

/// Arena owning every node of one search tree. Node 0 is the root.
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<TreeNode>,
    depth_limit: DepthLimit,
}

impl GameTree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Panics if `id` was not handed out by this tree; use `get` for ids of
    /// unknown origin.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Same contract as `node`.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn depth_limit(&self) -> DepthLimit {
        self.depth_limit
    }

    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    pub fn child_for_move(&self, id: NodeId, pos: Position) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.node(child).last_move == Some(pos))
    }

    pub fn stats(&self) -> TreeStats {
        self.nodes.iter().fold(TreeStats::default(), |mut stats, node| {
            stats.nodes += 1;
            stats.max_depth = stats.max_depth.max(node.depth);
            if node.is_leaf() {
                stats.leaves += 1;
                if node.board.is_terminal() {
                    stats.terminal_leaves += 1;
                }
            }
            stats
        })
    }

    /// One "id - [child ids]" line per node down to `max_depth`, depth-first.
    pub fn outline(&self, max_depth: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut stack = vec![self.root()];

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            let children: Vec<String> = node.children.iter().map(|c| c.0.to_string()).collect();
            let indent = "  ".repeat(node.depth);
            lines.push(format!("{}{} - [{}]", indent, id.0, children.join(", ")));

            if node.depth < max_depth {
                stack.extend(node.children.iter().rev());
            }
        }

        lines
    }

    fn push_node(
        &mut self,
        board: Board,
        depth: usize,
        to_move: Mark,
        parent: Option<NodeId>,
        last_move: Option<Position>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            id,
            board,
            depth,
            to_move,
            parent,
            children: Vec::new(),
            last_move,
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    fn expand(&mut self, id: NodeId) {
        let (board, depth, mover) = {
            let node = &self.nodes[id.0];
            (node.board, node.depth, node.to_move)
        };

        if board.is_terminal() || self.depth_limit.reached(depth) {
            return;
        }
        let Some(next_mover) = mover.opponent() else {
            return;
        };

        for pos in board.legal_moves() {
            let child = self.push_node(
                board.with_mark(pos, mover),
                depth + 1,
                next_mover,
                Some(id),
                Some(pos),
            );
            self.expand(child);
        }
    }
}

/// Enumerates every legal continuation of `initial_board` with
/// `initial_player` to move. A node is a leaf when its board is terminal or
/// its depth equals the limit; capped leaves are kept as-is.
pub fn build_tree(initial_board: Board, initial_player: Mark, depth_limit: DepthLimit) -> GameTree {
    let mut tree = GameTree {
        nodes: Vec::new(),
        depth_limit,
    };
    let root = tree.push_node(initial_board, 0, initial_player, None, None);
    tree.expand(root);

    debug_log!(
        "Built game tree: {} nodes, {} to move, depth limit {}",
        tree.len(),
        initial_player,
        depth_limit
    );

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_tree_from_empty_board() {
        let tree = build_tree(Board::new(), Mark::X, DepthLimit::Unbounded);
        let stats = tree.stats();
        assert_eq!(stats.nodes, 549_946);
        assert_eq!(stats.leaves, 255_168);
        assert_eq!(stats.terminal_leaves, stats.leaves);
        assert_eq!(stats.max_depth, 9);
    }

    #[test]
    fn test_depth_limit_one_gives_nine_leaves() {
        let tree = build_tree(Board::new(), Mark::X, DepthLimit::Plies(1));
        let root = tree.node(tree.root());
        assert_eq!(root.children.len(), 9);
        for &child in &root.children {
            let node = tree.node(child);
            assert!(node.is_leaf());
            assert!(!node.board.is_terminal());
            assert_eq!(node.to_move, Mark::O);
        }
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn test_depth_limit_zero_keeps_root_as_leaf() {
        let tree = build_tree(Board::new(), Mark::X, DepthLimit::Plies(0));
        assert_eq!(tree.len(), 1);
        assert!(tree.node(tree.root()).is_leaf());
    }

    #[test]
    fn test_children_differ_by_one_cell_of_mover() {
        let start: Board = "X.O/.../...".parse().unwrap();
        let tree = build_tree(start, Mark::X, DepthLimit::Unbounded);

        for node in tree.iter() {
            for &child_id in &node.children {
                let child = tree.node(child_id);
                assert_eq!(node.board.diff_count(&child.board), 1);
                let pos = child.last_move.unwrap();
                assert_eq!(node.board.get(pos), Some(Mark::Empty));
                assert_eq!(child.board.get(pos), Some(node.to_move));
                assert_eq!(child.parent, Some(node.id));
                assert_eq!(child.depth, node.depth + 1);
            }
        }
    }

    #[test]
    fn test_node_ids_are_unique_and_match_arena_index() {
        let tree = build_tree(Board::new(), Mark::X, DepthLimit::Plies(3));
        for (index, node) in tree.iter().enumerate() {
            assert_eq!(node.id.index(), index);
        }
        assert_eq!(tree.len(), 1 + 9 + 72 + 504);
    }

    #[test]
    fn test_terminal_root_has_no_children() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        let tree = build_tree(won, Mark::O, DepthLimit::Unbounded);
        assert_eq!(tree.len(), 1);
        assert!(tree.node(tree.root()).last_move.is_none());
    }

    #[test]
    fn test_children_follow_row_major_order() {
        let tree = build_tree(Board::new(), Mark::X, DepthLimit::Plies(1));
        let moves: Vec<Position> = tree
            .children(tree.root())
            .iter()
            .map(|&c| tree.node(c).last_move.unwrap())
            .collect();
        assert_eq!(moves, Board::new().legal_moves());
        assert_eq!(
            tree.child_for_move(tree.root(), Position::new(1, 1)),
            Some(tree.children(tree.root())[4])
        );
    }

    #[test]
    fn test_get_rejects_ids_from_a_larger_tree() {
        let small = build_tree(Board::new(), Mark::X, DepthLimit::Plies(0));
        let large = build_tree(Board::new(), Mark::X, DepthLimit::Plies(1));
        let foreign = large.children(large.root())[8];

        assert!(small.get(small.root()).is_some());
        assert!(small.get(foreign).is_none());
        assert_eq!(large.get(foreign).map(|node| node.id), Some(foreign));
    }

    #[test]
    fn test_outline_lists_children() {
        let tree = build_tree(Board::new(), Mark::X, DepthLimit::Plies(1));
        let lines = tree.outline(0);
        assert_eq!(lines, vec!["0 - [1, 2, 3, 4, 5, 6, 7, 8, 9]".to_string()]);
        assert_eq!(tree.outline(1).len(), 10);
    }
}
