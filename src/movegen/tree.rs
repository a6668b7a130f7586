//! The action tree: every legal turn for one roll as a tree of alternatives.
//!
//! The virtual root is the tree itself and carries no move. Each node's
//! children are the alternative continuations after its move; each
//! root-to-leaf path is one complete turn.

use crate::board::Move;

/// One move plus the alternatives that may follow it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionNode {
    pub mv: Move,
    pub children: Vec<ActionNode>,
}

impl ActionNode {
    pub fn new(mv: Move) -> Self {
        ActionNode {
            mv,
            children: Vec::new(),
        }
    }

    /// Whether no move follows this one.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// All legal move sequences for a roll.
///
/// Owns its nodes outright; it shares nothing with the board it was
/// generated from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionTree {
    pub roots: Vec<ActionNode>,
}

impl ActionTree {
    pub fn new() -> Self {
        ActionTree::default()
    }

    /// First moves of every turn.
    pub fn roots(&self) -> &[ActionNode] {
        &self.roots
    }

    /// Whether no move can be played at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Calls `visitor` with every root-to-leaf path, depth-first, first child
    /// before its siblings.
    ///
    /// An empty tree is a single leaf at the root, so `visitor` then runs
    /// once with the empty turn.
    pub fn visit<F>(&self, mut visitor: F)
    where
        F: FnMut(&[Move]),
    {
        if self.roots.is_empty() {
            visitor(&[]);
            return;
        }
        let mut path = Vec::with_capacity(4);
        walk(&self.roots, &mut path, &mut visitor);
    }

    /// Collects every turn in visit order.
    pub fn paths(&self) -> Vec<Vec<Move>> {
        let mut paths = Vec::new();
        self.visit(|path| paths.push(path.to_vec()));
        paths
    }

    /// Number of complete turns.
    pub fn leaf_count(&self) -> usize {
        fn count(nodes: &[ActionNode]) -> usize {
            nodes
                .iter()
                .map(|n| if n.is_leaf() { 1 } else { count(&n.children) })
                .sum()
        }
        count(&self.roots).max(1)
    }

    /// Length of the longest turn.
    pub fn max_depth(&self) -> usize {
        depth(&self.roots)
    }

    /// Drops every turn that plays fewer dice than the longest one.
    ///
    /// When no turn plays more than one die of a non-double, only turns
    /// using the larger die are kept.
    pub fn retain_maximal(&mut self) {
        let longest = self.max_depth();
        if longest == 0 {
            return;
        }
        prune_to_depth(&mut self.roots, longest);
        if longest == 1 {
            if let Some(high) = self.roots.iter().map(|n| n.mv.steps).max() {
                self.roots.retain(|n| n.mv.steps == high);
            }
        }
    }
}

fn walk<F>(nodes: &[ActionNode], path: &mut Vec<Move>, visitor: &mut F)
where
    F: FnMut(&[Move]),
{
    for node in nodes {
        path.push(node.mv);
        if node.is_leaf() {
            visitor(path);
        } else {
            walk(&node.children, path, visitor);
        }
        path.pop();
    }
}

fn depth(nodes: &[ActionNode]) -> usize {
    nodes
        .iter()
        .map(|n| 1 + depth(&n.children))
        .max()
        .unwrap_or(0)
}

/// Keeps only branches that still reach `remaining` moves.
fn prune_to_depth(nodes: &mut Vec<ActionNode>, remaining: usize) {
    nodes.retain_mut(|node| {
        if remaining <= 1 {
            return true;
        }
        prune_to_depth(&mut node.children, remaining - 1);
        !node.children.is_empty()
    });
}
