//! Invariant checks and measurements.
//!
//! None of these are needed to keep the tree balanced; they exist so callers
//! and tests can observe that it is.

use super::*;

/// Number of nodes of each color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorCounts {
    /// Red nodes
    pub red: usize,
    /// Black nodes, the root included
    pub black: usize,
}

impl RBTree {
    /// Number of nodes on the longest root-to-leaf path. 0 for an empty tree
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// Number of black nodes on every path from the root down to an absent
    /// child, not counting the root itself. `None` if paths disagree
    pub fn black_height(&self) -> Option<usize> {
        match self.root {
            None => Some(0),
            Some(root) => {
                let total = self.subtree_black_height(Some(root))?;
                Some(match self.node(root).color {
                    Color::Black => total - 1,
                    Color::Red => total,
                })
            }
        }
    }

    /// Whether, from every node, all paths down to an absent child cross the
    /// same number of black nodes
    pub fn black_height_consistent(&self) -> bool {
        self.subtree_black_height(self.root).is_some()
    }

    pub fn root_is_black(&self) -> bool {
        self.color_of(self.root) == Color::Black
    }

    /// Whether every red node only has black (or absent) children
    pub fn no_red_red(&self) -> bool {
        self.nodes.iter().all(|node| {
            node.color == Color::Black
                || (self.color_of(node.left) == Color::Black
                    && self.color_of(node.right) == Color::Black)
        })
    }

    /// Whether the in-order walk yields non-decreasing keys
    pub fn is_ordered(&self) -> bool {
        let mut iter = self.iter();
        let mut prev = match iter.next() {
            None => return true,
            Some(key) => key,
        };
        for key in iter {
            if key < prev {
                return false;
            }
            prev = key;
        }
        true
    }

    /// Whether parent and child links agree everywhere and every node is
    /// reachable from the root
    pub fn links_consistent(&self) -> bool {
        let root = match self.root {
            None => return self.nodes.is_empty(),
            Some(root) => root,
        };
        if self.node(root).parent.is_some() {
            return false;
        }

        let mut reached = 0;
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            reached += 1;
            if reached > self.nodes.len() {
                // A cycle
                return false;
            }
            for child in self.node(id).left.iter().chain(self.node(id).right.iter()) {
                if self.node(*child).parent != Some(id) {
                    return false;
                }
                pending.push(*child);
            }
        }
        reached == self.nodes.len()
    }

    pub fn color_counts(&self) -> ColorCounts {
        let mut counts = ColorCounts::default();
        for node in &self.nodes {
            match node.color {
                Color::Red => counts.red += 1,
                Color::Black => counts.black += 1,
            }
        }
        counts
    }

    /// Check every red-black and binary-search-tree invariant at once
    pub fn is_valid(&self) -> bool {
        self.links_consistent()
            && self.root_is_black()
            && self.no_red_red()
            && self.black_height_consistent()
            && self.is_ordered()
    }

    fn subtree_height(&self, node: Option<NodeId>) -> usize {
        match node {
            None => 0,
            Some(id) => {
                let node = self.node(id);
                if node.is_leaf() {
                    return 1;
                }
                1 + self
                    .subtree_height(node.left)
                    .max(self.subtree_height(node.right))
            }
        }
    }

    /// Black nodes on any path from `node` (included) to an absent child,
    /// or `None` if two paths below `node` disagree
    fn subtree_black_height(&self, node: Option<NodeId>) -> Option<usize> {
        let id = match node {
            None => return Some(0),
            Some(id) => id,
        };
        let node = self.node(id);
        let left = self.subtree_black_height(node.left)?;
        let right = self.subtree_black_height(node.right)?;
        if left != right {
            return None;
        }
        Some(match node.color {
            Color::Black => left + 1,
            Color::Red => left,
        })
    }
}
