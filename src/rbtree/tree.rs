use super::node::Node;
use super::*;
use crate::error::AllocationError;
use log::{debug, trace};

/// An ordered multiset of `u32` keys kept balanced with red-black coloring.
///
/// Nodes live in an arena and refer to each other by index: a parent owns its
/// children through `left`/`right`, while `parent` is only a back-reference.
/// Equal keys are routed to the right subtree on insertion.
#[derive(Debug, Clone, Default)]
pub struct RBTree {
    pub(super) root: Option<NodeId>,
    pub(super) nodes: Vec<Node>,
}

impl RBTree {
    /// Create an empty tree. The first insertion becomes the (black) root
    pub fn new() -> Self {
        RBTree {
            root: None,
            nodes: Vec::new(),
        }
    }

    /// Create an empty tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        RBTree {
            root: None,
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Build a one-node tree holding `first_key` as its black root.
    ///
    /// # Panics
    /// If the node cannot be allocated
    pub fn create(first_key: u32) -> Self {
        let mut tree = RBTree::new();
        tree.insert(first_key);
        tree
    }

    /// Fallible version of `create`
    pub fn try_create(first_key: u32) -> Result<Self, AllocationError> {
        let mut tree = RBTree::new();
        tree.try_insert(first_key)?;
        Ok(tree)
    }

    /// Insert a key and rebalance.
    ///
    /// # Panics
    /// If the node cannot be allocated. Use `try_insert` to recover instead
    pub fn insert(&mut self, key: u32) {
        if let Err(e) = self.try_insert(key) {
            panic!("Failed to insert {}: {}", key, e);
        }
    }

    /// Insert a key and rebalance, reporting allocation failures.
    /// On error the tree is left untouched
    pub fn try_insert(&mut self, key: u32) -> Result<(), AllocationError> {
        self.try_insert_within(key, MAX_NODES)
    }

    /// `try_insert` for an arena holding at most `max_nodes` nodes
    fn try_insert_within(&mut self, key: u32, max_nodes: usize) -> Result<(), AllocationError> {
        self.reserve_node(max_nodes)?;

        if self.root.is_none() {
            // First node: no descent, no fix-up
            let id = self.push(Node::root(key));
            self.root = Some(id);
            return Ok(());
        }

        let id = self.attach(key);
        self.fix_up(id);
        Ok(())
    }

    /// Return the number of keys in the tree, counting duplicates
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every node at once
    pub fn clear(&mut self) {
        self.root = None;
        self.nodes.clear();
    }

    pub fn contains(&self, key: u32) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if key == node.key {
                return true;
            }
            current = if key < node.key { node.left } else { node.right };
        }
        false
    }

    /// Return how many times `key` was inserted
    pub fn count(&self, key: u32) -> usize {
        // Rotations may move equal keys to either side of each other, so both
        // subtrees of a match have to be searched
        let mut count = 0;
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = pending.pop() {
            let node = self.node(id);
            if key < node.key {
                pending.extend(node.left);
            } else if key > node.key {
                pending.extend(node.right);
            } else {
                count += 1;
                pending.extend(node.left);
                pending.extend(node.right);
            }
        }
        count
    }

    pub fn min(&self) -> Option<u32> {
        self.extreme(Side::Left)
    }

    pub fn max(&self) -> Option<u32> {
        self.extreme(Side::Right)
    }

    pub fn root_key(&self) -> Option<u32> {
        self.root.map(|root| self.node(root).key)
    }

    pub fn root_color(&self) -> Option<Color> {
        self.root.map(|root| self.node(root).color)
    }

    /// Return a sorted iterator over the keys in the tree
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    /// Alias of `iter`
    pub fn in_order(&self) -> InOrder<'_> {
        self.iter()
    }

    pub(super) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }

    /// Color lookup where an absent child counts as black
    pub(super) fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.node(id).color)
    }

    /// Which side of `parent` the node `child` hangs from
    fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        if self.node(parent).left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn extreme(&self, side: Side) -> Option<u32> {
        let mut current = self.root?;
        while let Some(next) = self.node(current).child(side) {
            current = next;
        }
        Some(self.node(current).key)
    }

    /// Make sure the next `push` will neither fail nor go past `max_nodes`
    fn reserve_node(&mut self, max_nodes: usize) -> Result<(), AllocationError> {
        if self.nodes.len() >= max_nodes {
            debug!("Node arena full at {} nodes", self.nodes.len());
            return Err(AllocationError::CapacityExceeded);
        }
        self.nodes.try_reserve(1).map_err(|e| {
            debug!("Node arena could not grow past {} nodes: {}", self.nodes.len(), e);
            AllocationError::from(e)
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    /// Descend from the root to the first free slot for `key` (equal keys go
    /// right) and hang a new red leaf there. Return the new node
    fn attach(&mut self, key: u32) -> NodeId {
        let mut parent = match self.root {
            Some(root) => root,
            None => panic!("Cannot descend into an empty tree"),
        };

        let side = loop {
            let node = self.node(parent);
            let side = if node.key > key {
                Side::Left
            } else {
                Side::Right
            };
            match node.child(side) {
                Some(child) => parent = child,
                None => break side,
            }
        };

        let id = self.push(Node::leaf(key, parent));
        self.node_mut(parent).set_child(side, Some(id));
        id
    }

    /// Restore the red-black invariants after `node` was attached as a red leaf.
    ///
    /// Walks upwards while the uncle is red (recolor), and finishes with at
    /// most one restructuring when the uncle is black
    fn fix_up(&mut self, mut node: NodeId) {
        loop {
            let parent = match self.node(node).parent {
                Some(parent) if self.node(parent).color == Color::Red => parent,
                // Root reached, or black parent: nothing left to fix
                _ => break,
            };

            let grandparent = match self.node(parent).parent {
                Some(grandparent) => grandparent,
                // Only a red root gets here, and the root is kept black
                None => break,
            };

            let parent_side = self.side_of(parent, grandparent);
            let uncle = self.node(grandparent).child(parent_side.opposite());

            if self.color_of(uncle) == Color::Red {
                trace!(
                    "Recolor: parent {} and uncle of {} turn black",
                    self.node(parent).key,
                    self.node(node).key
                );
                self.node_mut(parent).color = Color::Black;
                if let Some(uncle) = uncle {
                    self.node_mut(uncle).color = Color::Black;
                }
                if Some(grandparent) == self.root {
                    break;
                }
                self.node_mut(grandparent).color = Color::Red;
                node = grandparent;
            } else {
                let node_side = self.side_of(node, parent);
                self.restructure(node, parent, grandparent, node_side, parent_side);
                break;
            }
        }

        debug_assert_eq!(self.root_color(), Some(Color::Black));
    }

    /// Rotate the red `node`, its red `parent` and their `grandparent` so
    /// that the middle key of the three ends up on top, black, with the other
    /// two as its red children
    fn restructure(
        &mut self,
        node: NodeId,
        parent: NodeId,
        grandparent: NodeId,
        node_side: Side,
        parent_side: Side,
    ) {
        let promoted = match (parent_side, node_side) {
            (Side::Left, Side::Left) => {
                trace!("LL rotation at {}", self.node(grandparent).key);
                self.rotate(grandparent, parent, Side::Right);
                parent
            }
            (Side::Right, Side::Right) => {
                trace!("RR rotation at {}", self.node(grandparent).key);
                self.rotate(grandparent, parent, Side::Left);
                parent
            }
            (Side::Left, Side::Right) => {
                trace!("LR rotation at {}", self.node(grandparent).key);
                self.rotate(parent, node, Side::Left);
                self.rotate(grandparent, node, Side::Right);
                node
            }
            (Side::Right, Side::Left) => {
                trace!("RL rotation at {}", self.node(grandparent).key);
                self.rotate(parent, node, Side::Right);
                self.rotate(grandparent, node, Side::Left);
                node
            }
        };

        self.node_mut(promoted).color = Color::Black;
        self.node_mut(grandparent).color = Color::Red;
    }

    /// Rotate `pivot` down towards `direction`, lifting its child `riser`
    /// (which must hang on the opposite side) into its place. The riser's
    /// inner subtree is handed over to the pivot
    fn rotate(&mut self, pivot: NodeId, riser: NodeId, direction: Side) {
        let from = direction.opposite();
        debug_assert_eq!(self.node(pivot).child(from), Some(riser));

        let above = self
            .node(pivot)
            .parent
            .map(|above| (above, self.side_of(pivot, above)));

        let inner = self.node(riser).child(direction);
        self.node_mut(pivot).set_child(from, inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(pivot);
        }

        self.node_mut(riser).set_child(direction, Some(pivot));
        self.node_mut(pivot).parent = Some(riser);
        self.node_mut(riser).parent = above.map(|(above, _)| above);

        match above {
            Some((above, side)) => self.node_mut(above).set_child(side, Some(riser)),
            None => {
                trace!("{} becomes the root", self.node(riser).key);
                self.root = Some(riser);
                self.node_mut(riser).color = Color::Black;
            }
        }
    }
}

impl std::iter::FromIterator<u32> for RBTree {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = RBTree::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}

impl Extend<u32> for RBTree {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a RBTree {
    type Item = u32;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
