mod node;
mod tree;
mod tree_iter;
mod validate;

pub use tree::RBTree;
pub use tree_iter::InOrder;
pub use validate::ColorCounts;

/// Index of a node inside the tree arena
type NodeId = u32;

/// Upper bound on the number of nodes in any root-to-leaf path.
/// With at most 2^32 nodes, the red-black bound `2 * log2(n + 1)` gives 64
const MAX_HEIGHT: usize = 64;

/// Most nodes a tree can hold: every `NodeId` but the largest
const MAX_NODES: usize = NodeId::MAX as usize;

/// Node color. Absent children count as black
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Which side of its parent a node hangs from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
