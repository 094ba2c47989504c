use super::node::Node;
use super::{NodeId, RBTree, MAX_HEIGHT};
use arrayvec::ArrayVec;

/// Sorted iterator over the keys of a `RBTree`.
///
/// Lazy and restartable: every call to `RBTree::iter` walks the tree again
pub struct InOrder<'a> {
    nodes: &'a [Node],
    /// Nodes whose key is still to be returned, the next one on top.
    /// Never deeper than the tree height
    stack: ArrayVec<[NodeId; MAX_HEIGHT]>,
    len: usize,
}

impl<'a> InOrder<'a> {
    pub(super) fn new(tree: &'a RBTree) -> Self {
        let mut iter = InOrder {
            nodes: &tree.nodes,
            stack: ArrayVec::new(),
            len: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    /// Stack `node` and all of its leftmost descendants
    fn push_left_spine(&mut self, mut node: Option<NodeId>) {
        while let Some(id) = node {
            self.stack.push(id);
            node = self.nodes[id as usize].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id as usize];
        self.push_left_spine(node.right);
        self.len -= 1;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> ExactSizeIterator for InOrder<'a> {}
impl<'a> std::iter::FusedIterator for InOrder<'a> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let tree = RBTree::new();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn sorted_and_exact_size() {
        let tree: RBTree = vec![31, 41, 59, 26, 53, 58, 97, 93, 23, 84, 62, 64, 33, 83, 27]
            .into_iter()
            .collect();

        let mut iter = tree.iter();
        assert_eq!(iter.len(), 15);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 13);

        assert_eq!(
            tree.iter().collect::<Vec<_>>(),
            vec![23, 26, 27, 31, 33, 41, 53, 58, 59, 62, 64, 83, 84, 93, 97]
        );
    }

    #[test]
    fn restartable() {
        let mut tree: RBTree = (0..100).rev().collect();
        let first: Vec<u32> = tree.in_order().collect();
        let second: Vec<u32> = (&tree).into_iter().collect();
        assert_eq!(first, second);

        tree.insert(50);
        let third: Vec<u32> = tree.iter().collect();
        assert_eq!(third.len(), 101);
        assert_eq!(&third[49..53], &[49, 50, 50, 51]);
    }
}
