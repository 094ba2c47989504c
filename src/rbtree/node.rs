use super::*;

#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) key: u32,
    pub(super) color: Color,
    pub(super) parent: Option<NodeId>,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
}

impl Node {
    /// A freshly attached leaf: always red
    pub(super) fn leaf(key: u32, parent: NodeId) -> Self {
        Node {
            key,
            color: Color::Red,
            parent: Some(parent),
            left: None,
            right: None,
        }
    }

    /// The first node of a tree: no parent, forced black
    pub(super) fn root(key: u32) -> Self {
        Node {
            key,
            color: Color::Black,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub(super) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(super) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(super) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fresh_nodes() {
        let root = Node::root(7);
        assert_eq!(root.color, Color::Black);
        assert_eq!(root.parent, None);
        assert!(root.is_leaf());

        let mut leaf = Node::leaf(3, 0);
        assert_eq!(leaf.color, Color::Red);
        assert_eq!(leaf.parent, Some(0));

        leaf.set_child(Side::Right, Some(4));
        assert_eq!(leaf.child(Side::Right), Some(4));
        assert_eq!(leaf.child(Side::Left), None);
        assert!(!leaf.is_leaf());
    }
}
