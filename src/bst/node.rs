use crate::bst::tree;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T> {
    pub data: T,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(data: T) -> Self {
        Node {
            data,
            left: None,
            right: None,
        }
    }

    /// Returns the rightmost node of the subtree rooted at this node.
    pub fn max(&self) -> &Node<T> {
        let mut curr = self;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        curr
    }

    /// Returns the leftmost node of the subtree rooted at this node.
    pub fn min(&self) -> &Node<T> {
        let mut curr = self;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        curr
    }
}
