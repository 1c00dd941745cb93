use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T> {
    pub data: T,
    pub height: i32,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(data: T) -> Self {
        Node {
            data,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            ref mut height,
            ref left,
            ref right,
            ..
        } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }

    pub fn max(&self) -> &Node<T> {
        let mut curr = self;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        curr
    }

    pub fn min(&self) -> &Node<T> {
        let mut curr = self;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        curr
    }
}
