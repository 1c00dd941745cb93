//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod balanced_tree;
mod node;
mod set;
mod tree;

pub use self::balanced_tree::AvlTree;
pub use self::set::AvlSet;
