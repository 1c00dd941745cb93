//! Unbalanced binary search tree, and a map built on top of it.
//!
//! The height of the tree depends on the order of insertion. Inserting sorted keys degenerates
//! the tree into a chain, so operations are linear in the worst case.

mod map;
mod node;
mod ordered_tree;
mod tree;

pub use self::map::BstMap;
pub use self::ordered_tree::Bst;
