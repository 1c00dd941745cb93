use crate::avl_tree::tree;
use serde::{Serialize, Serializer};

/// An ordered collection implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// restores the invariant bottom-up using single and double rotations.
///
/// # Examples
///
/// ```
/// use ordered_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(30);
/// tree.insert(20);
/// tree.insert(10);
///
/// assert_eq!(tree.in_order(), vec![&10, &20, &30]);
/// assert_eq!(tree.pre_order(), vec![&20, &10, &30]);
/// assert_eq!(tree.height(), 1);
/// assert!(tree.is_balanced());
///
/// assert!(tree.remove(&20));
/// assert!(!tree.contains(&20));
/// ```
pub struct AvlTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree { tree: None, len: 0 }
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all elements.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the number of edges on the longest path from the root to a leaf, or `-1` if the
    /// tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), -1);
    /// for item in 0..7 {
    ///     tree.insert(item);
    /// }
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Checks that the heights of the two subtrees of every node differ by at most one. The
    /// heights are recomputed from scratch rather than read from the nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.is_balanced());
    /// for item in 0..100 {
    ///     tree.insert(item);
    ///     assert!(tree.is_balanced());
    /// }
    /// ```
    pub fn is_balanced(&self) -> bool {
        tree::check_balanced(&self.tree).0
    }

    /// Returns the minimum element of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum element of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the elements of the tree in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        tree::in_order(&self.tree, &mut result);
        result
    }

    /// Returns the elements of the tree, visiting each node before its left and right subtrees.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        tree::pre_order(&self.tree, &mut result);
        result
    }

    /// Returns the elements of the tree, visiting each node after its left and right subtrees.
    pub fn post_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        tree::post_order(&self.tree, &mut result);
        result
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Inserts an element into the tree. Returns `false` and leaves the tree unchanged if the
    /// element already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        let inserted = tree::insert(&mut self.tree, item);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes an element from the tree. Returns `false` if the element does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        let removed = tree::remove(&mut self.tree, key).is_some();
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Checks if an element exists in the tree.
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the stored element equal to `key`. Returns `None` if no such element exists.
    pub fn get(&self, key: &T) -> Option<&T> {
        tree::get(&self.tree, key)
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Serialize for AvlTree<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.in_order())
    }
}

#[cfg(test)]
mod tests {
    use super::AvlTree;

    #[test]
    fn test_len_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_insert_contains() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(10));
        assert!(tree.insert(5));
        assert!(tree.insert(15));
        assert!(!tree.insert(10));

        assert!(tree.contains(&10));
        assert!(tree.contains(&5));
        assert!(tree.contains(&15));
        assert!(!tree.contains(&20));
        assert_eq!(tree.len(), 3);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_remove() {
        let mut tree = AvlTree::new();
        for item in &[20, 10, 30, 25, 35] {
            tree.insert(*item);
        }

        assert!(tree.remove(&25));
        assert!(tree.remove(&30));
        assert!(tree.remove(&20));
        assert!(!tree.remove(&99));

        assert!(!tree.contains(&20));
        assert!(!tree.contains(&25));
        assert!(!tree.contains(&30));
        assert!(tree.contains(&10));
        assert!(tree.contains(&35));
        assert_eq!(tree.len(), 2);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_traversals() {
        let mut tree = AvlTree::new();
        for item in &[20, 10, 30, 25, 35] {
            tree.insert(*item);
        }

        assert_eq!(tree.in_order(), vec![&10, &20, &25, &30, &35]);
        assert_eq!(tree.pre_order(), vec![&20, &10, &30, &25, &35]);
        assert_eq!(tree.post_order(), vec![&10, &25, &35, &30, &20]);
    }

    #[test]
    fn test_rotations() {
        for items in &[[30, 20, 10], [10, 20, 30], [30, 10, 20], [10, 30, 20]] {
            let mut tree = AvlTree::new();
            for item in items {
                tree.insert(*item);
            }
            assert_eq!(tree.in_order(), vec![&10, &20, &30]);
            assert_eq!(tree.pre_order(), vec![&20, &10, &30]);
            assert_eq!(tree.height(), 1);
            assert!(tree.is_balanced());
        }
    }

    #[test]
    fn test_min_max_clear() {
        let mut tree = AvlTree::new();
        for item in &[30, 20, 40, 10, 25, 35, 50] {
            tree.insert(*item);
        }
        assert_eq!(tree.min(), Some(&10));
        assert_eq!(tree.max(), Some(&50));
        assert_eq!(tree.get(&25), Some(&25));

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.min(), None);
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn test_descending_insertion_stays_logarithmic() {
        let mut tree = AvlTree::new();
        for item in (0..1024).rev() {
            tree.insert(item);
        }
        assert_eq!(tree.height(), 10);
        assert!(tree.is_balanced());
    }
}
