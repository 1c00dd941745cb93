use crate::bst::tree;
use crate::entry::{Identity, KeyExtractor};
use serde::{Serialize, Serializer};
use std::marker::PhantomData;

/// An ordered collection implemented using an unbalanced binary search tree.
///
/// Elements are ordered by the key that `E` extracts from them, and no two elements may have equal
/// keys. By default elements are ordered by themselves.
///
/// # Examples
///
/// ```
/// use ordered_trees::bst::Bst;
///
/// let mut tree = Bst::new();
/// assert!(tree.insert(5));
/// assert!(tree.insert(3));
/// assert!(!tree.insert(5));
///
/// assert_eq!(tree.len(), 2);
/// assert!(tree.contains(&3));
/// assert_eq!(tree.in_order(), vec![&3, &5]);
///
/// assert!(tree.remove(&3));
/// assert!(!tree.remove(&3));
/// ```
pub struct Bst<T, E = Identity> {
    tree: tree::Tree<T>,
    len: usize,
    _marker: PhantomData<E>,
}

impl<T> Bst<T> {
    /// Constructs a new, empty `Bst<T>` that orders elements by themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let tree: Bst<u32> = Bst::new();
    /// ```
    pub fn new() -> Self {
        Self::with_extractor()
    }
}

impl<T, E> Bst<T, E> {
    /// Constructs a new, empty `Bst<T, E>` that orders elements by the key `E` extracts.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    /// use ordered_trees::entry::{ByKey, Entry};
    ///
    /// let mut tree: Bst<Entry<u32, &str>, ByKey> = Bst::with_extractor();
    /// tree.insert(Entry::new(1, "a"));
    /// assert!(!tree.insert(Entry::new(1, "b")));
    /// ```
    pub fn with_extractor() -> Self {
        Bst {
            tree: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let tree: Bst<u32> = Bst::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    /// Returns the number of edges on the longest path from the root to a leaf, or `-1` if the
    /// tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// assert_eq!(tree.height(), -1);
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
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
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.in_order(), vec![&1, &2, &3]);
    /// ```
    pub fn in_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        tree::in_order(&self.tree, &mut result);
        result
    }

    /// Returns the elements of the tree, visiting each node before its left and right subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.pre_order(), vec![&2, &1, &3]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        tree::pre_order(&self.tree, &mut result);
        result
    }

    /// Returns the elements of the tree, visiting each node after its left and right subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.post_order(), vec![&1, &3, &2]);
    /// ```
    pub fn post_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        tree::post_order(&self.tree, &mut result);
        result
    }
}

impl<T, E> Bst<T, E>
where
    E: KeyExtractor<T>,
{
    /// Inserts an element into the tree. Returns `false` and leaves the tree unchanged if an
    /// element with an equal key already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        let inserted = tree::insert::<T, E>(&mut self.tree, item);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the element with a particular key from the tree. Returns `false` if no such element
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &E::Key) -> bool {
        let removed = tree::remove::<T, E>(&mut self.tree, key).is_some();
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Checks if an element with a particular key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, key: &E::Key) -> bool {
        tree::contains::<T, E>(&self.tree, key)
    }

    /// Returns the element with a particular key. Returns `None` if no such element exists.
    pub fn get(&self, key: &E::Key) -> Option<&T> {
        tree::get::<T, E>(&self.tree, key)
    }

    // The caller must not change the key of the returned element.
    pub(crate) fn get_mut(&mut self, key: &E::Key) -> Option<&mut T> {
        tree::get_mut::<T, E>(&mut self.tree, key)
    }

    // The caller must not change the key of the returned element.
    pub(crate) fn get_or_insert(&mut self, item: T) -> &mut T {
        let Bst {
            ref mut tree,
            ref mut len,
            ..
        } = self;
        let (item, inserted) = tree::get_or_insert::<T, E>(tree, item);
        if inserted {
            *len += 1;
        }
        item
    }
}

impl<T, E> Drop for Bst<T, E> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T, E> Default for Bst<T, E> {
    fn default() -> Self {
        Self::with_extractor()
    }
}

impl<T, E> Serialize for Bst<T, E>
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
