use crate::bst::Bst;
use crate::entry::{ByKey, Entry};
use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::ops::{Index, IndexMut};

/// An ordered map implemented using an unbalanced binary search tree.
///
/// Entries are ordered by key only, so each key appears at most once. Indexing with `map[&key]`
/// panics if the key does not exist, while `map[&key] = value` inserts a default value first if
/// the key does not exist.
///
/// # Examples
///
/// ```
/// use ordered_trees::bst::BstMap;
/// use ordered_trees::Error;
///
/// let mut map = BstMap::new();
/// map[&0] = 1;
/// *map.upsert(3) += 4;
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&3), Ok(&4));
/// assert_eq!(map.get(&1), Err(Error::OutOfRange));
/// assert_eq!(map.len(), 2);
///
/// assert!(map.remove(&0));
/// assert!(!map.remove(&1));
/// ```
pub struct BstMap<K, V> {
    tree: Bst<Entry<K, V>, ByKey>,
}

impl<K, V> BstMap<K, V> {
    /// Constructs a new, empty `BstMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let map: BstMap<u32, u32> = BstMap::new();
    /// ```
    pub fn new() -> Self {
        BstMap {
            tree: Bst::with_extractor(),
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the map, removing all entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the keys of the map in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        self.tree.in_order().into_iter().map(|entry| &entry.key).collect()
    }

    /// Returns the values of the map in ascending order of their keys.
    pub fn values(&self) -> Vec<&V> {
        self.tree.in_order().into_iter().map(|entry| &entry.value).collect()
    }

    /// Returns the key-value pairs of the map in ascending order of their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.entries(), vec![(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.tree
            .in_order()
            .into_iter()
            .map(|entry| (&entry.key, &entry.value))
            .collect()
    }
}

impl<K, V> BstMap<K, V>
where
    K: Ord,
{
    /// Inserts a key-value pair into the map. Returns `false` and leaves the map unchanged if the
    /// key already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert!(map.insert(1, 1));
    /// assert!(!map.insert(1, 2));
    /// assert_eq!(map[&1], 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.tree.insert(Entry::new(key, value))
    }

    /// Returns a mutable reference to the value associated with a particular key, inserting a
    /// default value first if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map: BstMap<u32, String> = BstMap::new();
    /// assert_eq!(map.upsert(1), "");
    /// map.upsert(1).push_str("one");
    /// assert_eq!(map[&1], "one");
    /// ```
    pub fn upsert(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        &mut self.tree.get_or_insert(Entry::new(key, V::default())).value
    }

    /// Removes the entry with a particular key from the map. Returns `false` if the key does not
    /// exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.tree.remove(key)
    }

    /// Checks if a key exists in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// Returns an immutable reference to the value associated with a particular key. Fails with
    /// `Error::OutOfRange` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    /// use ordered_trees::Error;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), Err(Error::OutOfRange));
    /// assert_eq!(map.get(&1), Ok(&1));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V> {
        self.tree
            .get(key)
            .map(|entry| &entry.value)
            .ok_or(Error::OutOfRange)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map[&1], 2);
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key).map(|entry| &mut entry.value)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&K> {
        self.tree.min().map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&K> {
        self.tree.max().map(|entry| &entry.key)
    }
}

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> Index<&'a K> for BstMap<K, V>
where
    K: Ord,
{
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        match self.get(key) {
            Ok(value) => value,
            Err(error) => panic!("Error: {}.", error),
        }
    }
}

impl<'a, K, V> IndexMut<&'a K> for BstMap<K, V>
where
    K: Ord + Clone,
    V: Default,
{
    fn index_mut(&mut self, key: &K) -> &mut Self::Output {
        self.upsert(key.clone())
    }
}

impl<K, V> Serialize for BstMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries())
    }
}
