//! Key-value entries and the key extractors that order tree elements.

/// A key-value pair stored in a map. Trees order entries through [`ByKey`], so two entries with
/// the same key occupy the same position regardless of their values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }
}

/// Extracts the part of an element that a tree orders by.
///
/// Elements whose keys compare equal are considered duplicates.
pub trait KeyExtractor<T> {
    type Key: Ord + ?Sized;

    fn key(item: &T) -> &Self::Key;
}

/// Orders elements by the elements themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T> KeyExtractor<T> for Identity
where
    T: Ord,
{
    type Key = T;

    fn key(item: &T) -> &T {
        item
    }
}

/// Orders entries by their key only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey;

impl<K, V> KeyExtractor<Entry<K, V>> for ByKey
where
    K: Ord,
{
    type Key = K;

    fn key(item: &Entry<K, V>) -> &K {
        &item.key
    }
}
