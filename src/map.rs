use std::borrow::Borrow;

use crate::{
    iter::{IntoIter, Iter, RefIter},
    node::{height, Node},
};

/// An ordered map of unique keys to values, backed by an AVL tree.
///
/// Every mutation leaves the tree height-balanced: for every node the heights
/// of the two subtrees differ by at most one, bounding the cost of
/// [`AvlMap::put()`], [`AvlMap::get()`] and [`AvlMap::contains_key()`] to
/// `O(log n)`.
///
/// Keys must be totally ordered by their [`Ord`] implementation for the
/// lifetime of the map. A key whose ordering changes while in the map (i.e.
/// through interior mutability) results in unspecified (but memory safe)
/// behaviour.
///
/// A map of `AvlMap<K, ()>` is a set of keys.
#[derive(Debug, Clone)]
pub struct AvlMap<K, V>(Option<Box<Node<K, V>>>);

impl<K, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K, V> AvlMap<K, V> {
    /// Construct an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the number of entries in the map.
    ///
    /// The size is not tracked separately, and is computed by walking the
    /// tree in `O(n)` time.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the height of the tree, which is 0 for an empty map and 1 for
    /// a map with a single entry.
    pub fn height(&self) -> u8 {
        height(self.root())
    }

    /// Returns an iterator of `(&key, &value)` tuples in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(RefIter::new(self.root()))
    }

    /// Returns a materialised copy of every `(key, value)` entry in ascending
    /// key order.
    ///
    /// The returned [`Vec`] is a snapshot of the map at the time of the call,
    /// and is unaffected by any subsequent mutation of the map.
    pub fn traverse_in_order(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.0.as_deref()
    }
}

impl<K, V> AvlMap<K, V>
where
    K: Ord,
{
    /// Insert `value` under `key`, replacing (and returning) the value of any
    /// existing entry for an equal `key`.
    ///
    /// Replacing the value of an existing key does not modify the structure
    /// of the tree.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.0 {
            Some(ref mut v) => v.insert(key, value),
            None => {
                self.0 = Some(Box::new(Node::new(key, value)));
                None
            }
        }
    }

    /// Return a reference to the value for `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.as_ref().and_then(|v| v.get(key))
    }

    /// Return a mutable reference to the value for `key`, if any.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.as_mut().and_then(|v| v.get_mut(key))
    }

    /// Returns true if `key` exists in the map.
    ///
    /// Unlike `get(key).is_some()`, this never reads the value.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0
            .as_ref()
            .map(|v| v.contains_key(key))
            .unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for AvlMap<K, V>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<K, V> Extend<(K, V)> for AvlMap<K, V>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V> IntoIterator for AvlMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.0)
    }
}

impl<'a, K, V> IntoIterator for &'a AvlMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
