use std::iter::FusedIterator;

mod owned_iter;
mod ref_iter;

pub use owned_iter::*;
pub(crate) use ref_iter::*;

/// An iterator over borrowed `(&K, &V)` entries of an [`AvlMap`] in ascending
/// key order.
///
/// This `struct` is created by the [`iter`] method on [`AvlMap`].
///
/// [`AvlMap`]: crate::AvlMap
/// [`iter`]: crate::AvlMap::iter
#[derive(Debug)]
pub struct Iter<'a, K, V>(RefIter<'a, K, V>);

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(inner: RefIter<'a, K, V>) -> Self {
        Self(inner)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|v| (v.key(), v.value()))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
