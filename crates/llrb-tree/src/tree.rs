use std::cmp::Ordering;
use std::fmt;

use crate::error::{InvariantViolation, LlrbError};
use crate::iter::Keys;
use crate::map::{default_comparator, LlrbMap};
use crate::node::Node;

/// Node of a key-only tree.
pub type TreeNode<K> = Node<K, ()>;

/// Ordered set of keys backed by a left-leaning red-black tree.
///
/// ```
/// use llrb_tree::LlrbTree;
///
/// let mut tree = LlrbTree::new();
/// for key in 0..10 {
///     tree.insert_or_replace(key);
/// }
///
/// let mut keys = Vec::new();
/// tree.pre_order_iterate(|node| {
///     keys.push(*node.key());
///     true
/// });
/// assert_eq!(keys, vec![3, 1, 0, 2, 7, 5, 4, 6, 9, 8]);
///
/// assert!(tree.delete(&7).is_ok());
/// assert!(tree.delete(&7).is_err());
/// assert!(!tree.has(&7));
/// ```
#[derive(Clone)]
pub struct LlrbTree<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    inner: LlrbMap<K, (), C>,
}

impl<K> LlrbTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for LlrbTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> LlrbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: LlrbMap::with_comparator(comparator),
        }
    }

    pub fn comparator(&self) -> &C {
        self.inner.comparator()
    }

    pub fn root(&self) -> Option<&TreeNode<K>> {
        self.inner.root()
    }

    pub fn has(&self, key: &K) -> bool {
        self.inner.has(key)
    }

    /// Insert `key`. Inserting a key that is already present changes nothing.
    pub fn insert_or_replace(&mut self, key: K) {
        self.inner.insert_or_replace(key, ());
    }

    pub fn delete(&mut self, key: &K) -> Result<(), LlrbError> {
        self.inner.delete(key)
    }

    pub fn pre_order_iterate<F>(&self, visitor: F)
    where
        F: FnMut(&TreeNode<K>) -> bool,
    {
        self.inner.pre_order_iterate(visitor)
    }

    /// Keys in order.
    pub fn iter(&self) -> Keys<'_, K> {
        Keys::new(self.inner.iter())
    }

    pub fn min(&self) -> Option<&K> {
        self.inner.min().map(|(k, _)| k)
    }

    pub fn max(&self) -> Option<&K> {
        self.inner.max().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn assert_valid(&self) -> Result<(), InvariantViolation> {
        self.inner.assert_valid()
    }
}

impl<K, C> fmt::Debug for LlrbTree<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K, C> IntoIterator for &'a LlrbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = &'a K;
    type IntoIter = Keys<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C> Extend<K> for LlrbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|key| (key, ())));
    }
}

impl<K> FromIterator<K> for LlrbTree<K, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
