use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::{InvariantViolation, LlrbError};
use crate::iter::Iter;
use crate::node::{Link, Node};
use crate::types::Color;
use crate::util;

pub(crate) fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Ordered map backed by a left-leaning red-black tree.
///
/// Keys are ordered by the comparator given at construction time
/// ([`Ord::cmp`] for [`LlrbMap::new`]). Keys the comparator reports as equal
/// are the same key: inserting one of them overwrites the stored value.
#[derive(Clone)]
pub struct LlrbMap<K, V, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Link<K, V>,
    comparator: C,
}

impl<K, V> LlrbMap<K, V, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for LlrbMap<K, V, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> LlrbMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Root node, for read-only walks of the tree structure.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    pub fn has(&self, key: &K) -> bool {
        util::find(self.root(), key, &self.comparator).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        util::find(self.root(), key, &self.comparator).map(Node::value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        util::find_value_mut(self.root.as_deref_mut(), key, &self.comparator)
    }

    /// Insert `key`, or overwrite its value if it is already present.
    ///
    /// Returns the previous value on overwrite. The key originally stored in
    /// the tree is kept.
    pub fn insert_or_replace(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, replaced) = util::insert(self.root.take(), key, value, &self.comparator);
        root.color = Color::Black;
        self.root = Some(root);
        if replaced.is_some() {
            trace!("llrb: replaced value of existing key");
        }
        replaced
    }

    /// Remove `key` and return its value.
    pub fn delete(&mut self, key: &K) -> Result<V, LlrbError> {
        self.delete_entry(key).map(|(_, value)| value)
    }

    /// Remove `key` and return the stored key together with its value.
    ///
    /// A missing key leaves the tree untouched.
    pub fn delete_entry(&mut self, key: &K) -> Result<(K, V), LlrbError> {
        if !self.has(key) {
            debug!("llrb: delete miss");
            return Err(LlrbError::KeyNotFound);
        }
        let Some(root) = self.root.take() else {
            return Err(LlrbError::KeyNotFound);
        };

        let (root, removed) = util::delete(root, key, &self.comparator);
        self.root = root;
        if let Some(root) = self.root.as_deref_mut() {
            root.color = Color::Black;
        }

        let entry = removed.ok_or(LlrbError::KeyNotFound)?;
        trace!("llrb: deleted key");
        Ok(entry)
    }

    /// Pre-order walk (node, left subtree, right subtree) from the root.
    ///
    /// The walk ends early once `visitor` returns `false`.
    pub fn pre_order_iterate<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<K, V>) -> bool,
    {
        if let Some(root) = self.root() {
            util::pre_order(root, &mut visitor);
        }
    }

    /// Entries in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root())
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        self.root().map(util::min).map(|n| (n.key(), n.value()))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        self.root().map(util::max).map(|n| (n.key(), n.value()))
    }

    /// Number of entries. Walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        if self.root.take().is_some() {
            trace!("llrb: cleared tree");
        }
    }

    pub fn assert_valid(&self) -> Result<(), InvariantViolation> {
        util::assert_llrb_tree(self.root(), &self.comparator)
    }
}

impl<K, V, C> fmt::Debug for LlrbMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C> IntoIterator for &'a LlrbMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> Extend<(K, V)> for LlrbMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_or_replace(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for LlrbMap<K, V, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
