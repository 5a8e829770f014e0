use crate::node::Node;

/// In-order iterator over the entries of a tree.
///
/// Keeps the pending left spine on an explicit stack, so it needs no parent
/// pointers and at most O(log n) extra space.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some((node.key(), node.value()))
    }
}

/// In-order iterator over the keys of an [`crate::LlrbTree`].
pub struct Keys<'a, K> {
    inner: Iter<'a, K, ()>,
}

impl<'a, K> Keys<'a, K> {
    pub(crate) fn new(inner: Iter<'a, K, ()>) -> Self {
        Self { inner }
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}
