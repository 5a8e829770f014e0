use crate::types::Color;

/// Owning link to a subtree; `None` is a gap.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single tree cell.
///
/// Nodes are only created and restructured by the containers in this crate.
/// Outside code gets read-only access, which is enough to walk the tree and
/// render it (keys, link colors and children).
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// New leaves are always red.
    pub(crate) fn new(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        })
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Color of the link pointing at this node.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color.is_red()
    }

    pub fn is_black(&self) -> bool {
        self.color.is_black()
    }

    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }
}

/// Check if a node is red. Absent nodes are black.
#[inline]
pub fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.is_some_and(Node::is_red)
}

/// Check if a node is black. Absent nodes are black.
#[inline]
pub fn is_black<K, V>(node: Option<&Node<K, V>>) -> bool {
    !is_red(node)
}

//          h                    r
//         / \                  / \
//        a  (r)     ==>      (h)  c
//           / \              / \
//          b   c            a   b
//
/// Rotate a right-leaning red link to the left. `h.right` must be present.
pub(crate) fn rotate_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut r = h.right.take().expect("rotate_left requires right child");
    h.right = r.left.take();
    r.color = h.color;
    h.color = Color::Red;
    r.left = Some(h);
    r
}

//            h                l
//           / \              / \
//         (l)  c    ==>     a  (h)
//         / \                  / \
//        a   b                b   c
//
/// Rotate a left-leaning red link to the right. `h.left` must be present.
pub(crate) fn rotate_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut l = h.left.take().expect("rotate_right requires left child");
    h.left = l.right.take();
    l.color = h.color;
    h.color = Color::Red;
    l.right = Some(h);
    l
}

/// Flip colors of node and its children.
///
/// Only called on nodes with both children present.
pub(crate) fn color_flip<K, V>(h: &mut Node<K, V>) {
    debug_assert!(
        h.left.is_some() && h.right.is_some(),
        "color_flip requires both children"
    );
    h.color = h.color.flip();
    if let Some(l) = h.left.as_deref_mut() {
        l.color = l.color.flip();
    }
    if let Some(r) = h.right.as_deref_mut() {
        r.color = r.color.flip();
    }
}
