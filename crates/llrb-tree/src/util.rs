//! Recursive LLRB algorithms over owned subtrees.
//!
//! Every mutating helper takes a subtree by value and hands back the
//! (possibly rotated) subtree root; callers reassign their child slot with
//! the result. No parent pointers are kept.

use std::cmp::Ordering;
use std::mem;

use crate::error::InvariantViolation;
use crate::node::{color_flip, is_black, is_red, rotate_left, rotate_right, Link, Node};

/// Restore the left-leaning invariants at `h` on the way up.
///
/// The order of the three steps matters: the rotation in step one changes
/// which node step two inspects.
pub(crate) fn fix_up<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(h.right()) {
        h = rotate_left(h);
    }
    if is_red(h.left()) && is_red(h.left().and_then(Node::left)) {
        h = rotate_right(h);
    }
    if is_red(h.left()) && is_red(h.right()) {
        color_flip(&mut h);
    }
    h
}

/// Move red link to the left.
pub(crate) fn move_red_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    color_flip(&mut h);
    if is_red(h.right().and_then(Node::left)) {
        let right = h.right.take().expect("move_red_left requires right child");
        h.right = Some(rotate_right(right));
        h = rotate_left(h);
        color_flip(&mut h);
    }
    h
}

/// Move red link to the right.
pub(crate) fn move_red_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    color_flip(&mut h);
    if is_red(h.left().and_then(Node::left)) {
        h = rotate_right(h);
        color_flip(&mut h);
    }
    h
}

/// Find the node holding `key`.
pub(crate) fn find<'a, K, V, C>(
    mut node: Option<&'a Node<K, V>>,
    key: &K,
    comparator: &C,
) -> Option<&'a Node<K, V>>
where
    C: Fn(&K, &K) -> Ordering,
{
    while let Some(n) = node {
        match comparator(key, &n.key) {
            Ordering::Equal => return Some(n),
            Ordering::Less => node = n.left(),
            Ordering::Greater => node = n.right(),
        }
    }
    None
}

pub(crate) fn find_value_mut<'a, K, V, C>(
    mut node: Option<&'a mut Node<K, V>>,
    key: &K,
    comparator: &C,
) -> Option<&'a mut V>
where
    C: Fn(&K, &K) -> Ordering,
{
    while let Some(n) = node {
        match comparator(key, &n.key) {
            Ordering::Equal => return Some(&mut n.value),
            Ordering::Less => node = n.left.as_deref_mut(),
            Ordering::Greater => node = n.right.as_deref_mut(),
        }
    }
    None
}

/// Find the minimum node in the subtree.
pub(crate) fn min<K, V>(mut node: &Node<K, V>) -> &Node<K, V> {
    while let Some(l) = node.left() {
        node = l;
    }
    node
}

/// Find the maximum node in the subtree.
pub(crate) fn max<K, V>(mut node: &Node<K, V>) -> &Node<K, V> {
    while let Some(r) = node.right() {
        node = r;
    }
    node
}

/// Insert `key` into the subtree, or overwrite the value stored under it.
///
/// Returns the new subtree root and the replaced value, if any. On replace
/// the stored key is kept.
pub(crate) fn insert<K, V, C>(
    h: Link<K, V>,
    key: K,
    value: V,
    comparator: &C,
) -> (Box<Node<K, V>>, Option<V>)
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut h) = h else {
        return (Node::new(key, value), None);
    };

    let replaced = match comparator(&key, &h.key) {
        Ordering::Equal => Some(mem::replace(&mut h.value, value)),
        Ordering::Less => {
            let (left, replaced) = insert(h.left.take(), key, value, comparator);
            h.left = Some(left);
            replaced
        }
        Ordering::Greater => {
            let (right, replaced) = insert(h.right.take(), key, value, comparator);
            h.right = Some(right);
            replaced
        }
    };

    (fix_up(h), replaced)
}

/// Delete the minimum node from the subtree.
///
/// Returns the remaining subtree and the detached minimum node.
pub(crate) fn delete_min<K, V>(mut h: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    if h.left.is_none() {
        // Left-leaning and black-balanced: a node without a left child has
        // no right child either.
        debug_assert!(h.right.is_none());
        return (None, h);
    }

    if is_black(h.left()) && is_black(h.left().and_then(Node::left)) {
        h = move_red_left(h);
    }

    let left = h.left.take().expect("left exists after move_red_left");
    let (left, min) = delete_min(left);
    h.left = left;

    (Some(fix_up(h)), min)
}

/// Delete the node with the given key from the subtree.
///
/// Returns the new subtree root and the removed entry. The entry is `None`
/// when the key is absent; the search then stops at the gap it would have
/// descended into.
pub(crate) fn delete<K, V, C>(
    mut h: Box<Node<K, V>>,
    key: &K,
    comparator: &C,
) -> (Link<K, V>, Option<(K, V)>)
where
    C: Fn(&K, &K) -> Ordering,
{
    let removed;

    if comparator(key, &h.key) == Ordering::Less {
        if h.left.is_none() {
            return (Some(fix_up(h)), None);
        }
        if is_black(h.left()) && is_black(h.left().and_then(Node::left)) {
            h = move_red_left(h);
        }
        let left = h.left.take().expect("left exists after move_red_left");
        let (left, found) = delete(left, key, comparator);
        h.left = left;
        removed = found;
    } else {
        if is_red(h.left()) {
            h = rotate_right(h);
        }

        if comparator(key, &h.key) == Ordering::Equal && h.right.is_none() {
            let Node { key, value, .. } = *h;
            return (None, Some((key, value)));
        }

        if h.right.is_none() {
            return (Some(fix_up(h)), None);
        }
        if is_black(h.right()) && is_black(h.right().and_then(Node::left)) {
            h = move_red_right(h);
        }

        let right = h.right.take().expect("right exists after move_red_right");
        if comparator(key, &h.key) == Ordering::Equal {
            let (right, successor) = delete_min(right);
            h.right = right;
            let Node {
                key: successor_key,
                value: successor_value,
                ..
            } = *successor;
            let key = mem::replace(&mut h.key, successor_key);
            let value = mem::replace(&mut h.value, successor_value);
            removed = Some((key, value));
        } else {
            let (right, found) = delete(right, key, comparator);
            h.right = right;
            removed = found;
        }
    }

    (Some(fix_up(h)), removed)
}

/// Depth-first pre-order walk. Returns `false` as soon as `visitor` does.
pub(crate) fn pre_order<'a, K, V, F>(node: &'a Node<K, V>, visitor: &mut F) -> bool
where
    F: FnMut(&'a Node<K, V>) -> bool,
{
    if !visitor(node) {
        return false;
    }
    if let Some(l) = node.left() {
        if !pre_order(l, visitor) {
            return false;
        }
    }
    if let Some(r) = node.right() {
        if !pre_order(r, visitor) {
            return false;
        }
    }
    true
}

/// Check every LLRB invariant of the tree rooted at `root`.
pub fn assert_llrb_tree<K, V, C>(
    root: Option<&Node<K, V>>,
    comparator: &C,
) -> Result<(), InvariantViolation>
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(());
    };

    if root.is_red() {
        return Err(InvariantViolation::RootNotBlack);
    }

    fn black_height<K, V>(node: Option<&Node<K, V>>) -> Result<usize, InvariantViolation> {
        let Some(node) = node else {
            return Ok(0);
        };

        if is_red(node.right()) {
            return Err(InvariantViolation::RightLeaningRed);
        }
        if node.is_red() && is_red(node.left()) {
            return Err(InvariantViolation::ConsecutiveReds);
        }

        let left = black_height(node.left())?;
        let right = black_height(node.right())?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { left, right });
        }

        Ok(left + usize::from(node.is_black()))
    }

    black_height(Some(root))?;

    let mut prev: Option<&K> = None;
    for (key, _) in crate::iter::Iter::new(Some(root)) {
        if let Some(prev) = prev {
            if comparator(prev, key) != Ordering::Less {
                return Err(InvariantViolation::OrderViolated);
            }
        }
        prev = Some(key);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::tests::{branch, leaf};
    use crate::types::Color;

    fn cmp(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    //            17
    //          /    \
    //         9      19
    //        / \    /  \
    //       3  12  18   75
    //                  /  \
    //                 24   81
    fn int_tree() -> Box<Node<i32, ()>> {
        branch(
            17,
            Color::Black,
            Some(branch(
                9,
                Color::Black,
                Some(leaf(3, Color::Black)),
                Some(leaf(12, Color::Black)),
            )),
            Some(branch(
                19,
                Color::Black,
                Some(leaf(18, Color::Black)),
                Some(branch(
                    75,
                    Color::Black,
                    Some(leaf(24, Color::Black)),
                    Some(leaf(81, Color::Black)),
                )),
            )),
        )
    }

    fn pre_order_keys(root: &Node<i32, ()>) -> Vec<i32> {
        let mut keys = Vec::new();
        pre_order(root, &mut |n| {
            keys.push(n.key);
            true
        });
        keys
    }

    #[test]
    fn find_walks_plain_bst() {
        let root = int_tree();
        for key in [17, 9, 3, 12, 19, 18, 75, 24, 81] {
            assert!(find(Some(&*root), &key, &cmp).is_some(), "{key} should exist");
        }
        for key in [-1, 0, 1] {
            assert!(find(Some(&*root), &key, &cmp).is_none(), "{key} should not exist");
        }
    }

    #[test]
    fn pre_order_visits_node_then_left_then_right() {
        let root = int_tree();
        assert_eq!(pre_order_keys(&root), vec![17, 9, 3, 12, 19, 18, 75, 24, 81]);
    }

    #[test]
    fn pre_order_stops_when_visitor_returns_false() {
        let root = int_tree();
        let mut seen = Vec::new();
        let completed = pre_order(&*root, &mut |n| {
            seen.push(n.key);
            n.key != 12
        });
        assert!(!completed);
        assert_eq!(seen, vec![17, 9, 3, 12]);
    }

    #[test]
    fn fix_up_rotates_right_leaning_red() {
        let h = branch(1, Color::Black, None, Some(leaf(2, Color::Red)));
        let h = fix_up(h);
        assert_eq!(h.key, 2);
        assert!(h.is_black());
        assert!(h.left().unwrap().is_red());
        assert!(h.right().is_none());
    }

    #[test]
    fn fix_up_splits_left_spine_of_reds() {
        let h = branch(
            3,
            Color::Black,
            Some(branch(2, Color::Red, Some(leaf(1, Color::Red)), None)),
            None,
        );
        let h = fix_up(h);
        assert_eq!(pre_order_keys(&h), vec![2, 1, 3]);
        assert!(h.is_red());
        assert!(h.left().unwrap().is_black());
        assert!(h.right().unwrap().is_black());
    }

    #[test]
    fn fix_up_leaves_valid_node_alone() {
        let h = branch(2, Color::Black, Some(leaf(1, Color::Red)), None);
        let h = fix_up(h);
        assert_eq!(pre_order_keys(&h), vec![2, 1]);
        assert!(h.is_black());
        assert!(h.left().unwrap().is_red());
    }

    #[test]
    fn delete_min_detaches_smallest_key() {
        let mut root: Link<i32, ()> = None;
        for key in 0..10 {
            let (next, _) = insert(root.take(), key, (), &cmp);
            root = Some(next);
            root.as_mut().unwrap().color = Color::Black;
        }
        let (rest, min) = delete_min(root.take().unwrap());
        assert_eq!(min.key, 0);
        assert!(min.left.is_none() && min.right.is_none());
        let mut rest = rest.unwrap();
        rest.color = Color::Black;
        assert!(find(Some(&*rest), &0, &cmp).is_none());
        assert_llrb_tree(Some(&*rest), &cmp).unwrap();
    }

    #[test]
    fn assert_llrb_tree_reports_violations() {
        let red_root = leaf(1, Color::Red);
        assert_eq!(
            assert_llrb_tree(Some(&*red_root), &cmp),
            Err(InvariantViolation::RootNotBlack)
        );

        let right_red = branch(1, Color::Black, None, Some(leaf(2, Color::Red)));
        assert_eq!(
            assert_llrb_tree(Some(&*right_red), &cmp),
            Err(InvariantViolation::RightLeaningRed)
        );

        let double_red = branch(
            3,
            Color::Black,
            Some(branch(2, Color::Red, Some(leaf(1, Color::Red)), None)),
            None,
        );
        assert_eq!(
            assert_llrb_tree(Some(&*double_red), &cmp),
            Err(InvariantViolation::ConsecutiveReds)
        );

        let unbalanced = branch(2, Color::Black, Some(leaf(1, Color::Black)), None);
        assert_eq!(
            assert_llrb_tree(Some(&*unbalanced), &cmp),
            Err(InvariantViolation::BlackHeightMismatch { left: 1, right: 0 })
        );

        let unordered = branch(
            2,
            Color::Black,
            Some(leaf(3, Color::Black)),
            Some(leaf(1, Color::Black)),
        );
        assert_eq!(
            assert_llrb_tree(Some(&*unordered), &cmp),
            Err(InvariantViolation::OrderViolated)
        );

        // All black, so 17 -> 9 -> 3 and 17 -> 19 -> 75 -> 24 disagree.
        assert_eq!(
            assert_llrb_tree(Some(&*int_tree()), &cmp),
            Err(InvariantViolation::BlackHeightMismatch { left: 1, right: 2 })
        );

        let mut root: Link<i32, ()> = None;
        for key in 0..10 {
            let (mut next, _) = insert(root.take(), key, (), &cmp);
            next.color = Color::Black;
            root = Some(next);
        }
        assert_eq!(assert_llrb_tree(root.as_deref(), &cmp), Ok(()));
    }

    fn count(node: Option<&Node<i32, ()>>) -> usize {
        node.map_or(0, |n| 1 + count(n.left()) + count(n.right()))
    }

    #[test]
    fn delete_missing_key_keeps_tree_intact() {
        let mut root: Link<i32, ()> = None;
        for key in (0..200).step_by(2) {
            let (mut next, _) = insert(root.take(), key, (), &cmp);
            next.color = Color::Black;
            root = Some(next);
        }

        // Odd keys fall between leaves on both the left and right descent.
        for miss in [-1, 1, 51, 99, 151, 199, 500] {
            let (next, removed) = delete(root.take().unwrap(), &miss, &cmp);
            assert!(removed.is_none(), "{miss} should not be found");
            let mut next = next.unwrap();
            next.color = Color::Black;
            assert_eq!(assert_llrb_tree(Some(&*next), &cmp), Ok(()));
            assert_eq!(count(Some(&*next)), 100);
            root = Some(next);
        }

        for key in (0..200).step_by(2) {
            assert!(find(root.as_deref(), &key, &cmp).is_some());
        }
    }
}
