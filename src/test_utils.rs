use std::fmt::Debug;

use proptest::prelude::*;

use crate::{
    iter::RefIter,
    node::{balance, height, Node},
    AvlMap,
};

const KEY_MAX: u16 = 50;

/// Generate arbitrary keys from [0..[`KEY_MAX`]).
///
/// A small key domain encourages multiple operations to act on the same key.
pub(crate) fn arbitrary_key() -> impl Strategy<Value = u16> {
    0..KEY_MAX
}

/// Generate short lowercase words, drawn from a small alphabet so that
/// repeats are common.
pub(crate) fn arbitrary_word() -> impl Strategy<Value = String> {
    "[a-e]{1,3}"
}

/// Assert the BST and AVL properties of every node in `t`, ensuring the tree
/// is well-formed.
pub(crate) fn validate_tree_structure<K, V>(t: &AvlMap<K, V>)
where
    K: Ord + Debug,
    V: Debug,
{
    if let Some(root) = t.root() {
        validate_subtree(root);
    }
}

/// Assert the BST and AVL properties of the subtree rooted at `root`.
pub(crate) fn validate_subtree<K, V>(root: &Node<K, V>)
where
    K: Ord + Debug,
    V: Debug,
{
    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 1: the left child always contains a key strictly less
        // than this node.
        assert!(n.left().map(|v| v.key() < n.key()).unwrap_or(true));

        // Invariant 2: the right child always contains a key strictly
        // greater than this node.
        assert!(n.right().map(|v| v.key() > n.key()).unwrap_or(true));

        // Invariant 3: the height of this node is always +1 of the maximum
        // child height, where an absent child has a height of 0.
        let want_height = 1 + height(n.left()).max(height(n.right()));
        assert_eq!(
            n.height(),
            want_height,
            "expect node with key {:?} to have height {}, has {}",
            n.key(),
            want_height,
            n.height(),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = balance(n).abs();
        assert!(balance <= 1, "balance={balance}, node={n:?}");
    }

    // Invariant 5: an in-order walk yields strictly ascending keys, which
    // holds only if every key in a left subtree is less than its ancestor
    // (and vice versa), not just the immediate children.
    let keys = RefIter::new(Some(root)).map(|v| v.key()).collect::<Vec<_>>();
    for window in keys.windows(2) {
        assert!(window[0] < window[1], "keys out of order: {keys:?}");
    }
}
