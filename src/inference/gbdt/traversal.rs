//! Tree traversal.

use crate::repr::gbdt::{NodeId, Tree};

/// Walk `tree` from the root to the leaf selected by `features`.
///
/// `value < threshold` goes left. A NaN value, or a feature index beyond the
/// end of `features`, counts as missing and follows the node's default
/// direction.
#[inline]
pub fn traverse_to_leaf(tree: &Tree, features: &[f32]) -> NodeId {
    let mut node: NodeId = 0;

    while !tree.is_leaf(node) {
        let fvalue = features
            .get(tree.split_index(node) as usize)
            .copied()
            .unwrap_or(f32::NAN);

        node = if fvalue.is_nan() {
            if tree.default_left(node) {
                tree.left_child(node)
            } else {
                tree.right_child(node)
            }
        } else if fvalue < tree.split_threshold(node) {
            tree.left_child(node)
        } else {
            tree.right_child(node)
        };
    }

    node
}
