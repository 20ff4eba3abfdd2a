//! Forest scoring.

use crate::repr::gbdt::Forest;

use super::traverse_to_leaf;

/// Scores rows against a borrowed [`Forest`].
///
/// DART tree weights, when present on the forest, scale each tree's leaf
/// value before it is accumulated.
#[derive(Debug, Clone, Copy)]
pub struct ForestPredictor<'f> {
    forest: &'f Forest,
}

impl<'f> ForestPredictor<'f> {
    #[inline]
    pub fn new(forest: &'f Forest) -> Self {
        Self { forest }
    }

    /// Raw margin for one row: base score plus the (weighted) leaf sum.
    pub fn predict_row(&self, features: &[f32]) -> f32 {
        let weights = self.forest.tree_weights();
        let mut output = self.forest.base_score();

        for (tree_idx, tree) in self.forest.trees().enumerate() {
            let leaf_value = tree.leaf_value(traverse_to_leaf(tree, features));
            output += match weights {
                Some(w) => leaf_value * w[tree_idx],
                None => leaf_value,
            };
        }

        output
    }
}
