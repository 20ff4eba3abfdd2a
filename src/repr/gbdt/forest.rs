//! Forest of regression trees.

use super::{Tree, TreeValidationError};

/// Structural validation errors for [`Forest`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForestValidationError {
    #[error("forest has {n_trees} trees but {len} tree weights")]
    TreeWeightsLenMismatch { n_trees: usize, len: usize },
    #[error("tree {tree_idx} is invalid: {error}")]
    InvalidTree {
        tree_idx: usize,
        #[source]
        error: TreeValidationError,
    },
}

/// Single-output tree ensemble.
///
/// Prediction is `base_score + Σ weight_i × leaf_i`, where the per-tree
/// weights are present only for DART ensembles and default to 1.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    trees: Vec<Tree>,
    tree_weights: Option<Box<[f32]>>,
    base_score: f32,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base score (margin space).
    pub fn with_base_score(mut self, base_score: f32) -> Self {
        self.base_score = base_score;
        self
    }

    /// Attach per-tree weights (DART).
    pub fn with_tree_weights(mut self, weights: Vec<f32>) -> Self {
        self.tree_weights = Some(weights.into_boxed_slice());
        self
    }

    pub fn push_tree(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    #[inline]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    #[inline]
    pub fn base_score(&self) -> f32 {
        self.base_score
    }

    pub fn trees(&self) -> impl Iterator<Item = &Tree> {
        self.trees.iter()
    }

    /// Per-tree weights, if this is a DART ensemble.
    #[inline]
    pub fn tree_weights(&self) -> Option<&[f32]> {
        self.tree_weights.as_deref()
    }

    /// Number of features a row must carry to reach every split.
    pub fn required_features(&self) -> usize {
        self.trees
            .iter()
            .filter_map(Tree::max_split_index)
            .max()
            .map_or(0, |idx| idx as usize + 1)
    }

    /// Validate every tree and the weight vector length.
    pub fn validate(&self) -> Result<(), ForestValidationError> {
        if let Some(weights) = &self.tree_weights {
            if weights.len() != self.trees.len() {
                return Err(ForestValidationError::TreeWeightsLenMismatch {
                    n_trees: self.trees.len(),
                    len: weights.len(),
                });
            }
        }

        for (tree_idx, tree) in self.trees.iter().enumerate() {
            tree.validate()
                .map_err(|error| ForestValidationError::InvalidTree { tree_idx, error })?;
        }

        Ok(())
    }
}
