//! Conversion from XGBoost JSON types to native boosters.

use crate::model::OutputTransform;
use crate::repr::gbdt::{Forest, ForestValidationError, TreeBuilder, Tree};
use crate::repr::gblinear::LinearModel;

use super::json::{GradientBooster, ModelTrees, Tree as XgbTree, XgbModel};

/// A booster converted from XGBoost.
#[derive(Debug, Clone)]
pub enum Booster {
    /// Standard gradient boosted tree ensemble.
    Tree(Forest),
    /// DART ensemble; the forest carries per-tree weights.
    Dart(Forest),
    /// Linear (gblinear) booster.
    Linear(LinearModel),
}

impl Booster {
    /// Number of trees (0 for linear boosters).
    pub fn n_trees(&self) -> usize {
        match self {
            Booster::Tree(forest) | Booster::Dart(forest) => forest.n_trees(),
            Booster::Linear(_) => 0,
        }
    }

    /// Booster kind as named by XGBoost.
    pub fn kind(&self) -> &'static str {
        match self {
            Booster::Tree(_) => "gbtree",
            Booster::Dart(_) => "dart",
            Booster::Linear(_) => "gblinear",
        }
    }
}

/// Error type for XGBoost model conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("tree {0} has no nodes")]
    EmptyTree(usize),
    #[error("model declares {declared} trees but contains {actual}")]
    TreeCount { declared: usize, actual: usize },
    #[error("tree {tree}: array '{field}' has {actual} entries but tree has {expected} nodes")]
    TreeArrayLength {
        tree: usize,
        field: &'static str,
        actual: usize,
        expected: usize,
    },
    #[error(
        "invalid node index in tree {tree}: node {node} references child {child} but tree has {num_nodes} nodes"
    )]
    InvalidNodeIndex {
        tree: usize,
        node: usize,
        child: i32,
        num_nodes: usize,
    },
    #[error("tree {tree}: node {node} splits on feature {feature} but model has {n_features} features")]
    InvalidSplitFeature {
        tree: usize,
        node: usize,
        feature: i32,
        n_features: usize,
    },
    #[error("tree {tree}: node {node} uses a categorical split, which is not supported")]
    CategoricalSplit { tree: usize, node: usize },
    #[error("multi-output models are not supported (num_class = {n_class}, num_target = {num_target})")]
    MultiOutput { n_class: i64, num_target: i64 },
    #[error("dart weight_drop has {actual} entries but model has {expected} trees")]
    DartWeightsLength { actual: usize, expected: usize },
    #[error("gblinear weights length {actual} doesn't match num_features + 1 = {expected}")]
    InvalidLinearWeights { actual: usize, expected: usize },
    #[error(transparent)]
    InvalidForest(#[from] ForestValidationError),
}

/// Convert base_score from the objective's output space to margin space.
///
/// XGBoost stores base_score untransformed in JSON while prediction adds it
/// to the margin, so log-link and logistic objectives need the inverse link.
fn prob_to_margin(base_score: f32, objective: &str) -> f32 {
    OutputTransform::for_objective(objective)
        .map_or(base_score, |transform| transform.to_margin(base_score))
}

impl XgbModel {
    /// Convert to a native [`Booster`].
    ///
    /// Returns:
    /// - `Booster::Tree` for gbtree models
    /// - `Booster::Dart` for DART models (with per-tree weights)
    /// - `Booster::Linear` for gblinear models
    pub fn to_booster(&self) -> Result<Booster, ConversionError> {
        let param = &self.learner.learner_model_param;
        if param.n_class > 1 || param.num_target > 1 {
            return Err(ConversionError::MultiOutput {
                n_class: param.n_class,
                num_target: param.num_target,
            });
        }

        let base_margin = prob_to_margin(param.base_score, self.objective());

        match &self.learner.gradient_booster {
            GradientBooster::Gbtree { model } => {
                Ok(Booster::Tree(self.convert_forest(model, base_margin)?))
            }
            GradientBooster::Dart {
                gbtree,
                weight_drop,
            } => {
                let forest = self.convert_forest(&gbtree.model, base_margin)?;
                if weight_drop.len() != forest.n_trees() {
                    return Err(ConversionError::DartWeightsLength {
                        actual: weight_drop.len(),
                        expected: forest.n_trees(),
                    });
                }
                Ok(Booster::Dart(forest.with_tree_weights(weight_drop.clone())))
            }
            GradientBooster::Gblinear { model } => {
                let linear = self.convert_linear_model(&model.weights, base_margin)?;
                Ok(Booster::Linear(linear))
            }
        }
    }

    /// Returns true if this model uses the DART booster.
    pub fn is_dart(&self) -> bool {
        matches!(&self.learner.gradient_booster, GradientBooster::Dart { .. })
    }

    /// Returns true if this model uses the gblinear booster.
    pub fn is_linear(&self) -> bool {
        matches!(
            &self.learner.gradient_booster,
            GradientBooster::Gblinear { .. }
        )
    }

    /// Convert gblinear weights to a [`LinearModel`].
    ///
    /// XGBoost stores `[w_0, .., w_{n-1}, bias]` for a single output group.
    /// The margin-space base score is baked into the bias.
    fn convert_linear_model(
        &self,
        weights: &[f32],
        base_margin: f32,
    ) -> Result<LinearModel, ConversionError> {
        let expected = self.n_features() + 1;
        if weights.len() != expected {
            return Err(ConversionError::InvalidLinearWeights {
                actual: weights.len(),
                expected,
            });
        }

        let mut linear = LinearModel::new(ndarray::Array1::from(weights.to_vec()));
        linear.shift_bias(base_margin);
        Ok(linear)
    }

    fn convert_forest(
        &self,
        model_trees: &ModelTrees,
        base_margin: f32,
    ) -> Result<Forest, ConversionError> {
        if model_trees.num_trees() != model_trees.trees.len() {
            return Err(ConversionError::TreeCount {
                declared: model_trees.num_trees(),
                actual: model_trees.trees.len(),
            });
        }

        let mut forest = Forest::new().with_base_score(base_margin);
        for (tree_idx, xgb_tree) in model_trees.trees.iter().enumerate() {
            forest.push_tree(convert_tree(xgb_tree, tree_idx, self.n_features())?);
        }
        forest.validate()?;
        Ok(forest)
    }
}

/// Convert a single XGBoost tree to a native [`Tree`].
fn convert_tree(
    xgb_tree: &XgbTree,
    tree_idx: usize,
    n_features: usize,
) -> Result<Tree, ConversionError> {
    let num_nodes = xgb_tree.tree_param.num_nodes.max(0) as usize;
    if num_nodes == 0 {
        return Err(ConversionError::EmptyTree(tree_idx));
    }

    let check_len = |field: &'static str, actual: usize| {
        if actual < num_nodes {
            Err(ConversionError::TreeArrayLength {
                tree: tree_idx,
                field,
                actual,
                expected: num_nodes,
            })
        } else {
            Ok(())
        }
    };
    check_len("left_children", xgb_tree.left_children.len())?;
    check_len("right_children", xgb_tree.right_children.len())?;
    check_len("split_indices", xgb_tree.split_indices.len())?;
    check_len("split_conditions", xgb_tree.split_conditions.len())?;
    check_len("default_left", xgb_tree.default_left.len())?;

    let mut tree = TreeBuilder::with_n_nodes(num_nodes);

    for node_idx in 0..num_nodes {
        let left_child = xgb_tree.left_children[node_idx];
        let right_child = xgb_tree.right_children[node_idx];

        // A node is a leaf if left_child == -1 (XGBoost convention); its
        // value lives in split_conditions.
        if left_child == -1 {
            tree.make_leaf(node_idx as u32, xgb_tree.split_conditions[node_idx]);
            continue;
        }

        for child in [left_child, right_child] {
            if child < 0 || child as usize >= num_nodes {
                return Err(ConversionError::InvalidNodeIndex {
                    tree: tree_idx,
                    node: node_idx,
                    child,
                    num_nodes,
                });
            }
        }

        // split_type: 0 = numeric, 1 = categorical
        if xgb_tree.split_type.get(node_idx).copied().unwrap_or(0) != 0 {
            return Err(ConversionError::CategoricalSplit {
                tree: tree_idx,
                node: node_idx,
            });
        }

        let feature = xgb_tree.split_indices[node_idx];
        if feature < 0 || feature as usize >= n_features {
            return Err(ConversionError::InvalidSplitFeature {
                tree: tree_idx,
                node: node_idx,
                feature,
                n_features,
            });
        }

        tree.set_numeric_split(
            node_idx as u32,
            feature as u32,
            xgb_tree.split_conditions[node_idx],
            xgb_tree.default_left[node_idx] != 0,
            left_child as u32,
            right_child as u32,
        );
    }

    Ok(tree.build())
}
