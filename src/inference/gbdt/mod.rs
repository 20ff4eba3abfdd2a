//! GBDT inference.
//!
//! - [`traverse_to_leaf`]: root-to-leaf walk for one row
//! - [`ForestPredictor`]: sums leaf values (weighted for DART) over a forest

mod predictor;
mod traversal;

pub use predictor::ForestPredictor;
pub use traversal::traverse_to_leaf;
