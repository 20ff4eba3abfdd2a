//! GBLinear inference.

mod predict;

pub use predict::LinearModelPredict;
