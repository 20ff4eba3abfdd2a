//! Native model representations.
//!
//! - [`gbdt`]: tree ensembles (plain and DART)
//! - [`gblinear`]: linear boosters

pub mod gbdt;
pub mod gblinear;
