//! XGBoost JSON model format support.
//!
//! The `json` module holds the foreign types used only for parsing; `convert`
//! turns them into native boosters.

mod convert;
mod json;

pub use convert::{Booster, ConversionError};
pub use json::*;
