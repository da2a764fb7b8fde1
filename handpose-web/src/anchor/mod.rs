//! Anchor module - where and how large to draw AR content
//!
//! Re-exports only. All logic in submodules.

mod estimator;
mod placement;

pub use estimator::{estimate_anchor, Anchor, AnchorEstimator};
pub use placement::{model_matrix, model_matrix_columns};
