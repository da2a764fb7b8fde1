//! Landmarks module - MediaPipe hand landmark types
//!
//! Re-exports only. All logic in submodules.

mod indices;
mod set;

#[cfg(test)]
pub(crate) mod fixtures;

pub use indices::*;
pub use set::{Landmark, LandmarkSet, FLOATS_PER_HAND, LANDMARK_COUNT};
