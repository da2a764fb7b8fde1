//! Presentation module - which AR asset is visible, driven by pose changes
//!
//! Re-exports only. All logic in submodules.

mod machine;
mod state;

pub use machine::{PresentationMachine, Transition};
pub use state::{PresentationMode, PresentationState, Shape};
