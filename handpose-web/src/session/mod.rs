//! Session module - explicit per-session state and the frame pipeline
//!
//! Re-exports only. All logic in submodules.

mod context;
mod shared;
mod snapshot;

pub use context::GestureSession;
pub use shared::SharedSession;
pub use snapshot::{FrameSnapshot, SessionStats};
