//! Handpose Web - hand pose gestures driving AR content
//!
//! MediaPipe hand landmarks come in from JavaScript; out go a pose, an
//! anchor (position + scale) and which AR asset should be visible.
//! Camera, detection and drawing stay on the JS side.

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod console {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        pub fn log(s: &str);
    }
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (crate::console::log(&format_args!($($t)*).to_string()))
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format_args!($($t)*).to_string().into()))
}

// No JS console off-wasm (native tests); arguments are still type-checked
#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => {{
        if false {
            let _ = format!($($t)*);
        }
    }};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_warn {
    ($($t:tt)*) => (console_log!($($t)*))
}

pub mod anchor;
pub mod classifier;
pub mod config;
pub mod error;
pub mod landmarks;
pub mod presentation;
pub mod session;

mod bridge;

use wasm_bindgen::prelude::*;

pub use anchor::{estimate_anchor, Anchor, AnchorEstimator};
pub use classifier::{FingerState, Pose, PoseClassifier};
pub use config::{TrackerConfig, UnmatchedPolicy};
pub use error::HandPoseError;
pub use landmarks::{Landmark, LandmarkSet};
pub use presentation::{PresentationMachine, PresentationMode, PresentationState, Shape, Transition};
pub use session::{FrameSnapshot, GestureSession, SharedSession};

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    apply_hand_landmarks, classify_hand, get_anchor, get_current_pose, get_debug_info,
    get_last_frame, get_last_transition, get_model_matrix, get_pose_name, get_render_scale,
    get_selected_shape, is_cube_visible, is_video_visible, reset_session, set_strict_unmatched,
    set_tracker_params,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ Handpose core ready");
}
