//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod debug;
mod hand_landmarks;
mod params;
mod render_state;

pub use hand_landmarks::{
    // WASM entry points
    apply_hand_landmarks,
    classify_hand,
    reset_session,
    // Internal API
    get_last_frame,
};

pub use render_state::{
    get_anchor,
    get_current_pose,
    get_last_transition,
    get_model_matrix,
    get_pose_name,
    get_render_scale,
    get_selected_shape,
    is_cube_visible,
    is_video_visible,
};

pub use params::{set_strict_unmatched, set_tracker_params};

pub use debug::get_debug_info;
