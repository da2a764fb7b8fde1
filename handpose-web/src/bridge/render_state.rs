//! Render state getters - read once per frame by the JS renderer

use wasm_bindgen::prelude::*;

use super::hand_landmarks::with_session;
use crate::anchor::model_matrix_columns;

#[wasm_bindgen]
pub fn get_current_pose() -> usize {
    with_session(|session| session.current_pose().index())
}

#[wasm_bindgen]
pub fn get_pose_name() -> String {
    with_session(|session| session.current_pose().name().to_string())
}

/// [x, y, z, scale] of the last frame, or None before the first hand
#[wasm_bindgen]
pub fn get_anchor() -> Option<Vec<f32>> {
    with_session(|session| session.anchor().map(|a| vec![a.x, a.y, a.z, a.scale]))
}

#[wasm_bindgen]
pub fn is_cube_visible() -> bool {
    with_session(|session| session.presentation().cube_visible)
}

#[wasm_bindgen]
pub fn is_video_visible() -> bool {
    with_session(|session| session.presentation().video_visible)
}

/// 0 = cube, 1 = video
#[wasm_bindgen]
pub fn get_selected_shape() -> u8 {
    with_session(|session| session.presentation().selected.index())
}

#[wasm_bindgen]
pub fn get_render_scale() -> f32 {
    with_session(|session| session.presentation().scale)
}

/// Column-major model matrix for the visible asset, at the render scale
#[wasm_bindgen]
pub fn get_model_matrix() -> Option<Vec<f32>> {
    with_session(|session| {
        let frame = session.last_frame()?;
        let shape = frame.presentation.visible_shape()?;
        let anchor = crate::anchor::Anchor {
            scale: frame.presentation.scale,
            ..frame.anchor
        };
        Some(model_matrix_columns(shape, &anchor))
    })
}

/// Description of the transition fired on the last frame, if any
#[wasm_bindgen]
pub fn get_last_transition() -> Option<String> {
    with_session(|session| {
        session
            .last_frame()
            .and_then(|frame| frame.transition)
            .map(|t| format!("{:?}", t))
    })
}
