//! Tuning knobs exposed to JS

use wasm_bindgen::prelude::*;

use super::hand_landmarks::with_session_mut;
use crate::config::UnmatchedPolicy;

/// Override the thumb threshold and anchor constants.
/// Invalid values are rejected and the current config stays.
#[wasm_bindgen]
pub fn set_tracker_params(
    thumb_open_threshold: f32,
    anchor_x_interpolation: f32,
    anchor_scale_factor: f32,
) -> Result<(), JsValue> {
    with_session_mut(|session| {
        let config = session
            .config()
            .with_thumb_open_threshold(thumb_open_threshold)
            .with_anchor_x_interpolation(anchor_x_interpolation)
            .with_anchor_scale_factor(anchor_scale_factor);
        session.set_config(config)
    })
    .map_err(|err| {
        console_warn!("{}", err);
        JsValue::from(err)
    })?;

    console_log!(
        "🎛️ Tracker params: thumb={:.3} x_interp={:.3} scale={:.2}",
        thumb_open_threshold,
        anchor_x_interpolation,
        anchor_scale_factor
    );
    Ok(())
}

/// true: unmatched finger patterns yield UNKNOWN instead of keeping the previous pose
#[wasm_bindgen]
pub fn set_strict_unmatched(strict: bool) -> Result<(), JsValue> {
    let policy = if strict {
        UnmatchedPolicy::Unknown
    } else {
        UnmatchedPolicy::RetainPrevious
    };
    with_session_mut(|session| {
        let config = session.config().with_unmatched_policy(policy);
        session.set_config(config)
    })?;

    console_log!("🎛️ Unmatched poses: {:?}", policy);
    Ok(())
}
