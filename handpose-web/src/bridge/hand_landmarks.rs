//! Hand landmark intake and session storage
//!
//! Receives MediaPipe hand landmarks from JavaScript (63 floats per hand)
//! and runs them through the gesture session.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::debug;
use crate::classifier::{Pose, PoseClassifier};
use crate::landmarks::LandmarkSet;
use crate::session::{FrameSnapshot, GestureSession};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<GestureSession> = RefCell::new(GestureSession::default());
}

pub(super) fn with_session<R>(f: impl FnOnce(&GestureSession) -> R) -> R {
    SESSION.with(|cell| f(&cell.borrow()))
}

pub(super) fn with_session_mut<R>(f: impl FnOnce(&mut GestureSession) -> R) -> R {
    SESSION.with(|cell| f(&mut cell.borrow_mut()))
}

// ============================================================================
// WASM API
// ============================================================================

/// Called from JavaScript once per detector result.
/// `flat_data` holds `num_hands` × 21 landmarks × (x, y, z).
#[wasm_bindgen]
pub fn apply_hand_landmarks(flat_data: &[f32], num_hands: usize) {
    let result = with_session_mut(|session| session.process_flat(flat_data, num_hands));

    match result {
        Ok(Some(frame)) => debug::record_frame(&frame),
        Ok(None) => {}
        Err(err) => {
            debug::record_rejected();
            console_warn!("{}", err);
        }
    }
}

/// Stateless classification of a single hand against a caller-held pose.
/// Returns the pose index (see `POSE_NAMES`).
#[wasm_bindgen]
pub fn classify_hand(flat_data: &[f32], previous_pose: usize) -> Result<usize, JsValue> {
    let hand = LandmarkSet::from_flat(flat_data)?;
    let classifier = with_session(|session| PoseClassifier::new(session.config()));
    Ok(classifier.classify(&hand, Pose::from_index(previous_pose)).index())
}

/// Back to the start state (FIST, nothing visible, cube selected)
#[wasm_bindgen]
pub fn reset_session() {
    with_session_mut(GestureSession::reset);
    debug::reset();
    console_log!("🔄 Gesture session reset");
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Latest processed frame, if any
pub fn get_last_frame() -> Option<FrameSnapshot> {
    with_session(GestureSession::last_frame)
}
