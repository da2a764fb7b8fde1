//! Debug overlay metrics
//!
//! Tracks landmark rate, rejected frames and the last finger vector.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::hand_landmarks::with_session;
use crate::session::FrameSnapshot;

#[derive(Default)]
struct Metrics {
    /// Landmark frames per second (EMA)
    landmark_rate: f32,
    last_frame_ms: Option<f64>,
    frames_rejected: u64,
    /// Thumb = bit 0 ... pinky = bit 4
    last_fingers: u8,
}

thread_local! {
    static METRICS: RefCell<Metrics> = RefCell::new(Metrics::default());
}

pub(super) fn record_frame(frame: &FrameSnapshot) {
    let now = js_sys::Date::now();

    METRICS.with(|m| {
        let mut metrics = m.borrow_mut();
        if let Some(last) = metrics.last_frame_ms {
            let dt = now - last;
            // Ignore stalls (tab backgrounded) and duplicate timestamps
            if dt > 1.0 && dt < 1000.0 {
                let rate = (1000.0 / dt) as f32;
                metrics.landmark_rate = metrics.landmark_rate * 0.9 + rate * 0.1;
            }
        }
        metrics.last_frame_ms = Some(now);
        metrics.last_fingers = frame.fingers.bits();
    });
}

pub(super) fn record_rejected() {
    METRICS.with(|m| m.borrow_mut().frames_rejected += 1);
}

pub(super) fn reset() {
    METRICS.with(|m| *m.borrow_mut() = Metrics::default());
}

/// One-line summary for the debug overlay
#[wasm_bindgen]
pub fn get_debug_info() -> String {
    let (pose, stats) = with_session(|session| (session.current_pose(), session.stats()));

    METRICS.with(|m| {
        let metrics = m.borrow();
        format!(
            "pose={} fingers={:05b} rate={:.1}/s frames={} empty={} rejected={} changes={}",
            pose.name(),
            metrics.last_fingers,
            metrics.landmark_rate,
            stats.frames_processed,
            stats.empty_frames,
            metrics.frames_rejected,
            stats.pose_changes,
        )
    })
}
