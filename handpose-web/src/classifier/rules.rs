//! Ordered pose decision table
//!
//! Evaluated top to bottom, first match wins. TWO and PEACE share a
//! pattern, so PEACE is shadowed and never returned.

use super::fingers::FingerState;
use super::pose::Pose;

const fn f(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> FingerState {
    FingerState::new(thumb, index, middle, ring, pinky)
}

/// (pattern, pose) in evaluation order
pub const POSE_TABLE: [(FingerState, Pose); 10] = [
    (f(false, false, false, false, false), Pose::Fist),
    (f(true, true, true, true, true), Pose::Paper),
    (f(false, true, false, false, false), Pose::One),
    (f(false, true, true, false, false), Pose::Two),
    (f(false, true, true, true, false), Pose::Three),
    (f(false, true, true, true, true), Pose::Four),
    (f(true, false, false, false, false), Pose::Thumb),
    (f(true, true, false, false, false), Pose::Right),
    (f(false, true, true, false, false), Pose::Peace),
    (f(false, true, false, false, true), Pose::Spiderman),
];

/// First pose whose pattern matches, or None for an unrecognized hand
pub fn match_pose(fingers: FingerState) -> Option<Pose> {
    POSE_TABLE
        .iter()
        .find(|(pattern, _)| *pattern == fingers)
        .map(|&(_, pose)| pose)
}
