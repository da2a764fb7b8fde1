//! Classifier module - rule-based hand pose recognition
//!
//! Finger openness heuristics feed an ordered decision table.
//! Unmatched patterns fall back to the previous pose (hysteresis).

mod fingers;
mod pose;
mod pose_classifier;
mod rules;

pub use fingers::FingerState;
pub use pose::{Pose, POSE_NAMES};
pub use pose_classifier::PoseClassifier;
pub use rules::{match_pose, POSE_TABLE};
