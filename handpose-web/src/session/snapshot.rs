//! Per-frame output handed to the renderer

use crate::anchor::Anchor;
use crate::classifier::{FingerState, Pose};
use crate::presentation::{PresentationState, Transition};

/// Everything the render path needs after one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub pose: Pose,
    pub previous_pose: Pose,
    pub fingers: FingerState,
    pub anchor: Anchor,
    pub presentation: PresentationState,
    /// Set only on frames where the pose changed
    pub transition: Option<Transition>,
}

impl FrameSnapshot {
    pub fn pose_changed(&self) -> bool {
        self.pose != self.previous_pose
    }
}

/// Session counters for the debug overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames_processed: u64,
    pub empty_frames: u64,
    pub pose_changes: u64,
}
