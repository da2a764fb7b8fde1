//! Pose classifier - landmarks + previous pose → pose

use super::fingers::FingerState;
use super::pose::Pose;
use super::rules::match_pose;
use crate::config::{TrackerConfig, UnmatchedPolicy};
use crate::error::HandPoseError;
use crate::landmarks::{Landmark, LandmarkSet};

/// Stateless classifier; the caller owns the previous pose
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseClassifier {
    thumb_open_threshold: f32,
    unmatched_policy: UnmatchedPolicy,
}

impl PoseClassifier {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            thumb_open_threshold: config.thumb_open_threshold,
            unmatched_policy: config.unmatched_policy,
        }
    }

    pub fn fingers(&self, hand: &LandmarkSet) -> FingerState {
        FingerState::from_landmarks(hand, self.thumb_open_threshold)
    }

    /// Classify one hand. Unmatched patterns resolve per the unmatched policy.
    pub fn classify(&self, hand: &LandmarkSet, previous: Pose) -> Pose {
        self.resolve(self.fingers(hand), previous)
    }

    /// Classify raw landmarks; fails unless exactly 21 finite points are given
    pub fn classify_slice(&self, landmarks: &[Landmark], previous: Pose) -> Result<Pose, HandPoseError> {
        let hand = LandmarkSet::from_slice(landmarks)?;
        Ok(self.classify(&hand, previous))
    }

    /// Map an openness vector to a pose
    pub fn resolve(&self, fingers: FingerState, previous: Pose) -> Pose {
        match (match_pose(fingers), self.unmatched_policy) {
            (Some(pose), _) => pose,
            (None, UnmatchedPolicy::RetainPrevious) => previous,
            (None, UnmatchedPolicy::Unknown) => Pose::Unknown,
        }
    }
}

impl Default for PoseClassifier {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}
