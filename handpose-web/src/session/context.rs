//! Gesture session - owns all mutable per-session state
//!
//! One frame is processed to completion before the next:
//! anchor → presentation scale → pose → presentation transition.

use super::snapshot::{FrameSnapshot, SessionStats};
use crate::anchor::{Anchor, AnchorEstimator};
use crate::classifier::{Pose, PoseClassifier};
use crate::config::TrackerConfig;
use crate::error::HandPoseError;
use crate::landmarks::{Landmark, LandmarkSet};
use crate::presentation::{PresentationMachine, PresentationState};

/// Pose the session starts in
pub const INITIAL_POSE: Pose = Pose::Fist;

#[derive(Clone, Debug)]
pub struct GestureSession {
    config: TrackerConfig,
    classifier: PoseClassifier,
    estimator: AnchorEstimator,
    current_pose: Pose,
    presentation: PresentationMachine,
    last_frame: Option<FrameSnapshot>,
    stats: SessionStats,
}

impl GestureSession {
    pub fn new(config: TrackerConfig) -> Result<Self, HandPoseError> {
        config.validate()?;
        Ok(Self {
            config,
            classifier: PoseClassifier::new(&config),
            estimator: AnchorEstimator::new(&config),
            current_pose: INITIAL_POSE,
            presentation: PresentationMachine::new(),
            last_frame: None,
            stats: SessionStats::default(),
        })
    }

    /// Process one detected hand
    pub fn process_hand(&mut self, hand: &LandmarkSet) -> FrameSnapshot {
        let anchor = self.estimator.estimate_hand(hand);
        self.presentation.set_scale(anchor.scale);

        let previous_pose = self.current_pose;
        let fingers = self.classifier.fingers(hand);
        let pose = self.classifier.resolve(fingers, previous_pose);

        let transition = self.presentation.on_pose(pose, previous_pose);
        self.current_pose = pose;

        self.stats.frames_processed += 1;
        if let Some(transition) = transition {
            self.stats.pose_changes += 1;
            console_log!(
                "✋ {} → {} ({:?})",
                previous_pose.name(),
                pose.name(),
                transition
            );
        }

        let snapshot = FrameSnapshot {
            pose,
            previous_pose,
            fingers,
            anchor,
            presentation: self.presentation.state(),
            transition,
        };
        self.last_frame = Some(snapshot);
        snapshot
    }

    /// Process a detector frame. Only the first hand is used; an empty
    /// frame changes nothing and returns None.
    pub fn process_frame(&mut self, hands: &[LandmarkSet]) -> Option<FrameSnapshot> {
        match hands.first() {
            Some(hand) => Some(self.process_hand(hand)),
            None => {
                self.stats.empty_frames += 1;
                None
            }
        }
    }

    /// Validate and process raw landmarks. Rejected input leaves the session untouched.
    pub fn process_landmarks(&mut self, landmarks: &[Landmark]) -> Result<FrameSnapshot, HandPoseError> {
        let hand = LandmarkSet::from_slice(landmarks)?;
        Ok(self.process_hand(&hand))
    }

    /// Flat multi-hand buffer (63 floats per hand), as delivered by the JS detector
    pub fn process_flat(
        &mut self,
        data: &[f32],
        num_hands: usize,
    ) -> Result<Option<FrameSnapshot>, HandPoseError> {
        let hands = LandmarkSet::hands_from_flat(data, num_hands)?;
        Ok(self.process_frame(&hands))
    }

    pub fn current_pose(&self) -> Pose {
        self.current_pose
    }

    pub fn presentation(&self) -> PresentationState {
        self.presentation.state()
    }

    /// Anchor of the last processed frame
    pub fn anchor(&self) -> Option<Anchor> {
        self.last_frame.map(|f| f.anchor)
    }

    pub fn last_frame(&self) -> Option<FrameSnapshot> {
        self.last_frame
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Swap tuning parameters; pose and presentation state are kept
    pub fn set_config(&mut self, config: TrackerConfig) -> Result<(), HandPoseError> {
        config.validate()?;
        self.config = config;
        self.classifier = PoseClassifier::new(&config);
        self.estimator = AnchorEstimator::new(&config);
        Ok(())
    }

    /// Back to the session-start state, keeping the config
    pub fn reset(&mut self) {
        self.current_pose = INITIAL_POSE;
        self.presentation.reset();
        self.last_frame = None;
        self.stats = SessionStats::default();
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self {
            config: TrackerConfig::default(),
            classifier: PoseClassifier::default(),
            estimator: AnchorEstimator::default(),
            current_pose: INITIAL_POSE,
            presentation: PresentationMachine::new(),
            last_frame: None,
            stats: SessionStats::default(),
        }
    }
}
