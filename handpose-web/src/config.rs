//! Tracker configuration
//!
//! Empirically tuned constants for thumb detection and anchor placement.
//! Defaults reproduce the tuned values exactly.

use crate::error::HandPoseError;

/// Minimum thumb-tip distance (normalized units) for the thumb to count as open
pub const DEFAULT_THUMB_OPEN_THRESHOLD: f32 = 0.08;

/// Fraction of the wrist → middle-tip x distance where the anchor sits
pub const DEFAULT_ANCHOR_X_INTERPOLATION: f32 = 1.0 / 3.0;

/// Multiplier applied to the wrist → middle-tip span to get the anchor scale
pub const DEFAULT_ANCHOR_SCALE_FACTOR: f32 = 1.5;

/// What the classifier returns when the finger pattern matches no known pose
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnmatchedPolicy {
    /// Keep the previous pose (hysteresis, no flicker)
    #[default]
    RetainPrevious,
    /// Return `Pose::Unknown`
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub thumb_open_threshold: f32,
    pub anchor_x_interpolation: f32,
    pub anchor_scale_factor: f32,
    pub unmatched_policy: UnmatchedPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            thumb_open_threshold: DEFAULT_THUMB_OPEN_THRESHOLD,
            anchor_x_interpolation: DEFAULT_ANCHOR_X_INTERPOLATION,
            anchor_scale_factor: DEFAULT_ANCHOR_SCALE_FACTOR,
            unmatched_policy: UnmatchedPolicy::RetainPrevious,
        }
    }
}

impl TrackerConfig {
    pub fn with_thumb_open_threshold(mut self, threshold: f32) -> Self {
        self.thumb_open_threshold = threshold;
        self
    }

    pub fn with_anchor_x_interpolation(mut self, interpolation: f32) -> Self {
        self.anchor_x_interpolation = interpolation;
        self
    }

    pub fn with_anchor_scale_factor(mut self, factor: f32) -> Self {
        self.anchor_scale_factor = factor;
        self
    }

    pub fn with_unmatched_policy(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched_policy = policy;
        self
    }

    /// Reject values that would make classification or placement meaningless
    pub fn validate(&self) -> Result<(), HandPoseError> {
        if !self.thumb_open_threshold.is_finite() || self.thumb_open_threshold < 0.0 {
            return Err(HandPoseError::InvalidConfig(
                "thumb_open_threshold must be finite and non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.anchor_x_interpolation) {
            return Err(HandPoseError::InvalidConfig(
                "anchor_x_interpolation must be within [0, 1]",
            ));
        }
        if !self.anchor_scale_factor.is_finite() || self.anchor_scale_factor < 0.0 {
            return Err(HandPoseError::InvalidConfig(
                "anchor_scale_factor must be finite and non-negative",
            ));
        }
        Ok(())
    }
}
