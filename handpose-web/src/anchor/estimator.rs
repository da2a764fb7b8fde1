//! Anchor estimation from wrist and middle fingertip
//!
//! x sits a fixed fraction of the way from the wrist toward the tip,
//! y takes the upper of the two landmarks (smaller y is higher on screen),
//! z follows the wrist, scale tracks the on-screen hand span.
//! No smoothing between frames.

use crate::config::TrackerConfig;
use crate::landmarks::{Landmark, LandmarkSet};

/// Placement of AR content in normalized image space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorEstimator {
    x_interpolation: f32,
    scale_factor: f32,
}

impl AnchorEstimator {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            x_interpolation: config.anchor_x_interpolation,
            scale_factor: config.anchor_scale_factor,
        }
    }

    pub fn estimate(&self, wrist: Landmark, middle_tip: Landmark) -> Anchor {
        let x = if wrist.x > middle_tip.x {
            wrist.x - (wrist.x - middle_tip.x) * self.x_interpolation
        } else {
            wrist.x + (middle_tip.x - wrist.x) * self.x_interpolation
        };

        let y = if wrist.y > middle_tip.y {
            middle_tip.y
        } else {
            wrist.y
        };

        Anchor {
            x,
            y,
            z: wrist.z,
            scale: wrist.planar_distance(&middle_tip) * self.scale_factor,
        }
    }

    pub fn estimate_hand(&self, hand: &LandmarkSet) -> Anchor {
        self.estimate(hand.wrist(), hand.middle_tip())
    }
}

impl Default for AnchorEstimator {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}

/// Estimate with the default constants
pub fn estimate_anchor(wrist: Landmark, middle_tip: Landmark) -> Anchor {
    AnchorEstimator::default().estimate(wrist, middle_tip)
}
