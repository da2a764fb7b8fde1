//! Presentation state machine
//!
//! Edge-triggered: nothing happens unless the pose differs from the
//! previous frame's pose.
//!
//! - FIST: scale 0, hide both assets
//! - ONE / THUMB: select cube / video, visibility untouched
//! - TWO / THREE / FOUR: scale 0, selection untouched
//! - anything else: show the selected asset, hide the other

use super::state::{PresentationState, Shape};
use crate::classifier::Pose;

/// What a pose change did to the presentation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    AllHidden,
    ShapeSelected(Shape),
    ScaleSuppressed,
    Shown(Shape),
}

#[derive(Clone, Debug, Default)]
pub struct PresentationMachine {
    state: PresentationState,
}

impl PresentationMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Per-frame scale from the anchor, before any transition runs
    pub fn set_scale(&mut self, scale: f32) {
        self.state.scale = scale;
    }

    /// Apply a pose change. Returns None when the pose did not change.
    pub fn on_pose(&mut self, pose: Pose, previous: Pose) -> Option<Transition> {
        if pose == previous {
            return None;
        }

        let transition = match pose {
            Pose::Fist => {
                self.state.scale = 0.0;
                self.state.cube_visible = false;
                self.state.video_visible = false;
                Transition::AllHidden
            }
            Pose::One => {
                self.state.selected = Shape::Cube;
                Transition::ShapeSelected(Shape::Cube)
            }
            Pose::Thumb => {
                self.state.selected = Shape::Video;
                Transition::ShapeSelected(Shape::Video)
            }
            Pose::Two | Pose::Three | Pose::Four => {
                self.state.scale = 0.0;
                Transition::ScaleSuppressed
            }
            _ => {
                let selected = self.state.selected;
                self.state.cube_visible = selected == Shape::Cube;
                self.state.video_visible = selected == Shape::Video;
                Transition::Shown(selected)
            }
        };

        Some(transition)
    }

    pub fn reset(&mut self) {
        self.state = PresentationState::default();
    }
}
