//! Finger openness predicates
//!
//! All distances are planar (x, y) in normalized image units.

use crate::landmarks::{
    LandmarkSet, FINGER_JOINTS, INDEX_MCP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, THUMB_TIP, WRIST,
};

/// Open/closed state of each finger
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    pub const fn new(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }

    /// Evaluate all five predicates for one hand
    pub fn from_landmarks(hand: &LandmarkSet, thumb_open_threshold: f32) -> Self {
        let [index, middle, ring, pinky] = FINGER_JOINTS.map(|(mcp, tip)| {
            // Ties count as open
            hand.distance(WRIST, tip) >= hand.distance(WRIST, mcp)
        });

        Self {
            thumb: thumb_open(hand, thumb_open_threshold),
            index,
            middle,
            ring,
            pinky,
        }
    }

    /// Packed form: thumb = bit 0 ... pinky = bit 4
    pub fn bits(&self) -> u8 {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .enumerate()
            .fold(0, |acc, (i, &open)| acc | ((open as u8) << i))
    }

    pub fn from_bits(bits: u8) -> Self {
        let bit = |i: u8| bits & (1 << i) != 0;
        Self::new(bit(0), bit(1), bit(2), bit(3), bit(4))
    }

    pub fn open_count(&self) -> u32 {
        self.bits().count_ones()
    }
}

/// Thumb is judged against different knuckles depending on how curled the hand is
fn thumb_open(hand: &LandmarkSet, threshold: f32) -> bool {
    let curled = hand.distance(WRIST, MIDDLE_MCP) > hand.distance(WRIST, MIDDLE_TIP);

    if curled {
        hand.distance(THUMB_TIP, MIDDLE_PIP) >= threshold
    } else {
        hand.distance(THUMB_TIP, MIDDLE_MCP) >= threshold
            && hand.distance(THUMB_TIP, INDEX_MCP) >= threshold
    }
}
