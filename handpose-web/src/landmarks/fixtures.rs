//! Synthetic hands for unit tests
//!
//! Upright hand, wrist at the bottom (large y), fingers pointing up.
//! Each finger is either extended (tip far above its MCP) or curled
//! (tip tucked between MCP and wrist).

use super::indices::*;
use super::set::{Landmark, LandmarkSet, LANDMARK_COUNT};

const WRIST_POS: (f32, f32) = (0.5, 0.9);
const MCP_Y: f32 = 0.7;
const OPEN_TIP_Y: f32 = 0.4;
const CLOSED_TIP_Y: f32 = 0.8;

/// x of index, middle, ring, pinky
const FINGER_X: [f32; 4] = [0.44, 0.5, 0.56, 0.62];

/// Far from every knuckle
const THUMB_OPEN_TIP: (f32, f32) = (0.2, 0.6);
/// Within 0.08 of the index MCP and the curled middle PIP
const THUMB_CLOSED_TIP: (f32, f32) = (0.47, 0.72);

fn midpoint(a: Landmark, b: Landmark) -> Landmark {
    Landmark::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, (a.z + b.z) / 2.0)
}

/// Raw landmark array for the given finger states
pub(crate) fn hand_points(
    thumb: bool,
    index: bool,
    middle: bool,
    ring: bool,
    pinky: bool,
) -> [Landmark; LANDMARK_COUNT] {
    let mut p = [Landmark::default(); LANDMARK_COUNT];
    let wrist = Landmark::new(WRIST_POS.0, WRIST_POS.1, 0.0);
    p[WRIST] = wrist;

    let open = [index, middle, ring, pinky];
    let chains = [
        (INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP),
        (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP),
        (RING_MCP, RING_PIP, RING_DIP, RING_TIP),
        (PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP),
    ];

    for (i, &(mcp, pip, dip, tip)) in chains.iter().enumerate() {
        let x = FINGER_X[i];
        let tip_y = if open[i] { OPEN_TIP_Y } else { CLOSED_TIP_Y };
        p[mcp] = Landmark::new(x, MCP_Y, -0.02);
        p[tip] = Landmark::new(x, tip_y, -0.04);
        p[pip] = if open[i] {
            Landmark::new(x, 0.6, -0.03)
        } else {
            Landmark::new(x, 0.75, -0.03)
        };
        p[dip] = midpoint(p[pip], p[tip]);
    }

    let thumb_tip = if thumb { THUMB_OPEN_TIP } else { THUMB_CLOSED_TIP };
    p[THUMB_TIP] = Landmark::new(thumb_tip.0, thumb_tip.1, -0.02);
    p[THUMB_CMC] = Landmark::new(0.42, 0.85, -0.01);
    p[THUMB_MCP] = midpoint(p[THUMB_CMC], p[THUMB_TIP]);
    p[THUMB_IP] = midpoint(p[THUMB_MCP], p[THUMB_TIP]);

    p
}

pub(crate) fn hand(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> LandmarkSet {
    LandmarkSet::from_slice(&hand_points(thumb, index, middle, ring, pinky))
        .expect("fixture hand is well-formed")
}

pub(crate) fn fist() -> LandmarkSet {
    hand(false, false, false, false, false)
}

pub(crate) fn paper() -> LandmarkSet {
    hand(true, true, true, true, true)
}

pub(crate) fn one() -> LandmarkSet {
    hand(false, true, false, false, false)
}

pub(crate) fn thumb_up() -> LandmarkSet {
    hand(true, false, false, false, false)
}

pub(crate) fn right() -> LandmarkSet {
    hand(true, true, false, false, false)
}

/// Thumb + middle only: matches no pose
pub(crate) fn unrecognized() -> LandmarkSet {
    hand(true, false, true, false, false)
}
