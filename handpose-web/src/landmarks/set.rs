//! Landmark and LandmarkSet - one detected hand per frame

use std::ops::Index;

use nalgebra::Point2;

use super::indices::{MIDDLE_TIP, WRIST};
use crate::error::HandPoseError;

/// Landmarks per hand
pub const LANDMARK_COUNT: usize = 21;

/// Flat floats per hand (x, y, z per landmark)
pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

/// A single 3D landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Position in the image plane
    pub fn planar(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    /// Euclidean distance in the image plane (depth ignored)
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        nalgebra::distance(&self.planar(), &other.planar())
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Exactly 21 landmarks of one hand, in detector order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkSet {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkSet {
    /// Build from a slice; fails unless it holds exactly 21 finite landmarks
    pub fn from_slice(points: &[Landmark]) -> Result<Self, HandPoseError> {
        let points: [Landmark; LANDMARK_COUNT] =
            points.try_into().map_err(|_| HandPoseError::InvalidInput {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            })?;

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(HandPoseError::NonFiniteLandmark { index });
        }

        Ok(Self { points })
    }

    /// Build from a flat [x0, y0, z0, x1, ...] buffer of 63 floats
    pub fn from_flat(data: &[f32]) -> Result<Self, HandPoseError> {
        if data.len() != FLOATS_PER_HAND {
            return Err(HandPoseError::InvalidInput {
                expected: FLOATS_PER_HAND,
                actual: data.len(),
            });
        }

        let points: Vec<Landmark> = data
            .chunks_exact(3)
            .map(|c| Landmark::new(c[0], c[1], c[2]))
            .collect();
        Self::from_slice(&points)
    }

    /// Split a multi-hand flat buffer into sets. The buffer must hold
    /// exactly 63 floats per hand.
    pub fn hands_from_flat(data: &[f32], num_hands: usize) -> Result<Vec<Self>, HandPoseError> {
        let needed = num_hands
            .checked_mul(FLOATS_PER_HAND)
            .ok_or(HandPoseError::InvalidInput {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != needed {
            return Err(HandPoseError::InvalidInput {
                expected: needed,
                actual: data.len(),
            });
        }

        data.chunks_exact(FLOATS_PER_HAND)
            .map(Self::from_flat)
            .collect()
    }

    pub fn wrist(&self) -> Landmark {
        self.points[WRIST]
    }

    pub fn middle_tip(&self) -> Landmark {
        self.points[MIDDLE_TIP]
    }

    /// Planar distance between two landmarks of this hand
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        self.points[a].planar_distance(&self.points[b])
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.points
    }
}

impl Index<usize> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.points[index]
    }
}

impl TryFrom<&[Landmark]> for LandmarkSet {
    type Error = HandPoseError;

    fn try_from(points: &[Landmark]) -> Result<Self, Self::Error> {
        Self::from_slice(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_count() {
        let points = [Landmark::default(); 20];
        let err = LandmarkSet::from_slice(&points).unwrap_err();
        assert_eq!(err, HandPoseError::InvalidInput { expected: 21, actual: 20 });

        let points = [Landmark::default(); 22];
        assert!(LandmarkSet::try_from(&points[..]).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[7].y = f32::NAN;
        let err = LandmarkSet::from_slice(&points).unwrap_err();
        assert_eq!(err, HandPoseError::NonFiniteLandmark { index: 7 });
    }

    #[test]
    fn test_flat_layout() {
        let data: Vec<f32> = (0..FLOATS_PER_HAND).map(|i| i as f32).collect();
        let set = LandmarkSet::from_flat(&data).unwrap();
        assert_eq!(set.wrist(), Landmark::new(0.0, 1.0, 2.0));
        assert_eq!(set.middle_tip(), Landmark::new(36.0, 37.0, 38.0));
        assert_eq!(set[20], Landmark::new(60.0, 61.0, 62.0));
    }

    #[test]
    fn test_hands_from_flat() {
        let data = vec![0.25; FLOATS_PER_HAND * 2];
        assert_eq!(LandmarkSet::hands_from_flat(&data, 2).unwrap().len(), 2);
        assert!(LandmarkSet::hands_from_flat(&[], 0).unwrap().is_empty());
        assert!(LandmarkSet::hands_from_flat(&data, 3).is_err());
    }

    #[test]
    fn test_hands_from_flat_rejects_trailing_floats() {
        let data = vec![0.25; FLOATS_PER_HAND + 10];
        let err = LandmarkSet::hands_from_flat(&data, 1).unwrap_err();
        assert_eq!(err, HandPoseError::InvalidInput { expected: 63, actual: 73 });

        let two_hands = vec![0.25; FLOATS_PER_HAND * 2];
        assert!(LandmarkSet::hands_from_flat(&two_hands, 1).is_err());
        assert!(LandmarkSet::hands_from_flat(&two_hands, 0).is_err());
    }

    #[test]
    fn test_hands_from_flat_huge_count() {
        let data = [0.25; FLOATS_PER_HAND];
        let result = LandmarkSet::hands_from_flat(&data, usize::MAX / 2);
        assert!(matches!(result, Err(HandPoseError::InvalidInput { actual: 63, .. })));
    }

    #[test]
    fn test_planar_distance_ignores_depth() {
        let a = Landmark::new(0.0, 0.0, 0.9);
        let b = Landmark::new(0.3, 0.4, -0.4);
        assert!((a.planar_distance(&b) - 0.5).abs() < 1e-6);
    }
}
