//! Renderer placement - anchor → model matrix for each AR asset
//!
//! Maps normalized image coordinates into the view volume the cube and
//! the video plane are drawn in. Matrices are translate-then-scale.

use nalgebra::{Matrix4, Vector3};

use super::estimator::Anchor;
use crate::presentation::Shape;

// Cube
const CUBE_X_SPAN: f32 = 7.0;
const CUBE_Y_SPAN: f32 = 15.0;
const CUBE_DEPTH: f32 = -5.0;

// Video plane
const VIDEO_ORIGIN: f32 = 0.38;
const VIDEO_X_SPAN: f32 = 5.0;
const VIDEO_Y_SPAN: f32 = 8.0;
const VIDEO_DEPTH: f32 = -4.0;
const VIDEO_SCALE_BOOST: f32 = 3.0;
const VIDEO_ASPECT: f32 = 1.77;

/// Model matrix placing `shape` at `anchor`
pub fn model_matrix(shape: Shape, anchor: &Anchor) -> Matrix4<f32> {
    match shape {
        Shape::Cube => {
            let translation = Vector3::new(
                (anchor.x - 0.5) * CUBE_X_SPAN,
                -(anchor.y - 0.5) * CUBE_Y_SPAN,
                CUBE_DEPTH,
            );
            Matrix4::new_translation(&translation) * Matrix4::new_scaling(anchor.scale)
        }
        Shape::Video => {
            let s = anchor.scale * VIDEO_SCALE_BOOST;
            // Bigger planes are lifted so they sit above the hand
            let lift = 2f32.powf(s / 4.0) / 5.0;
            let translation = Vector3::new(
                (anchor.x - VIDEO_ORIGIN) * VIDEO_X_SPAN,
                -(anchor.y - VIDEO_ORIGIN - lift) * VIDEO_Y_SPAN,
                VIDEO_DEPTH,
            );
            let scaling = Vector3::new(s * VIDEO_ASPECT, s, 1.0);
            Matrix4::new_translation(&translation) * Matrix4::new_nonuniform_scaling(&scaling)
        }
    }
}

/// Column-major floats, ready for a uniform upload
pub fn model_matrix_columns(shape: Shape, anchor: &Anchor) -> Vec<f32> {
    model_matrix(shape, anchor).as_slice().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_cube_centered() {
        let anchor = Anchor { x: 0.5, y: 0.5, z: 0.0, scale: 0.75 };
        let m = model_matrix(Shape::Cube, &anchor);
        assert!((m[(0, 0)] - 0.75).abs() < EPS);
        assert!((m[(1, 1)] - 0.75).abs() < EPS);
        assert!((m[(2, 2)] - 0.75).abs() < EPS);
        assert!(m[(0, 3)].abs() < EPS);
        assert!(m[(1, 3)].abs() < EPS);
        assert!((m[(2, 3)] + 5.0).abs() < EPS);
    }

    #[test]
    fn test_cube_screen_up_is_positive_y() {
        let anchor = Anchor { x: 0.6, y: 0.3, z: 0.0, scale: 1.0 };
        let m = model_matrix(Shape::Cube, &anchor);
        assert!((m[(0, 3)] - 0.7).abs() < EPS);
        assert!((m[(1, 3)] - 3.0).abs() < EPS);
    }

    #[test]
    fn test_video_plane() {
        let anchor = Anchor { x: 0.38, y: 0.38, z: 0.0, scale: 0.0 };
        let m = model_matrix(Shape::Video, &anchor);
        // s = 0 → lift = 2^0 / 5
        assert!(m[(0, 3)].abs() < EPS);
        assert!((m[(1, 3)] - 1.6).abs() < EPS);
        assert!((m[(2, 3)] + 4.0).abs() < EPS);
        assert!(m[(0, 0)].abs() < EPS);
        assert!((m[(2, 2)] - 1.0).abs() < EPS);

        let anchor = Anchor { scale: 1.0, ..anchor };
        let m = model_matrix(Shape::Video, &anchor);
        assert!((m[(0, 0)] - 3.0 * 1.77).abs() < EPS);
        assert!((m[(1, 1)] - 3.0).abs() < EPS);
    }

    #[test]
    fn test_columns_are_column_major() {
        let anchor = Anchor { x: 0.6, y: 0.3, z: 0.0, scale: 1.0 };
        let cols = model_matrix_columns(Shape::Cube, &anchor);
        assert_eq!(cols.len(), 16);
        // Translation lives in the last column
        assert!((cols[12] - 0.7).abs() < EPS);
        assert!((cols[13] - 3.0).abs() < EPS);
        assert!((cols[14] + 5.0).abs() < EPS);
        assert!((cols[15] - 1.0).abs() < EPS);
    }
}
