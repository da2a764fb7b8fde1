//! Shared session - frame producer and render reader on different threads
//!
//! Every write happens under the lock, so a render-side read always sees
//! a complete frame.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::context::GestureSession;
use super::snapshot::FrameSnapshot;
use crate::error::HandPoseError;
use crate::landmarks::LandmarkSet;
use crate::presentation::PresentationState;

#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<GestureSession>>,
}

impl SharedSession {
    pub fn new(session: GestureSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // A panic mid-frame cannot leave a half-written snapshot behind,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, GestureSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn process_frame(&self, hands: &[LandmarkSet]) -> Option<FrameSnapshot> {
        self.lock().process_frame(hands)
    }

    pub fn process_flat(
        &self,
        data: &[f32],
        num_hands: usize,
    ) -> Result<Option<FrameSnapshot>, HandPoseError> {
        self.lock().process_flat(data, num_hands)
    }

    /// Latest frame for the renderer
    pub fn last_frame(&self) -> Option<FrameSnapshot> {
        self.lock().last_frame()
    }

    pub fn presentation(&self) -> PresentationState {
        self.lock().presentation()
    }

    pub fn reset(&self) {
        self.lock().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Pose;
    use crate::landmarks::fixtures;
    use crate::presentation::Shape;
    use std::thread;

    #[test]
    fn test_producer_and_reader_threads() {
        let shared = SharedSession::default();
        let producer = shared.clone();

        let handle = thread::spawn(move || {
            let frames = [fixtures::thumb_up(), fixtures::paper()];
            for _ in 0..50 {
                for hand in &frames {
                    producer.process_frame(std::slice::from_ref(hand));
                }
            }
        });

        // Reader never sees a torn state: visible asset is always the selection
        for _ in 0..100 {
            let state = shared.presentation();
            if let Some(shape) = state.visible_shape() {
                assert_eq!(shape, state.selected);
            }
        }

        handle.join().unwrap();
        let last = shared.last_frame().unwrap();
        assert_eq!(last.pose, Pose::Paper);
        assert_eq!(last.presentation.visible_shape(), Some(Shape::Video));
    }

    #[test]
    fn test_sessions_on_parallel_threads() {
        let handles: Vec<_> = [fixtures::one(), fixtures::thumb_up()]
            .into_iter()
            .map(|select| {
                thread::spawn(move || {
                    let mut session = GestureSession::default();
                    session.process_hand(&select);
                    session.process_hand(&fixtures::paper());
                    session.presentation().visible_shape()
                })
            })
            .collect();

        let shapes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(shapes, vec![Some(Shape::Cube), Some(Shape::Video)]);
    }
}
