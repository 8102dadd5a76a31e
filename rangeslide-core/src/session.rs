//! Per-gesture state: which thumb follows the pointer and where it started.

use crate::{Px, Thumb, ThumbActivation};

/// State of one press-to-release cycle.
///
/// Created on gesture begin and dropped on gesture end. The origins are the
/// thumbs' pixel offsets at the moment of the press; every update adds the
/// cumulative translation to the active thumb's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub activation: ThumbActivation,
    pub origin_start: Px,
    pub origin_end: Px,
}

impl GestureSession {
    pub fn origin(&self, thumb: Thumb) -> Px {
        match thumb {
            Thumb::Start => self.origin_start,
            Thumb::End => self.origin_end,
        }
    }

    pub fn active_thumb(&self) -> Option<Thumb> {
        self.activation.target()
    }
}
