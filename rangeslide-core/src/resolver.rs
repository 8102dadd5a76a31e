//! Decides which thumb owns a drag from the point where it started.

use crate::{CoordinateMapper, InternalPosition, Px, SelectorMode, Thumb};

/// The thumbs activated by a gesture start.
///
/// In range mode the two flags come from two independent thresholds rather
/// than a nearest-thumb split, so both may be set (start wins) or neither
/// (the gesture is inert).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThumbActivation {
    pub start: bool,
    pub end: bool,
}

impl ThumbActivation {
    pub const NONE: Self = Self {
        start: false,
        end: false,
    };

    /// The thumb that follows the drag, if any.
    pub fn target(&self) -> Option<Thumb> {
        if self.start {
            Some(Thumb::Start)
        } else if self.end {
            Some(Thumb::End)
        } else {
            None
        }
    }

    pub fn is_inert(&self) -> bool {
        !self.start && !self.end
    }
}

/// Resolves the activation for a gesture starting at `x`.
///
/// `x` is measured from the left edge of the component, which sits one
/// `thumb_size` before the measured track. The start thumb is active when `x`
/// lies left of its right edge (`start_px + thumb_size`); the end thumb when
/// `x` lies right of its left edge (`end_px + thumb_size`).
pub fn resolve_activation(
    x: Px,
    position: &InternalPosition,
    mapper: &CoordinateMapper,
    thumb_size: Px,
    mode: SelectorMode,
) -> ThumbActivation {
    match mode {
        SelectorMode::Single => ThumbActivation {
            start: false,
            end: true,
        },
        SelectorMode::Range => {
            let start_px = mapper.to_pixels(position.start);
            let end_px = mapper.to_pixels(position.end);
            ThumbActivation {
                start: x < start_px + thumb_size,
                end: x > end_px + thumb_size,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THUMB: Px = Px(30.0);

    fn range_setup() -> (InternalPosition, CoordinateMapper) {
        // start at 20px, end at 100px on a 200px track
        (
            InternalPosition::new(10.0, 50.0),
            CoordinateMapper::new(100.0, Px(200.0)),
        )
    }

    #[test]
    fn test_single_mode_always_resolves_to_end() {
        let position = InternalPosition::new(0.0, 15.0);
        let mapper = CoordinateMapper::new(60.0, Px(300.0));
        for x in [-50.0, 0.0, 75.0, 299.0, 10_000.0] {
            let activation =
                resolve_activation(Px(x), &position, &mapper, THUMB, SelectorMode::Single);
            assert_eq!(activation.target(), Some(Thumb::End));
        }
    }

    #[test]
    fn test_start_thumb_threshold() {
        let (position, mapper) = range_setup();
        let activation =
            resolve_activation(Px(49.0), &position, &mapper, THUMB, SelectorMode::Range);
        assert_eq!(activation, ThumbActivation { start: true, end: false });
    }

    #[test]
    fn test_end_thumb_threshold() {
        let (position, mapper) = range_setup();
        let activation =
            resolve_activation(Px(131.0), &position, &mapper, THUMB, SelectorMode::Range);
        assert_eq!(activation, ThumbActivation { start: false, end: true });
        assert_eq!(activation.target(), Some(Thumb::End));
    }

    #[test]
    fn test_gap_between_thumbs_is_inert() {
        let (position, mapper) = range_setup();
        // Between the start thumb's right edge (50px) and the end thumb's
        // left edge (130px) nothing is grabbed.
        let activation =
            resolve_activation(Px(90.0), &position, &mapper, THUMB, SelectorMode::Range);
        assert!(activation.is_inert());
        assert_eq!(activation.target(), None);
    }

    #[test]
    fn test_overlapping_thumbs_prefer_start() {
        let position = InternalPosition::new(50.0, 50.0);
        let mapper = CoordinateMapper::new(100.0, Px(200.0));
        // start threshold is 130px, end threshold is 130px; at x == 130 neither
        // predicate holds, left of it only start, right of it only end.
        let left = resolve_activation(Px(129.0), &position, &mapper, THUMB, SelectorMode::Range);
        let right = resolve_activation(Px(131.0), &position, &mapper, THUMB, SelectorMode::Range);
        assert_eq!(left.target(), Some(Thumb::Start));
        assert_eq!(right.target(), Some(Thumb::End));

        let at_edge = resolve_activation(Px(130.0), &position, &mapper, THUMB, SelectorMode::Range);
        assert!(at_edge.is_inert());
    }

    #[test]
    fn test_both_flags_prefer_start() {
        // Only reachable when start lies past end, e.g. after an unsanitized
        // external write.
        let position = InternalPosition::new(60.0, 40.0);
        let mapper = CoordinateMapper::new(100.0, Px(200.0));
        let both = resolve_activation(Px(130.0), &position, &mapper, THUMB, SelectorMode::Range);
        assert_eq!(both, ThumbActivation { start: true, end: true });
        assert_eq!(both.target(), Some(Thumb::Start));
    }
}
