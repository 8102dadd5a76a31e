//! Turns a raw dragged offset into an admissible one.
//!
//! The order is fixed: clamp into the active thumb's bounds first, then snap
//! to the step grid. Snapping first could land a value back outside the
//! bounds; snapping last only has to correct for bounds that are themselves
//! off-grid.

use crate::{InternalPosition, SelectorMode, Thumb};

/// Relative tolerance, in steps, when comparing snapped values against bounds.
const GRID_TOLERANCE: f32 = 1e-4;

/// Upper limit on one-ulp corrections when a separation bound rounds short.
const SEPARATION_NUDGES: usize = 4;

/// Inclusive interval an active thumb may move in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f32,
    pub upper: f32,
}

impl Bounds {
    pub fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// `true` when the bounds cross each other.
    pub fn is_degenerate(&self) -> bool {
        self.lower > self.upper
    }

    /// Clamps into the bounds; when they cross, `upper` wins.
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.lower).min(self.upper)
    }
}

/// Bounds for `thumb`, given where the other thumb currently sits.
///
/// The separation bound is intersected with `[0, span]`: when `min_delta`
/// cannot be honoured the thumb pins at the domain edge instead of leaving the
/// domain.
pub fn bounds_for(
    thumb: Thumb,
    mode: SelectorMode,
    position: &InternalPosition,
    min_delta: f32,
    span: f32,
) -> Bounds {
    match (mode, thumb) {
        (SelectorMode::Single, _) => Bounds::new(0.0, span),
        (SelectorMode::Range, Thumb::Start) => Bounds::new(
            0.0,
            farthest_start(position.end, min_delta).max(0.0).min(span),
        ),
        (SelectorMode::Range, Thumb::End) => Bounds::new(
            nearest_end(position.start, min_delta).max(0.0).min(span),
            span,
        ),
    }
}

/// Smallest `end` with `end - start >= min_delta` as evaluated in `f32`.
fn nearest_end(start: f32, min_delta: f32) -> f32 {
    let mut end = start + min_delta;
    for _ in 0..SEPARATION_NUDGES {
        if end - start >= min_delta || !end.is_finite() {
            break;
        }
        end = next_toward(end, f32::INFINITY);
    }
    end
}

/// Largest `start` with `end - start >= min_delta` as evaluated in `f32`.
fn farthest_start(end: f32, min_delta: f32) -> f32 {
    let mut start = end - min_delta;
    for _ in 0..SEPARATION_NUDGES {
        if end - start >= min_delta || !start.is_finite() {
            break;
        }
        start = next_toward(start, f32::NEG_INFINITY);
    }
    start
}

/// The adjacent `f32` from `value` in the direction of `target`.
fn next_toward(value: f32, target: f32) -> f32 {
    if value == target || value.is_nan() {
        return value;
    }
    if value == 0.0 {
        let tiny = f32::from_bits(1);
        return if target > 0.0 { tiny } else { -tiny };
    }
    let bits = value.to_bits();
    let away_from_zero = (target > value) == (value > 0.0);
    f32::from_bits(if away_from_zero { bits + 1 } else { bits - 1 })
}

/// Rounds to the nearest multiple of `step`, halves rounding up.
pub fn quantize(value: f32, step: f32) -> f32 {
    (value / step + 0.5).floor() * step
}

/// Clamps `candidate` into `bounds`, then snaps it to the `step` grid.
///
/// If the nearest grid point falls outside the bounds, the nearest grid point
/// inside them is used instead. When no grid point fits, or the bounds are
/// degenerate, the clamped value is returned as is. Never fails.
pub fn normalize(candidate: f32, bounds: Bounds, step: f32) -> f32 {
    let clamped = bounds.clamp(candidate);
    if bounds.is_degenerate() || !(step.is_finite() && step > 0.0) {
        return clamped;
    }

    let tolerance = step * GRID_TOLERANCE;
    let snapped = quantize(clamped, step);

    if snapped > bounds.upper + tolerance {
        let below = (bounds.upper / step + GRID_TOLERANCE).floor() * step;
        return if below >= bounds.lower - tolerance {
            below.max(bounds.lower).min(bounds.upper)
        } else {
            clamped
        };
    }

    if snapped < bounds.lower - tolerance {
        let above = (bounds.lower / step - GRID_TOLERANCE).ceil() * step;
        return if above <= bounds.upper + tolerance {
            above.max(bounds.lower).min(bounds.upper)
        } else {
            clamped
        };
    }

    snapped.max(bounds.lower).min(bounds.upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_per_thumb() {
        let position = InternalPosition::new(10.0, 50.0);
        assert_eq!(
            bounds_for(Thumb::Start, SelectorMode::Range, &position, 4.0, 100.0),
            Bounds::new(0.0, 46.0)
        );
        assert_eq!(
            bounds_for(Thumb::End, SelectorMode::Range, &position, 4.0, 100.0),
            Bounds::new(14.0, 100.0)
        );
        assert_eq!(
            bounds_for(Thumb::End, SelectorMode::Single, &position, 4.0, 100.0),
            Bounds::new(0.0, 100.0)
        );
    }

    #[test]
    fn test_oversized_min_delta_stays_in_domain() {
        let position = InternalPosition::new(10.0, 50.0);
        let start = bounds_for(Thumb::Start, SelectorMode::Range, &position, 150.0, 100.0);
        let end = bounds_for(Thumb::End, SelectorMode::Range, &position, 150.0, 100.0);
        assert_eq!(start, Bounds::new(0.0, 0.0));
        assert_eq!(end, Bounds::new(100.0, 100.0));
        assert_eq!(normalize(30.0, start, 1.0), 0.0);
        assert_eq!(normalize(30.0, end, 1.0), 100.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(quantize(7.5, 1.0), 8.0);
        assert_eq!(quantize(7.49, 1.0), 7.0);
        assert_eq!(quantize(12.0, 8.0), 16.0);
        assert_eq!(quantize(11.9, 8.0), 8.0);
    }

    #[test]
    fn test_clamp_before_quantize() {
        // Snapping first would give 8, which clamps to the off-grid 12.
        let bounds = Bounds::new(12.0, 100.0);
        assert_eq!(normalize(5.0, bounds, 8.0), 16.0);
    }

    #[test]
    fn test_snapped_value_pulled_back_inside() {
        // 47 snaps to 50, past the upper bound; the nearest in-bound step is 40.
        let bounds = Bounds::new(0.0, 47.0);
        assert_eq!(normalize(60.0, bounds, 10.0), 40.0);

        let bounds = Bounds::new(13.0, 100.0);
        assert_eq!(normalize(0.0, bounds, 10.0), 20.0);
    }

    #[test]
    fn test_boundary_coincidence_is_exact() {
        // start = 8, min_delta = 8: the end thumb may not go below 16.
        let bounds = Bounds::new(16.0, 240.0);
        assert_eq!(normalize(14.0, bounds, 8.0), 16.0);
        assert_eq!(normalize(16.0, bounds, 8.0), 16.0);
        assert_eq!(normalize(17.0, bounds, 8.0), 16.0);
        assert_eq!(normalize(20.0, bounds, 8.0), 24.0);
    }

    #[test]
    fn test_no_grid_point_in_bounds() {
        let bounds = Bounds::new(11.0, 13.0);
        assert_eq!(normalize(20.0, bounds, 8.0), 13.0);
        assert_eq!(normalize(0.0, bounds, 8.0), 11.0);
    }

    #[test]
    fn test_degenerate_bounds_collapse_to_upper() {
        let bounds = Bounds::new(150.0, 100.0);
        assert!(bounds.is_degenerate());
        assert_eq!(normalize(120.0, bounds, 1.0), 100.0);
        assert_eq!(normalize(-5.0, bounds, 1.0), 100.0);
    }

    #[test]
    fn test_separation_holds_exactly_with_fractional_steps() {
        for (step, min_delta) in [(0.1f32, 0.3f32), (0.05, 0.15), (0.1, 0.1)] {
            for k in 0..40 {
                let anchor = quantize(k as f32 * step, step);
                let position = InternalPosition::new(anchor, anchor);

                let bounds =
                    bounds_for(Thumb::End, SelectorMode::Range, &position, min_delta, 10.0);
                let end = normalize(0.0, bounds, step);
                assert!(end - anchor >= min_delta, "end {end} start {anchor} step {step}");

                let bounds =
                    bounds_for(Thumb::Start, SelectorMode::Range, &position, min_delta, 10.0);
                let start = normalize(10.0, bounds, step);
                if anchor >= min_delta {
                    assert!(anchor - start >= min_delta, "end {anchor} start {start} step {step}");
                }
            }
        }
    }

    #[test]
    fn test_next_toward() {
        assert!(next_toward(1.0, 2.0) > 1.0);
        assert!(next_toward(1.0, 0.0) < 1.0);
        assert!(next_toward(-1.0, 0.0) > -1.0);
        assert!(next_toward(-1.0, -2.0) < -1.0);
        assert!(next_toward(0.0, 1.0) > 0.0);
        assert_eq!(next_toward(3.0, 3.0), 3.0);
    }

    #[test]
    fn test_fractional_step() {
        let bounds = Bounds::new(0.0, 0.3);
        let value = normalize(0.29, bounds, 0.1);
        assert!((value - 0.3).abs() < 1e-6, "{value}");
    }
}
