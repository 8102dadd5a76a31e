//! Conversion between logical offsets and track pixels.

use crate::Px;

/// Maps offsets in `[0, span]` onto `[0, track_width]` and back.
///
/// A mapper is a throwaway value built from the current measurement whenever
/// it is needed, so resizes never require rewriting stored state. Until a
/// positive width has been observed both multipliers are `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    span: f32,
    track_width: Px,
}

impl CoordinateMapper {
    pub fn new(span: f32, track_width: Px) -> Self {
        Self { span, track_width }
    }

    /// Returns `true` once the track has a positive, finite width.
    pub fn is_measured(&self) -> bool {
        self.track_width.is_positive() && self.span.is_finite() && self.span > 0.0
    }

    /// Pixels per logical unit.
    pub fn px_per_unit(&self) -> f32 {
        if !self.is_measured() {
            return 0.0;
        }
        self.track_width.to_f32() / self.span
    }

    /// Logical units per pixel.
    pub fn units_per_px(&self) -> f32 {
        if !self.is_measured() {
            return 0.0;
        }
        self.span / self.track_width.to_f32()
    }

    pub fn to_pixels(&self, offset: f32) -> Px {
        Px(offset * self.px_per_unit())
    }

    pub fn to_logical(&self, pixels: Px) -> f32 {
        pixels.to_f32() * self.units_per_px()
    }
}
