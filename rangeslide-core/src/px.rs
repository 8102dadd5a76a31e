//! Horizontal pixel offsets along a selector track.
//!
//! Pointer translations arrive with sub-pixel precision, so unlike a
//! rasterizer's integer coordinate the [`Px`] used by the engine wraps an
//! `f32`. Offsets are measured from the left edge of the measured track area
//! and may be negative while a pointer is dragged past the start.
//!
//! # Example
//!
//! ```
//! use rangeslide_core::Px;
//!
//! let origin = Px::new(20.0);
//! let moved = origin + Px::new(-5.0);
//! assert_eq!(moved, Px::new(15.0));
//! assert_eq!(moved.to_f32(), 15.0);
//! ```

use std::ops::{Add, Mul, Sub};

/// A horizontal pixel offset.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Px(pub f32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Px` from an f32 value.
    pub const fn new(value: f32) -> Self {
        Px(value)
    }

    /// Returns the raw f32 value.
    pub fn to_f32(self) -> f32 {
        self.0
    }

    /// Returns `true` if the offset is a finite number greater than zero.
    ///
    /// Track widths that fail this check are treated as "not yet measured".
    ///
    /// ```
    /// use rangeslide_core::Px;
    ///
    /// assert!(Px::new(1.0).is_positive());
    /// assert!(!Px::ZERO.is_positive());
    /// assert!(!Px::new(f32::NAN).is_positive());
    /// ```
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Returns the value, or zero if negative.
    pub fn positive(self) -> Self {
        Px(self.0.max(0.0))
    }

    /// Returns the larger of two offsets.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }

    /// Returns the smaller of two offsets.
    pub fn min(self, other: Self) -> Self {
        Px(self.0.min(other.0))
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value)
    }
}

impl From<Px> for f32 {
    fn from(value: Px) -> Self {
        value.0
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Self::Output {
        Px(self.0 * rhs)
    }
}
