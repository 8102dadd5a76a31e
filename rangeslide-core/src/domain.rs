//! The bounded, steppable value domain of a selector.

use crate::ConfigError;

/// Default `(min, max)` when none is configured.
pub const DEFAULT_RANGE: (f32, f32) = (0.0, 100.0);
/// Default quantization step.
pub const DEFAULT_STEP: f32 = 1.0;

/// A validated `[min, max]` domain with a quantization step.
///
/// Values inside the engine are stored relative to `min`, so most callers only
/// need [`Domain::span`]; `min` is added back when a value leaves the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f32,
    max: f32,
    step: f32,
}

impl Domain {
    /// Creates a domain, rejecting `max <= min`, `step <= 0` and non-finite
    /// numbers.
    pub fn new(min: f32, max: f32, step: f32) -> Result<Self, ConfigError> {
        if !min.is_finite() {
            return Err(ConfigError::NonFinite { field: "range.min" });
        }
        if !max.is_finite() {
            return Err(ConfigError::NonFinite { field: "range.max" });
        }
        if !step.is_finite() {
            return Err(ConfigError::NonFinite { field: "step" });
        }
        if max <= min {
            return Err(ConfigError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(step));
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// `max - min`.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Converts an external value into an offset relative to `min`.
    pub fn to_offset(&self, value: f32) -> f32 {
        value - self.min
    }

    /// Converts an offset relative to `min` back into an external value.
    pub fn to_value(&self, offset: f32) -> f32 {
        offset + self.min
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: DEFAULT_RANGE.0,
            max: DEFAULT_RANGE.1,
            step: DEFAULT_STEP,
        }
    }
}
