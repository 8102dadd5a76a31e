//! Value shapes: the external scalar-or-pair value and the engine's internal
//! position.

use crate::Domain;

/// Whether a selector edits one value or a `[start, end]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorMode {
    Single,
    Range,
}

impl SelectorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectorMode::Single => "single",
            SelectorMode::Range => "range",
        }
    }
}

/// A selector value in external (domain) coordinates.
///
/// The variant picked at construction fixes the selector's mode for its whole
/// lifetime: a `Single` selector renders one thumb and emits scalars, a
/// `Range` selector renders two thumbs and emits pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectorValue {
    Single(f32),
    Range(f32, f32),
}

impl SelectorValue {
    pub fn mode(&self) -> SelectorMode {
        match self {
            SelectorValue::Single(_) => SelectorMode::Single,
            SelectorValue::Range(..) => SelectorMode::Range,
        }
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            SelectorValue::Single(v) => v.is_finite(),
            SelectorValue::Range(start, end) => start.is_finite() && end.is_finite(),
        }
    }

    /// Returns the scalar of a single value.
    pub fn as_single(&self) -> Option<f32> {
        match *self {
            SelectorValue::Single(v) => Some(v),
            SelectorValue::Range(..) => None,
        }
    }

    /// Returns the `(start, end)` pair of a range value.
    pub fn as_range(&self) -> Option<(f32, f32)> {
        match *self {
            SelectorValue::Single(_) => None,
            SelectorValue::Range(start, end) => Some((start, end)),
        }
    }
}

impl From<f32> for SelectorValue {
    fn from(value: f32) -> Self {
        SelectorValue::Single(value)
    }
}

impl From<(f32, f32)> for SelectorValue {
    fn from((start, end): (f32, f32)) -> Self {
        SelectorValue::Range(start, end)
    }
}

impl From<[f32; 2]> for SelectorValue {
    fn from([start, end]: [f32; 2]) -> Self {
        SelectorValue::Range(start, end)
    }
}

/// Identifies one of the two thumbs of a track.
///
/// Single mode only ever drives [`Thumb::End`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    Start,
    End,
}

/// Thumb offsets relative to the domain minimum, in `[0, span]`.
///
/// Single mode pins `start` to `0` so that mapping and fill geometry share one
/// code path for both modes.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InternalPosition {
    pub start: f32,
    pub end: f32,
}

impl InternalPosition {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Builds the internal position of an external value.
    pub fn from_value(value: SelectorValue, domain: &Domain) -> Self {
        match value {
            SelectorValue::Single(v) => Self::new(0.0, domain.to_offset(v)),
            SelectorValue::Range(start, end) => {
                Self::new(domain.to_offset(start), domain.to_offset(end))
            }
        }
    }

    /// Converts back to the external value of the given mode.
    pub fn to_value(self, mode: SelectorMode, domain: &Domain) -> SelectorValue {
        match mode {
            SelectorMode::Single => SelectorValue::Single(domain.to_value(self.end)),
            SelectorMode::Range => {
                SelectorValue::Range(domain.to_value(self.start), domain.to_value(self.end))
            }
        }
    }

    pub fn get(&self, thumb: Thumb) -> f32 {
        match thumb {
            Thumb::Start => self.start,
            Thumb::End => self.end,
        }
    }

    pub fn set(&mut self, thumb: Thumb, offset: f32) {
        match thumb {
            Thumb::Start => self.start = offset,
            Thumb::End => self.end = offset,
        }
    }
}
