use thiserror::Error;

/// Rejected selector configuration.
///
/// Raised when an engine is constructed, or when a host pushes a new
/// controlled value or domain, so that malformed numbers never reach the drag
/// path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("range must satisfy max > min, got [{min}, {max}]")]
    EmptyRange { min: f32, max: f32 },
    #[error("step must be greater than zero, got {0}")]
    NonPositiveStep(f32),
    #[error("min_delta must not be negative, got {0}")]
    NegativeMinDelta(f32),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("selector was created in {expected} mode and cannot accept a {found} value")]
    ModeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
