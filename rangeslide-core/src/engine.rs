//! The selector engine: gesture handling, controlled sync and pull-based
//! geometry for one track.

use derive_builder::Builder;
use tracing::{debug, trace};

use crate::{
    CallbackWith, ConfigError, CoordinateMapper, Domain, GestureSession, InternalPosition, Px,
    SelectorMode, SelectorValue, Thumb, ThumbActivation,
    domain::{DEFAULT_RANGE, DEFAULT_STEP},
    resolver::resolve_activation,
    solver::{Bounds, bounds_for, normalize},
};

/// Default visual thumb size, used by the thumb resolver.
pub const DEFAULT_THUMB_SIZE: Px = Px(30.0);

/// Construction options for a [`SelectorEngine`].
///
/// `value` and `on_value_change` are required; the shape of `value` fixes the
/// selector's mode.
#[derive(Builder, Clone, Debug)]
#[builder(pattern = "owned")]
pub struct SelectorConfig {
    /// Initial value. A scalar builds a single-value selector, a pair builds a
    /// range selector.
    #[builder(setter(into))]
    pub value: SelectorValue,

    /// Invoked once per completed gesture with the committed value.
    #[builder(setter(into))]
    pub on_value_change: CallbackWith<SelectorValue>,

    /// `(min, max)` of the domain.
    #[builder(default = "DEFAULT_RANGE")]
    pub range: (f32, f32),

    /// Quantization step, measured from `min`.
    #[builder(default = "DEFAULT_STEP")]
    pub step: f32,

    /// Minimum distance between the two thumbs of a range selector.
    #[builder(default = "0.0")]
    pub min_delta: f32,

    /// Visual thumb size in pixels.
    #[builder(default = "DEFAULT_THUMB_SIZE")]
    pub thumb_size: Px,
}

/// Pixel offsets of the thumbs within the measured track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbOffsets {
    /// `None` in single mode.
    pub start: Option<Px>,
    pub end: Px,
}

/// Interaction and constraint engine behind a single-value or range selector.
///
/// All state lives in logical units relative to the domain minimum; pixel
/// geometry is derived on demand from the last reported track width. Mutation
/// happens through three paths that share one store, last write wins:
/// gestures ([`gesture_begin`](Self::gesture_begin),
/// [`gesture_update`](Self::gesture_update), [`gesture_end`](Self::gesture_end)),
/// controlled sync ([`set_value`](Self::set_value),
/// [`set_domain`](Self::set_domain)), and layout
/// ([`set_track_width`](Self::set_track_width)).
#[derive(Debug)]
pub struct SelectorEngine {
    domain: Domain,
    mode: SelectorMode,
    min_delta: f32,
    thumb_size: Px,
    position: InternalPosition,
    track_width: Px,
    session: Option<GestureSession>,
    controlled: SelectorValue,
    on_value_change: CallbackWith<SelectorValue>,
}

impl SelectorEngine {
    /// Validates `config` and creates an engine in the configured mode.
    pub fn new(config: SelectorConfig) -> Result<Self, ConfigError> {
        let domain = Domain::new(config.range.0, config.range.1, config.step)?;
        if !config.min_delta.is_finite() {
            return Err(ConfigError::NonFinite { field: "min_delta" });
        }
        if config.min_delta < 0.0 {
            return Err(ConfigError::NegativeMinDelta(config.min_delta));
        }
        if !config.thumb_size.to_f32().is_finite() {
            return Err(ConfigError::NonFinite {
                field: "thumb_size",
            });
        }
        if !config.value.is_finite() {
            return Err(ConfigError::NonFinite { field: "value" });
        }

        let mode = config.value.mode();
        let position = sanitize(config.value, &domain, config.min_delta);
        debug!(?mode, ?position, "selector engine created");

        Ok(Self {
            domain,
            mode,
            min_delta: config.min_delta,
            thumb_size: config.thumb_size,
            position,
            track_width: Px::ZERO,
            session: None,
            controlled: config.value,
            on_value_change: config.on_value_change,
        })
    }

    pub fn mode(&self) -> SelectorMode {
        self.mode
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn min_delta(&self) -> f32 {
        self.min_delta
    }

    pub fn thumb_size(&self) -> Px {
        self.thumb_size
    }

    pub fn track_width(&self) -> Px {
        self.track_width
    }

    /// Current position, relative to the domain minimum.
    pub fn position(&self) -> InternalPosition {
        self.position
    }

    /// Current value in external coordinates.
    pub fn value(&self) -> SelectorValue {
        self.position.to_value(self.mode, &self.domain)
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// The thumb following the current gesture, if any.
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.session.as_ref().and_then(GestureSession::active_thumb)
    }

    pub fn is_dragging(&self) -> bool {
        self.active_thumb().is_some()
    }

    /// A mapper for the current domain and measurement.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.domain.span(), self.track_width)
    }

    pub fn on_value_change(&self) -> &CallbackWith<SelectorValue> {
        &self.on_value_change
    }

    /// Replaces the value-change handler.
    pub fn set_on_value_change(&mut self, on_value_change: impl Into<CallbackWith<SelectorValue>>) {
        self.on_value_change = on_value_change.into();
    }

    /// Records the measured track width. Accepted at any time, including
    /// mid-gesture.
    pub fn set_track_width(&mut self, width: Px) {
        if width != self.track_width {
            trace!(?width, "track width changed");
            self.track_width = width;
        }
    }

    /// Starts a gesture at `x`, measured from the component's left edge.
    ///
    /// Any previous session is discarded and the activation is resolved
    /// afresh.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn gesture_begin(&mut self, x: Px) -> ThumbActivation {
        let mapper = self.mapper();
        let activation =
            resolve_activation(x, &self.position, &mapper, self.thumb_size, self.mode);
        self.session = Some(GestureSession {
            activation,
            origin_start: mapper.to_pixels(self.position.start),
            origin_end: mapper.to_pixels(self.position.end),
        });
        debug!(?activation, "gesture began");
        activation
    }

    /// Applies the cumulative horizontal translation since the press.
    ///
    /// Returns `true` if the active thumb moved. Updates without a session,
    /// with no active thumb, or before the track has been measured leave the
    /// position untouched.
    pub fn gesture_update(&mut self, translation_x: Px) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        let Some(thumb) = session.active_thumb() else {
            return false;
        };
        let mapper = self.mapper();
        if !mapper.is_measured() {
            trace!("ignoring drag update on unmeasured track");
            return false;
        }

        let candidate = mapper.to_logical(session.origin(thumb) + translation_x);
        if !candidate.is_finite() {
            return false;
        }

        let bounds = self.bounds(thumb);
        let next = normalize(candidate, bounds, self.domain.step());
        let previous = self.position.get(thumb);
        self.position.set(thumb, next);
        trace!(?thumb, candidate, next, "drag update");
        next != previous
    }

    /// Ends the current gesture and emits the committed value.
    ///
    /// Returns `None`, without invoking the callback, when no gesture was in
    /// progress.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn gesture_end(&mut self) -> Option<SelectorValue> {
        self.session.take()?;
        let value = self.value();
        debug!(?value, "committing value");
        self.on_value_change.call(value);
        Some(value)
    }

    /// Pushes a new controlled value from the host.
    ///
    /// Returns `Ok(true)` when the value differed from the last controlled one
    /// and the position was resynchronized, overwriting any uncommitted drag
    /// result. Repeating the same value is a no-op.
    pub fn set_value(&mut self, value: impl Into<SelectorValue>) -> Result<bool, ConfigError> {
        let value = value.into();
        if value.mode() != self.mode {
            return Err(ConfigError::ModeMismatch {
                expected: self.mode.as_str(),
                found: value.mode().as_str(),
            });
        }
        if !value.is_finite() {
            return Err(ConfigError::NonFinite { field: "value" });
        }
        if value == self.controlled {
            return Ok(false);
        }

        self.controlled = value;
        self.position = sanitize(value, &self.domain, self.min_delta);
        debug!(?value, position = ?self.position, "controlled value synced");
        Ok(true)
    }

    /// Replaces the domain.
    ///
    /// A change of `min` or of the span resynchronizes the position from the
    /// last controlled value, overwriting any uncommitted drag. A step-only
    /// change keeps the current value and snaps it to the new grid. Returns
    /// `false` if the domain did not change.
    pub fn set_domain(&mut self, domain: Domain) -> bool {
        if domain == self.domain {
            return false;
        }
        let rebased = domain.min() != self.domain.min() || domain.span() != self.domain.span();
        let source = if rebased {
            self.controlled
        } else {
            self.value()
        };
        self.domain = domain;
        self.position = sanitize(source, &self.domain, self.min_delta);
        debug!(?domain, rebased, value = ?self.value(), "domain changed");
        true
    }

    /// Bounds the given thumb may currently move in.
    pub fn bounds(&self, thumb: Thumb) -> Bounds {
        bounds_for(
            thumb,
            self.mode,
            &self.position,
            self.min_delta,
            self.domain.span(),
        )
    }

    /// Pixel offsets of the rendered thumbs.
    pub fn thumb_offsets(&self) -> ThumbOffsets {
        let mapper = self.mapper();
        ThumbOffsets {
            start: match self.mode {
                SelectorMode::Single => None,
                SelectorMode::Range => Some(mapper.to_pixels(self.position.start)),
            },
            end: mapper.to_pixels(self.position.end),
        }
    }
}

/// Brings an external value into the domain: snapped to the step grid and, for
/// ranges, ordered with `min_delta` separation where the span allows it.
fn sanitize(value: SelectorValue, domain: &Domain, min_delta: f32) -> InternalPosition {
    let raw = InternalPosition::from_value(value, domain);
    let span = domain.span();
    let step = domain.step();
    match value.mode() {
        SelectorMode::Single => {
            InternalPosition::new(0.0, normalize(raw.end, Bounds::new(0.0, span), step))
        }
        SelectorMode::Range => {
            let start_bounds = bounds_for(
                Thumb::Start,
                SelectorMode::Range,
                &InternalPosition::new(0.0, span),
                min_delta,
                span,
            );
            let start = normalize(raw.start, start_bounds, step);
            let end_bounds = bounds_for(
                Thumb::End,
                SelectorMode::Range,
                &InternalPosition::new(start, raw.end),
                min_delta,
                span,
            );
            InternalPosition::new(start, normalize(raw.end, end_bounds, step))
        }
    }
}
