//! Interaction and state engine for draggable value selectors.
//!
//! A selector is a horizontal track with one thumb (single-value mode) or two
//! thumbs (range mode). This crate turns raw gesture input into validated
//! values and knows nothing about painting: a host reports the measured track
//! width, forwards press/move/release events, and reads back thumb offsets to
//! draw.
//!
//! # Pieces
//!
//! - [`CoordinateMapper`] converts between logical offsets and track pixels.
//! - [`resolve_activation`] decides which thumb a press grabs.
//! - [`solver::normalize`] clamps a dragged offset into the active thumb's
//!   bounds and snaps it to the step grid.
//! - [`SelectorEngine`] ties them together with a per-gesture
//!   [`GestureSession`] and a controlled-value sync path.
//!
//! # Example
//!
//! ```
//! use rangeslide_core::{Px, SelectorConfigBuilder, SelectorEngine, SelectorValue};
//!
//! let config = SelectorConfigBuilder::default()
//!     .value(SelectorValue::Range(10.0, 50.0))
//!     .on_value_change(|value: SelectorValue| println!("value changed {value:?}"))
//!     .min_delta(4.0)
//!     .build()
//!     .unwrap();
//! let mut engine = SelectorEngine::new(config).unwrap();
//!
//! // Reported by the layout host once the track is measured.
//! engine.set_track_width(Px(200.0));
//!
//! engine.gesture_begin(Px(35.0));
//! engine.gesture_update(Px(-5.0));
//! assert_eq!(engine.gesture_end(), Some(SelectorValue::Range(8.0, 50.0)));
//! ```

pub mod domain;
pub mod engine;
mod error;
pub mod mapper;
pub mod prop;
pub mod px;
pub mod resolver;
pub mod session;
pub mod solver;
pub mod value;

pub use crate::{
    domain::Domain,
    engine::{SelectorConfig, SelectorConfigBuilder, SelectorEngine, ThumbOffsets},
    error::ConfigError,
    mapper::CoordinateMapper,
    prop::CallbackWith,
    px::Px,
    resolver::{ThumbActivation, resolve_activation},
    session::GestureSession,
    value::{InternalPosition, SelectorMode, SelectorValue, Thumb},
};
