//! Presentation layer for rangeslide selectors.
//!
//! Wraps a [`rangeslide_core::SelectorEngine`] in a frame-driven component:
//! the host passes args, a width and pointer events each frame and gets back
//! a [`SelectorFrame`] with draw commands. Painting the commands is left to
//! the host renderer.

mod color;
pub mod selector;
mod state;

pub use crate::{
    color::Color,
    selector::{
        DrawCommand, DrawList, PointerEvent, Rect, SelectorArgs, SelectorArgsBuilder,
        SelectorColors, SelectorController, SelectorFrame, SelectorLayout, SelectorState,
        range_selector, selector_state,
    },
    state::State,
};
