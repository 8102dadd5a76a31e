//! A draggable selector for a single value or a `[start, end]` range.
//!
//! ## Usage
//!
//! Create a [`SelectorState`] once from [`SelectorArgs`], then call
//! [`range_selector`] every frame with the current args, the width the host
//! laid the component out at, and the pointer events received since the last
//! frame. The returned [`SelectorFrame`] holds the draw commands for the
//! frame.
//!
//! The value in `args` acts as a controlled value: whenever it changes between
//! frames the selector resynchronizes to it, otherwise the selector keeps the
//! result of the user's last drag.
use derive_builder::Builder;
use rangeslide_core::{
    CallbackWith, ConfigError, Domain, Px, SelectorConfig, SelectorEngine, SelectorValue,
    domain::{DEFAULT_RANGE, DEFAULT_STEP},
    engine::DEFAULT_THUMB_SIZE,
};
use tracing::warn;

use crate::{Color, State};

use interaction::handle_pointer_events;
use render::render_frame;

pub use interaction::PointerEvent;
pub use layout::SelectorLayout;
pub use render::{DrawCommand, DrawList, Rect};

mod interaction;
mod layout;
mod render;

const DEFAULT_TRACK_HEIGHT: Px = Px(5.0);
const DEFAULT_THUMB_COLOR: Color = Color::from_rgb_u8(0x11, 0x11, 0x11);
const DEFAULT_TRACK_COLOR: Color = Color::BLACK;
const DEFAULT_FILL_COLOR: Color = Color::from_rgb_u8(0x0e, 0x7a, 0xfe);

/// Colors used to draw a selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorColors {
    pub thumb: Color,
    pub track: Color,
    pub fill: Color,
}

impl Default for SelectorColors {
    fn default() -> Self {
        Self {
            thumb: DEFAULT_THUMB_COLOR,
            track: DEFAULT_TRACK_COLOR,
            fill: DEFAULT_FILL_COLOR,
        }
    }
}

/// Arguments for the `range_selector` component.
#[derive(Builder, Clone, Debug)]
#[builder(pattern = "owned")]
pub struct SelectorArgs {
    /// The current value. A scalar gives a single-thumb selector, a pair a
    /// two-thumb range selector.
    #[builder(setter(into))]
    pub value: SelectorValue,

    /// Callback invoked with the committed value when a drag ends.
    #[builder(setter(into))]
    pub on_value_change: CallbackWith<SelectorValue>,

    /// `(min, max)` of the selectable domain.
    #[builder(default = "DEFAULT_RANGE")]
    pub range: (f32, f32),

    /// Step the value snaps to, measured from `min`.
    #[builder(default = "DEFAULT_STEP")]
    pub step: f32,

    /// Minimum distance between the two thumbs (range selectors only).
    #[builder(default = "0.0")]
    pub min_delta: f32,

    /// Diameter of the thumbs.
    #[builder(default = "DEFAULT_THUMB_SIZE")]
    pub thumb_size: Px,

    /// Height of the track.
    #[builder(default = "DEFAULT_TRACK_HEIGHT")]
    pub track_height: Px,

    /// Color of the thumbs.
    #[builder(default = "DEFAULT_THUMB_COLOR")]
    pub thumb_color: Color,

    /// Color of the unselected track.
    #[builder(default = "DEFAULT_TRACK_COLOR")]
    pub track_color: Color,

    /// Color of the selected segment.
    #[builder(default = "DEFAULT_FILL_COLOR")]
    pub fill_color: Color,
}

impl SelectorArgs {
    /// The engine configuration carried by these args.
    pub fn engine_config(&self) -> SelectorConfig {
        SelectorConfig {
            value: self.value,
            on_value_change: self.on_value_change.clone(),
            range: self.range,
            step: self.step,
            min_delta: self.min_delta,
            thumb_size: self.thumb_size,
        }
    }

    pub fn colors(&self) -> SelectorColors {
        SelectorColors {
            thumb: self.thumb_color,
            track: self.track_color,
            fill: self.fill_color,
        }
    }
}

/// Controller for the `range_selector` component.
///
/// Owns the engine plus the pointer position of the press that started the
/// current drag. Mode, `min_delta` and thumb size are fixed when the
/// controller is created.
#[derive(Debug)]
pub struct SelectorController {
    pub(crate) engine: SelectorEngine,
    pub(crate) press_x: Option<Px>,
}

impl SelectorController {
    pub fn new(args: &SelectorArgs) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: SelectorEngine::new(args.engine_config())?,
            press_x: None,
        })
    }

    pub fn engine(&self) -> &SelectorEngine {
        &self.engine
    }

    /// Mutable access for hosts that drive gestures themselves.
    pub fn engine_mut(&mut self) -> &mut SelectorEngine {
        &mut self.engine
    }

    /// Returns whether a pointer is currently pressed on the selector.
    pub fn is_pressed(&self) -> bool {
        self.press_x.is_some()
    }

    /// Returns whether a thumb is currently being dragged.
    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    /// Pushes the controlled parts of `args` into the engine.
    fn sync(&mut self, args: &SelectorArgs) {
        if self.engine.on_value_change() != &args.on_value_change {
            self.engine
                .set_on_value_change(args.on_value_change.clone());
        }
        match Domain::new(args.range.0, args.range.1, args.step) {
            Ok(domain) => {
                self.engine.set_domain(domain);
            }
            Err(error) => warn!(%error, "ignoring invalid selector domain"),
        }
        if let Err(error) = self.engine.set_value(args.value) {
            warn!(%error, "ignoring invalid controlled value");
        }
    }
}

/// Shared handle to a [`SelectorController`].
pub type SelectorState = State<SelectorController>;

/// Creates the state for a selector described by `args`.
pub fn selector_state(args: &SelectorArgs) -> Result<SelectorState, ConfigError> {
    SelectorController::new(args).map(State::new)
}

/// Output of one `range_selector` frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorFrame {
    pub layout: SelectorLayout,
    pub commands: DrawList,
    /// The value currently shown, including uncommitted drag progress.
    pub value: SelectorValue,
    /// The value committed by a release during this frame, if any.
    pub committed: Option<SelectorValue>,
}

/// Lays out a selector, applies `events`, and returns the frame to draw.
///
/// The measured track width is reported to the engine before any event is
/// handled, so the first press after a resize already maps correctly.
pub fn range_selector(
    args: &SelectorArgs,
    state: &SelectorState,
    component_width: Px,
    events: &[PointerEvent],
) -> SelectorFrame {
    let colors = args.colors();
    state.with_mut(|controller| {
        controller.sync(args);

        let layout = SelectorLayout::new(
            component_width,
            controller.engine.thumb_size(),
            args.track_height,
        );
        controller.engine.set_track_width(layout.track_width);

        let committed = handle_pointer_events(controller, &layout, events);
        let offsets = controller.engine.thumb_offsets();

        SelectorFrame {
            layout,
            commands: render_frame(&layout, offsets, &colors),
            value: controller.engine.value(),
            committed,
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rangeslide_core::Thumb;

    use super::*;

    use SelectorValue::{Range, Single};

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<SelectorValue>>>);

    impl Recorder {
        fn callback(&self) -> CallbackWith<SelectorValue> {
            let sink = self.0.clone();
            CallbackWith::new(move |value| sink.lock().unwrap().push(value))
        }

        fn values(&self) -> Vec<SelectorValue> {
            self.0.lock().unwrap().clone()
        }
    }

    fn args(value: SelectorValue, recorder: &Recorder) -> SelectorArgsBuilder {
        SelectorArgsBuilder::default()
            .value(value)
            .on_value_change(recorder.callback())
    }

    fn thumbs(frame: &SelectorFrame) -> Vec<(Thumb, Rect)> {
        frame
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Thumb { thumb, rect, .. } => Some((*thumb, *rect)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_args_defaults() {
        let recorder = Recorder::default();
        let args = args(Range(10.0, 50.0), &recorder).build().unwrap();
        assert_eq!(args.range, (0.0, 100.0));
        assert_eq!(args.thumb_size, Px(30.0));
        assert_eq!(args.track_height, Px(5.0));
        assert_eq!(args.colors(), SelectorColors::default());
        assert_eq!(Color::from_hex("#0e7afe"), Some(args.fill_color));
    }

    #[test]
    fn test_invalid_args_fail_fast() {
        let recorder = Recorder::default();
        let args = args(Range(10.0, 50.0), &recorder)
            .range((5.0, 5.0))
            .build()
            .unwrap();
        assert!(matches!(
            selector_state(&args),
            Err(ConfigError::EmptyRange { .. })
        ));
    }

    #[test]
    fn test_drag_start_thumb_with_pointer() {
        let recorder = Recorder::default();
        let args = args(Range(10.0, 50.0), &recorder).build().unwrap();
        let state = selector_state(&args).unwrap();

        // 260px component, 30px thumbs: a 200px track.
        let frame = range_selector(&args, &state, Px(260.0), &[]);
        assert_eq!(frame.layout.track_width, Px(200.0));
        assert_eq!(
            thumbs(&frame),
            vec![
                (Thumb::Start, Rect::new(Px(20.0), Px::ZERO, Px(30.0), Px(30.0))),
                (Thumb::End, Rect::new(Px(130.0), Px::ZERO, Px(30.0), Px(30.0))),
            ]
        );

        let frame = range_selector(
            &args,
            &state,
            Px(260.0),
            &[
                PointerEvent::Pressed { x: Px(35.0) },
                PointerEvent::Moved { x: Px(30.0) },
            ],
        );
        assert_eq!(frame.value, Range(8.0, 50.0));
        assert_eq!(frame.committed, None);
        assert!(state.with(SelectorController::is_dragging));
        assert!(recorder.values().is_empty());

        let frame = range_selector(&args, &state, Px(260.0), &[PointerEvent::Released]);
        assert_eq!(frame.committed, Some(Range(8.0, 50.0)));
        assert_eq!(recorder.values(), vec![Range(8.0, 50.0)]);
        assert!(!state.with(SelectorController::is_pressed));
    }

    #[test]
    fn test_uncontrolled_value_survives_frames() {
        let recorder = Recorder::default();
        let args = args(Range(10.0, 50.0), &recorder).build().unwrap();
        let state = selector_state(&args).unwrap();

        range_selector(
            &args,
            &state,
            Px(260.0),
            &[
                PointerEvent::Pressed { x: Px(35.0) },
                PointerEvent::Moved { x: Px(30.0) },
                PointerEvent::Released,
            ],
        );
        // The host keeps passing the initial value; it has not changed, so no
        // resync happens.
        let frame = range_selector(&args, &state, Px(260.0), &[]);
        assert_eq!(frame.value, Range(8.0, 50.0));
    }

    #[test]
    fn test_controlled_value_change_resyncs() {
        let recorder = Recorder::default();
        let initial = args(Range(10.0, 50.0), &recorder).build().unwrap();
        let state = selector_state(&initial).unwrap();
        range_selector(&initial, &state, Px(260.0), &[]);

        let updated = SelectorArgs {
            value: Range(30.0, 70.0),
            ..initial.clone()
        };
        let frame = range_selector(&updated, &state, Px(260.0), &[]);
        assert_eq!(frame.value, Range(30.0, 70.0));

        // A mismatched shape is ignored rather than switching modes.
        let wrong = SelectorArgs {
            value: Single(5.0),
            ..initial
        };
        let frame = range_selector(&wrong, &state, Px(260.0), &[]);
        assert_eq!(frame.value, Range(30.0, 70.0));
    }

    #[test]
    fn test_domain_min_change_resyncs() {
        let recorder = Recorder::default();
        let initial = args(Range(10.0, 50.0), &recorder).build().unwrap();
        let state = selector_state(&initial).unwrap();

        let shifted = SelectorArgs {
            range: (20.0, 100.0),
            ..initial
        };
        let frame = range_selector(&shifted, &state, Px(260.0), &[]);
        assert_eq!(frame.value, Range(20.0, 50.0));
    }

    #[test]
    fn test_single_mode_renders_one_thumb() {
        let recorder = Recorder::default();
        let args = args(Single(30.0), &recorder)
            .range((15.0, 75.0))
            .step(5.0)
            .build()
            .unwrap();
        let state = selector_state(&args).unwrap();

        let frame = range_selector(
            &args,
            &state,
            Px(180.0),
            &[
                PointerEvent::Pressed { x: Px(170.0) },
                PointerEvent::Moved { x: Px(200.0) },
                PointerEvent::Released,
            ],
        );
        let rendered = thumbs(&frame);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].0, Thumb::End);
        // 120px track over a 60 wide domain: +30px is +15 units.
        assert_eq!(frame.committed, Some(Single(45.0)));
        assert_eq!(recorder.values(), vec![Single(45.0)]);
        assert!(matches!(
            frame.commands.get(1),
            Some(DrawCommand::Fill { rect, .. }) if rect.x == Px::ZERO
        ));
    }

    #[test]
    fn test_press_outside_component_is_ignored() {
        let recorder = Recorder::default();
        let args = args(Range(10.0, 50.0), &recorder).build().unwrap();
        let state = selector_state(&args).unwrap();

        let frame = range_selector(
            &args,
            &state,
            Px(260.0),
            &[
                PointerEvent::Pressed { x: Px(-10.0) },
                PointerEvent::Moved { x: Px(100.0) },
                PointerEvent::Released,
            ],
        );
        assert_eq!(frame.value, Range(10.0, 50.0));
        assert_eq!(frame.committed, None);
        assert!(recorder.values().is_empty());
    }

    #[test]
    fn test_press_before_layout_does_not_move() {
        let recorder = Recorder::default();
        let args = args(Range(10.0, 50.0), &recorder).build().unwrap();
        let state = selector_state(&args).unwrap();

        // Too narrow to fit the thumb inset: the track has no width yet.
        let frame = range_selector(
            &args,
            &state,
            Px(50.0),
            &[
                PointerEvent::Pressed { x: Px(10.0) },
                PointerEvent::Moved { x: Px(40.0) },
            ],
        );
        assert_eq!(frame.layout.track_width, Px::ZERO);
        assert_eq!(frame.value, Range(10.0, 50.0));
    }

    #[test]
    fn test_callback_replaced_from_args() {
        let first = Recorder::default();
        let second = Recorder::default();
        let initial = args(Single(50.0), &first).build().unwrap();
        let state = selector_state(&initial).unwrap();

        let replaced = SelectorArgs {
            on_value_change: second.callback(),
            ..initial
        };
        range_selector(
            &replaced,
            &state,
            Px(160.0),
            &[PointerEvent::Pressed { x: Px(80.0) }, PointerEvent::Released],
        );
        assert!(first.values().is_empty());
        assert_eq!(second.values(), vec![Single(50.0)]);
    }
}
