use rangeslide_core::{Px, SelectorValue};
use tracing::trace;

use super::{SelectorController, SelectorLayout};

/// A pointer event in component coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { x: Px },
    Moved { x: Px },
    Released,
}

/// Feeds pointer events into the engine.
///
/// A press on the component begins a gesture; moves report the translation
/// from the press point; a release ends the gesture. Presses outside the
/// component are ignored, moves and releases are honoured anywhere once a
/// press was accepted. Returns the last value committed by these events.
pub(super) fn handle_pointer_events(
    controller: &mut SelectorController,
    layout: &SelectorLayout,
    events: &[PointerEvent],
) -> Option<SelectorValue> {
    let mut committed = None;
    for event in events {
        match *event {
            PointerEvent::Pressed { x } => {
                if !layout.contains_x(x) {
                    trace!(?x, "press outside selector ignored");
                    continue;
                }
                controller.press_x = Some(x);
                controller.engine.gesture_begin(x);
            }
            PointerEvent::Moved { x } => {
                if let Some(origin) = controller.press_x {
                    controller.engine.gesture_update(x - origin);
                }
            }
            PointerEvent::Released => {
                if controller.press_x.take().is_some() {
                    committed = controller.engine.gesture_end().or(committed);
                }
            }
        }
    }
    committed
}
