//! Drives a range selector and a single-value selector through a scripted
//! pointer session and logs what a host would paint.
//!
//! Run with `RUST_LOG=debug` to see the engine's gesture spans.

use rangeslide_components::{
    DrawCommand, PointerEvent, SelectorArgs, SelectorArgsBuilder, SelectorFrame, SelectorState,
    range_selector, selector_state,
};
use rangeslide_core::{CallbackWith, Px, SelectorValue};
use tracing::{error, info};

const COMPONENT_WIDTH: Px = Px(260.0);

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,rangeslide_core=debug,rangeslide_components=info,example=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn log_frame(label: &str, frame: &SelectorFrame) {
    for command in &frame.commands {
        if let DrawCommand::Thumb { thumb, rect, .. } = command {
            info!(label, ?thumb, x = rect.x.to_f32(), "thumb");
        }
    }
    info!(label, value = ?frame.value, "frame");
}

/// Replays `frames` of pointer events against one selector.
fn replay(label: &str, args: &SelectorArgs, state: &SelectorState, frames: &[&[PointerEvent]]) {
    for events in frames {
        let frame = range_selector(args, state, COMPONENT_WIDTH, events);
        log_frame(label, &frame);
    }
}

fn on_value_change(label: &'static str) -> CallbackWith<SelectorValue> {
    CallbackWith::new(move |value: SelectorValue| info!(label, ?value, "value changed"))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let range_args = SelectorArgsBuilder::default()
        .value(SelectorValue::Range(10.0, 50.0))
        .on_value_change(on_value_change("range"))
        .min_delta(4.0)
        .build()?;
    let range_state = selector_state(&range_args)?;

    replay(
        "range",
        &range_args,
        &range_state,
        &[
            &[],
            // Grab the start thumb and pull it left.
            &[
                PointerEvent::Pressed { x: Px(35.0) },
                PointerEvent::Moved { x: Px(30.0) },
            ],
            &[PointerEvent::Released],
            // Grab the end thumb and push it past the start thumb.
            &[
                PointerEvent::Pressed { x: Px(140.0) },
                PointerEvent::Moved { x: Px(20.0) },
                PointerEvent::Released,
            ],
        ],
    );

    let single_args = SelectorArgsBuilder::default()
        .value(SelectorValue::Single(30.0))
        .on_value_change(on_value_change("single"))
        .range((15.0, 75.0))
        .step(5.0)
        .build()?;
    let single_state = selector_state(&single_args)?;

    replay(
        "single",
        &single_args,
        &single_state,
        &[&[
            PointerEvent::Pressed { x: Px(200.0) },
            PointerEvent::Moved { x: Px(242.0) },
            PointerEvent::Released,
        ]],
    );

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        error!(%err, "selector demo failed");
        std::process::exit(1);
    }
}
