use rangeslide_core::{Px, Thumb, ThumbOffsets};
use smallvec::SmallVec;

use crate::Color;

use super::{SelectorColors, SelectorLayout};

/// Draw commands of one frame: track, fill and at most two thumbs.
pub type DrawList = SmallVec<[DrawCommand; 4]>;

/// An axis-aligned rectangle in component coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: Px,
    pub y: Px,
    pub width: Px,
    pub height: Px,
}

impl Rect {
    pub fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A primitive for the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Track {
        rect: Rect,
        color: Color,
        corner_radius: Px,
    },
    Fill {
        rect: Rect,
        color: Color,
    },
    Thumb {
        thumb: Thumb,
        rect: Rect,
        color: Color,
        corner_radius: Px,
    },
}

pub(super) fn render_track(layout: &SelectorLayout, colors: &SelectorColors) -> DrawCommand {
    DrawCommand::Track {
        rect: Rect::new(
            Px::ZERO,
            layout.track_y,
            layout.component_width,
            layout.track_height,
        ),
        color: colors.track,
        corner_radius: layout.track_height * 0.5,
    }
}

pub(super) fn render_fill(
    layout: &SelectorLayout,
    offsets: ThumbOffsets,
    colors: &SelectorColors,
) -> DrawCommand {
    let (x, width) = layout.fill_segment(offsets);
    DrawCommand::Fill {
        rect: Rect::new(x, layout.track_y, width, layout.track_height),
        color: colors.fill,
    }
}

pub(super) fn render_thumb(
    layout: &SelectorLayout,
    thumb: Thumb,
    offset: Px,
    colors: &SelectorColors,
) -> DrawCommand {
    DrawCommand::Thumb {
        thumb,
        rect: Rect::new(
            layout.thumb_left(thumb, offset),
            layout.thumb_y,
            layout.thumb_size,
            layout.thumb_size,
        ),
        color: colors.thumb,
        corner_radius: layout.thumb_size * 0.5,
    }
}

/// Builds the draw list; single mode has no start thumb.
pub(super) fn render_frame(
    layout: &SelectorLayout,
    offsets: ThumbOffsets,
    colors: &SelectorColors,
) -> DrawList {
    let mut commands = DrawList::new();
    commands.push(render_track(layout, colors));
    commands.push(render_fill(layout, offsets, colors));
    if let Some(start) = offsets.start {
        commands.push(render_thumb(layout, Thumb::Start, start, colors));
    }
    commands.push(render_thumb(layout, Thumb::End, offsets.end, colors));
    commands
}
