use rangeslide_core::{Px, Thumb, ThumbOffsets};

/// Resolved geometry of a selector for one component width.
///
/// Thumbs travel inside an area inset by one thumb size on each side: the
/// start thumb's left edge sits at its offset, the end thumb's left edge one
/// thumb size further right. The inset area's width is what the engine maps
/// values onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorLayout {
    pub component_width: Px,
    pub component_height: Px,
    pub track_width: Px,
    pub track_height: Px,
    pub track_y: Px,
    pub thumb_size: Px,
    pub thumb_y: Px,
}

impl SelectorLayout {
    pub fn new(component_width: Px, thumb_size: Px, track_height: Px) -> Self {
        let component_width = component_width.positive();
        let thumb_size = thumb_size.positive();
        let track_height = track_height.positive();
        let component_height = thumb_size.max(track_height);

        SelectorLayout {
            component_width,
            component_height,
            track_width: (component_width - thumb_size * 2.0).positive(),
            track_height,
            track_y: Px((component_height.to_f32() - track_height.to_f32()) / 2.0),
            thumb_size,
            thumb_y: Px((component_height.to_f32() - thumb_size.to_f32()) / 2.0),
        }
    }

    /// Left edge of a thumb, in component coordinates.
    pub fn thumb_left(&self, thumb: Thumb, offset: Px) -> Px {
        match thumb {
            Thumb::Start => offset,
            Thumb::End => self.thumb_size + offset,
        }
    }

    pub fn thumb_center(&self, thumb: Thumb, offset: Px) -> Px {
        self.thumb_left(thumb, offset) + self.thumb_size * 0.5
    }

    /// Horizontal extent `(x, width)` of the filled segment.
    ///
    /// Range mode fills between the two thumb centers; single mode fills
    /// from the track origin to the thumb center.
    pub fn fill_segment(&self, offsets: ThumbOffsets) -> (Px, Px) {
        let from = match offsets.start {
            Some(start) => self.thumb_center(Thumb::Start, start),
            None => Px::ZERO,
        };
        let to = self.thumb_center(Thumb::End, offsets.end);
        (from, (to - from).positive())
    }

    /// Whether `x` lies on the component.
    pub fn contains_x(&self, x: Px) -> bool {
        x >= Px::ZERO && x < self.component_width
    }
}
