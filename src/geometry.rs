//! Placement of the bar segments and the knob inside the slider's frame.
//!
//! All rectangles are relative to the top-left corner of the frame. The track fills from the
//! bottom, so a larger value moves the knob up and grows the bottom bar.

use iced::{Point, Rectangle, Size};

use crate::mapper::{convert, ValueRange};

/// The three regions of a vertical slider for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    /// Filled segment, from the bottom of the frame up to the knob's center.
    pub bottom_bar: Rectangle,
    /// Unfilled segment, from the top of the frame down to the knob's center.
    pub top_bar: Rectangle,
    pub knob: Rectangle,
}

impl SliderLayout {
    /// Moves every region by `origin`, turning frame-relative rectangles into absolute ones.
    pub fn translate(self, origin: Point) -> Self {
        let shift = |rect: Rectangle| Rectangle {
            x: rect.x + origin.x,
            y: rect.y + origin.y,
            ..rect
        };

        Self {
            bottom_bar: shift(self.bottom_bar),
            top_bar: shift(self.top_bar),
            knob: shift(self.knob),
        }
    }
}

/// Knob length along the slide axis. Without a fixed extent the knob is as tall as the
/// frame is wide.
pub fn knob_extent_for(frame: Size, knob_extent: Option<f32>) -> f32 {
    knob_extent.unwrap_or(frame.width)
}

/// Positions the knob's leading edge can take, measured up from the bottom of the frame.
///
/// Negative-length when the frame is shorter than the knob.
pub fn pixel_range(frame: Size, knob_extent: f32) -> ValueRange {
    ValueRange::new(0.0, frame.height - knob_extent)
}

/// Distance from the bottom of the frame to the knob's leading edge for `value`.
pub fn knob_offset(frame: Size, value: f32, range: ValueRange, knob_extent: Option<f32>) -> f32 {
    let knob_extent = knob_extent_for(frame, knob_extent);
    convert(value, range, pixel_range(frame, knob_extent))
}

/// Computes the bar segments and knob for `value` inside a frame of size `frame`.
///
/// `value` is used as given; a value outside `range` places the knob outside the track.
pub fn layout(frame: Size, value: f32, range: ValueRange, knob_extent: Option<f32>) -> SliderLayout {
    let knob_extent = knob_extent_for(frame, knob_extent);
    let offset = convert(value, range, pixel_range(frame, knob_extent));

    let knob = Rectangle {
        x: 0.0,
        y: frame.height - offset - knob_extent,
        width: frame.width,
        height: knob_extent,
    };

    let bottom_height = offset + knob_extent / 2.0;
    let bottom_bar = Rectangle {
        x: 0.0,
        y: frame.height - bottom_height,
        width: frame.width,
        height: bottom_height,
    };

    let top_bar = Rectangle {
        x: 0.0,
        y: 0.0,
        width: frame.width,
        height: frame.height - bottom_height,
    };

    SliderLayout {
        bottom_bar,
        top_bar,
        knob,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Size = Size {
        width: 20.0,
        height: 200.0,
    };
    const RANGE: ValueRange = ValueRange::new(0.0, 100.0);

    #[test]
    fn minimum_value_rests_knob_on_bottom() {
        let layout = layout(FRAME, 0.0, RANGE, Some(20.0));

        assert_eq!(knob_offset(FRAME, 0.0, RANGE, Some(20.0)), 0.0);
        assert_eq!(layout.knob.y, 180.0);
        assert_eq!(layout.bottom_bar.height, 10.0);
        assert_eq!(layout.top_bar.height, 190.0);
    }

    #[test]
    fn maximum_value_raises_knob_to_top() {
        let layout = layout(FRAME, 100.0, RANGE, Some(20.0));

        assert_eq!(knob_offset(FRAME, 100.0, RANGE, Some(20.0)), 180.0);
        assert_eq!(layout.knob.y, 0.0);
        assert_eq!(layout.bottom_bar.height, 190.0);
        assert_eq!(layout.top_bar.height, 10.0);
    }

    #[test]
    fn middle_value_splits_track_evenly() {
        let layout = layout(FRAME, 50.0, RANGE, Some(20.0));

        assert_eq!(knob_offset(FRAME, 50.0, RANGE, Some(20.0)), 90.0);
        assert_eq!(layout.bottom_bar.height, 100.0);
        assert_eq!(layout.top_bar.height, 100.0);
        assert_eq!(layout.knob.center(), Point::new(10.0, 100.0));
    }

    #[test]
    fn bars_meet_at_knob_center() {
        let layout = layout(FRAME, 25.0, RANGE, Some(20.0));

        assert_eq!(layout.top_bar.y, 0.0);
        assert_eq!(layout.top_bar.height, layout.bottom_bar.y);
        assert_eq!(layout.bottom_bar.y + layout.bottom_bar.height, FRAME.height);
        assert_eq!(layout.knob.center().y, layout.bottom_bar.y);
    }

    #[test]
    fn knob_extent_defaults_to_frame_width() {
        let frame = Size::new(30.0, 130.0);
        let layout = layout(frame, 0.0, RANGE, None);

        assert_eq!(knob_extent_for(frame, None), 30.0);
        assert_eq!(layout.knob.height, 30.0);
        assert_eq!(layout.knob.width, 30.0);
        assert_eq!(layout.bottom_bar.height, 15.0);
    }

    #[test]
    fn out_of_range_value_is_not_clamped() {
        let layout = layout(FRAME, 200.0, RANGE, Some(20.0));

        assert_eq!(layout.knob.y, -180.0);
        assert_eq!(layout.bottom_bar.height + layout.top_bar.height, FRAME.height);
    }

    #[test]
    fn frame_shorter_than_knob_still_lays_out() {
        let frame = Size::new(20.0, 10.0);
        let layout = layout(frame, 100.0, RANGE, Some(20.0));

        assert_eq!(pixel_range(frame, 20.0), ValueRange::new(0.0, -10.0));
        assert_eq!(layout.knob.y, 0.0);
        assert_eq!(layout.bottom_bar.height, 0.0);
        assert_eq!(layout.top_bar.height, 10.0);
    }

    #[test]
    fn frame_as_tall_as_knob_centers_knob() {
        let frame = Size::new(20.0, 20.0);
        let layout = layout(frame, 70.0, RANGE, Some(20.0));

        assert_eq!(layout.knob.y, 0.0);
        assert_eq!(layout.bottom_bar.height, 10.0);
        assert_eq!(layout.top_bar.height, 10.0);
    }

    #[test]
    fn translate_moves_every_region() {
        let layout = layout(FRAME, 50.0, RANGE, Some(20.0)).translate(Point::new(5.0, 7.0));

        assert_eq!(layout.top_bar.x, 5.0);
        assert_eq!(layout.top_bar.y, 7.0);
        assert_eq!(layout.knob.y, 97.0);
        assert_eq!(layout.bottom_bar.y, 107.0);
    }
}
