//! Turning an in-progress pointer drag into a slider value.

use iced::{Point, Size, Vector};

use crate::{
    geometry::{knob_extent_for, pixel_range},
    mapper::{convert, ValueRange},
};

/// One sample of a drag, in frame-relative coordinates with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    /// Where the pointer went down.
    pub start: Point,
    /// Cumulative movement since `start`.
    pub translation: Vector,
}

impl DragEvent {
    pub fn new(start: Point, translation: Vector) -> Self {
        Self { start, translation }
    }

    /// Current pointer location.
    pub fn position(&self) -> Point {
        self.start + self.translation
    }
}

/// Value under the pointer for a drag sample.
///
/// The pointer is treated as the knob's center. The knob's leading edge is clamped to the
/// track before mapping back, so the result stays inside `range` whenever the frame is at
/// least as tall as the knob.
pub fn value_for_drag(
    frame: Size,
    drag: &DragEvent,
    range: ValueRange,
    knob_extent: Option<f32>,
) -> f32 {
    let knob_extent = knob_extent_for(frame, knob_extent);
    let track = pixel_range(frame, knob_extent);

    // pointer y grows downward, the track grows upward
    let pixel = frame.height - drag.position().y - knob_extent / 2.0;

    convert(track.clamp(pixel), track, range)
}

/// Whether a pointer is currently dragging the slider.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        start: Point,
    },
}

impl DragState {
    /// Starts a drag at `position`. A press while already dragging keeps the original start.
    pub fn press(&mut self, position: Point) {
        if let DragState::Idle = self {
            *self = DragState::Dragging { start: position };
        }
    }

    /// Builds the drag sample for a pointer now at `position`, or `None` when idle.
    pub fn event_at(&self, position: Point) -> Option<DragEvent> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { start } => Some(DragEvent::new(*start, position - *start)),
        }
    }

    /// Ends the drag. Returns whether one was in progress.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = DragState::Idle;
        was_dragging
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
